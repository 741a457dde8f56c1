#![allow(clippy::float_cmp)]

use rstest::rstest;

use crate::{Document, Map, NodeType, Value};

fn doc(src: &str) -> Document {
    crate::load_str(src).unwrap()
}

#[rstest]
#[case(0, 3, &[10., 20., 30.])]
#[case(1, 2, &[20.])]
#[case(-4, 2, &[10., 20.])]
#[case(2, 99, &[30.])]
#[case(5, 2, &[])]
#[case(3, 4, &[])]
#[case(1, 1, &[])]
#[case(-3, 0, &[])]
#[case(isize::MIN, isize::MAX, &[10., 20., 30.])]
fn slice_clamps(#[case] start: isize, #[case] end: isize, #[case] expected: &[f64]) {
    let doc = doc("[10, 20, 30]");
    let root = doc.root();

    let nodes: Vec<f64> = root.slice(start, end).unwrap().map(|n| n.get_f64()).collect();
    assert_eq!(nodes, expected);

    let raw: Vec<f64> = root
        .get_slice(start, end)
        .unwrap()
        .iter()
        .filter_map(Value::as_f64)
        .collect();
    assert_eq!(raw, expected);
}

#[rstest]
#[case("null")]
#[case("true")]
#[case("2")]
#[case(r#""s""#)]
#[case(r#"{"0":1}"#)]
fn non_arrays_have_no_elements(#[case] src: &str) {
    let doc = doc(src);
    let node = doc.root();
    assert!(node.slice(0, 10).is_none());
    assert!(node.array().is_none());
    assert!(node.index(0).is_none());
    assert!(node.get_array().is_none());
    assert!(node.get_slice(0, 1).is_none());
    assert!(node.get_index(0).is_none());

    let fallback = [Value::from("fallback")];
    assert_eq!(node.get_array_or(&fallback), &fallback);
    assert_eq!(node.get_slice_or(0, 1, &fallback), &fallback);
    assert_eq!(node.get_index_or(0, &Value::Null), &Value::Null);
}

#[rstest]
#[case(0, Some("a"))]
#[case(2, Some("c"))]
#[case(3, None)]
#[case(-1, None)]
#[case(isize::MIN, None)]
#[case(isize::MAX, None)]
fn index_bounds(#[case] i: isize, #[case] expected: Option<&str>) {
    let doc = doc(r#"["a","b","c"]"#);
    let root = doc.root();
    assert_eq!(root.index(i).map(|n| n.get_str()), expected);
    assert_eq!(root.get_index(i).and_then(Value::as_str), expected);
    if let Some(node) = root.index(i) {
        assert_eq!(node.path(), format!("/[{i}]"));
    }
}

#[test]
fn negative_index_is_absent_not_counted_from_the_end() {
    let doc = doc(r#"["a","b","c"]"#);
    let root = doc.root();
    assert!(root.index(-1).is_none());
    assert!(root.get_index(-1).is_none());
    assert_eq!(root.get_index_or(-2, &Value::Null), &Value::Null);
    let clamped: Vec<&str> = root.slice(-1, 1).unwrap().map(|n| n.get_str()).collect();
    assert_eq!(clamped, ["a"]);
}

#[test]
fn empty_slice_of_an_array_is_not_the_default() {
    let doc = doc("[1]");
    let fallback = [Value::Null];
    assert!(doc.root().get_slice_or(4, 8, &fallback).is_empty());
    assert_eq!(doc.root().slice(4, 8).unwrap().len(), 0);
}

#[test]
fn mismatched_getters_return_defaults() {
    let doc = doc(r#"{"b":true,"n":-7.9,"s":"text","o":{"k":null},"a":[1]}"#);
    let root = doc.root();
    let [a, b, n, o, s] = [
        root.member("a").unwrap(),
        root.member("b").unwrap(),
        root.member("n").unwrap(),
        root.member("o").unwrap(),
        root.member("s").unwrap(),
    ];

    assert!(b.get_bool());
    assert!(!s.get_bool());
    assert!(n.get_bool_or(true));

    assert_eq!(n.get_f64(), -7.9);
    assert_eq!(n.get_int(), -7);
    assert_eq!(b.get_f64(), 0.0);
    assert_eq!(b.get_int_or(42), 42);
    assert_eq!(s.get_f64_or(1.5), 1.5);

    assert_eq!(s.get_str(), "text");
    assert_eq!(n.get_str(), "");
    assert_eq!(a.get_str_or("dflt"), "dflt");

    assert_eq!(o.get_object().map(Map::len), Some(1));
    assert!(a.get_object().is_none());
    let fallback = Map::from([("x".to_owned(), Value::from(true))]);
    assert_eq!(a.get_object_or(&fallback), &fallback);

    assert_eq!(o.get_object_value("k"), Some(&Value::Null));
    assert_eq!(o.get_object_value("missing"), None);
    assert_eq!(s.get_object_value("k"), None);
    let dflt = Value::from("fallback");
    assert_eq!(o.get_object_value_or("missing", &dflt), &dflt);
    assert_eq!(o.get_object_value_or("k", &dflt), &Value::Null);

    assert_eq!(root.get_count(), 5);
    assert_eq!(a.get_count(), 1);
    assert_eq!(o.get_count(), 1);
    assert_eq!(s.get_count(), 0);
}

#[test]
fn get_int_truncates_and_saturates() {
    let doc = doc("[2.999, -2.999, 1e30, -1e30]");
    let ints: Vec<i64> = doc.root().children().map(|n| n.get_int()).collect();
    assert_eq!(ints, [2, -2, i64::MAX, i64::MIN]);
}

#[test]
fn member_lookup_is_exact() {
    let doc = doc(r#"{"a":1,"A":2,"ab":3,"":4}"#);
    let root = doc.root();
    assert_eq!(root.member("A").unwrap().get_int(), 2);
    assert_eq!(root.member("ab").unwrap().get_int(), 3);
    assert_eq!(root.member("").unwrap().get_int(), 4);
    assert!(root.member("b").is_none());
    assert!(root.member("a").unwrap().member("a").is_none());

    let keys: Vec<&str> = root.object().unwrap().map(|(k, _)| k).collect();
    assert_eq!(keys, ["", "A", "a", "ab"]);
}

#[test]
fn container_views_match_kind() {
    let doc = doc(r#"{"a":[],"o":{}}"#);
    let a = doc.root().member("a").unwrap();
    let o = doc.root().member("o").unwrap();
    assert_eq!(a.kind(), NodeType::Array);
    assert_eq!(a.array().unwrap().len(), 0);
    assert!(a.object().is_none());
    assert_eq!(o.kind(), NodeType::Object);
    assert_eq!(o.object().unwrap().len(), 0);
    assert!(o.array().is_none());
    assert!(o.first_child().is_none() && o.last_child().is_none());
}

#[test]
fn getters_reach_the_deepest_leaf() {
    let depth = crate::MAX_DEPTH - 1;
    let src = format!("{}\"leaf\"{}", r#"{"k":"#.repeat(depth), "}".repeat(depth));
    let doc = doc(&src);
    let leaf = doc.nodes().last().unwrap();
    assert_eq!(leaf.level(), depth);
    assert_eq!(leaf.get_str(), "leaf");
    assert_eq!(leaf.parent().unwrap().member("k").unwrap().raw_value().as_str(), Some("leaf"));
}
