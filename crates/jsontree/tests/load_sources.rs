#![expect(missing_docs)]

mod common;

use std::io::Write;

use common::{SAMPLE, listing, sample};
use jsontree::{Error, LoadOptions, NodeType};

#[test]
fn every_source_builds_the_same_tree() {
    let expected = listing(&sample());

    let from_bytes = jsontree::load(SAMPLE.as_bytes()).unwrap();
    let from_reader = jsontree::load_reader(SAMPLE.as_bytes()).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();
    let from_file = jsontree::load_file(file.path()).unwrap();

    for doc in [from_bytes, from_reader, from_file] {
        assert_eq!(listing(&doc), expected);
    }
}

#[test]
fn file_with_trailing_data() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"a\":1}}\n{{\"a\":2}}\n").unwrap();
    file.flush().unwrap();

    let err = jsontree::load_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.line(), Some(2));

    let doc = jsontree::load_file_with(file.path(), LoadOptions { allow_trailing_data: true }).unwrap();
    assert_eq!(doc.root().member("a").unwrap().get_int(), 1);
}

#[test]
fn json_lines_stream() {
    let input = "{\"id\":1,\"tags\":[]}\n{\"id\":2,\"tags\":[\"x\"]}\n\n  \"tail\"  \n";
    let docs: Vec<_> = jsontree::load_all_reader(input.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].root().member("id").unwrap().get_int(), 1);
    assert_eq!(docs[1].find("/tags[0]").unwrap().unwrap().get_str(), "x");
    assert_eq!(docs[2].root().kind(), NodeType::String);
}

#[test]
fn decode_errors_carry_positions() {
    let err = jsontree::load_str("{\"a\": [1, 2,, 3]}").unwrap_err();
    assert_eq!((err.line(), err.column()), (Some(1), Some(13)));
    assert!(!err.is_eof());
    assert!(err.to_string().starts_with("decode error: "));

    let err = jsontree::load(b"[1, 2").unwrap_err();
    assert!(err.is_eof());

    let err = jsontree::load(b"\"\xff\"").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn documents_move_across_threads() {
    let doc = &sample();
    let count = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(move |_| s.spawn(move || doc.nodes().filter(|n| n.kind() == NodeType::String).count()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
    });
    assert_eq!(count, [5; 4]);
}
