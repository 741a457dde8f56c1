#![expect(missing_docs)]

mod common;

use common::{SAMPLE, sample};
use jsontree::{Error, FormatOptions, format_value_with};

#[test]
fn snapshot_pretty_keeps_source_order() {
    insta::assert_snapshot!(jsontree::pretty(SAMPLE, "  ").unwrap(), @r#"
    {
      "snippets": [
        "fn main() {}"
      ],
      "request": {
        "options": {
          "opt_level": 2,
          "features": [
            "serde",
            "tokio"
          ]
        },
        "filename": "example.rs"
      },
      "reason": null,
      "ok": true,
      "matrix": [
        [
          "a"
        ]
      ]
    }
    "#);
}

#[test]
fn snapshot_format_value_sorts_members() {
    let doc = sample();
    let options = FormatOptions {
        indent: "  ".to_owned(),
    };
    insta::assert_snapshot!(format_value_with(doc.value(), &options).unwrap(), @r#"
    {
      "matrix": [
        [
          "a"
        ]
      ],
      "ok": true,
      "reason": null,
      "request": {
        "filename": "example.rs",
        "options": {
          "features": [
            "serde",
            "tokio"
          ],
          "opt_level": 2
        }
      },
      "snippets": [
        "fn main() {}"
      ]
    }
    "#);
}

#[test]
fn pretty_output_is_stable() {
    let once = jsontree::pretty(SAMPLE, "\t").unwrap();
    let twice = jsontree::pretty(&once, "\t").unwrap();
    assert_eq!(once, twice);
    assert_eq!(
        jsontree::load_str(&once).unwrap().value(),
        sample().value()
    );
}

#[test]
fn pretty_bytes_matches_pretty() {
    assert_eq!(
        jsontree::pretty_bytes(SAMPLE.as_bytes(), "").unwrap(),
        jsontree::pretty(SAMPLE, jsontree::DEFAULT_INDENT).unwrap()
    );
    let err = jsontree::pretty_bytes(b"{\"k\": \"\xc3\x28\"}", "  ").unwrap_err();
    assert!(matches!(err, Error::Utf8(_)));
}

#[test]
fn pretty_rejects_what_load_rejects() {
    let err = jsontree::pretty("{\"a\": [1,]}", "  ").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(err.line(), Some(1));
    assert!(err.to_string().starts_with("syntax error: "));
}
