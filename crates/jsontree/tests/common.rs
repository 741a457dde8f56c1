#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::Write;

use jsontree::{Document, NodeType};

pub const SAMPLE: &str = r#"{
    "snippets": ["fn main() {}"],
    "request": {
        "options": {"opt_level": 2, "features": ["serde", "tokio"]},
        "filename": "example.rs"
    },
    "reason": null,
    "ok": true,
    "matrix": [["a"]]
}"#;

pub fn sample() -> Document {
    jsontree::load_str(SAMPLE).unwrap()
}

/// One line per node in pre-order: indented by level, then the node's
/// debug form, then its member count or compact text.
pub fn listing(doc: &Document) -> String {
    let mut out = String::new();
    for node in doc.nodes() {
        if !out.is_empty() {
            out.push('\n');
        }
        let indent = node.level() * 2;
        match node.kind() {
            NodeType::Array | NodeType::Object => {
                write!(out, "{:indent$}{node} ({})", "", node.get_count()).unwrap();
            }
            _ => write!(out, "{:indent$}{node} {}", "", node.to_json_text(false)).unwrap(),
        }
    }
    out
}
