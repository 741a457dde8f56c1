#![no_main]

use arbitrary::Arbitrary;
use jsontree::{Document, LoadOptions, NodeType};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    allow_trailing_data: bool,
    start: isize,
    end: isize,
    index: isize,
}

fn check_tree(doc: &Document, input: &Input<'_>) {
    assert_eq!(doc.root().path(), "/");
    for node in doc.nodes() {
        // Every node is reachable from the root by its components.
        let mut items: Vec<jsontree::PathItem> = core::iter::once(node)
            .chain(node.ancestors())
            .filter_map(|n| match (n.key(), n.array_index()) {
                (Some(k), _) => Some(jsontree::PathItem::Key(k.to_owned())),
                (None, Some(i)) => Some(jsontree::PathItem::Index(i)),
                (None, None) => None,
            })
            .collect();
        items.reverse();
        assert_eq!(doc.find_path(&items), Some(node));
        assert_eq!(jsontree::path::render(&items), node.path());

        let forward: Vec<_> = core::iter::successors(node.first_child(), |n| n.next_sibling()).collect();
        assert!(forward.iter().eq(node.children().collect::<Vec<_>>().iter()));

        if node.kind() == NodeType::Array {
            let n = node.get_count();
            let slice = node.slice(input.start, input.end).unwrap();
            assert!(slice.len() <= n);
            assert_eq!(node.index(input.index).is_some(), usize::try_from(input.index).is_ok_and(|i| i < n));
        } else {
            assert!(node.slice(input.start, input.end).is_none());
        }

        // Whatever loads must render to text that loads back to the same value.
        let text = node.to_json_text(input.allow_trailing_data);
        let again = jsontree::load_str(&text).unwrap();
        assert_eq!(again.value(), node.raw_value());
    }
}

fuzz_target!(|input: Input<'_>| {
    let options = LoadOptions {
        allow_trailing_data: input.allow_trailing_data,
    };
    let Ok(doc) = jsontree::load_with(input.text, options) else {
        return;
    };
    check_tree(&doc, &input);

    // Anything the strict decoder accepts can be reformatted, and the result
    // decodes to the same value.
    if let Ok(s) = core::str::from_utf8(input.text) {
        if let Ok(strict) = serde_json::from_str::<serde_json::Value>(s) {
            let pretty = jsontree::pretty(s, "  ").unwrap();
            assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), strict);
        }
    }
});
