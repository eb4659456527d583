//! Property-based tests for path joining, decoding and walking.
//!
//! The normalize module already has property tests for `make_path`. This
//! module focuses on the codec and on the segment walk.

use super::codec::NameCodec;
use super::normalize::{make_path, segments};
use super::resolver::PathResolver;
use crate::config::NameReplacement;
use crate::matcher::ExactMatcher;
use crate::trace::NullTracer;
use crate::tree::{ItemAccessor, LookupOptions, MemoryTree, NodeFixture, TreeFixture};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..6)
}

/// A single chain of nodes named after `names`, below a `root` node.
fn chain(names: &[String]) -> MemoryTree {
    let mut fixture: Option<NodeFixture> = None;
    for name in names.iter().rev() {
        let node = NodeFixture::new(name.as_str());
        fixture = Some(match fixture {
            Some(child) => node.with_child(child),
            None => node,
        });
    }
    let mut root = NodeFixture::new("root");
    if let Some(child) = fixture {
        root = root.with_child(child);
    }
    MemoryTree::from_fixture(TreeFixture::new("master", root)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Text without '%' or replacement output decodes to itself
    #[test]
    fn decode_plain_text_is_identity(text in "[a-zA-Z0-9/ _.]{0,40}") {
        let codec = NameCodec::new(vec![NameReplacement::new(" ", "-")]);
        prop_assert_eq!(codec.decode_name(&text), text);
    }

    // Decoding never panics, whatever the input
    #[test]
    fn decode_total(text in ".{0,40}") {
        let codec = NameCodec::new(vec![NameReplacement::new(" ", "-")]);
        let _ = codec.decode_name(&text);
    }

    // Encoding then decoding restores names without the replacement output
    #[test]
    fn encode_then_decode_restores_name(name in "[a-z ]{0,30}") {
        let codec = NameCodec::new(vec![NameReplacement::new(" ", "-")]);
        prop_assert_eq!(codec.decode_name(&codec.encode_name(&name)), name);
    }

    // Joining keeps every segment of both sides, in order
    #[test]
    fn make_path_preserves_segments(
        left in relative_path_strategy(),
        right in relative_path_strategy(),
    ) {
        let a = format!("/{}", left.join("/"));
        let b = format!("/{}", right.join("/"));
        let joined = make_path(&a, &b, '/');
        let expected: Vec<&str> = left.iter().chain(right.iter()).map(String::as_str).collect();
        prop_assert_eq!(segments(&joined).collect::<Vec<_>>(), expected);
    }

    // Walking an existing chain reaches its last node, in any letter case
    #[test]
    fn walk_reaches_end_of_chain(names in relative_path_strategy(), upper in any::<bool>()) {
        let tree = chain(&names);
        let accessor = ItemAccessor::new(&tree, &NullTracer, LookupOptions::new("master"));
        let root = accessor.get_item("/root").into_node().unwrap();

        let mut query = names.join("/");
        if upper {
            query = query.to_uppercase();
        }
        let node = PathResolver::new(&ExactMatcher)
            .resolve_from_root(&accessor, &root, &query)
            .unwrap();

        let expected = names.iter().fold(String::from("/root"), |path, name| format!("{path}/{name}"));
        prop_assert_eq!(node.path(), expected.as_str());
    }

    // A missing segment anywhere fails the whole walk
    #[test]
    fn walk_fails_on_unknown_segment(names in relative_path_strategy(), position in 0usize..6) {
        let tree = chain(&names);
        let accessor = ItemAccessor::new(&tree, &NullTracer, LookupOptions::new("master"));
        let root = accessor.get_item("/root").into_node().unwrap();

        let mut query = names.clone();
        let position = position.min(query.len());
        query.insert(position, "MISSING-SEGMENT".to_string());

        let result = PathResolver::new(&ExactMatcher)
            .resolve_from_root(&accessor, &root, &query.join("/"));
        prop_assert!(result.is_none());
    }
}
