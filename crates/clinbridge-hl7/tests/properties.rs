//! Property tests for the tokenizer's order and count guarantees.

use clinbridge_hl7::tokenize_message;
use proptest::prelude::*;

/// Segment bodies that survive trimming unchanged: no whitespace, no
/// separator characters.
fn segment_body() -> impl Strategy<Value = String> {
    "[A-Z]{3}(\\|[A-Za-z0-9]{0,8}){0,6}"
}

fn line_ending() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r"), Just("\r\n")]
}

proptest! {
    #[test]
    fn preserves_count_and_order_across_line_endings(
        bodies in prop::collection::vec(segment_body(), 1..12),
        endings in prop::collection::vec(line_ending(), 12),
    ) {
        let mut raw = String::new();
        for (i, body) in bodies.iter().enumerate() {
            raw.push_str(body);
            raw.push_str(endings[i]);
        }

        let segments = tokenize_message(&raw);
        prop_assert_eq!(segments.len(), bodies.len());
        for (segment, body) in segments.iter().zip(&bodies) {
            let fields: Vec<&str> = body.split('|').collect();
            prop_assert_eq!(&segment.fields, &fields);
            prop_assert_eq!(&segment.name, fields[0]);
        }
    }

    #[test]
    fn never_yields_empty_segments(raw in "\\PC{0,200}") {
        for segment in tokenize_message(&raw) {
            prop_assert!(!segment.fields.is_empty());
            prop_assert!(!segment.fields[0].trim().is_empty() || segment.fields.len() > 1);
        }
    }

    #[test]
    fn tokenization_is_idempotent_on_rejoined_output(
        bodies in prop::collection::vec(segment_body(), 1..8),
    ) {
        let raw = bodies.join("\n");
        let once = tokenize_message(&raw);
        let rejoined: Vec<String> = once.iter().map(|s| s.fields.join("|")).collect();
        let twice = tokenize_message(&rejoined.join("\n"));
        prop_assert_eq!(once, twice);
    }
}
