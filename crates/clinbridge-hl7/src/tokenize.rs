//! Segment tokenizer for HL7 v2 messages.
//!
//! HL7 v2 messages in the wild terminate segments with `\r`, `\n`, or
//! `\r\n` depending on the sending system. All three are normalized to a
//! single separator before splitting. Only the primary `|` field separator
//! is handled here; component (`^`) splitting is the header extractor's
//! concern and escape sequences are out of scope.

use clinbridge_model::Segment;

/// Field separator within a segment.
const FIELD_SEPARATOR: char = '|';

/// Normalize all line-ending conventions to `\n`.
fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split a raw message into ordered segments.
///
/// Lines are trimmed and empty lines dropped; everything else is kept in
/// input order with no deduplication and no identifier validation.
pub fn tokenize_message(raw: &str) -> Vec<Segment> {
    normalize_line_endings(raw)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(tokenize_segment)
        .collect()
}

fn tokenize_segment(line: &str) -> Segment {
    let fields: Vec<String> = line.split(FIELD_SEPARATOR).map(str::to_string).collect();
    Segment::from_fields(fields)
}
