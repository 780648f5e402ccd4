//! Parse orchestration: tokenize, locate the header, extract metadata.

use clinbridge_model::{BridgeError, ParsedMessage, Result};
use tracing::debug;

use crate::header::extract_msh_metadata;
use crate::tokenize::tokenize_message;

/// Parse a raw HL7 v2 message into a [`ParsedMessage`].
///
/// Fails with [`BridgeError::MissingHeader`] when no MSH segment is
/// present. On success the returned segment list is the full tokenizer
/// output, header included, in input order.
pub fn parse_message(raw: &str) -> Result<ParsedMessage> {
    let segments = tokenize_message(raw);
    debug!(segment_count = segments.len(), "tokenized message");

    let header = segments
        .iter()
        .find(|segment| segment.is_header())
        .ok_or(BridgeError::MissingHeader)?;

    let metadata = extract_msh_metadata(&header.fields);
    debug!(
        message_type = %metadata.message_type,
        trigger_event = %metadata.trigger_event,
        version = %metadata.version,
        "extracted MSH metadata"
    );

    Ok(ParsedMessage::new(metadata, segments))
}
