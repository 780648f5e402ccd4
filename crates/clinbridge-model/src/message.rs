use serde::{Deserialize, Serialize};

/// Segment name used when a tokenized piece carries no fields at all.
pub const UNKNOWN: &str = "UNKNOWN";

/// Identifier of the mandatory header segment.
pub const HEADER_SEGMENT: &str = "MSH";

/// One logical line of an HL7 v2 message.
///
/// `name` is the segment identifier (the first field); `fields` is the full
/// ordered field list including the identifier at index 0. Order is
/// significant and preserved exactly as encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub fields: Vec<String>,
}

impl Segment {
    /// Build a segment from its ordered field list. An empty list degrades
    /// to the `"UNKNOWN"` placeholder name rather than failing.
    pub fn from_fields(fields: Vec<String>) -> Self {
        let name = fields.first().cloned().unwrap_or_else(|| UNKNOWN.to_string());
        Self { name, fields }
    }

    pub fn is_header(&self) -> bool {
        self.name == HEADER_SEGMENT
    }
}

/// Metadata extracted from the MSH header segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MshMetadata {
    pub message_type: String,
    pub trigger_event: String,
    pub version: String,
}

/// A successfully parsed HL7 v2 message.
///
/// `segments` is never empty and always contains a segment named `MSH`;
/// construction is only reachable through the parse pipeline, which fails
/// before this point when the header is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub message_type: String,
    pub trigger_event: String,
    pub version: String,
    pub segments: Vec<Segment>,
}

impl ParsedMessage {
    pub fn new(metadata: MshMetadata, segments: Vec<Segment>) -> Self {
        Self {
            message_type: metadata.message_type,
            trigger_event: metadata.trigger_event,
            version: metadata.version,
            segments,
        }
    }

    /// The header segment. Present by construction.
    pub fn header(&self) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.is_header())
    }
}
