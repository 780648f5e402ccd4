//! HL7 v2 message parsing: tokenization, header metadata, orchestration.
//!
//! The pipeline is deliberately shallow — only the primary `|` field
//! separator and the `^` component split inside MSH-9 are interpreted.
//! Segment repetition, sub-components, and escape sequences are out of
//! scope.

pub mod api;
pub mod header;
pub mod parse;
pub mod tokenize;

pub use api::{ParseOutcome, run_hl7_parser};
pub use header::extract_msh_metadata;
pub use parse::parse_message;
pub use tokenize::tokenize_message;
