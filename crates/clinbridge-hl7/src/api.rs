//! Untyped entry point for the message-parse pipeline.
//!
//! The external transport hands over an untyped JSON value; shape
//! validation happens here before any tokenization. The outcome mirrors
//! the wire contract: `{"ok":true,"parsed":{...}}` on success,
//! `{"ok":false,"error":"..."}` on failure.

use clinbridge_model::{BridgeError, ParsedMessage, Result, Violations};
use serde_json::{Value, json};
use tracing::info;

use crate::parse::parse_message;

/// Result of running the parser against an untyped request.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Success(ParsedMessage),
    Failure(String),
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    /// Render the discriminated wire form.
    pub fn into_json(self) -> Value {
        match self {
            ParseOutcome::Success(parsed) => json!({ "ok": true, "parsed": parsed }),
            ParseOutcome::Failure(error) => json!({ "ok": false, "error": error }),
        }
    }
}

impl From<Result<ParsedMessage>> for ParseOutcome {
    fn from(result: Result<ParsedMessage>) -> Self {
        match result {
            Ok(parsed) => ParseOutcome::Success(parsed),
            Err(error) => ParseOutcome::Failure(error.to_string()),
        }
    }
}

/// Validate the `{ "message": string }` request shape.
fn validate_parse_request(input: &Value) -> Result<&str> {
    let mut violations = Violations::new();
    let Some(object) = input.as_object() else {
        violations.push("input: must be a JSON object");
        return Err(BridgeError::Validation(violations));
    };
    let message = match object.get("message") {
        None => {
            violations.push("message: required");
            None
        }
        Some(Value::String(message)) if message.is_empty() => {
            violations.push("message: must not be empty");
            None
        }
        Some(Value::String(message)) => Some(message.as_str()),
        Some(_) => {
            violations.push("message: must be a string");
            None
        }
    };
    match message {
        Some(message) if violations.is_empty() => Ok(message),
        _ => Err(BridgeError::Validation(violations)),
    }
}

/// Run the full parse pipeline against an untyped request value.
pub fn run_hl7_parser(input: &Value) -> ParseOutcome {
    let outcome: ParseOutcome = validate_parse_request(input)
        .and_then(parse_message)
        .into();
    match &outcome {
        ParseOutcome::Success(parsed) => info!(
            message_type = %parsed.message_type,
            segment_count = parsed.segments.len(),
            "parsed HL7 message"
        ),
        ParseOutcome::Failure(error) => info!(%error, "HL7 parse rejected"),
    }
    outcome
}
