//! Header metadata extraction from MSH segment fields.

use clinbridge_model::{MshMetadata, UNKNOWN};
use tracing::warn;

/// Component separator inside MSH-9 (`messageType^triggerEvent`).
const COMPONENT_SEPARATOR: char = '^';

/// Zero-based index of MSH-9 (message type / trigger event) in the field
/// list. MSH is special-cased in HL7 v2: the field separator itself counts
/// as MSH-1, so `fields[8]` holds MSH-9.
const MESSAGE_TYPE_INDEX: usize = 8;

/// Zero-based index of MSH-12 (version id).
const VERSION_INDEX: usize = 11;

/// Extract message type, trigger event, and version from MSH fields.
///
/// Absence never fails: a missing MSH-9 field degrades to an empty message
/// type, a missing trigger-event component or MSH-12 field degrades to
/// `"UNKNOWN"`. A present-but-empty component is kept verbatim.
pub fn extract_msh_metadata(fields: &[String]) -> MshMetadata {
    let msh9 = fields
        .get(MESSAGE_TYPE_INDEX)
        .map(String::as_str)
        .unwrap_or_default();
    let mut components = msh9.split(COMPONENT_SEPARATOR);
    // split always yields at least one part, so the UNKNOWN fallback here
    // only covers the trigger event in practice.
    let message_type = components.next().unwrap_or(UNKNOWN).to_string();
    let trigger_event = components.next().unwrap_or(UNKNOWN).to_string();

    let version = fields
        .get(VERSION_INDEX)
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string());

    if trigger_event == UNKNOWN || version == UNKNOWN {
        warn!(
            message_type = %message_type,
            trigger_event = %trigger_event,
            version = %version,
            "MSH metadata incomplete, degraded to placeholder"
        );
    }

    MshMetadata {
        message_type,
        trigger_event,
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msh_fields(msh9: &str, msh12: &str) -> Vec<String> {
        let mut fields: Vec<String> = vec!["MSH", "^~\\&", "", "", "", "", "", ""]
            .into_iter()
            .map(str::to_string)
            .collect();
        fields.push(msh9.to_string());
        fields.push(String::new());
        fields.push(String::new());
        fields.push(msh12.to_string());
        fields
    }

    #[test]
    fn extracts_type_event_and_version() {
        let metadata = extract_msh_metadata(&msh_fields("ADT^A01", "2.5"));
        assert_eq!(metadata.message_type, "ADT");
        assert_eq!(metadata.trigger_event, "A01");
        assert_eq!(metadata.version, "2.5");
    }

    #[test]
    fn missing_trigger_event_degrades_to_unknown() {
        let metadata = extract_msh_metadata(&msh_fields("ORU", "2.3"));
        assert_eq!(metadata.message_type, "ORU");
        assert_eq!(metadata.trigger_event, "UNKNOWN");
    }

    #[test]
    fn absent_msh9_keeps_empty_type_but_unknown_event() {
        let short: Vec<String> = vec!["MSH".to_string(), "^~\\&".to_string()];
        let metadata = extract_msh_metadata(&short);
        assert_eq!(metadata.message_type, "");
        assert_eq!(metadata.trigger_event, "UNKNOWN");
        assert_eq!(metadata.version, "UNKNOWN");
    }

    #[test]
    fn extra_components_beyond_the_second_are_ignored() {
        let metadata = extract_msh_metadata(&msh_fields("ADT^A01^ADT_A01", "2.5.1"));
        assert_eq!(metadata.message_type, "ADT");
        assert_eq!(metadata.trigger_event, "A01");
    }

    #[test]
    fn empty_leading_component_is_kept_verbatim() {
        let metadata = extract_msh_metadata(&msh_fields("^A08", "2.4"));
        assert_eq!(metadata.message_type, "");
        assert_eq!(metadata.trigger_event, "A08");
    }
}
