pub mod error;
pub mod message;
pub mod resource;

pub use error::{BridgeError, Result, Violations};
pub use message::{HEADER_SEGMENT, MshMetadata, ParsedMessage, Segment, UNKNOWN};
pub use resource::{Gender, MapperInput, ObservationPayload, PatientPayload};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_message_serializes_camel_case() {
        let message = ParsedMessage {
            message_type: "ADT".to_string(),
            trigger_event: "A01".to_string(),
            version: "2.5".to_string(),
            segments: vec![Segment::from_fields(vec![
                "MSH".to_string(),
                "^~\\&".to_string(),
            ])],
        };
        let json = serde_json::to_value(&message).expect("serialize message");
        assert_eq!(json["messageType"], "ADT");
        assert_eq!(json["triggerEvent"], "A01");
        assert_eq!(json["segments"][0]["name"], "MSH");
    }

    #[test]
    fn mapper_input_round_trips_tagged_form() {
        let json = serde_json::json!({
            "resourceType": "Patient",
            "payload": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "birthDate": "1815-12-10",
                "gender": "female"
            }
        });
        let input: MapperInput = serde_json::from_value(json.clone()).expect("deserialize input");
        match &input {
            MapperInput::Patient(payload) => {
                assert_eq!(payload.first_name, "Ada");
                assert_eq!(payload.gender, Gender::Female);
                assert!(payload.id.is_none());
            }
            MapperInput::Observation(_) => panic!("expected Patient variant"),
        }
        let round = serde_json::to_value(&input).expect("serialize input");
        assert_eq!(round, json);
    }

    #[test]
    fn segment_from_empty_fields_uses_placeholder() {
        let segment = Segment::from_fields(Vec::new());
        assert_eq!(segment.name, UNKNOWN);
        assert!(segment.fields.is_empty());
    }
}
