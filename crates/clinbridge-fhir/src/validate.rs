//! Shape validation for mapper input.
//!
//! The request arrives untyped; every declared constraint is checked and
//! every violation collected before anything is mapped. There is no
//! partial acceptance: the result is either a fully typed [`MapperInput`]
//! or a validation error naming all violated fields, joined by `"; "` in
//! declaration order.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::DateTime;
use clinbridge_model::{
    Gender, MapperInput, ObservationPayload, PatientPayload, Result, Violations,
};
use regex::Regex;
use serde_json::{Map, Value};

/// `YYYY-MM-DD`, digits only. Calendar validity is not checked, matching
/// the source system's acceptance rule.
static BIRTH_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid birth date regex"));

/// Validate an untyped request against the tagged mapper-input union.
pub fn validate_mapper_input(input: &Value) -> Result<MapperInput> {
    let mut violations = Violations::new();
    let Some(object) = input.as_object() else {
        violations.push("input: must be a JSON object");
        return Err(violations.into());
    };

    let resource_type = match object.get("resourceType") {
        Some(Value::String(kind)) if kind == "Patient" || kind == "Observation" => {
            Some(kind.as_str())
        }
        Some(Value::String(_)) | None => {
            violations.push("resourceType: must be one of 'Patient' or 'Observation'");
            None
        }
        Some(_) => {
            violations.push("resourceType: must be a string");
            None
        }
    };

    let payload = match object.get("payload") {
        Some(Value::Object(payload)) => Some(payload),
        Some(_) => {
            violations.push("payload: must be a JSON object");
            None
        }
        None => {
            violations.push("payload: required");
            None
        }
    };

    let (Some(resource_type), Some(payload)) = (resource_type, payload) else {
        return Err(violations.into());
    };

    match resource_type {
        "Patient" => validate_patient(payload, violations).map(MapperInput::Patient),
        _ => validate_observation(payload, violations).map(MapperInput::Observation),
    }
}

fn validate_patient(payload: &Map<String, Value>, mut v: Violations) -> Result<PatientPayload> {
    let id = optional_string(payload, "payload.id", "id", &mut v);
    let first_name = required_string(payload, "payload.firstName", "firstName", &mut v);
    let last_name = required_string(payload, "payload.lastName", "lastName", &mut v);

    let birth_date = required_string(payload, "payload.birthDate", "birthDate", &mut v);
    if let Some(date) = &birth_date
        && !BIRTH_DATE_REGEX.is_match(date)
    {
        v.push("payload.birthDate: must match YYYY-MM-DD");
    }

    let gender = match payload.get("gender") {
        Some(Value::String(raw)) => match Gender::from_str(raw) {
            Ok(gender) => Some(gender),
            Err(_) => {
                v.push("payload.gender: must be one of 'male', 'female', 'other', 'unknown'");
                None
            }
        },
        Some(_) => {
            v.push("payload.gender: must be a string");
            None
        }
        None => {
            v.push("payload.gender: required");
            None
        }
    };

    if !v.is_empty() {
        return Err(v.into());
    }
    // Unwraps below are unreachable: each None pushed a violation.
    Ok(PatientPayload {
        id,
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        birth_date: birth_date.unwrap_or_default(),
        gender: gender.unwrap_or(Gender::Unknown),
    })
}

fn validate_observation(
    payload: &Map<String, Value>,
    mut v: Violations,
) -> Result<ObservationPayload> {
    let id = optional_string(payload, "payload.id", "id", &mut v);
    let patient_id = required_string(payload, "payload.patientId", "patientId", &mut v);
    let code = required_string(payload, "payload.code", "code", &mut v);
    let display = required_string(payload, "payload.display", "display", &mut v);

    let value = match payload.get("value") {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) => Some(value),
            None => {
                v.push("payload.value: must be a number");
                None
            }
        },
        Some(_) => {
            v.push("payload.value: must be a number");
            None
        }
        None => {
            v.push("payload.value: required");
            None
        }
    };

    let unit = required_string(payload, "payload.unit", "unit", &mut v);

    let effective = required_string(
        payload,
        "payload.effectiveDateTime",
        "effectiveDateTime",
        &mut v,
    );
    if let Some(datetime) = &effective
        && DateTime::parse_from_rfc3339(datetime).is_err()
    {
        v.push("payload.effectiveDateTime: must be an ISO 8601 date-time");
    }

    if !v.is_empty() {
        return Err(v.into());
    }
    Ok(ObservationPayload {
        id,
        patient_id: patient_id.unwrap_or_default(),
        code: code.unwrap_or_default(),
        display: display.unwrap_or_default(),
        value: value.unwrap_or_default(),
        unit: unit.unwrap_or_default(),
        effective_date_time: effective.unwrap_or_default(),
    })
}

/// A required string field: present, a string, minimum length 1.
fn required_string(
    payload: &Map<String, Value>,
    path: &str,
    field: &str,
    v: &mut Violations,
) -> Option<String> {
    match payload.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        Some(Value::String(_)) => {
            v.push(format!("{path}: must not be empty"));
            None
        }
        Some(_) => {
            v.push(format!("{path}: must be a string"));
            None
        }
        None => {
            v.push(format!("{path}: required"));
            None
        }
    }
}

/// An optional string field: absent is fine, but a present value must be a
/// non-empty string. An explicit `null` is a type violation, not absence.
fn optional_string(
    payload: &Map<String, Value>,
    path: &str,
    field: &str,
    v: &mut Violations,
) -> Option<String> {
    match payload.get(field) {
        None => None,
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        Some(Value::String(_)) => {
            v.push(format!("{path}: must not be empty"));
            None
        }
        Some(_) => {
            v.push(format!("{path}: must be a string"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_patient() -> Value {
        json!({
            "resourceType": "Patient",
            "payload": {
                "firstName": "John",
                "lastName": "Doe",
                "birthDate": "1980-05-01",
                "gender": "male"
            }
        })
    }

    #[test]
    fn accepts_valid_patient() {
        let input = validate_mapper_input(&valid_patient()).expect("valid patient");
        assert_eq!(input.resource_type(), "Patient");
    }

    #[test]
    fn collects_every_violation_in_declaration_order() {
        let input = json!({
            "resourceType": "Patient",
            "payload": {
                "firstName": "",
                "birthDate": "01-05-1980",
                "gender": "M"
            }
        });
        let error = validate_mapper_input(&input).unwrap_err();
        assert_eq!(
            error.to_string(),
            "payload.firstName: must not be empty; \
             payload.lastName: required; \
             payload.birthDate: must match YYYY-MM-DD; \
             payload.gender: must be one of 'male', 'female', 'other', 'unknown'"
        );
    }

    #[test]
    fn rejects_unrecognized_discriminator() {
        let input = json!({ "resourceType": "Medication", "payload": {} });
        let error = validate_mapper_input(&input).unwrap_err();
        assert!(
            error
                .to_string()
                .contains("resourceType: must be one of 'Patient' or 'Observation'")
        );
    }

    #[test]
    fn rejects_wrong_value_type() {
        let input = json!({
            "resourceType": "Observation",
            "payload": {
                "patientId": "42",
                "code": "8310-5",
                "display": "Body temperature",
                "value": "37.1",
                "unit": "Cel",
                "effectiveDateTime": "2026-01-01T00:00:00Z"
            }
        });
        let error = validate_mapper_input(&input).unwrap_err();
        assert_eq!(error.to_string(), "payload.value: must be a number");
    }

    #[test]
    fn rejects_malformed_effective_date_time() {
        let input = json!({
            "resourceType": "Observation",
            "payload": {
                "patientId": "42",
                "code": "8310-5",
                "display": "Body temperature",
                "value": 37.1,
                "unit": "Cel",
                "effectiveDateTime": "2026-01-01"
            }
        });
        let error = validate_mapper_input(&input).unwrap_err();
        assert_eq!(
            error.to_string(),
            "payload.effectiveDateTime: must be an ISO 8601 date-time"
        );
    }

    #[test]
    fn explicit_null_id_is_a_type_violation() {
        let mut input = valid_patient();
        input["payload"]["id"] = Value::Null;
        let error = validate_mapper_input(&input).unwrap_err();
        assert_eq!(error.to_string(), "payload.id: must be a string");
    }

    #[test]
    fn absent_id_is_accepted() {
        let MapperInput::Patient(payload) =
            validate_mapper_input(&valid_patient()).expect("valid patient")
        else {
            panic!("expected Patient variant");
        };
        assert!(payload.id.is_none());
    }

    #[test]
    fn revalidation_of_valid_input_is_stable() {
        let once = validate_mapper_input(&valid_patient()).expect("first");
        let twice = validate_mapper_input(&valid_patient()).expect("second");
        assert_eq!(once, twice);
    }
}
