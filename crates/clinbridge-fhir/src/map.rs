//! Pure mapping from validated payloads to FHIR-style resources.

use clinbridge_model::{MapperInput, ObservationPayload, PatientPayload};
use serde_json::{Value, json};

/// Coding system attached to every Observation code.
const CODING_SYSTEM: &str = "http://loinc.org";

/// Prefixes and delimiter for synthesized identifiers.
const PATIENT_ID_PREFIX: &str = "pat";
const OBSERVATION_ID_PREFIX: &str = "obs";
const ID_DELIMITER: &str = "-";

/// Reference path prefix for Observation subjects.
const PATIENT_REFERENCE_PREFIX: &str = "Patient/";

/// Map a validated payload to its resource. Dispatches on the variant.
pub fn map_resource(input: &MapperInput) -> Value {
    match input {
        MapperInput::Patient(payload) => map_patient(payload),
        MapperInput::Observation(payload) => map_observation(payload),
    }
}

/// Map a Patient payload to a Patient resource.
///
/// A caller-supplied id is passed through verbatim; otherwise the id is
/// synthesized as `pat-<family>-<given>` from the lower-cased trimmed
/// names. The synthesized scheme is deterministic but not globally unique:
/// distinct name pairs can collide after lower-casing. That is inherited
/// source behavior, left unchanged.
pub fn map_patient(payload: &PatientPayload) -> Value {
    let family = payload.last_name.trim();
    let given = payload.first_name.trim();
    let id = match &payload.id {
        Some(id) => id.clone(),
        None => format!(
            "{PATIENT_ID_PREFIX}{ID_DELIMITER}{}{ID_DELIMITER}{}",
            family.to_lowercase(),
            given.to_lowercase()
        ),
    };

    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [
            {
                "family": family,
                "given": [given],
            }
        ],
        "birthDate": payload.birth_date,
        "gender": payload.gender,
    })
}

/// Map an Observation payload to an Observation resource.
///
/// `status` is fixed to `"final"` and the numeric value passes through
/// without rounding or unit conversion.
pub fn map_observation(payload: &ObservationPayload) -> Value {
    let id = match &payload.id {
        Some(id) => id.clone(),
        None => format!(
            "{OBSERVATION_ID_PREFIX}{ID_DELIMITER}{}{ID_DELIMITER}{}",
            payload.patient_id,
            payload.code.to_lowercase()
        ),
    };

    json!({
        "resourceType": "Observation",
        "id": id,
        "status": "final",
        "subject": {
            "reference": format!("{PATIENT_REFERENCE_PREFIX}{}", payload.patient_id),
        },
        "code": {
            "coding": [
                {
                    "system": CODING_SYSTEM,
                    "code": payload.code,
                    "display": payload.display,
                }
            ],
            "text": payload.display,
        },
        "effectiveDateTime": payload.effective_date_time,
        "valueQuantity": {
            "value": payload.value,
            "unit": payload.unit,
        },
    })
}
