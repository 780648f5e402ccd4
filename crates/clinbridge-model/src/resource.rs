use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative gender, per the FHIR value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::Other, Gender::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "unknown" => Ok(Gender::Unknown),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Validated Patient request payload.
///
/// `id` is only ever caller-supplied; the mapper never rewrites it. All
/// required strings are non-empty after validation and `birth_date` matches
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: Gender,
}

/// Validated Observation request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_id: String,
    pub code: String,
    pub display: String,
    pub value: f64,
    pub unit: String,
    pub effective_date_time: String,
}

/// The sole admissible input shape for the resource mapper: a tagged union
/// keyed by `resourceType`, carrying the matching payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType", content = "payload")]
pub enum MapperInput {
    Patient(PatientPayload),
    Observation(ObservationPayload),
}

impl MapperInput {
    pub fn resource_type(&self) -> &'static str {
        match self {
            MapperInput::Patient(_) => "Patient",
            MapperInput::Observation(_) => "Observation",
        }
    }
}
