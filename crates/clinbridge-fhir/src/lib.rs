//! FHIR payload validation and resource mapping.
//!
//! Validation is total: every declared constraint is checked, every
//! violation reported. Mapping only runs over a fully typed payload and is
//! pure — no I/O, no mutation, same input gives same output.

pub mod api;
pub mod map;
pub mod validate;

pub use api::{MapOutcome, run_resource_mapper};
pub use map::{map_observation, map_patient, map_resource};
pub use validate::validate_mapper_input;
