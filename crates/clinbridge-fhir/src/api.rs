//! Untyped entry point for the resource-mapping pipeline.

use clinbridge_model::MapperInput;
use serde_json::{Value, json};
use tracing::info;

use crate::map::map_resource;
use crate::validate::validate_mapper_input;

/// Result of running the mapper against an untyped request.
#[derive(Debug, Clone, PartialEq)]
pub enum MapOutcome {
    Success(Value),
    Failure(String),
}

impl MapOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, MapOutcome::Success(_))
    }

    /// Render the discriminated wire form.
    pub fn into_json(self) -> Value {
        match self {
            MapOutcome::Success(resource) => json!({ "ok": true, "resource": resource }),
            MapOutcome::Failure(error) => json!({ "ok": false, "error": error }),
        }
    }
}

/// Validate and map an untyped request value.
pub fn run_resource_mapper(input: &Value) -> MapOutcome {
    let typed: MapperInput = match validate_mapper_input(input) {
        Ok(typed) => typed,
        Err(error) => {
            let error = error.to_string();
            info!(%error, "resource mapping rejected");
            return MapOutcome::Failure(error);
        }
    };
    let resource = map_resource(&typed);
    info!(resource_type = typed.resource_type(), "mapped resource");
    MapOutcome::Success(resource)
}
