//! Definición inmutable del pipeline.
//!
//! El `definition_hash` se calcula sobre el JSON canónico de los pasos (más
//! `MODEL_VERSION`); el `id` es identidad de la instancia y queda fuera del
//! hash, así dos builds con los mismos pasos comparten hash.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::constants::MODEL_VERSION;
use crate::hashing::hash_value;

use super::step::PipelineStep;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub id: Uuid,
    pub steps: Vec<PipelineStep>,
    pub definition_hash: String,
}

impl PipelineDefinition {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Construye la definición a partir de los pasos ya armados (con sus codecs
/// registrados) y calcula el hash reproducible.
pub fn build_pipeline_definition(steps: Vec<PipelineStep>) -> PipelineDefinition {
    let payload = json!({
        "model_version": MODEL_VERSION,
        "steps": serde_json::to_value(&steps).unwrap_or(Value::Null),
    });
    let definition_hash = hash_value(&payload);
    PipelineDefinition { id: Uuid::new_v4(),
                         steps,
                         definition_hash }
}
