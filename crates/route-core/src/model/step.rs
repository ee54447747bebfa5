//! Pasos del pipeline y registro de codecs.
//!
//! Un paso es el punto de anclaje de los codecs: `attach_marshal` /
//! `attach_unmarshal` registran exactamente una configuración por llamada y
//! devuelven el mismo handle (ownership en lugar del retorno genérico
//! fluido del modelo original). El paso no interpreta la configuración;
//! sólo la conserva en orden de registro.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use route_domain::DataFormat;

use crate::builder::DataFormatClause;
use crate::errors::CoreBuilderError;

/// Dirección de un codec: marshal (memoria → wire) o unmarshal (inverso).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Marshal,
    Unmarshal,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Marshal => "marshal",
            Direction::Unmarshal => "unmarshal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreBuilderError;

    /// Parsea una dirección desde texto (case-insensitive). Cualquier otro
    /// valor es una operación desconocida; no se registra nada.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("marshal") {
            Ok(Direction::Marshal)
        } else if s.eq_ignore_ascii_case("unmarshal") {
            Ok(Direction::Unmarshal)
        } else {
            Err(CoreBuilderError::UnsupportedOperation(s.to_string()))
        }
    }
}

/// Registro inmutable de un codec sobre un paso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecAttachment {
    pub direction: Direction,
    pub format: DataFormat,
}

/// Handle de paso capaz de aceptar configuraciones marshal/unmarshal.
///
/// Las operaciones consumen y devuelven `Self` para permitir encadenado.
/// `marshal()` / `unmarshal()` abren la clause de selección de formato fija
/// a la dirección correspondiente.
pub trait ProcessorDefinition: Sized {
    /// Identificador estable del paso dentro del pipeline.
    fn step_id(&self) -> &str;

    fn attach_marshal(self, format: DataFormat) -> Self;

    fn attach_unmarshal(self, format: DataFormat) -> Self;

    fn marshal(self) -> DataFormatClause<Self> {
        DataFormatClause::new(self, Direction::Marshal)
    }

    fn unmarshal(self) -> DataFormatClause<Self> {
        DataFormatClause::new(self, Direction::Unmarshal)
    }
}

/// Paso concreto in-memory: id + codecs registrados en orden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub id: String,
    pub attachments: Vec<CodecAttachment>,
}

impl PipelineStep {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(),
               attachments: Vec::new() }
    }
}

impl ProcessorDefinition for PipelineStep {
    fn step_id(&self) -> &str {
        &self.id
    }

    fn attach_marshal(mut self, format: DataFormat) -> Self {
        self.attachments.push(CodecAttachment { direction: Direction::Marshal,
                                                format });
        self
    }

    fn attach_unmarshal(mut self, format: DataFormat) -> Self {
        self.attachments.push(CodecAttachment { direction: Direction::Unmarshal,
                                                format });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_text() {
        assert_eq!("marshal".parse::<Direction>().unwrap(), Direction::Marshal);
        assert_eq!("UNMARSHAL".parse::<Direction>().unwrap(), Direction::Unmarshal);
        assert_eq!(Direction::Marshal.to_string(), "marshal");
    }

    #[test]
    fn unknown_direction_is_an_unsupported_operation() {
        let err = "transcode".parse::<Direction>().unwrap_err();
        assert_eq!(err, CoreBuilderError::UnsupportedOperation("transcode".to_string()));
        assert_eq!(err.to_string(), "unknown data format operation: transcode");
    }

    #[test]
    fn attach_appends_one_record_per_call() {
        let step = PipelineStep::new("s1").attach_marshal(route_domain::GzipFormat::default().into())
                                          .attach_marshal(route_domain::GzipFormat::default().into());
        assert_eq!(step.attachments.len(), 2, "no dedup across calls");
        assert_eq!(step.attachments[0], step.attachments[1]);
    }
}
