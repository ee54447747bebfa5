//! Errores del core (un solo kind por ahora).
//!
//! La taxonomía es deliberadamente mínima: la dirección es un enum cerrado,
//! así que el único punto donde puede aparecer una operación desconocida es
//! el parsing desde texto. La validación de parámetros de formato queda en
//! el consumidor de la definición.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreBuilderError {
    #[error("unknown data format operation: {0}")] UnsupportedOperation(String),
}
