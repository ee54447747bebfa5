//! Escape hatch: formato custom resuelto por referencia de registro.
use serde::{Deserialize, Serialize};

/// Formato fuera del catálogo built-in, identificado por el nombre bajo el
/// cual está registrado en el sistema que consuma la definición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFormat {
    pub format_ref: String,
}

impl CustomFormat {
    pub fn new(format_ref: &str) -> Self {
        Self { format_ref: format_ref.to_string() }
    }
}
