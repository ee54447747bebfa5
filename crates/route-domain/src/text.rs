//! Formatos orientados a texto y mensajería: texto plano con charset,
//! Base64 con layout configurable, registros syslog, mensajes clínicos HL7
//! y feeds RSS.
use serde::{Deserialize, Serialize};

/// Texto plano; `charset: None` usa el charset default de la plataforma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    pub charset: Option<String>,
}

impl TextFormat {
    pub fn with_charset(charset: &str) -> Self {
        Self { charset: Some(charset.to_string()) }
    }
}

/// Base64 con parámetros de layout. Los defaults siguen al codec MIME
/// clásico: líneas de 76 columnas separadas por CRLF, alfabeto estándar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Format {
    pub line_length: u32,
    pub line_separator: String,
    /// Alfabeto url-safe (`-`/`_` en lugar de `+`/`/`).
    pub url_safe: bool,
}

impl Base64Format {
    pub fn new(line_length: u32, line_separator: &str, url_safe: bool) -> Self {
        Self { line_length,
               line_separator: line_separator.to_string(),
               url_safe }
    }
}

impl Default for Base64Format {
    fn default() -> Self {
        Self { line_length: 76,
               line_separator: "\r\n".to_string(),
               url_safe: false }
    }
}

/// Registros syslog estructurados; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyslogFormat;

/// Mensajes clínicos HL7. `validate` activa validación estricta del parser
/// default; `parser_ref` inyecta un parser propio por referencia de registro
/// (ambos son independientes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hl7Format {
    pub validate: bool,
    pub parser_ref: Option<String>,
}

impl Hl7Format {
    pub fn validating(validate: bool) -> Self {
        Self { validate, parser_ref: None }
    }

    pub fn with_parser(parser_ref: &str) -> Self {
        Self { validate: false,
               parser_ref: Some(parser_ref.to_string()) }
    }
}

/// Feeds RSS; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssFormat;
