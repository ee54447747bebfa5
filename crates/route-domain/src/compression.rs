//! Formatos de compresión: GZIP (entrada única), deflate ZIP y archivo ZIP
//! multi-entrada.
use serde::{Deserialize, Serialize};

/// Nivel de compresión "default" del deflater subyacente (equivale a dejar
/// que el codec elija). Los niveles explícitos van de 0 (almacenar) a 9.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = -1;

/// GZIP sobre el cuerpo completo; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GzipFormat;

/// Deflate ZIP con nivel seleccionable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipFormat {
    pub compression_level: i32,
}

impl ZipFormat {
    pub fn new(compression_level: i32) -> Self {
        Self { compression_level }
    }
}

impl Default for ZipFormat {
    fn default() -> Self {
        Self { compression_level: DEFAULT_COMPRESSION_LEVEL }
    }
}

/// Archivo ZIP multi-entrada; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipFileFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_default_uses_deflater_default_level() {
        assert_eq!(ZipFormat::default().compression_level, DEFAULT_COMPRESSION_LEVEL);
        assert_eq!(ZipFormat::new(9).compression_level, 9);
    }
}
