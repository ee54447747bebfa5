//! Formatos JSON y la conversión XML ↔ JSON.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Librería concreta que materializa el codec JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonLibrary {
    #[default]
    XStream,
    Jackson,
    Gson,
}

/// Configuración JSON: librería + tipo destino opcional del unmarshal y
/// vista de serialización (sólo relevante para Jackson).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFormat {
    pub library: JsonLibrary,
    pub unmarshal_type_name: Option<String>,
    pub json_view_type_name: Option<String>,
}

impl JsonFormat {
    pub fn with_library(library: JsonLibrary) -> Self {
        Self { library, ..Self::default() }
    }
}

/// Conversión XML ↔ JSON con opciones de la librería subyacente pasadas tal
/// cual (clave → valor); el orden de inserción se conserva al serializar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlJsonFormat {
    pub options: IndexMap<String, String>,
}

impl XmlJsonFormat {
    pub fn with_options(options: IndexMap<String, String>) -> Self {
        Self { options }
    }
}
