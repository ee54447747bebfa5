//! Formatos de registros planos: BeanIO (recurso de mapeo + stream), Bindy
//! (POJOs anotados, escaneo por paquete o clase única) y CSV.
use serde::{Deserialize, Serialize};

/// Configuración BeanIO. El recurso de mapeo y el stream son obligatorios;
/// los flags de tolerancia dejan pasar registros problemáticos sin abortar
/// el unmarshal completo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanioFormat {
    /// Recurso de mapeo (classpath/filesystem) que describe los records.
    pub mapping: String,
    /// Nombre del stream dentro del mapeo.
    pub stream_name: String,
    pub encoding: Option<String>,
    pub ignore_unidentified_records: bool,
    pub ignore_unexpected_records: bool,
    pub ignore_invalid_records: bool,
}

impl BeanioFormat {
    pub fn new(mapping: &str, stream_name: &str) -> Self {
        Self { mapping: mapping.to_string(),
               stream_name: stream_name.to_string(),
               encoding: None,
               ignore_unidentified_records: false,
               ignore_unexpected_records: false,
               ignore_invalid_records: false }
    }
}

/// Variantes de Bindy según el layout de los records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindyKind {
    Csv,
    Fixed,
    KeyValue,
}

/// Configuración Bindy: o bien una lista de paquetes a escanear por
/// anotaciones, o bien una clase modelo única.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindyFormat {
    pub kind: BindyKind,
    pub packages: Vec<String>,
    pub class_name: Option<String>,
}

impl BindyFormat {
    pub fn scanning_packages(kind: BindyKind, packages: &[&str]) -> Self {
        Self { kind,
               packages: packages.iter().map(|p| p.to_string()).collect(),
               class_name: None }
    }

    pub fn for_class(kind: BindyKind, class_name: &str) -> Self {
        Self { kind,
               packages: Vec::new(),
               class_name: Some(class_name.to_string()) }
    }
}

/// CSV delimitado. `lazy_load` habilita acceso secuencial por iterador para
/// entradas grandes en lugar de materializar todo en memoria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvFormat {
    pub lazy_load: bool,
}

impl CsvFormat {
    pub fn lazy() -> Self {
        Self { lazy_load: true }
    }
}
