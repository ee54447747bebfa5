//! Formatos binarios basados en esquema (Avro, Protobuf) y la serialización
//! nativa de objetos.
//!
//! El esquema puede venir como objeto JSON neutral (`serde_json::Value`),
//! como referencia a una clase generada (`instance_class_name`) o estar
//! ausente, en cuyo caso el codec downstream resuelve su default.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuración del formato Avro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvroFormat {
    /// Esquema embebido como JSON neutral; `None` delega al consumidor.
    pub schema: Option<Value>,
    /// Referencia por nombre a la clase/tipo generado.
    pub instance_class_name: Option<String>,
}

impl AvroFormat {
    pub fn with_schema(schema: Value) -> Self {
        Self { schema: Some(schema),
               instance_class_name: None }
    }

    pub fn with_instance_class(instance_class_name: &str) -> Self {
        Self { schema: None,
               instance_class_name: Some(instance_class_name.to_string()) }
    }
}

/// Configuración del formato Protobuf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtobufFormat {
    /// Referencia por nombre al mensaje generado.
    pub instance_class_name: Option<String>,
    /// Instancia default embebida como JSON neutral (no entra en validación).
    pub default_instance: Option<Value>,
}

impl ProtobufFormat {
    pub fn with_instance_class(instance_class_name: &str) -> Self {
        Self { instance_class_name: Some(instance_class_name.to_string()),
               default_instance: None }
    }

    pub fn with_default_instance(default_instance: Value) -> Self {
        Self { instance_class_name: None,
               default_instance: Some(default_instance) }
    }
}

/// Serialización nativa de objetos; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationFormat;
