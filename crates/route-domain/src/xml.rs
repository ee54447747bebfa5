//! Formatos de documentos tipados XML y grafos de objetos: JAXB, sobre SOAP
//! versionado, JiBX, XMLBeans, XStream, Castor y la conversión de HTML a
//! markup bien formado.
use serde::{Deserialize, Serialize};

/// JAXB plano: context path opcional y pretty print.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JaxbFormat {
    pub context_path: Option<String>,
    pub pretty_print: bool,
}

impl JaxbFormat {
    pub fn with_context_path(context_path: &str) -> Self {
        Self { context_path: Some(context_path.to_string()),
               pretty_print: false }
    }

    pub fn pretty(pretty_print: bool) -> Self {
        Self { context_path: None, pretty_print }
    }
}

/// Versión del envelope SOAP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoapVersion {
    #[default]
    V1_1,
    V1_2,
}

/// JAXB envuelto en envelope SOAP. La estrategia de nombres de elemento se
/// referencia por nombre de registro (la inyección de instancias vive en la
/// resolución del registry, fuera de este crate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapJaxbFormat {
    pub context_path: Option<String>,
    pub element_name_strategy_ref: Option<String>,
    pub version: SoapVersion,
}

impl SoapJaxbFormat {
    pub fn new(version: SoapVersion) -> Self {
        Self { version, ..Self::default() }
    }

    pub fn with_context_path(version: SoapVersion, context_path: &str) -> Self {
        Self { context_path: Some(context_path.to_string()),
               element_name_strategy_ref: None,
               version }
    }

    pub fn with_strategy(version: SoapVersion, context_path: &str, strategy_ref: &str) -> Self {
        Self { context_path: Some(context_path.to_string()),
               element_name_strategy_ref: Some(strategy_ref.to_string()),
               version }
    }
}

/// JiBX con clase de unmarshal opcional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JibxFormat {
    pub unmarshal_class_name: Option<String>,
}

impl JibxFormat {
    pub fn with_unmarshal_class(unmarshal_class_name: &str) -> Self {
        Self { unmarshal_class_name: Some(unmarshal_class_name.to_string()) }
    }
}

/// XMLBeans; sin parámetros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlBeansFormat;

/// XStream (grafo de objetos ↔ XML) con charset opcional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XStreamFormat {
    pub encoding: Option<String>,
}

impl XStreamFormat {
    pub fn with_encoding(encoding: &str) -> Self {
        Self { encoding: Some(encoding.to_string()) }
    }
}

/// Castor: archivo de mapeo opcional y toggle de validación.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastorFormat {
    pub mapping_file: Option<String>,
    pub validation: bool,
}

impl CastorFormat {
    pub fn with_mapping(mapping_file: &str) -> Self {
        Self { mapping_file: Some(mapping_file.to_string()),
               validation: false }
    }
}

/// Representación destino del markup bien formado producido a partir de
/// HTML sucio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupOutput {
    /// Documento DOM.
    #[default]
    Dom,
    /// Texto plano con el XML resultante.
    PlainText,
}

/// Conversión HTML → markup bien formado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyMarkupFormat {
    pub output: MarkupOutput,
}

impl TidyMarkupFormat {
    pub fn as_output(output: MarkupOutput) -> Self {
        Self { output }
    }
}
