//! route-domain: catálogo de configuraciones de data format.
//!
//! Cada formato soportado se describe con un value object inmutable y
//! serializable; `DataFormat` es la unión cerrada sobre todos ellos. Estos
//! tipos sólo describen cómo debe comportarse un codec — no ejecutan nada.
pub mod binary;
pub mod compression;
pub mod custom;
pub mod data_format;
pub mod json;
pub mod records;
pub mod security;
pub mod text;
pub mod xml;

pub use binary::{AvroFormat, ProtobufFormat, SerializationFormat};
pub use compression::{GzipFormat, ZipFileFormat, ZipFormat, DEFAULT_COMPRESSION_LEVEL};
pub use custom::CustomFormat;
pub use data_format::DataFormat;
pub use json::{JsonFormat, JsonLibrary, XmlJsonFormat};
pub use records::{BeanioFormat, BindyFormat, BindyKind, CsvFormat};
pub use security::{KeyStoreParameters, PgpFormat, XmlSecurityFormat};
pub use text::{Base64Format, Hl7Format, RssFormat, SyslogFormat, TextFormat};
pub use xml::{CastorFormat, JaxbFormat, JibxFormat, MarkupOutput, SoapJaxbFormat, SoapVersion,
              TidyMarkupFormat, XStreamFormat, XmlBeansFormat};
