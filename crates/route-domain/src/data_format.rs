//! Unión cerrada sobre el catálogo de formatos.
//!
//! `DataFormat` reemplaza la jerarquía abierta de definiciones por un sum
//! type: cada variante envuelve el value object con los campos propios de
//! ese formato. Las conversiones `From<XxxFormat>` permiten despachar
//! cualquier configuración sin nombrar la variante a mano.
use serde::{Deserialize, Serialize};

use crate::binary::{AvroFormat, ProtobufFormat, SerializationFormat};
use crate::compression::{GzipFormat, ZipFileFormat, ZipFormat};
use crate::custom::CustomFormat;
use crate::json::{JsonFormat, XmlJsonFormat};
use crate::records::{BeanioFormat, BindyFormat, CsvFormat};
use crate::security::{PgpFormat, XmlSecurityFormat};
use crate::text::{Base64Format, Hl7Format, RssFormat, SyslogFormat, TextFormat};
use crate::xml::{CastorFormat, JaxbFormat, JibxFormat, SoapJaxbFormat, TidyMarkupFormat,
                 XStreamFormat, XmlBeansFormat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataFormat {
    Avro(AvroFormat),
    Base64(Base64Format),
    Beanio(BeanioFormat),
    Bindy(BindyFormat),
    Castor(CastorFormat),
    Csv(CsvFormat),
    Custom(CustomFormat),
    Gzip(GzipFormat),
    Hl7(Hl7Format),
    Jaxb(JaxbFormat),
    Jibx(JibxFormat),
    Json(JsonFormat),
    Pgp(PgpFormat),
    Protobuf(ProtobufFormat),
    Rss(RssFormat),
    Serialization(SerializationFormat),
    SoapJaxb(SoapJaxbFormat),
    Syslog(SyslogFormat),
    Text(TextFormat),
    TidyMarkup(TidyMarkupFormat),
    XmlBeans(XmlBeansFormat),
    XmlJson(XmlJsonFormat),
    XmlSecurity(XmlSecurityFormat),
    XStream(XStreamFormat),
    Zip(ZipFormat),
    ZipFile(ZipFileFormat),
}

impl DataFormat {
    /// Nombre estable (minúsculas) del formato, para logs y definiciones.
    pub fn name(&self) -> &'static str {
        match self {
            DataFormat::Avro(_) => "avro",
            DataFormat::Base64(_) => "base64",
            DataFormat::Beanio(_) => "beanio",
            DataFormat::Bindy(_) => "bindy",
            DataFormat::Castor(_) => "castor",
            DataFormat::Csv(_) => "csv",
            DataFormat::Custom(_) => "custom",
            DataFormat::Gzip(_) => "gzip",
            DataFormat::Hl7(_) => "hl7",
            DataFormat::Jaxb(_) => "jaxb",
            DataFormat::Jibx(_) => "jibx",
            DataFormat::Json(_) => "json",
            DataFormat::Pgp(_) => "pgp",
            DataFormat::Protobuf(_) => "protobuf",
            DataFormat::Rss(_) => "rss",
            DataFormat::Serialization(_) => "serialization",
            DataFormat::SoapJaxb(_) => "soap-jaxb",
            DataFormat::Syslog(_) => "syslog",
            DataFormat::Text(_) => "text",
            DataFormat::TidyMarkup(_) => "tidy-markup",
            DataFormat::XmlBeans(_) => "xmlbeans",
            DataFormat::XmlJson(_) => "xmljson",
            DataFormat::XmlSecurity(_) => "xml-security",
            DataFormat::XStream(_) => "xstream",
            DataFormat::Zip(_) => "zip",
            DataFormat::ZipFile(_) => "zip-file",
        }
    }
}

macro_rules! from_format {
    ($($variant:ident <- $ty:ty),* $(,)?) => {
        $(impl From<$ty> for DataFormat {
            fn from(value: $ty) -> Self {
                DataFormat::$variant(value)
            }
        })*
    };
}

from_format! {
    Avro <- AvroFormat,
    Base64 <- Base64Format,
    Beanio <- BeanioFormat,
    Bindy <- BindyFormat,
    Castor <- CastorFormat,
    Csv <- CsvFormat,
    Custom <- CustomFormat,
    Gzip <- GzipFormat,
    Hl7 <- Hl7Format,
    Jaxb <- JaxbFormat,
    Jibx <- JibxFormat,
    Json <- JsonFormat,
    Pgp <- PgpFormat,
    Protobuf <- ProtobufFormat,
    Rss <- RssFormat,
    Serialization <- SerializationFormat,
    SoapJaxb <- SoapJaxbFormat,
    Syslog <- SyslogFormat,
    Text <- TextFormat,
    TidyMarkup <- TidyMarkupFormat,
    XmlBeans <- XmlBeansFormat,
    XmlJson <- XmlJsonFormat,
    XmlSecurity <- XmlSecurityFormat,
    XStream <- XStreamFormat,
    Zip <- ZipFormat,
    ZipFile <- ZipFileFormat,
}
