//! Clause de selección de data format.
//!
//! `DataFormatClause` captura un handle de paso y una dirección fija en
//! construcción, y expone un método fábrica por familia de formato. Cada
//! llamada construye la configuración con los argumentos recibidos (los
//! omitidos conservan los defaults documentados en `route-domain`), hace
//! exactamente un registro sobre el paso según la dirección y devuelve el
//! handle para seguir encadenando. La clause no mantiene estado entre
//! llamadas ni valida campos cruzados.

use indexmap::IndexMap;
use serde_json::Value;

use route_domain::{AvroFormat, Base64Format, BeanioFormat, BindyFormat, BindyKind, CastorFormat,
                   CsvFormat, CustomFormat, DataFormat, GzipFormat, Hl7Format, JaxbFormat,
                   JibxFormat, JsonFormat, JsonLibrary, MarkupOutput, PgpFormat, ProtobufFormat,
                   RssFormat, SerializationFormat, SoapJaxbFormat, SoapVersion, SyslogFormat,
                   TextFormat, TidyMarkupFormat, XStreamFormat, XmlBeansFormat, XmlJsonFormat,
                   XmlSecurityFormat, ZipFileFormat, ZipFormat};

use crate::model::{Direction, ProcessorDefinition};

/// Builder de un solo uso para colgar un codec de un paso.
pub struct DataFormatClause<T: ProcessorDefinition> {
    step: T,
    direction: Direction,
}

impl<T: ProcessorDefinition> DataFormatClause<T> {
    pub fn new(step: T, direction: Direction) -> Self {
        Self { step, direction }
    }

    /// Registro único: la dirección es un enum cerrado, así que el match es
    /// exhaustivo y no existe rama de error.
    fn dispatch(self, format: DataFormat) -> T {
        log::debug!("attaching {} data format ({}) to step '{}'",
                    format.name(),
                    self.direction,
                    self.step.step_id());
        match self.direction {
            Direction::Marshal => self.step.attach_marshal(format),
            Direction::Unmarshal => self.step.attach_unmarshal(format),
        }
    }

    /// Despacha una configuración ya construida (escape genérico).
    pub fn data_format(self, format: impl Into<DataFormat>) -> T {
        self.dispatch(format.into())
    }

    /// Formato Avro con esquema default.
    pub fn avro(self) -> T {
        self.dispatch(AvroFormat::default().into())
    }

    /// Avro con esquema embebido como JSON neutral.
    pub fn avro_schema(self, schema: Value) -> T {
        self.dispatch(AvroFormat::with_schema(schema).into())
    }

    /// Avro con referencia a la clase generada.
    pub fn avro_class(self, instance_class_name: &str) -> T {
        self.dispatch(AvroFormat::with_instance_class(instance_class_name).into())
    }

    /// Base64 con layout MIME default (76/"\r\n", alfabeto estándar).
    pub fn base64(self) -> T {
        self.dispatch(Base64Format::default().into())
    }

    /// Base64 con layout explícito.
    pub fn base64_with(self, line_length: u32, line_separator: &str, url_safe: bool) -> T {
        self.dispatch(Base64Format::new(line_length, line_separator, url_safe).into())
    }

    /// BeanIO sobre un recurso de mapeo y stream.
    pub fn beanio(self, mapping: &str, stream_name: &str) -> T {
        self.dispatch(BeanioFormat::new(mapping, stream_name).into())
    }

    /// BeanIO con encoding explícito.
    pub fn beanio_encoding(self, mapping: &str, stream_name: &str, encoding: &str) -> T {
        let mut fmt = BeanioFormat::new(mapping, stream_name);
        fmt.encoding = Some(encoding.to_string());
        self.dispatch(fmt.into())
    }

    /// BeanIO tolerante: flags para ignorar records problemáticos.
    pub fn beanio_lenient(self,
                          mapping: &str,
                          stream_name: &str,
                          encoding: &str,
                          ignore_unidentified_records: bool,
                          ignore_unexpected_records: bool,
                          ignore_invalid_records: bool)
                          -> T {
        let mut fmt = BeanioFormat::new(mapping, stream_name);
        fmt.encoding = Some(encoding.to_string());
        fmt.ignore_unidentified_records = ignore_unidentified_records;
        fmt.ignore_unexpected_records = ignore_unexpected_records;
        fmt.ignore_invalid_records = ignore_invalid_records;
        self.dispatch(fmt.into())
    }

    /// Bindy escaneando paquetes por POJOs anotados.
    pub fn bindy(self, kind: BindyKind, packages: &[&str]) -> T {
        self.dispatch(BindyFormat::scanning_packages(kind, packages).into())
    }

    /// Bindy sobre una clase modelo única.
    pub fn bindy_class(self, kind: BindyKind, class_name: &str) -> T {
        self.dispatch(BindyFormat::for_class(kind, class_name).into())
    }

    /// Castor con mapeo default.
    pub fn castor(self) -> T {
        self.dispatch(CastorFormat::default().into())
    }

    /// Castor con archivo de mapeo.
    pub fn castor_mapping(self, mapping_file: &str) -> T {
        self.dispatch(CastorFormat::with_mapping(mapping_file).into())
    }

    /// Castor con mapeo y toggle de validación.
    pub fn castor_validating(self, mapping_file: &str, validation: bool) -> T {
        let mut fmt = CastorFormat::with_mapping(mapping_file);
        fmt.validation = validation;
        self.dispatch(fmt.into())
    }

    /// CSV materializado en memoria.
    pub fn csv(self) -> T {
        self.dispatch(CsvFormat::default().into())
    }

    /// CSV con acceso secuencial por iterador (archivos grandes).
    pub fn csv_lazy_load(self) -> T {
        self.dispatch(CsvFormat::lazy().into())
    }

    /// Formato custom resuelto por referencia de registro.
    pub fn custom(self, format_ref: &str) -> T {
        self.dispatch(CustomFormat::new(format_ref).into())
    }

    /// GZIP sobre el cuerpo completo.
    pub fn gzip(self) -> T {
        self.dispatch(GzipFormat::default().into())
    }

    /// HL7 con parser y validación default.
    pub fn hl7(self) -> T {
        self.dispatch(Hl7Format::default().into())
    }

    /// HL7 con validación estricta configurable.
    pub fn hl7_validating(self, validate: bool) -> T {
        self.dispatch(Hl7Format::validating(validate).into())
    }

    /// HL7 con parser propio por referencia.
    pub fn hl7_parser(self, parser_ref: &str) -> T {
        self.dispatch(Hl7Format::with_parser(parser_ref).into())
    }

    /// JAXB plano.
    pub fn jaxb(self) -> T {
        self.dispatch(JaxbFormat::default().into())
    }

    /// JAXB con context path.
    pub fn jaxb_context(self, context_path: &str) -> T {
        self.dispatch(JaxbFormat::with_context_path(context_path).into())
    }

    /// JAXB con pretty print on/off.
    pub fn jaxb_pretty(self, pretty_print: bool) -> T {
        self.dispatch(JaxbFormat::pretty(pretty_print).into())
    }

    /// JiBX.
    pub fn jibx(self) -> T {
        self.dispatch(JibxFormat::default().into())
    }

    /// JiBX con clase de unmarshal.
    pub fn jibx_class(self, unmarshal_class_name: &str) -> T {
        self.dispatch(JibxFormat::with_unmarshal_class(unmarshal_class_name).into())
    }

    /// JSON con la librería default (XStream).
    pub fn json(self) -> T {
        self.dispatch(JsonFormat::default().into())
    }

    /// JSON con librería explícita.
    pub fn json_library(self, library: JsonLibrary) -> T {
        self.dispatch(JsonFormat::with_library(library).into())
    }

    /// JSON con tipo destino del unmarshal.
    pub fn json_unmarshal(self, library: JsonLibrary, unmarshal_type_name: &str) -> T {
        let mut fmt = JsonFormat::with_library(library);
        fmt.unmarshal_type_name = Some(unmarshal_type_name.to_string());
        self.dispatch(fmt.into())
    }

    /// JSON Jackson con tipo destino y vista de serialización.
    pub fn json_view(self, unmarshal_type_name: &str, json_view_type_name: &str) -> T {
        let mut fmt = JsonFormat::with_library(JsonLibrary::Jackson);
        fmt.unmarshal_type_name = Some(unmarshal_type_name.to_string());
        fmt.json_view_type_name = Some(json_view_type_name.to_string());
        self.dispatch(fmt.into())
    }

    /// Sobre PGP con clave y destinatario.
    pub fn pgp(self, key_file_name: &str, key_userid: &str) -> T {
        self.dispatch(PgpFormat::new(key_file_name, key_userid).into())
    }

    /// PGP con passphrase.
    pub fn pgp_password(self, key_file_name: &str, key_userid: &str, password: &str) -> T {
        let mut fmt = PgpFormat::new(key_file_name, key_userid);
        fmt.password = Some(password.to_string());
        self.dispatch(fmt.into())
    }

    /// PGP con passphrase, armor e integridad explícitos.
    pub fn pgp_armored(self,
                       key_file_name: &str,
                       key_userid: &str,
                       password: &str,
                       armored: bool,
                       integrity: bool)
                       -> T {
        let mut fmt = PgpFormat::new(key_file_name, key_userid);
        fmt.password = Some(password.to_string());
        fmt.armored = armored;
        fmt.integrity = integrity;
        self.dispatch(fmt.into())
    }

    /// Protobuf con mensaje default.
    pub fn protobuf(self) -> T {
        self.dispatch(ProtobufFormat::default().into())
    }

    /// Protobuf con referencia a la clase del mensaje.
    pub fn protobuf_class(self, instance_class_name: &str) -> T {
        self.dispatch(ProtobufFormat::with_instance_class(instance_class_name).into())
    }

    /// Protobuf con instancia default embebida.
    pub fn protobuf_instance(self, default_instance: Value) -> T {
        self.dispatch(ProtobufFormat::with_default_instance(default_instance).into())
    }

    /// Feeds RSS.
    pub fn rss(self) -> T {
        self.dispatch(RssFormat::default().into())
    }

    /// Serialización nativa de objetos.
    pub fn serialization(self) -> T {
        self.dispatch(SerializationFormat::default().into())
    }

    /// JAXB sobre SOAP 1.1.
    pub fn soap_jaxb(self) -> T {
        self.dispatch(SoapJaxbFormat::new(SoapVersion::V1_1).into())
    }

    /// SOAP 1.1 con context path.
    pub fn soap_jaxb_context(self, context_path: &str) -> T {
        self.dispatch(SoapJaxbFormat::with_context_path(SoapVersion::V1_1, context_path).into())
    }

    /// SOAP 1.1 con estrategia de nombres por referencia.
    pub fn soap_jaxb_strategy(self, context_path: &str, element_name_strategy_ref: &str) -> T {
        self.dispatch(SoapJaxbFormat::with_strategy(SoapVersion::V1_1,
                                                    context_path,
                                                    element_name_strategy_ref).into())
    }

    /// JAXB sobre SOAP 1.2.
    pub fn soap_jaxb12(self) -> T {
        self.dispatch(SoapJaxbFormat::new(SoapVersion::V1_2).into())
    }

    /// SOAP 1.2 con context path.
    pub fn soap_jaxb12_context(self, context_path: &str) -> T {
        self.dispatch(SoapJaxbFormat::with_context_path(SoapVersion::V1_2, context_path).into())
    }

    /// SOAP 1.2 con estrategia de nombres por referencia.
    pub fn soap_jaxb12_strategy(self, context_path: &str, element_name_strategy_ref: &str) -> T {
        self.dispatch(SoapJaxbFormat::with_strategy(SoapVersion::V1_2,
                                                    context_path,
                                                    element_name_strategy_ref).into())
    }

    /// Texto plano con charset default.
    pub fn string(self) -> T {
        self.dispatch(TextFormat::default().into())
    }

    /// Texto plano con charset explícito.
    pub fn string_charset(self, charset: &str) -> T {
        self.dispatch(TextFormat::with_charset(charset).into())
    }

    /// Registros syslog.
    pub fn syslog(self) -> T {
        self.dispatch(SyslogFormat::default().into())
    }

    /// HTML → markup bien formado como documento DOM.
    pub fn tidy_markup(self) -> T {
        self.dispatch(TidyMarkupFormat::default().into())
    }

    /// HTML → markup bien formado con representación destino explícita.
    pub fn tidy_markup_as(self, output: MarkupOutput) -> T {
        self.dispatch(TidyMarkupFormat::as_output(output).into())
    }

    /// XMLBeans.
    pub fn xml_beans(self) -> T {
        self.dispatch(XmlBeansFormat::default().into())
    }

    /// XML ↔ JSON con opciones default.
    pub fn xml_json(self) -> T {
        self.dispatch(XmlJsonFormat::default().into())
    }

    /// XML ↔ JSON con opciones de la librería subyacente.
    pub fn xml_json_options(self, options: IndexMap<String, String>) -> T {
        self.dispatch(XmlJsonFormat::with_options(options).into())
    }

    /// Cifrado XML del documento completo con parámetros default.
    pub fn secure_xml(self) -> T {
        self.dispatch(XmlSecurityFormat::default().into())
    }

    /// Cifrado XML de un tag (contenido o elemento entero).
    pub fn secure_xml_tag(self, secure_tag: &str, secure_tag_contents: bool) -> T {
        self.dispatch(XmlSecurityFormat::for_tag(secure_tag, secure_tag_contents).into())
    }

    /// Cifrado XML con namespaces para resolver el XPath del tag.
    pub fn secure_xml_namespaces(self,
                                 secure_tag: &str,
                                 namespaces: IndexMap<String, String>,
                                 secure_tag_contents: bool)
                                 -> T {
        let mut fmt = XmlSecurityFormat::for_tag(secure_tag, secure_tag_contents);
        fmt.namespaces = namespaces;
        self.dispatch(fmt.into())
    }

    /// Cifrado XML simétrico con passphrase.
    pub fn secure_xml_passphrase(self,
                                 secure_tag: &str,
                                 secure_tag_contents: bool,
                                 pass_phrase: &str)
                                 -> T {
        let mut fmt = XmlSecurityFormat::for_tag(secure_tag, secure_tag_contents);
        fmt.pass_phrase = Some(pass_phrase.to_string());
        self.dispatch(fmt.into())
    }

    /// Cifrado XML con la configuración completa (todos los parámetros
    /// opcionales de clave/keystore/digest son combinables).
    pub fn secure_xml_with(self, format: XmlSecurityFormat) -> T {
        self.dispatch(format.into())
    }

    /// Variante legacy con alias de clave del destinatario, conservada por
    /// compatibilidad.
    #[deprecated(note = "superseded by secure_xml_with, which also carries keystore parameters")]
    pub fn secure_xml_key_alias(self,
                                secure_tag: &str,
                                secure_tag_contents: bool,
                                recipient_key_alias: &str,
                                xml_cipher_algorithm: &str,
                                key_cipher_algorithm: &str)
                                -> T {
        let mut fmt = XmlSecurityFormat::for_tag(secure_tag, secure_tag_contents);
        fmt.recipient_key_alias = Some(recipient_key_alias.to_string());
        fmt.xml_cipher_algorithm = Some(xml_cipher_algorithm.to_string());
        fmt.key_cipher_algorithm = Some(key_cipher_algorithm.to_string());
        self.dispatch(fmt.into())
    }

    /// XStream con charset default.
    pub fn xstream(self) -> T {
        self.dispatch(XStreamFormat::default().into())
    }

    /// XStream con charset explícito.
    pub fn xstream_encoding(self, encoding: &str) -> T {
        self.dispatch(XStreamFormat::with_encoding(encoding).into())
    }

    /// Deflate ZIP con nivel default.
    pub fn zip(self) -> T {
        self.dispatch(ZipFormat::default().into())
    }

    /// Deflate ZIP con nivel explícito (0–9).
    pub fn zip_level(self, compression_level: i32) -> T {
        self.dispatch(ZipFormat::new(compression_level).into())
    }

    /// Archivo ZIP multi-entrada.
    pub fn zip_file(self) -> T {
        self.dispatch(ZipFileFormat::default().into())
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use route_domain::{BindyKind, DataFormat, JsonLibrary, XmlSecurityFormat,
                       DEFAULT_COMPRESSION_LEVEL};

    use crate::model::{Direction, PipelineStep, ProcessorDefinition};

    use super::DataFormatClause;

    fn marshal_clause() -> DataFormatClause<PipelineStep> {
        DataFormatClause::new(PipelineStep::new("codec"), Direction::Marshal)
    }

    fn single_attachment(step: &PipelineStep) -> &crate::model::CodecAttachment {
        assert_eq!(step.attachments.len(), 1, "exactly one attach per factory call");
        &step.attachments[0]
    }

    #[test]
    fn gzip_marshals_with_default_configuration() {
        let step = marshal_clause().gzip();
        let att = single_attachment(&step);
        assert_eq!(att.direction, Direction::Marshal);
        assert!(matches!(att.format, DataFormat::Gzip(_)));
    }

    #[test]
    fn zip_level_carries_the_explicit_level() {
        let step = marshal_clause().zip_level(9);
        match &single_attachment(&step).format {
            DataFormat::Zip(zip) => assert_eq!(zip.compression_level, 9),
            other => panic!("expected zip, got {}", other.name()),
        }
    }

    #[test]
    fn zip_default_uses_standard_level() {
        let step = marshal_clause().zip();
        match &single_attachment(&step).format {
            DataFormat::Zip(zip) => assert_eq!(zip.compression_level, DEFAULT_COMPRESSION_LEVEL),
            other => panic!("expected zip, got {}", other.name()),
        }
    }

    #[test]
    fn base64_with_sets_all_layout_fields() {
        let step = marshal_clause().base64_with(76, "\n", true);
        match &single_attachment(&step).format {
            DataFormat::Base64(b64) => {
                assert_eq!(b64.line_length, 76);
                assert_eq!(b64.line_separator, "\n");
                assert!(b64.url_safe);
            }
            other => panic!("expected base64, got {}", other.name()),
        }
    }

    #[test]
    fn bindy_records_kind_and_packages() {
        let step = PipelineStep::new("codec").unmarshal()
                                            .bindy(BindyKind::Csv, &["com.example.model"]);
        let att = single_attachment(&step);
        assert_eq!(att.direction, Direction::Unmarshal);
        match &att.format {
            DataFormat::Bindy(bindy) => {
                assert_eq!(bindy.kind, BindyKind::Csv);
                assert_eq!(bindy.packages, vec!["com.example.model".to_string()]);
                assert_eq!(bindy.class_name, None);
            }
            other => panic!("expected bindy, got {}", other.name()),
        }
    }

    #[test]
    fn marshal_clause_never_attaches_unmarshal() {
        // Varias familias de formato sobre la misma dirección fija.
        let step = PipelineStep::new("codec").marshal()
                                            .json_library(JsonLibrary::Jackson)
                                            .marshal()
                                            .csv_lazy_load()
                                            .marshal()
                                            .string_charset("UTF-8")
                                            .marshal()
                                            .soap_jaxb12_context("com.example.ws");
        assert_eq!(step.attachments.len(), 4);
        assert!(step.attachments.iter().all(|a| a.direction == Direction::Marshal));
    }

    #[test]
    fn unmarshal_clause_never_attaches_marshal() {
        let step = PipelineStep::new("codec").unmarshal()
                                            .hl7_validating(true)
                                            .unmarshal()
                                            .custom("myFormat");
        assert!(step.attachments.iter().all(|a| a.direction == Direction::Unmarshal));
    }

    #[test]
    fn identical_calls_produce_equal_but_independent_records() {
        let step = marshal_clause().avro_class("com.example.Record")
                                   .marshal()
                                   .avro_class("com.example.Record");
        assert_eq!(step.attachments.len(), 2);
        assert_eq!(step.attachments[0], step.attachments[1]);
    }

    #[test]
    fn optional_parameters_keep_documented_defaults() {
        let step = marshal_clause().string()
                                   .marshal()
                                   .castor()
                                   .marshal()
                                   .hl7()
                                   .marshal()
                                   .json();
        match &step.attachments[0].format {
            DataFormat::Text(text) => assert_eq!(text.charset, None),
            other => panic!("expected text, got {}", other.name()),
        }
        match &step.attachments[1].format {
            DataFormat::Castor(castor) => {
                assert_eq!(castor.mapping_file, None);
                assert!(!castor.validation);
            }
            other => panic!("expected castor, got {}", other.name()),
        }
        match &step.attachments[2].format {
            DataFormat::Hl7(hl7) => assert!(!hl7.validate),
            other => panic!("expected hl7, got {}", other.name()),
        }
        match &step.attachments[3].format {
            DataFormat::Json(json) => assert_eq!(json.library, JsonLibrary::XStream),
            other => panic!("expected json, got {}", other.name()),
        }
    }

    #[test]
    fn secure_xml_namespaces_are_preserved_in_order() {
        let mut ns = IndexMap::new();
        ns.insert("ord".to_string(), "http://example.org/order".to_string());
        ns.insert("cc".to_string(), "http://example.org/cc".to_string());
        let step = marshal_clause().secure_xml_namespaces("//ord:cc", ns.clone(), true);
        match &single_attachment(&step).format {
            DataFormat::XmlSecurity(xml) => {
                assert_eq!(xml.namespaces, ns);
                assert_eq!(xml.secure_tag, "//ord:cc");
                assert!(xml.secure_tag_contents);
            }
            other => panic!("expected xml-security, got {}", other.name()),
        }
    }

    #[test]
    #[allow(deprecated)]
    fn legacy_key_alias_path_matches_the_full_parameter_path() {
        let legacy = marshal_clause().secure_xml_key_alias("//cc", true, "recipient",
                                                           "aes-256-cbc", "rsa-oaep");
        let mut full = XmlSecurityFormat::for_tag("//cc", true);
        full.recipient_key_alias = Some("recipient".to_string());
        full.xml_cipher_algorithm = Some("aes-256-cbc".to_string());
        full.key_cipher_algorithm = Some("rsa-oaep".to_string());
        let current = marshal_clause().secure_xml_with(full);
        assert_eq!(single_attachment(&legacy).format, single_attachment(&current).format);
    }

    #[test]
    fn data_format_dispatches_prebuilt_configurations() {
        let step = marshal_clause().data_format(route_domain::ZipFormat::new(3));
        assert!(matches!(&single_attachment(&step).format,
                         DataFormat::Zip(z) if z.compression_level == 3));
    }
}
