//! Formatos de seguridad: sobre digital PGP y cifrado a nivel XML.
//!
//! Todos los parámetros criptográficos son opcionales y combinables; este
//! crate no valida algoritmos ni material de claves — eso corresponde al
//! codec que consuma la configuración.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sobre digital PGP para secretos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgpFormat {
    /// Recurso con la clave (pública para marshal, privada para unmarshal).
    pub key_file_name: String,
    /// Identidad del destinatario dentro del keyring.
    pub key_userid: String,
    pub password: Option<String>,
    /// Salida ASCII-armored en lugar de binaria.
    pub armored: bool,
    /// Incluir paquete de integridad (activo por default).
    pub integrity: bool,
}

impl PgpFormat {
    pub fn new(key_file_name: &str, key_userid: &str) -> Self {
        Self { key_file_name: key_file_name.to_string(),
               key_userid: key_userid.to_string(),
               password: None,
               armored: false,
               integrity: true }
    }
}

/// Referencia serializable a un keystore (recurso + credenciales).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoreParameters {
    pub resource: String,
    pub password: Option<String>,
    pub store_type: Option<String>,
}

/// Cifrado a nivel de documento XML. `secure_tag` vacío cifra el documento
/// completo; `secure_tag_contents` decide entre cifrar el contenido del
/// elemento o el elemento entero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlSecurityFormat {
    pub secure_tag: String,
    /// Prefijo → namespace URI para resolver el XPath de `secure_tag`.
    pub namespaces: IndexMap<String, String>,
    pub secure_tag_contents: bool,
    pub pass_phrase: Option<String>,
    pub recipient_key_alias: Option<String>,
    pub xml_cipher_algorithm: Option<String>,
    pub key_cipher_algorithm: Option<String>,
    /// Referencia por id a parámetros de keystore registrados aparte.
    pub key_or_trust_store_parameters_ref: Option<String>,
    /// Parámetros de keystore embebidos como value object.
    pub key_or_trust_store_parameters: Option<KeyStoreParameters>,
    pub key_password: Option<String>,
    pub digest_algorithm: Option<String>,
}

impl XmlSecurityFormat {
    pub fn for_tag(secure_tag: &str, secure_tag_contents: bool) -> Self {
        Self { secure_tag: secure_tag.to_string(),
               secure_tag_contents,
               ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pgp_defaults_keep_integrity_on() {
        let pgp = PgpFormat::new("keys/ring.gpg", "routing@example.org");
        assert!(!pgp.armored);
        assert!(pgp.integrity, "integrity packet must default to enabled");
        assert_eq!(pgp.password, None);
    }

    #[test]
    fn secure_tag_shorthand_leaves_crypto_params_unset() {
        let xml = XmlSecurityFormat::for_tag("//order/cc", true);
        assert_eq!(xml.secure_tag, "//order/cc");
        assert!(xml.secure_tag_contents);
        assert_eq!(xml.pass_phrase, None);
        assert_eq!(xml.xml_cipher_algorithm, None);
        assert!(xml.namespaces.is_empty());
    }
}
