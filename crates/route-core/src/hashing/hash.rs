//! Digest blake3 en hex sobre la forma canónica.

use serde_json::Value;

use super::to_canonical_json;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hashea un `Value` vía su JSON canónico.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
