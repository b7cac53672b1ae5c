// [libs/domain/models/src/fingerprint.rs]
/*!
 * =================================================================
 * APARATO: CANONICAL FINGERPRINT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: IDENTIDAD DE CONTENIDO DE 128 BITS POR ATAQUE
 *
 * Serialización canónica: objetos con claves ordenadas, números
 * enteros normalizados (10.0 y 10 producen los mismos bytes),
 * estructuras anidadas estables. La huella es el prefijo de 128
 * bits del SHA-256 de esos bytes, como hex minúscula de 32
 * caracteres. Dos parámetros son equivalentes sii sus huellas
 * coinciden.
 * =================================================================
 */

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::ModelError;

/// Huella hexadecimal de 32 caracteres (128 bits de SHA-256).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Huella canónica de cualquier contrato serializable.
    pub fn of<T: Serialize>(value: &T) -> Result<Self, ModelError> {
        let tree = serde_json::to_value(value)?;
        let mut canonical = String::with_capacity(256);
        write_canonical(&tree, &mut canonical);

        let digest = Sha256::digest(canonical.as_bytes());
        Ok(Self(hex::encode(&digest[..16])))
    }

    /// Vista hexadecimal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mezcla determinista para sembrar los RNG por ataque: los
    /// primeros 64 bits de la huella.
    #[must_use]
    pub fn seed_component(&self) -> u64 {
        u64::from_str_radix(&self.0[..16], 16).unwrap_or(0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Emite la forma canónica de un árbol JSON.
fn write_canonical(value: &serde_json::Value, output: &mut String) {
    match value {
        serde_json::Value::Null => output.push_str("null"),
        serde_json::Value::Bool(flag) => {
            output.push_str(if *flag { "true" } else { "false" })
        }
        serde_json::Value::Number(number) => write_canonical_number(number, output),
        serde_json::Value::String(text) => {
            // Reutilizamos el escapado JSON estándar del serializador.
            output.push_str(&serde_json::Value::String(text.clone()).to_string());
        }
        serde_json::Value::Array(items) => {
            output.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    output.push(',');
                }
                write_canonical(item, output);
            }
            output.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            output.push('{');
            for (index, key) in keys.iter().enumerate() {
                if index > 0 {
                    output.push(',');
                }
                output.push_str(&serde_json::Value::String((*key).clone()).to_string());
                output.push(':');
                write_canonical(&map[key.as_str()], output);
            }
            output.push('}');
        }
    }
}

/// Normalización numérica: todo valor integral se emite como entero,
/// de modo que tipos cosméticos (10 vs 10.0) no bifurquen la huella.
fn write_canonical_number(number: &serde_json::Number, output: &mut String) {
    if let Some(integer) = number.as_i64() {
        output.push_str(&integer.to_string());
        return;
    }
    if let Some(unsigned) = number.as_u64() {
        output.push_str(&unsigned.to_string());
        return;
    }
    let float = number.as_f64().unwrap_or(0.0);
    if !float.is_finite() {
        output.push('0');
        return;
    }
    if float.fract() == 0.0 && float.abs() < 9.0e18 {
        output.push_str(&(float as i64).to_string());
        return;
    }
    output.push_str(&format!("{float}"));
}
