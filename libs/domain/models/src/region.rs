// [libs/domain/models/src/region.rs]
/*!
 * =================================================================
 * APARATO: KEY-SPACE REGION CONTRACT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: CONTABILIDAD DE EXPLORACIÓN POR REGIÓN
 *
 * Los tamaños teóricos pueden exceder 64 bits (26²⁰ para claves
 * Vigenère largas); viajan como u128 en memoria y como cadena
 * decimal en JSON, porque el formato de intercambio no soporta
 * enteros de ese ancho sin pérdida.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use crate::attack::CipherFamily;

/// Serialización de u128 como cadena decimal.
mod u128_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u128>().map_err(serde::de::Error::custom)
    }
}

/// Región nombrada y contable del espacio de claves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpaceRegion {
    /// Identificador estable (p. ej. `vigenere/len-7/standard`).
    pub region_id: String,
    pub family: CipherFamily,
    /// Tamaño teórico de la región.
    #[serde(with = "u128_string")]
    pub total_size: u128,
    /// Claves distintas ya probadas. Monótono no decreciente.
    pub explored_count: u64,
    /// Intentos cuya confianza cruzó el umbral de promoción.
    pub successful_count: u64,
    /// Peso de prioridad sellado en el registro de la región.
    pub priority_weight: f64,
    /// Última actualización, RFC 3339.
    pub last_updated: String,
}

impl KeySpaceRegion {
    /// Región recién registrada, contadores en cero.
    #[must_use]
    pub fn register(region_id: String, family: CipherFamily, total_size: u128, priority_weight: f64) -> Self {
        Self {
            region_id,
            family,
            total_size,
            explored_count: 0,
            successful_count: 0,
            priority_weight,
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Fracción explorada, en [0, 1].
    #[must_use]
    pub fn coverage_ratio(&self) -> f64 {
        if self.total_size == 0 {
            return 1.0;
        }
        (self.explored_count as f64 / self.total_size as f64).clamp(0.0, 1.0)
    }

    /// Tasa de éxito sobre lo explorado.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.successful_count as f64 / (self.explored_count.max(1)) as f64
    }
}
