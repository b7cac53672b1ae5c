// [libs/domain/models/src/record.rs]
/*!
 * =================================================================
 * APARATO: ATTACK RECORD CONTRACT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: REGISTRO INMUTABLE DE CADA ATAQUE INTENTADO
 *
 * Un registro nace con su desenlace sellado y no se reescribe: el
 * libro mayor garantiza a lo sumo un registro por huella.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use crate::attack::AttackParameters;
use crate::fingerprint::Fingerprint;

/// Desenlace final de un ataque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttackOutcome {
    /// El mejor candidato superó el umbral de promoción.
    Success { plaintext: String, confidence: f64 },
    /// Búsqueda completada sin candidato promovible.
    Failure,
    /// Búsqueda interrumpida (plazo, cancelación, fallo interno).
    Aborted { reason: String },
}

impl AttackOutcome {
    /// Verdadero solo para desenlaces exitosos.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Fila del libro mayor de ataques.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Identidad única: la huella de los parámetros.
    pub id: Fingerprint,
    /// Instante de creación, RFC 3339.
    pub timestamp: String,
    pub parameters: AttackParameters,
    pub outcome: AttackOutcome,
    /// Mejor puntuación observada durante la búsqueda.
    pub score: f64,
    /// Tiempo de muro consumido.
    pub duration_ms: u64,
    /// Marcas de procedencia (p. ej. `q-hint`, `coverage-gap`, `crib:BERLIN`).
    pub tags: Vec<String>,
}

impl AttackRecord {
    /// Sella un registro nuevo con marca de tiempo actual.
    #[must_use]
    pub fn seal(
        id: Fingerprint,
        parameters: AttackParameters,
        outcome: AttackOutcome,
        score: f64,
        duration_ms: u64,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            parameters,
            outcome,
            score,
            duration_ms,
            tags,
        }
    }
}
