// [libs/domain/models/src/candidate.rs]
/*!
 * APARATO: CANDIDATE CONTRACT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: TEXTO PLANO CANDIDATO CON PUNTUACIÓN Y PROCEDENCIA
 *
 * Los candidatos son transitorios hasta cruzar el umbral de
 * persistencia; entonces viajan al almacén durable junto con la
 * referencia a su registro de origen.
 */

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;

/// Sub-puntuaciones retenidas junto a la confianza final.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Ajuste de frecuencia (dictionary fit).
    pub frequency: f64,
    /// Evidencia de cribs / diccionario.
    pub crib: f64,
    /// Plausibilidad lingüística.
    pub linguistic: f64,
}

/// Procedencia completa del candidato.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Huella del ataque que lo produjo.
    pub attack_fingerprint: Fingerprint,
    /// Motor que lo emitió.
    pub solver: String,
    /// Tiempo de muro del ataque.
    pub elapsed_ms: u64,
}

/// Texto plano recuperado con confianza acotada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub plaintext: String,
    /// Confianza global en [0, 1].
    pub confidence: f64,
    pub scores: ScoreBreakdown,
    pub provenance: Provenance,
}

impl Candidate {
    /// Ordena de mayor a menor confianza, con desempate estable por
    /// texto plano para mantener determinismo entre ejecuciones.
    pub fn sort_by_confidence(candidates: &mut [Candidate]) {
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.plaintext.cmp(&b.plaintext))
        });
    }
}
