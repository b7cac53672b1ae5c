// [libs/domain/solvers/src/verdict.rs]
/*!
 * APARATO: SOLVER VERDICT
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: RESULTADO SELLADO E INMUTABLE DE UN ATAQUE
 *
 * El veredicto es el único canal de salida de un motor: candidatos
 * en orden descendente de confianza, volumen explorado y motivo de
 * interrupción si el presupuesto venció.
 */

use kryptarch_domain_models::{Candidate, Fingerprint};
use serde::Serialize;

/// Resultado crudo de un motor antes del sellado de procedencia.
#[derive(Debug, Default)]
pub struct EngineOutcome {
    /// (texto plano, fitness preliminar), sin orden garantizado.
    pub scored_texts: Vec<(String, f64)>,
    /// Claves distintas evaluadas.
    pub keys_explored: u64,
    /// Motivo de interrupción (`timeout` / `cancelled`), si la hubo.
    pub abort_reason: Option<String>,
}

/// Veredicto final de la ejecución de un ataque.
#[derive(Debug, Clone, Serialize)]
pub struct SolverVerdict {
    /// Huella del ataque ejecutado.
    pub attack_fingerprint: Fingerprint,
    /// Motor que produjo el veredicto.
    pub solver: String,
    /// Candidatos en orden descendente de confianza.
    pub candidates: Vec<Candidate>,
    /// Claves distintas evaluadas.
    pub keys_explored: u64,
    /// Tiempo de muro consumido.
    pub duration_ms: u64,
    /// Motivo de interrupción, si la hubo.
    pub abort_reason: Option<String>,
    /// Detalle de fallo interno de motor (el ataque cuenta como fallido).
    pub failure_detail: Option<String>,
}

impl SolverVerdict {
    /// Mejor confianza observada; 0.0 sin candidatos.
    #[must_use]
    pub fn best_confidence(&self) -> f64 {
        self.candidates
            .first()
            .map(|candidate| candidate.confidence)
            .unwrap_or(0.0)
    }
}
