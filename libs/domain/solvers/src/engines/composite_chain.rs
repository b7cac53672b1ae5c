// [libs/domain/solvers/src/engines/composite_chain.rs]
/*!
 * =================================================================
 * APARATO: COMPOSITE CHAIN ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: DESCIFRADO EN DOS ETAPAS (ÚLTIMA CIFRADA PRIMERO)
 *
 * Un composite (etapa1, etapa2) se descifra invirtiendo primero la
 * etapa 2 y después la etapa 1. La explosión combinatoria se
 * controla con una piscina intermedia estrecha (top-M), un piso de
 * fitness intermedio y un objetivo de corte temprano en la etapa
 * intermedia. La profundidad está acotada a 2 por el contrato de
 * parámetros.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::text_to_indices;
use kryptarch_core_scoring::Scorer;
use kryptarch_domain_models::AttackParameters;
use tracing::debug;

use crate::budget::SolverBudget;
use crate::engines::{push_top_k, TOP_K_CANDIDATES};
use crate::errors::SolverError;
use crate::executor::dispatch_raw;
use crate::verdict::EngineOutcome;

pub const ENGINE_NAME: &str = "composite_chain";

/// Intermedios retenidos de la etapa 2.
const INTERMEDIATE_POOL: usize = 20;
/// Objetivo de corte temprano para la etapa intermedia.
const INTERMEDIATE_TARGET: f64 = 0.90;
/// Fitness mínimo de un intermedio para merecer la etapa 1.
const INTERMEDIATE_FLOOR: f64 = 0.05;

/// Ejecuta la cadena composite.
pub fn execute(
    cipher_indices: &[u8],
    first_stage: &AttackParameters,
    second_stage: &AttackParameters,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    // 1. INVERSIÓN DE LA ETAPA 2 (PISCINA INTERMEDIA)
    let (second_outcome, second_engine) =
        dispatch_raw(cipher_indices, second_stage, scorer, budget, Some(INTERMEDIATE_TARGET))?;

    let mut outcome = EngineOutcome {
        keys_explored: second_outcome.keys_explored,
        abort_reason: second_outcome.abort_reason.clone(),
        ..EngineOutcome::default()
    };

    let intermediates: Vec<(String, f64)> = second_outcome
        .scored_texts
        .into_iter()
        .filter(|(_, fitness)| *fitness >= INTERMEDIATE_FLOOR)
        .take(INTERMEDIATE_POOL)
        .collect();

    debug!(
        "⛓️ [COMPOSITE]: stage2={} produced {} intermediates.",
        second_engine,
        intermediates.len()
    );

    // 2. INVERSIÓN DE LA ETAPA 1 SOBRE CADA INTERMEDIO
    for (intermediate_text, _) in intermediates {
        if let Some(reason) = budget.interruption() {
            outcome.abort_reason.get_or_insert_with(|| reason.to_string());
            break;
        }

        let intermediate_indices = text_to_indices(&intermediate_text)?;
        match dispatch_raw(&intermediate_indices, first_stage, scorer, budget, None) {
            Ok((first_outcome, _)) => {
                outcome.keys_explored += first_outcome.keys_explored;
                for (plaintext, fitness) in first_outcome.scored_texts {
                    push_top_k(&mut outcome.scored_texts, plaintext, fitness, TOP_K_CANDIDATES);
                }
            }
            // Un intermedio insoluble no aborta la cadena completa.
            Err(stage_fault) => {
                debug!("⛓️ [COMPOSITE]: Stage1 rejected an intermediate ({stage_fault}).");
            }
        }
    }

    Ok(outcome)
}
