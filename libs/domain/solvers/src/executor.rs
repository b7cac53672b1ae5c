// [libs/domain/solvers/src/executor.rs]
/*!
 * =================================================================
 * APARATO: SOLVER EXECUTOR
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: DESPACHO POLIMÓRFICO Y SELLADO DEL VEREDICTO
 *
 * El despacho casa exhaustivamente sobre la variante de familia y
 * el método sugerido; exactamente un motor atiende cada ataque.
 * Ningún fallo interno escapa: todo error de motor queda sellado en
 * el veredicto como detalle de fallo y el proceso continúa.
 * =================================================================
 */

use std::time::Instant;

use kryptarch_core_scoring::Scorer;
use kryptarch_domain_models::prelude::*;
use tracing::{info, warn};

use crate::budget::SolverBudget;
use crate::engines::{
    composite_chain, exhaustive_permutation, hill_constraint, monoalpha_annealing,
    transposition_annealing, vigenere_frequency,
};
use crate::errors::SolverError;
use crate::verdict::{EngineOutcome, SolverVerdict};

/// Despacho crudo al motor correspondiente. Devuelve el resultado del
/// motor y su nombre. `intermediate_target` habilita el corte
/// temprano cuando la invocación viene de una cadena composite.
pub(crate) fn dispatch_raw(
    cipher_indices: &[u8],
    params: &AttackParameters,
    scorer: &Scorer,
    budget: &SolverBudget,
    intermediate_target: Option<f64>,
) -> Result<(EngineOutcome, &'static str), SolverError> {
    match &params.key_spec {
        KeySpec::Vigenere {
            key_length,
            key,
            alphabet,
        } => {
            let outcome = vigenere_frequency::execute(
                cipher_indices,
                *key_length,
                key.as_deref(),
                alphabet,
                &params.crib_constraints,
                scorer,
                budget,
            )?;
            Ok((outcome, vigenere_frequency::ENGINE_NAME))
        }

        KeySpec::ColumnarTransposition {
            period,
            column_order,
        } => {
            // Orden explícito: descifrado directo por el motor exhaustivo.
            if let Some(order) = column_order {
                let outcome = exhaustive_permutation::execute(
                    cipher_indices,
                    *period,
                    Some(order.as_slice()),
                    intermediate_target,
                    scorer,
                    budget,
                )?;
                return Ok((outcome, exhaustive_permutation::ENGINE_NAME));
            }

            match &params.method_hint {
                Some(MethodHint::SimAnnealing { profile }) => {
                    let outcome = transposition_annealing::execute(
                        cipher_indices,
                        *period,
                        profile,
                        scorer,
                        budget,
                    )?;
                    Ok((outcome, transposition_annealing::ENGINE_NAME))
                }
                // Espacios factoriales pequeños: enumeración completa.
                _ if *period <= exhaustive_permutation::MAX_EXHAUSTIVE_PERIOD => {
                    let outcome = exhaustive_permutation::execute(
                        cipher_indices,
                        *period,
                        None,
                        intermediate_target,
                        scorer,
                        budget,
                    )?;
                    Ok((outcome, exhaustive_permutation::ENGINE_NAME))
                }
                // Periodo grande sin perfil declarado: recocido de referencia.
                _ => {
                    let outcome = transposition_annealing::execute(
                        cipher_indices,
                        *period,
                        &AnnealingProfile::campaign_default(),
                        scorer,
                        budget,
                    )?;
                    Ok((outcome, transposition_annealing::ENGINE_NAME))
                }
            }
        }

        KeySpec::Hill { block_size, matrix } => {
            let outcome = hill_constraint::execute(
                cipher_indices,
                *block_size,
                matrix.as_ref(),
                &params.crib_constraints,
                scorer,
                budget,
            )?;
            Ok((outcome, hill_constraint::ENGINE_NAME))
        }

        KeySpec::MonoalphaSubstitution { alphabet } => {
            let profile = match &params.method_hint {
                Some(MethodHint::SimAnnealing { profile }) => profile.clone(),
                _ => AnnealingProfile::campaign_default(),
            };
            let outcome = monoalpha_annealing::execute(
                cipher_indices,
                alphabet.as_ref(),
                &profile,
                scorer,
                budget,
            )?;
            Ok((outcome, monoalpha_annealing::ENGINE_NAME))
        }

        KeySpec::Composite {
            first_stage,
            second_stage,
        } => {
            let outcome = composite_chain::execute(
                cipher_indices,
                first_stage,
                second_stage,
                scorer,
                budget,
            )?;
            Ok((outcome, composite_chain::ENGINE_NAME))
        }
    }
}

/// Ejecutor central de ataques.
pub struct SolverExecutor;

impl SolverExecutor {
    /// Ejecuta un ataque completo y sella el veredicto.
    ///
    /// # Errors:
    /// Nunca propaga: parámetros inválidos y fallos de motor quedan
    /// registrados en `failure_detail` del veredicto.
    pub fn execute(
        ciphertext: &Ciphertext,
        params: &AttackParameters,
        scorer: &Scorer,
        budget: &SolverBudget,
    ) -> SolverVerdict {
        let ignition = Instant::now();

        let attack_fingerprint = match params.fingerprint() {
            Ok(fingerprint) => fingerprint,
            Err(fault) => {
                // Contrato roto aguas arriba; veredicto vacío trazable.
                warn!("❌ [EXECUTOR]: Fingerprint failure: {fault}");
                return SolverVerdict {
                    attack_fingerprint: Fingerprint::of(&"unfingerprintable")
                        .unwrap_or_else(|_| unreachable!("static input always serializes")),
                    solver: "none".to_string(),
                    candidates: Vec::new(),
                    keys_explored: 0,
                    duration_ms: 0,
                    abort_reason: None,
                    failure_detail: Some(fault.to_string()),
                };
            }
        };

        let dispatch_result = params
            .validate()
            .map_err(SolverError::from)
            .and_then(|_| dispatch_raw(ciphertext.as_indices(), params, scorer, budget, None));

        let (outcome, solver_name, failure_detail) = match dispatch_result {
            Ok((outcome, name)) => (outcome, name, None),
            Err(engine_fault) => {
                warn!(
                    "⚠️ [EXECUTOR]: Engine fault for {} ({engine_fault}).",
                    attack_fingerprint
                );
                (EngineOutcome::default(), "none", Some(engine_fault.to_string()))
            }
        };

        let duration_ms = ignition.elapsed().as_millis() as u64;
        let candidates: Vec<Candidate> = outcome
            .scored_texts
            .into_iter()
            .map(|(plaintext, fitness)| {
                let frequency = scorer.dictionary_fit(&plaintext);
                let linguistic = scorer.linguistic_plausibility(&plaintext);
                Candidate {
                    confidence: fitness,
                    scores: ScoreBreakdown {
                        frequency,
                        crib: 0.0,
                        linguistic,
                    },
                    provenance: Provenance {
                        attack_fingerprint: attack_fingerprint.clone(),
                        solver: solver_name.to_string(),
                        elapsed_ms: duration_ms,
                    },
                    plaintext,
                }
            })
            .collect();

        info!(
            "🏁 [ATTACK_SEALED]: {} | solver={} | explored={} | best={:.3} | {}ms",
            attack_fingerprint,
            solver_name,
            outcome.keys_explored,
            candidates.first().map(|c| c.confidence).unwrap_or(0.0),
            duration_ms
        );

        SolverVerdict {
            attack_fingerprint,
            solver: solver_name.to_string(),
            candidates,
            keys_explored: outcome.keys_explored,
            duration_ms,
            abort_reason: outcome.abort_reason,
            failure_detail,
        }
    }
}
