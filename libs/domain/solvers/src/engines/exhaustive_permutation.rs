// [libs/domain/solvers/src/engines/exhaustive_permutation.rs]
/*!
 * =================================================================
 * APARATO: EXHAUSTIVE PERMUTATION ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: ENUMERACIÓN COMPLETA DE ÓRDENES DE COLUMNA (P ≤ 8)
 *
 * El espacio se parte por la primera columna leída: P ramas
 * independientes de (P−1)! permutaciones cada una, saturadas en
 * paralelo con Rayon y fusionadas en orden de rama para preservar
 * el determinismo. Sin objetivo de corte suministrado, la
 * enumeración es exacta: periodo 8 evalúa exactamente 40.320
 * órdenes; periodo 1 emite exactamente un candidato.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::indices_to_text;
use kryptarch_core_ciphers::transposition;
use kryptarch_core_scoring::Scorer;
use rayon::prelude::*;
use tracing::debug;

use crate::budget::SolverBudget;
use crate::engines::{preliminary_fitness, push_top_k, BUDGET_CHECK_INTERVAL, TOP_K_CANDIDATES};
use crate::errors::SolverError;
use crate::verdict::EngineOutcome;

pub const ENGINE_NAME: &str = "exhaustive_permutation";

/// Periodo máximo aceptado por la enumeración factorial.
pub const MAX_EXHAUSTIVE_PERIOD: usize = 8;

/// Ejecuta la búsqueda exhaustiva de orden de columnas.
///
/// `target_fitness`: objetivo de corte opcional; al superarlo la rama
/// deja de enumerar. Sin objetivo, la enumeración es completa.
pub fn execute(
    cipher_indices: &[u8],
    period: usize,
    explicit_order: Option<&[usize]>,
    target_fitness: Option<f64>,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    let mut outcome = EngineOutcome::default();

    // MODO DIRECTO: orden explícito, un solo descifrado.
    if let Some(order) = explicit_order {
        let plain = transposition::decrypt(cipher_indices, order)?;
        let plaintext = indices_to_text(&plain);
        let fitness = preliminary_fitness(scorer, &plaintext);
        outcome.scored_texts.push((plaintext, fitness));
        outcome.keys_explored = 1;
        return Ok(outcome);
    }

    if period == 0 || period > MAX_EXHAUSTIVE_PERIOD {
        return Err(SolverError::PeriodOutOfRange {
            period,
            maximum: MAX_EXHAUSTIVE_PERIOD,
        });
    }

    // FRONTERA: periodo 1 tiene exactamente un orden posible.
    if period == 1 {
        let plaintext = indices_to_text(cipher_indices);
        let fitness = preliminary_fitness(scorer, &plaintext);
        outcome.scored_texts.push((plaintext, fitness));
        outcome.keys_explored = 1;
        return Ok(outcome);
    }

    // RAMIFICACIÓN POR PRIMERA COLUMNA (P ramas de (P−1)! órdenes)
    let branch_results: Vec<(Vec<(String, f64)>, u64, Option<String>)> = (0..period)
        .into_par_iter()
        .map(|first_column| {
            let mut pool: Vec<(String, f64)> = Vec::new();
            let mut explored = 0u64;
            let mut abort_reason: Option<String> = None;

            let mut rest: Vec<usize> =
                (0..period).filter(|&column| column != first_column).collect();
            let mut order = Vec::with_capacity(period);

            for_each_permutation(&mut rest, |suffix| {
                order.clear();
                order.push(first_column);
                order.extend_from_slice(suffix);

                if let Ok(plain) = transposition::decrypt(cipher_indices, &order) {
                    let plaintext = indices_to_text(&plain);
                    let fitness = preliminary_fitness(scorer, &plaintext);
                    push_top_k(&mut pool, plaintext, fitness, TOP_K_CANDIDATES);
                    explored += 1;

                    if let Some(target) = target_fitness {
                        if fitness >= target {
                            return false;
                        }
                    }
                }
                if explored % BUDGET_CHECK_INTERVAL == 0 {
                    if let Some(reason) = budget.interruption() {
                        abort_reason = Some(reason.to_string());
                        return false;
                    }
                }
                true
            });

            (pool, explored, abort_reason)
        })
        .collect();

    // FUSIÓN DETERMINISTA EN ORDEN DE RAMA
    for (pool, explored, abort_reason) in branch_results {
        for (plaintext, fitness) in pool {
            push_top_k(&mut outcome.scored_texts, plaintext, fitness, TOP_K_CANDIDATES);
        }
        outcome.keys_explored += explored;
        if outcome.abort_reason.is_none() {
            outcome.abort_reason = abort_reason;
        }
    }

    debug!(
        "🧮 [EXHAUSTIVE]: period={} explored={} best_fitness={:.3}",
        period,
        outcome.keys_explored,
        outcome.scored_texts.first().map(|(_, f)| *f).unwrap_or(0.0)
    );
    Ok(outcome)
}

/// Algoritmo de Heap iterativo. `visit` devuelve `false` para detener
/// la enumeración; la función devuelve `true` si se agotó el espacio.
fn for_each_permutation(
    items: &mut Vec<usize>,
    mut visit: impl FnMut(&[usize]) -> bool,
) -> bool {
    let length = items.len();
    if !visit(items) {
        return false;
    }

    let mut counters = vec![0usize; length];
    let mut index = 0usize;
    while index < length {
        if counters[index] < index {
            if index % 2 == 0 {
                items.swap(0, index);
            } else {
                items.swap(counters[index], index);
            }
            if !visit(items) {
                return false;
            }
            counters[index] += 1;
            index = 0;
        } else {
            counters[index] = 0;
            index += 1;
        }
    }
    true
}
