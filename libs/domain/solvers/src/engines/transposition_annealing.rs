// [libs/domain/solvers/src/engines/transposition_annealing.rs]
/*!
 * =================================================================
 * APARATO: TRANSPOSITION ANNEALING ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: RECOCIDO SIMULADO SOBRE ÓRDENES DE COLUMNA (P > 8)
 *
 * # Mathematical Proof (Aceptación):
 * Con fitness "mayor es mejor", un empeoramiento Δ < 0 se acepta
 * con probabilidad exp(Δ/T); T decrece según el programa (lineal
 * T₀·(1−t/N) o geométrico T·factor por paso, ambos soportados y
 * seleccionados por parámetro). El retorno es el mejor estado
 * jamás visto, no el estado terminal.
 *
 * Los reinicios independientes corren en paralelo con semillas
 * derivadas deterministas: la terna (texto, parámetros, semilla)
 * produce el mismo veredicto en cualquier planificación.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::indices_to_text;
use kryptarch_core_ciphers::transposition;
use kryptarch_core_scoring::Scorer;
use kryptarch_domain_models::{AnnealingProfile, CoolingSchedule};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::budget::SolverBudget;
use crate::engines::{preliminary_fitness, push_top_k, BUDGET_CHECK_INTERVAL, TOP_K_CANDIDATES};
use crate::errors::SolverError;
use crate::verdict::EngineOutcome;

pub const ENGINE_NAME: &str = "transposition_annealing";

/// Periodo máximo tratable por recocido.
pub const MAX_ANNEALING_PERIOD: usize = 20;

/// Mezclador de semilla por reinicio (constante de dispersión áurea).
const RESTART_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Ejecuta el recocido de orden de columnas para un periodo fijo.
pub fn execute(
    cipher_indices: &[u8],
    period: usize,
    profile: &AnnealingProfile,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    if period < 2 || period > MAX_ANNEALING_PERIOD {
        return Err(SolverError::PeriodOutOfRange {
            period,
            maximum: MAX_ANNEALING_PERIOD,
        });
    }

    let restarts = profile.restarts.max(1);
    let restart_results: Vec<(Option<(String, f64)>, u64, Option<String>)> = (0..restarts)
        .into_par_iter()
        .map(|restart_index| {
            let seed = budget
                .rng_seed
                .wrapping_add((restart_index as u64 + 1).wrapping_mul(RESTART_SEED_MIX));
            anneal_single_restart(cipher_indices, period, profile, scorer, budget, seed)
        })
        .collect();

    let mut outcome = EngineOutcome::default();
    for (best, iterations, abort_reason) in restart_results {
        if let Some((plaintext, fitness)) = best {
            push_top_k(&mut outcome.scored_texts, plaintext, fitness, TOP_K_CANDIDATES);
        }
        outcome.keys_explored += iterations;
        if outcome.abort_reason.is_none() {
            outcome.abort_reason = abort_reason;
        }
    }

    debug!(
        "🔥 [ANNEALING]: period={} restarts={} iterations={} best_fitness={:.3}",
        period,
        restarts,
        outcome.keys_explored,
        outcome.scored_texts.first().map(|(_, f)| *f).unwrap_or(0.0)
    );
    Ok(outcome)
}

/// Un reinicio completo: estado inicial aleatorio, recocido, mejor
/// estado jamás visto.
fn anneal_single_restart(
    cipher_indices: &[u8],
    period: usize,
    profile: &AnnealingProfile,
    scorer: &Scorer,
    budget: &SolverBudget,
    seed: u64,
) -> (Option<(String, f64)>, u64, Option<String>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current_order: Vec<usize> = (0..period).collect();
    current_order.shuffle(&mut rng);

    let fitness_of = |order: &[usize]| -> f64 {
        match transposition::decrypt(cipher_indices, order) {
            Ok(plain) => preliminary_fitness(scorer, &indices_to_text(&plain)),
            Err(_) => 0.0,
        }
    };

    let mut current_fitness = fitness_of(&current_order);
    let mut best_order = current_order.clone();
    let mut best_fitness = current_fitness;

    let total_iterations = profile.iterations.max(1);
    let mut temperature = profile.initial_temperature.max(f64::MIN_POSITIVE);
    let mut abort_reason: Option<String> = None;
    let mut completed = 0u64;

    for step in 0..total_iterations {
        if step % BUDGET_CHECK_INTERVAL == 0 {
            if let Some(reason) = budget.interruption() {
                abort_reason = Some(reason.to_string());
                break;
            }
        }

        // Vecino: intercambio de dos posiciones uniformes distintas.
        let first = rng.gen_range(0..period);
        let second = (first + 1 + rng.gen_range(0..period - 1)) % period;
        current_order.swap(first, second);

        let candidate_fitness = fitness_of(&current_order);
        let delta = candidate_fitness - current_fitness;

        let accept = delta >= 0.0
            || (temperature > 0.0 && rng.gen::<f64>() < (delta / temperature).exp());

        if accept {
            current_fitness = candidate_fitness;
            if current_fitness > best_fitness {
                best_fitness = current_fitness;
                best_order = current_order.clone();
            }
        } else {
            // Revertir el intercambio rechazado.
            current_order.swap(first, second);
        }

        temperature = match profile.cooling {
            CoolingSchedule::Linear => {
                profile.initial_temperature * (1.0 - (step + 1) as f64 / total_iterations as f64)
            }
            CoolingSchedule::Geometric { factor } => temperature * factor,
        };
        completed += 1;
    }

    let best = transposition::decrypt(cipher_indices, &best_order)
        .ok()
        .map(|plain| (indices_to_text(&plain), best_fitness));
    (best, completed, abort_reason)
}
