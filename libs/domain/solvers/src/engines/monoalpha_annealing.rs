// [libs/domain/solvers/src/engines/monoalpha_annealing.rs]
/*!
 * =================================================================
 * APARATO: MONOALPHABETIC ANNEALING ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: RECOCIDO SOBRE ALFABETOS DE SUSTITUCIÓN (26!)
 *
 * El espacio 26! no admite enumeración; el recocido recorre
 * permutaciones de alfabeto con vecino de intercambio de dos
 * letras. El objetivo de n-gramas discrimina identidad y orden a
 * la vez, que es lo que una sustitución altera.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::indices_to_text;
use kryptarch_core_ciphers::monoalpha;
use kryptarch_core_ciphers::TableauAlphabet;
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

pub const ENGINE_NAME: &str = "monoalpha_annealing";

const RESTART_SEED_MIX: u64 = 0xD1B5_4A32_D192_ED03;

/// Ejecuta la búsqueda de alfabeto de sustitución.
pub fn execute(
    cipher_indices: &[u8],
    explicit_alphabet: Option<&TableauAlphabet>,
    profile: &AnnealingProfile,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    let mut outcome = EngineOutcome::default();

    // MODO DIRECTO: alfabeto explícito, un solo descifrado.
    if let Some(alphabet) = explicit_alphabet {
        let plain = monoalpha::decrypt(cipher_indices, alphabet);
        let plaintext = indices_to_text(&plain);
        let fitness = preliminary_fitness(scorer, &plaintext);
        outcome.scored_texts.push((plaintext, fitness));
        outcome.keys_explored = 1;
        return Ok(outcome);
    }

    let restarts = profile.restarts.max(1);
    let restart_results: Vec<(Option<(String, f64)>, u64, Option<String>)> = (0..restarts)
        .into_par_iter()
        .map(|restart_index| {
            let seed = budget
                .rng_seed
                .wrapping_add((restart_index as u64 + 1).wrapping_mul(RESTART_SEED_MIX));
            anneal_single_restart(cipher_indices, profile, scorer, budget, seed)
        })
        .collect();

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
        "🔤 [MONOALPHA]: restarts={} iterations={} best_fitness={:.3}",
        restarts,
        outcome.keys_explored,
        outcome.scored_texts.first().map(|(_, f)| *f).unwrap_or(0.0)
    );
    Ok(outcome)
}

/// Descifra con un alfabeto expresado como permutación de letras.
fn decrypt_with_order(cipher_indices: &[u8], order: &[u8; 26]) -> String {
    let mut inverse = [0u8; 26];
    for (position, &letter) in order.iter().enumerate() {
        inverse[letter as usize] = position as u8;
    }
    let plain: Vec<u8> = cipher_indices
        .iter()
        .map(|&letter| inverse[letter as usize])
        .collect();
    indices_to_text(&plain)
}

fn anneal_single_restart(
    cipher_indices: &[u8],
    profile: &AnnealingProfile,
    scorer: &Scorer,
    budget: &SolverBudget,
    seed: u64,
) -> (Option<(String, f64)>, u64, Option<String>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current_order = [0u8; 26];
    for (index, slot) in current_order.iter_mut().enumerate() {
        *slot = index as u8;
    }
    current_order.shuffle(&mut rng);

    let mut current_fitness =
        preliminary_fitness(scorer, &decrypt_with_order(cipher_indices, &current_order));
    let mut best_order = current_order;
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

        let first = rng.gen_range(0..26);
        let second = (first + 1 + rng.gen_range(0..25)) % 26;
        current_order.swap(first, second);

        let candidate_fitness =
            preliminary_fitness(scorer, &decrypt_with_order(cipher_indices, &current_order));
        let delta = candidate_fitness - current_fitness;
        let accept = delta >= 0.0
            || (temperature > 0.0 && rng.gen::<f64>() < (delta / temperature).exp());

        if accept {
            current_fitness = candidate_fitness;
            if current_fitness > best_fitness {
                best_fitness = current_fitness;
                best_order = current_order;
            }
        } else {
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

    let best_text = decrypt_with_order(cipher_indices, &best_order);
    (Some((best_text, best_fitness)), completed, abort_reason)
}
