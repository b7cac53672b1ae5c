// [libs/domain/solvers/src/engines/mod.rs]
/*!
 * APARATO: ENGINE REGISTRY
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: MOTORES ATÓMICOS DE RESOLUCIÓN POR FAMILIA
 */

pub mod composite_chain;
pub mod exhaustive_permutation;
pub mod hill_constraint;
pub mod monoalpha_annealing;
pub mod transposition_annealing;
pub mod vigenere_frequency;

use kryptarch_core_scoring::Scorer;

/// Iteraciones entre observaciones del presupuesto en bucles calientes.
pub(crate) const BUDGET_CHECK_INTERVAL: u64 = 4_096;

/// Candidatos máximos emitidos por motor.
pub(crate) const TOP_K_CANDIDATES: usize = 10;

/// Fitness preliminar compartido: mezcla de ajuste de frecuencia y
/// fitness de n-gramas, sensible tanto a identidad como a orden de
/// letras. Es la vara común con la que todo motor clasifica antes de
/// que el validador emita la confianza definitiva.
#[must_use]
pub(crate) fn preliminary_fitness(scorer: &Scorer, plaintext: &str) -> f64 {
    0.5 * scorer.dictionary_fit(plaintext) + 0.5 * scorer.permutation_fitness(plaintext)
}

/// Inserta en un top-K pequeño manteniendo orden descendente y
/// descartando textos duplicados.
pub(crate) fn push_top_k(
    pool: &mut Vec<(String, f64)>,
    plaintext: String,
    fitness: f64,
    k: usize,
) {
    if pool.iter().any(|(existing, _)| *existing == plaintext) {
        return;
    }
    let position = pool
        .iter()
        .position(|(_, existing_fitness)| fitness > *existing_fitness)
        .unwrap_or(pool.len());
    pool.insert(position, (plaintext, fitness));
    pool.truncate(k);
}
