// [libs/domain/solvers/src/engines/hill_constraint.rs]
/*!
 * =================================================================
 * APARATO: HILL CONSTRAINT ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: DERIVACIÓN DE CLAVE POR TEXTO PLANO CONOCIDO
 *
 * Los cribs anclados que cubren bloques completos forman el sistema
 * lineal C = K·P sobre ℤ/26. Cada combinación de `n` bloques con P
 * invertible deriva una clave única; las claves cuyo determinante
 * no es coprimo con 26 se rechazan, y toda clave derivada debe
 * reproducir además el resto de bloques restringidos.
 *
 * Poda parcial: antes de puntuar el descifrado completo se evalúa
 * un prefijo corto; un prefijo ilegible descarta la clave sin pagar
 * el costo del texto entero.
 * =================================================================
 */

use std::collections::BTreeMap;

use kryptarch_core_ciphers::alphabet::indices_to_text;
use kryptarch_core_ciphers::HillMatrix;
use kryptarch_core_scoring::Scorer;
use tracing::debug;

use crate::budget::SolverBudget;
use crate::engines::{preliminary_fitness, push_top_k, TOP_K_CANDIDATES};
use crate::errors::SolverError;
use crate::verdict::EngineOutcome;

pub const ENGINE_NAME: &str = "hill_constraint";

/// Longitud del prefijo de poda parcial (en letras).
const PARTIAL_PRUNE_LEN: usize = 32;
/// Ajuste de diccionario mínimo del prefijo para seguir puntuando.
const PARTIAL_PRUNE_MIN: f64 = 0.08;

/// Ejecuta la derivación de clave de Hill.
pub fn execute(
    cipher_indices: &[u8],
    block_size: usize,
    explicit_matrix: Option<&HillMatrix>,
    crib_constraints: &BTreeMap<usize, char>,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    let mut outcome = EngineOutcome::default();

    // MODO DIRECTO: matriz explícita, un solo descifrado.
    if let Some(matrix) = explicit_matrix {
        let plain = matrix.decrypt(cipher_indices)?;
        let plaintext = indices_to_text(&plain);
        let fitness = preliminary_fitness(scorer, &plaintext);
        outcome.scored_texts.push((plaintext, fitness));
        outcome.keys_explored = 1;
        return Ok(outcome);
    }

    // 1. BLOQUES COMPLETAMENTE RESTRINGIDOS
    let constrained_blocks = fully_constrained_blocks(cipher_indices, block_size, crib_constraints);
    if constrained_blocks.len() < block_size {
        return Err(SolverError::InsufficientCribBlocks {
            needed: block_size,
            found: constrained_blocks.len(),
        });
    }

    // 2. DERIVACIÓN POR COMBINACIONES DE BLOQUES
    let mut derived_keys: Vec<HillMatrix> = Vec::new();
    let total = constrained_blocks.len();
    let mut interrupted: Option<String> = None;

    for_each_combination(total, block_size, |selection| {
        if let Some(reason) = budget.interruption() {
            interrupted = Some(reason.to_string());
            return false;
        }
        outcome.keys_explored += 1;

        let plain_blocks: Vec<&[u8]> = selection
            .iter()
            .map(|&index| constrained_blocks[index].0.as_slice())
            .collect();
        let cipher_blocks: Vec<&[u8]> = selection
            .iter()
            .map(|&index| constrained_blocks[index].1.as_slice())
            .collect();

        let key = match HillMatrix::solve_from_pairs(block_size, &plain_blocks, &cipher_blocks) {
            Ok(key) => key,
            // P singular: combinación insoluble, se prueba la siguiente.
            Err(_) => return true,
        };
        if !key.is_invertible() || derived_keys.contains(&key) {
            return true;
        }

        // Consistencia contra TODOS los bloques restringidos.
        let consistent = constrained_blocks
            .iter()
            .all(|(plain, cipher)| key.encrypt(plain) == *cipher);
        if consistent {
            derived_keys.push(key);
        }
        true
    });
    outcome.abort_reason = interrupted;

    // 3. PUNTUACIÓN CON PODA PARCIAL
    for key in derived_keys {
        let Ok(inverse) = key.inverse() else { continue };

        let prefix_span =
            (PARTIAL_PRUNE_LEN.min(cipher_indices.len()) / block_size) * block_size;
        if prefix_span >= block_size {
            let prefix = inverse.apply(&cipher_indices[..prefix_span]);
            if scorer.dictionary_fit(&indices_to_text(&prefix)) < PARTIAL_PRUNE_MIN {
                continue;
            }
        }

        let plain = inverse.apply(cipher_indices);
        let plaintext = indices_to_text(&plain);
        let fitness = preliminary_fitness(scorer, &plaintext);
        push_top_k(&mut outcome.scored_texts, plaintext, fitness, TOP_K_CANDIDATES);
    }

    debug!(
        "🧩 [HILL]: block={}x{} constrained_blocks={} derivations={} emitted={}",
        block_size,
        block_size,
        total,
        outcome.keys_explored,
        outcome.scored_texts.len()
    );
    Ok(outcome)
}

/// Bloques (plano, cifrado) cuyos `block_size` caracteres están todos
/// restringidos por cribs.
fn fully_constrained_blocks(
    cipher_indices: &[u8],
    block_size: usize,
    crib_constraints: &BTreeMap<usize, char>,
) -> Vec<(Vec<u8>, Vec<u8>)> {
    let block_count = cipher_indices.len() / block_size;
    let mut blocks = Vec::new();

    for block_index in 0..block_count {
        let start = block_index * block_size;
        let mut plain_block = Vec::with_capacity(block_size);
        for offset in 0..block_size {
            match crib_constraints.get(&(start + offset)) {
                Some(&letter) if letter.is_ascii_uppercase() => {
                    plain_block.push(letter as u8 - b'A');
                }
                _ => {
                    plain_block.clear();
                    break;
                }
            }
        }
        if plain_block.len() == block_size {
            let cipher_block = cipher_indices[start..start + block_size].to_vec();
            blocks.push((plain_block, cipher_block));
        }
    }
    blocks
}

/// Visita cada combinación de `choose` índices sobre `total`. `visit`
/// devuelve `false` para detener.
fn for_each_combination(
    total: usize,
    choose: usize,
    mut visit: impl FnMut(&[usize]) -> bool,
) {
    if choose == 0 || choose > total {
        return;
    }
    let mut selection: Vec<usize> = (0..choose).collect();
    loop {
        if !visit(&selection) {
            return;
        }
        // Avance lexicográfico.
        let mut position = choose;
        loop {
            if position == 0 {
                return;
            }
            position -= 1;
            if selection[position] != position + total - choose {
                break;
            }
            if position == 0 {
                return;
            }
        }
        selection[position] += 1;
        for index in position + 1..choose {
            selection[index] = selection[index - 1] + 1;
        }
    }
}
