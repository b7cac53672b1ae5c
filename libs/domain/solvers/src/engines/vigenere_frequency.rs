// [libs/domain/solvers/src/engines/vigenere_frequency.rs]
/*!
 * =================================================================
 * APARATO: VIGENERE COLUMN-FREQUENCY ENGINE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: RECUPERACIÓN DE CLAVE POR FRECUENCIA DE COLUMNAS
 *
 * Para longitud de clave L, la posición i pertenece a la columna
 * i mod L y cada columna es un cifrado César en coordenadas del
 * tableau. Cada columna prueba los 26 desplazamientos y clasifica
 * por chi-cuadrado contra los unigramas de referencia; costo total
 * L × 26 evaluaciones por variante de alfabeto.
 *
 * Los cribs fijan columnas por derivación algebraica exacta
 * (modo dirigido por restricciones): una pareja (cifrado, plano)
 * determina la posición de clave de su columna sin búsqueda.
 * =================================================================
 */

use std::collections::BTreeMap;

use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices, TableauAlphabet};
use kryptarch_core_ciphers::vigenere;
use kryptarch_core_scoring::Scorer;
use tracing::debug;

use crate::budget::SolverBudget;
use crate::engines::{preliminary_fitness, push_top_k, TOP_K_CANDIDATES};
use crate::errors::SolverError;
use crate::verdict::EngineOutcome;

/// Alternativas de desplazamiento retenidas por columna.
const ALTERNATES_PER_COLUMN: usize = 3;

pub const ENGINE_NAME: &str = "vigenere_frequency";

/// Ejecuta la recuperación de clave para una longitud fija.
pub fn execute(
    cipher_indices: &[u8],
    key_length: usize,
    explicit_key: Option<&str>,
    alphabet: &TableauAlphabet,
    crib_constraints: &BTreeMap<usize, char>,
    scorer: &Scorer,
    budget: &SolverBudget,
) -> Result<EngineOutcome, SolverError> {
    let mut outcome = EngineOutcome::default();

    // MODO DIRECTO: clave explícita, un solo descifrado.
    if let Some(key) = explicit_key {
        let key_indices = text_to_indices(key)?;
        let plain = vigenere::decrypt(cipher_indices, &key_indices, alphabet)?;
        let plaintext = indices_to_text(&plain);
        let fitness = preliminary_fitness(scorer, &plaintext);
        outcome.scored_texts.push((plaintext, fitness));
        outcome.keys_explored = 1;
        return Ok(outcome);
    }

    // 1. FIJACIÓN POR CRIBS (columna → posición de clave en el tableau)
    let mut pinned: BTreeMap<usize, u8> = BTreeMap::new();
    for (&position, &plain_char) in crib_constraints {
        if position >= cipher_indices.len() || !plain_char.is_ascii_uppercase() {
            continue;
        }
        let column = position % key_length;
        let derived = vigenere::key_position_for_pair(
            cipher_indices[position],
            plain_char as u8 - b'A',
            alphabet,
        );
        // Primera derivación manda; un conflicto posterior delata un
        // emplazamiento de crib incoherente y se ignora.
        pinned.entry(column).or_insert(derived);
    }

    // 2. CLASIFICACIÓN POR COLUMNA (26 desplazamientos, chi-cuadrado)
    let mut ranked_shifts: Vec<Vec<u8>> = Vec::with_capacity(key_length);
    for column in 0..key_length {
        if let Some(reason) = budget.interruption() {
            outcome.abort_reason = Some(reason.to_string());
            return Ok(outcome);
        }

        if let Some(&pinned_shift) = pinned.get(&column) {
            ranked_shifts.push(vec![pinned_shift]);
            continue;
        }

        let column_letters: Vec<u8> = cipher_indices
            .iter()
            .skip(column)
            .step_by(key_length)
            .copied()
            .collect();

        let mut scored_shifts: Vec<(u8, f64)> = (0..26u8)
            .map(|shift| {
                let decrypted: String = column_letters
                    .iter()
                    .map(|&letter| {
                        (b'A' + vigenere::decrypt_letter_with_shift(letter, shift, alphabet))
                            as char
                    })
                    .collect();
                (shift, scorer.chi_squared(&decrypted))
            })
            .collect();
        scored_shifts.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        ranked_shifts.push(
            scored_shifts
                .iter()
                .take(ALTERNATES_PER_COLUMN)
                .map(|(shift, _)| *shift)
                .collect(),
        );
        outcome.keys_explored += 26;
    }

    // 3. DESCIFRADO PRIMARIO + ALTERNATIVAS POR COLUMNA
    let primary: Vec<u8> = ranked_shifts.iter().map(|ranks| ranks[0]).collect();
    let decrypt_with = |shifts: &[u8]| -> String {
        let plain: Vec<u8> = cipher_indices
            .iter()
            .enumerate()
            .map(|(index, &letter)| {
                vigenere::decrypt_letter_with_shift(letter, shifts[index % key_length], alphabet)
            })
            .collect();
        indices_to_text(&plain)
    };

    let primary_text = decrypt_with(&primary);
    let primary_fitness = preliminary_fitness(scorer, &primary_text);
    push_top_k(
        &mut outcome.scored_texts,
        primary_text,
        primary_fitness,
        TOP_K_CANDIDATES,
    );

    for column in 0..key_length {
        for &alternate in ranked_shifts[column].iter().skip(1) {
            let mut shifts = primary.clone();
            shifts[column] = alternate;
            let text = decrypt_with(&shifts);
            let fitness = preliminary_fitness(scorer, &text);
            push_top_k(&mut outcome.scored_texts, text, fitness, TOP_K_CANDIDATES);
            outcome.keys_explored += 1;
        }
    }

    debug!(
        "🔑 [VIGENERE]: len={} pinned={} explored={} best_fitness={:.3}",
        key_length,
        pinned.len(),
        outcome.keys_explored,
        outcome
            .scored_texts
            .first()
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    );
    Ok(outcome)
}
