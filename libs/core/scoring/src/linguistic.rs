// [libs/core/scoring/src/linguistic.rs]
/*!
 * =================================================================
 * APARATO: LINGUISTIC PLAUSIBILITY
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: PLAUSIBILIDAD COMPUESTA DE TEXTO CANDIDATO
 *
 * Tres componentes: cercanía de la proporción de vocales a 0.40,
 * densidad de dígrafos comunes (normalizada en 0.25) y penalización
 * dura de repeticiones (una racha de un solo carácter mayor a 5
 * anula la puntuación completa).
 * =================================================================
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::Scorer;

/// Proporción de vocales del inglés corriente.
const TARGET_VOWEL_RATIO: f64 = 0.40;
/// Densidad de dígrafos comunes a la que satura el componente.
const DIGRAPH_DENSITY_CEILING: f64 = 0.25;
/// Racha máxima tolerada de un mismo carácter.
const MAX_SINGLE_CHAR_RUN: usize = 5;

/// Dígrafos de alta frecuencia del inglés. Conjunto fijo e
/// independiente de las tablas cargadas para que la métrica no
/// degrade junto con un modelo de bigramas de respaldo.
static COMMON_DIGRAPHS: Lazy<HashSet<[u8; 2]>> = Lazy::new(|| {
    const RAW: [&[u8; 2]; 40] = [
        b"TH", b"HE", b"IN", b"ER", b"AN", b"RE", b"ON", b"AT", b"EN", b"ND", b"TI", b"ES",
        b"OR", b"TE", b"OF", b"ED", b"IS", b"IT", b"AL", b"AR", b"ST", b"TO", b"NT", b"NG",
        b"SE", b"HA", b"AS", b"OU", b"IO", b"LE", b"VE", b"CO", b"ME", b"DE", b"HI", b"RI",
        b"RO", b"IC", b"NE", b"EA",
    ];
    RAW.iter().map(|&&gram| gram).collect()
});

const VOWELS: [u8; 5] = [b'A', b'E', b'I', b'O', b'U'];

impl Scorer {
    /// Plausibilidad lingüística compuesta en [0, 1].
    #[must_use]
    pub fn linguistic_plausibility(&self, text: &str) -> f64 {
        let letters: Vec<u8> = text.bytes().filter(|b| b.is_ascii_uppercase()).collect();
        if letters.is_empty() {
            return 0.0;
        }

        // 1. PENALIZACIÓN DE REPETICIÓN (VETO DURO)
        if longest_single_char_run(&letters) > MAX_SINGLE_CHAR_RUN {
            return 0.0;
        }

        // 2. COMPONENTE DE VOCALES
        let vowel_count = letters.iter().filter(|b| VOWELS.contains(b)).count();
        let vowel_ratio = vowel_count as f64 / letters.len() as f64;
        let vowel_component =
            (1.0 - (vowel_ratio - TARGET_VOWEL_RATIO).abs() / TARGET_VOWEL_RATIO).clamp(0.0, 1.0);

        // 3. COMPONENTE DE DÍGRAFOS COMUNES
        let digraph_component = if letters.len() < 2 {
            0.0
        } else {
            let hits = letters
                .windows(2)
                .filter(|pair| COMMON_DIGRAPHS.contains(&[pair[0], pair[1]]))
                .count();
            let density = hits as f64 / (letters.len() - 1) as f64;
            (density / DIGRAPH_DENSITY_CEILING).min(1.0)
        };

        (vowel_component + digraph_component) / 2.0
    }
}

/// Longitud de la racha más larga de un mismo byte.
fn longest_single_char_run(letters: &[u8]) -> usize {
    let mut longest = 0usize;
    let mut current = 0usize;
    let mut previous = None;

    for &byte in letters {
        if Some(byte) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(byte);
        }
        longest = longest.max(current);
    }
    longest
}
