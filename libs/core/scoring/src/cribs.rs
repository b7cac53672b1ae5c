// [libs/core/scoring/src/cribs.rs]
/*!
 * =================================================================
 * APARATO: CRIB & DICTIONARY EVIDENCE
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: EVIDENCIA DE TEXTO PLANO CONOCIDO Y DE DICCIONARIO
 *
 * Fórmula de descuento parcial: un crib contribuye su fracción de
 * caracteres coincidentes cuando esa fracción es al menos 0.5; por
 * debajo de la mitad, la coincidencia es indistinguible del azar
 * sobre un alfabeto de 26 símbolos y se descarta.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use crate::Scorer;

/// Fracción mínima de caracteres coincidentes para acreditar un crib.
const PARTIAL_MATCH_FLOOR: f64 = 0.5;
/// Longitud mínima de palabra de diccionario para la cobertura.
const COVERAGE_WORD_MIN_LEN: usize = 3;
/// Cobertura de caracteres a la que satura la evidencia de diccionario.
const COVERAGE_CEILING: f64 = 0.6;

/// Fragmento de texto plano conocido (o hipotético), con posición
/// esperada opcional en coordenadas de texto cifrado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CribSpec {
    /// Fragmento en mayúsculas A-Z.
    pub fragment: String,
    /// Posición esperada del primer carácter; None = desconocida.
    pub position: Option<usize>,
}

impl CribSpec {
    /// Crib anclado a una posición conocida.
    #[must_use]
    pub fn anchored(fragment: &str, position: usize) -> Self {
        Self {
            fragment: fragment.to_ascii_uppercase(),
            position: Some(position),
        }
    }

    /// Crib flotante sin posición conocida.
    #[must_use]
    pub fn floating(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_ascii_uppercase(),
            position: None,
        }
    }
}

impl Scorer {
    /// Conteo (fraccional) de cribs presentes en el texto.
    /// Coincidencias parciales contribuyen proporcionalmente según la
    /// fórmula de descuento del módulo.
    #[must_use]
    pub fn crib_matches(&self, text: &str, cribs: &[CribSpec]) -> f64 {
        cribs
            .iter()
            .map(|crib| crib_contribution(text, crib))
            .sum()
    }

    /// Mejor evidencia individual de crib, en [0, 1].
    #[must_use]
    pub fn crib_evidence(&self, text: &str, cribs: &[CribSpec]) -> f64 {
        cribs
            .iter()
            .map(|crib| crib_contribution(text, crib))
            .fold(0.0f64, f64::max)
            .min(1.0)
    }

    /// Fracción de caracteres cubiertos por palabras del diccionario
    /// (longitud ≥ 3), normalizada a [0, 1] saturando en 0.6.
    #[must_use]
    pub fn word_coverage(&self, text: &str) -> f64 {
        if text.is_empty() || self.tables.wordlist.is_empty() {
            return 0.0;
        }

        let mut covered = vec![false; text.len()];
        // La lista llega ordenada por longitud descendente: las palabras
        // largas reclaman sus caracteres primero.
        for word in &self.tables.wordlist {
            if word.len() < COVERAGE_WORD_MIN_LEN {
                continue;
            }
            let mut search_from = 0usize;
            while let Some(offset) = text[search_from..].find(word.as_str()) {
                let start = search_from + offset;
                for flag in &mut covered[start..start + word.len()] {
                    *flag = true;
                }
                search_from = start + 1;
                if search_from >= text.len() {
                    break;
                }
            }
        }

        let coverage =
            covered.iter().filter(|&&hit| hit).count() as f64 / text.len() as f64;
        (coverage / COVERAGE_CEILING).min(1.0)
    }
}

/// Contribución de un crib individual, en [0, 1].
fn crib_contribution(text: &str, crib: &CribSpec) -> f64 {
    let fragment = crib.fragment.as_bytes();
    if fragment.is_empty() || text.is_empty() {
        return 0.0;
    }
    let text_bytes = text.as_bytes();

    let ratio = match crib.position {
        Some(position) => match_ratio_at(text_bytes, fragment, position),
        None => {
            // Posición desconocida: mejor ventana sobre todo el texto.
            let mut best = 0.0f64;
            for start in 0..text_bytes.len() {
                best = best.max(match_ratio_at(text_bytes, fragment, start));
                if best >= 1.0 {
                    break;
                }
            }
            best
        }
    };

    if ratio >= PARTIAL_MATCH_FLOOR {
        ratio
    } else {
        0.0
    }
}

/// Fracción de caracteres del fragmento que coinciden en la ventana.
fn match_ratio_at(text: &[u8], fragment: &[u8], start: usize) -> f64 {
    if start >= text.len() {
        return 0.0;
    }
    let window = &text[start..text.len().min(start + fragment.len())];
    if window.len() < fragment.len() {
        // Fragmento desbordando el final: solo cuenta la parte visible.
        let matching = window
            .iter()
            .zip(fragment)
            .filter(|(a, b)| a == b)
            .count();
        return matching as f64 / fragment.len() as f64;
    }
    let matching = window
        .iter()
        .zip(fragment)
        .filter(|(a, b)| a == b)
        .count();
    matching as f64 / fragment.len() as f64
}
