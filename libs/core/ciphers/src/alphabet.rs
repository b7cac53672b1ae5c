// [libs/core/ciphers/src/alphabet.rs]
/*!
 * =================================================================
 * APARATO: TABLEAU ALPHABET
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: PERMUTACIONES DE A-Z Y CONVERSIÓN DE TEXTO
 *
 * Un alfabeto de tableau es una permutación de A-Z que define el
 * sistema de coordenadas de los cifrados polialfabéticos. El
 * alfabeto clavado por palabra clave (KRYPTOS → KRYPTOSABCDEFGHIJ
 * LMNQUVWXZ) se construye con la convención clásica: letras de la
 * clave sin repetición, seguidas del resto del alfabeto en orden.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use crate::errors::CipherError;

/// Permutación de A-Z con índice inverso precalculado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableauAlphabet {
    /// Letra (0..=25 estándar) en cada posición del tableau.
    order: [u8; 26],
    /// Posición en el tableau de cada letra estándar.
    inverse: [u8; 26],
}

impl TableauAlphabet {
    /// Alfabeto estándar A-Z (tableau identidad).
    #[must_use]
    pub fn standard() -> Self {
        let mut order = [0u8; 26];
        for (index, slot) in order.iter_mut().enumerate() {
            *slot = index as u8;
        }
        Self {
            order,
            inverse: order,
        }
    }

    /// Construye el alfabeto desde sus 26 letras explícitas.
    pub fn from_letters(letters: &str) -> Result<Self, CipherError> {
        let bytes: Vec<u8> = letters
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        if bytes.len() != 26 {
            return Err(CipherError::InvalidAlphabet(letters.to_string()));
        }

        let mut order = [0u8; 26];
        let mut inverse = [u8::MAX; 26];
        for (position, &byte) in bytes.iter().enumerate() {
            if !byte.is_ascii_uppercase() {
                return Err(CipherError::InvalidAlphabet(letters.to_string()));
            }
            let letter = byte - b'A';
            if inverse[letter as usize] != u8::MAX {
                return Err(CipherError::InvalidAlphabet(letters.to_string()));
            }
            order[position] = letter;
            inverse[letter as usize] = position as u8;
        }
        Ok(Self { order, inverse })
    }

    /// Alfabeto clavado por palabra clave (convención clásica).
    pub fn from_keyword(keyword: &str) -> Result<Self, CipherError> {
        let mut seen = [false; 26];
        let mut letters = String::with_capacity(26);

        for byte in keyword.bytes() {
            if !byte.is_ascii_alphabetic() {
                return Err(CipherError::InvalidKey);
            }
            let upper = byte.to_ascii_uppercase();
            let index = (upper - b'A') as usize;
            if !seen[index] {
                seen[index] = true;
                letters.push(upper as char);
            }
        }
        for index in 0..26u8 {
            if !seen[index as usize] {
                letters.push((b'A' + index) as char);
            }
        }
        Self::from_letters(&letters)
    }

    /// Letra estándar en la posición dada del tableau.
    #[inline(always)]
    #[must_use]
    pub fn letter_at(&self, position: u8) -> u8 {
        self.order[position as usize]
    }

    /// Posición en el tableau de la letra estándar dada.
    #[inline(always)]
    #[must_use]
    pub fn position_of(&self, letter: u8) -> u8 {
        self.inverse[letter as usize]
    }

    /// Verdadero para el tableau identidad.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.order.iter().enumerate().all(|(i, &l)| i as u8 == l)
    }

    /// Las 26 letras del tableau como cadena.
    #[must_use]
    pub fn letters(&self) -> String {
        self.order.iter().map(|&l| (b'A' + l) as char).collect()
    }
}

impl TryFrom<String> for TableauAlphabet {
    type Error = CipherError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_letters(&value)
    }
}

impl From<TableauAlphabet> for String {
    fn from(alphabet: TableauAlphabet) -> Self {
        alphabet.letters()
    }
}

/// Convierte texto A-Z a índices de letra 0..=25.
pub fn text_to_indices(text: &str) -> Result<Vec<u8>, CipherError> {
    text.bytes()
        .enumerate()
        .map(|(offset, byte)| {
            if byte.is_ascii_uppercase() {
                Ok(byte - b'A')
            } else {
                Err(CipherError::NonAlphabetic { offset })
            }
        })
        .collect()
}

/// Convierte índices de letra 0..=25 a texto A-Z.
#[must_use]
pub fn indices_to_text(indices: &[u8]) -> String {
    indices.iter().map(|&index| (b'A' + index) as char).collect()
}
