// [libs/core/ciphers/src/errors.rs]
/*!
 * APARATO: CIPHER ERROR TAXONOMY
 * RESPONSABILIDAD: TRIAJE DE CLAVES, ALFABETOS Y MATRICES INVÁLIDAS
 */

use thiserror::Error;

/// Fallos de las primitivas. Ninguno es recuperable dentro de la
/// primitiva; los solvers los convierten en resultados `Failure`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// El alfabeto no es una permutación de las 26 letras A-Z.
    #[error("alphabet `{0}` is not a permutation of A-Z")]
    InvalidAlphabet(String),

    /// El vector de orden de columnas no es una permutación de 0..period.
    #[error("column order is not a permutation of 0..{period}")]
    InvalidPermutation { period: usize },

    /// La clave está vacía o contiene símbolos fuera de A-Z.
    #[error("key material is empty or outside A-Z")]
    InvalidKey,

    /// El determinante de la matriz no es coprimo con 26.
    #[error("hill matrix determinant {determinant} is not coprime with 26")]
    NonInvertibleMatrix { determinant: i64 },

    /// Dimensión de matriz no soportada (solo 2 y 3).
    #[error("unsupported hill block size {0}")]
    UnsupportedBlockSize(usize),

    /// El texto contiene símbolos fuera de A-Z.
    #[error("text contains a symbol outside A-Z at offset {offset}")]
    NonAlphabetic { offset: usize },
}
