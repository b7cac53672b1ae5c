// [libs/core/ciphers/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CIPHER PRIMITIVES ROOT
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: PRIMITIVAS PURAS DE CIFRADO Y DESCIFRADO CLÁSICO
 *
 * Representación canónica: texto como índices de letra 0..=25.
 * Toda primitiva expone cifrado y descifrado exactos inversos; las
 * leyes de ida y vuelta se certifican en el Proving Grounds.
 * =================================================================
 */

/// Errores semánticos de claves y alfabetos inválidos.
pub mod errors;

/// Alfabetos de tableau (permutaciones de A-Z) y utilidades de texto.
pub mod alphabet;

/// Vigenère sobre tableau clavado (convención Quagmire III).
pub mod vigenere;

/// Transposición columnar con columnas irregulares.
pub mod transposition;

/// Cifrado de Hill 2×2 / 3×3 sobre ℤ/26.
pub mod hill;

/// Sustitución monoalfabética.
pub mod monoalpha;

pub use crate::alphabet::{indices_to_text, text_to_indices, TableauAlphabet};
pub use crate::errors::CipherError;
pub use crate::hill::HillMatrix;

/// Colección de tipos de alta frecuencia para inyección directa en motores.
pub mod prelude {
    pub use crate::alphabet::{indices_to_text, text_to_indices, TableauAlphabet};
    pub use crate::errors::CipherError;
    pub use crate::hill::HillMatrix;
}
