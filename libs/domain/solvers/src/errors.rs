// [libs/domain/solvers/src/errors.rs]
/*!
 * APARATO: SOLVER ERROR TAXONOMY
 * RESPONSABILIDAD: TRIAJE DE FALLOS INTERNOS DE MOTOR
 *
 * Política de propagación: el ejecutor convierte todo error de este
 * módulo en un veredicto de fallo; el proceso jamás colapsa por un
 * motor.
 */

use thiserror::Error;

/// Fallos internos de los motores de resolución.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Clave, alfabeto o matriz rechazados por la primitiva.
    #[error("cipher primitive rejected the key material: {0}")]
    Cipher(#[from] kryptarch_core_ciphers::CipherError),

    /// El motor exhaustivo no acepta el periodo declarado.
    #[error("exhaustive enumeration rejected period {period} (maximum {maximum})")]
    PeriodOutOfRange { period: usize, maximum: usize },

    /// La derivación por cribs carece de bloques restringidos suficientes.
    #[error("hill derivation needs {needed} fully constrained blocks, found {found}")]
    InsufficientCribBlocks { needed: usize, found: usize },

    /// Parámetros estructuralmente inválidos.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] kryptarch_domain_models::ModelError),
}
