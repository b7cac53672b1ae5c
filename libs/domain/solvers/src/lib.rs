// [libs/domain/solvers/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SOLVER STRATUM ROOT
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: MOTORES DE RESOLUCIÓN Y EJECUTOR POLIMÓRFICO
 *
 * Contrato común de motor: texto cifrado inmutable + parámetros de
 * ataque + presupuesto (plazo, cancelación, semilla RNG) → lista de
 * candidatos en orden descendente de confianza, posiblemente vacía.
 * Ningún error interno de motor escapa como pánico: todo fallo se
 * convierte en veredicto.
 * =================================================================
 */

/// Errores semánticos de los motores.
pub mod errors;

/// Presupuesto de ejecución: plazo, cancelación y semilla.
pub mod budget;

/// Veredicto sellado de un ataque ejecutado.
pub mod verdict;

/// Motores atómicos por familia de cifrado.
pub mod engines;

/// Despacho polimórfico por familia y método.
pub mod executor;

pub use crate::budget::{CancellationToken, SolverBudget};
pub use crate::errors::SolverError;
pub use crate::executor::SolverExecutor;
pub use crate::verdict::SolverVerdict;

/// Colección de tipos de alta frecuencia para inyección directa.
pub mod prelude {
    pub use crate::budget::{CancellationToken, SolverBudget};
    pub use crate::errors::SolverError;
    pub use crate::executor::SolverExecutor;
    pub use crate::verdict::SolverVerdict;
}
