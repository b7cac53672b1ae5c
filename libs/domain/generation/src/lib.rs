// [libs/domain/generation/src/lib.rs]
/*!
 * =================================================================
 * APARATO: GENERATION STRATUM ROOT
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: PLANIFICACIÓN PRIORIZADA DE LA CAMPAÑA
 *
 * Tres fuentes alimentan la cola: pistas directas del asesor,
 * brechas de cobertura y barridos por defecto. Toda propuesta se
 * deduplica por huella dentro del lote y contra el libro mayor
 * antes de entrar a la cola.
 * =================================================================
 */

/// Cálculo de prioridad de ataque.
pub mod priority;

/// Expansión de pistas, brechas y barridos.
pub mod generator;

/// Cola de ataques en orden estricto de prioridad.
pub mod queue;

pub use crate::generator::{AttackGenerator, GeneratorConfig, PrioritizedAttack};
pub use crate::queue::AttackQueue;
