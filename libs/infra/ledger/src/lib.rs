// [libs/infra/ledger/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN LEDGER ROOT
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: ESTADO PERSISTENTE ÚNICO DE LA CAMPAÑA
 *
 * Disciplina de escritor único: cada estructura vive tras su propio
 * cerrojo y solo el orquestador escribe. Los solvers jamás tocan
 * este estrato; devuelven resultados y el orquestador los persiste.
 * =================================================================
 */

/// Errores semánticos de persistencia.
pub mod errors;

/// Registro append-only deduplicado de ataques.
pub mod attack_log;

/// Contabilidad de exploración por región del espacio de claves.
pub mod coverage;

/// Almacén durable de candidatos promovidos.
pub mod candidate_vault;

/// Cursor de reanudación de campaña.
pub mod checkpoint;

pub use crate::attack_log::{AttackLog, ExportFormat, LogQuery, LogStatistics};
pub use crate::candidate_vault::{CandidateVault, VaultEntry};
pub use crate::checkpoint::CheckpointCursor;
pub use crate::coverage::CoverageTracker;
pub use crate::errors::LedgerError;
