// [libs/infra/ledger/src/checkpoint.rs]
/*!
 * APARATO: CHECKPOINT CURSOR
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: CURSOR DE REANUDACIÓN DE CAMPAÑA
 *
 * El cursor registra el progreso consumido de los presupuestos. Un
 * ataque en vuelo durante una interrupción no está en el libro
 * mayor, así que la reanudación simplemente lo reintenta.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Cursor persistente de reanudación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointCursor {
    /// Ataques completados y sellados en el libro mayor.
    pub attacks_completed: u64,
    /// Presupuesto de muro ya consumido.
    pub elapsed_seconds: u64,
    /// Instante del sellado, RFC 3339.
    pub sealed_at: String,
}

impl CheckpointCursor {
    /// Cursor nuevo con el progreso dado.
    #[must_use]
    pub fn seal(attacks_completed: u64, elapsed_seconds: u64) -> Self {
        Self {
            attacks_completed,
            elapsed_seconds,
            sealed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Escribe el cursor al camino dado.
    pub fn write(&self, path: &Path) -> Result<(), LedgerError> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Carga el cursor si existe; `None` en primera ejecución.
    pub fn load(path: &Path) -> Result<Option<Self>, LedgerError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cursor =
            serde_json::from_str(&raw).map_err(|fault| LedgerError::MalformedSnapshot {
                path: path.to_path_buf(),
                detail: fault.to_string(),
            })?;
        Ok(Some(cursor))
    }
}
