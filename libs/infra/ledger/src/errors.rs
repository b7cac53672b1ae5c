// [libs/infra/ledger/src/errors.rs]
/*!
 * APARATO: LEDGER ERROR TAXONOMY
 * RESPONSABILIDAD: TRIAJE DE FALLOS DE PERSISTENCIA
 *
 * Un fallo de escritura es transitorio para el llamador (puede
 * reintentar una vez); un fichero de apertura imposible es fatal y
 * lo decide el orquestador.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Fallos del libro mayor.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// E/S sobre un artefacto persistente.
    #[error("ledger i/o failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Un registro no pudo serializarse (contrato roto aguas arriba).
    #[error("record serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// El documento de instantánea no respeta el esquema esperado.
    #[error("snapshot at {path} is malformed: {detail}")]
    MalformedSnapshot { path: PathBuf, detail: String },
}
