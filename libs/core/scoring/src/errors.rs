// [libs/core/scoring/src/errors.rs]
/*!
 * APARATO: SCORING ERROR TAXONOMY
 * RESPONSABILIDAD: TRIAJE PROGRAMÁTICO DE FALLOS DE INGESTA DE TABLAS
 */

use std::path::PathBuf;
use thiserror::Error;

/// Fallos del estrato de puntuación. Una tabla obligatoria ilegible es
/// fatal en el arranque; las tablas opcionales degradan a uniforme.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// La tabla obligatoria de unigramas no existe o no es legible.
    #[error("mandatory reference table unreadable at {path}: {source}")]
    MissingMandatoryTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Una fila de la tabla no respeta el contrato `<KEY>\t<VALUE>`.
    #[error("malformed row in {path} (line {line}): {detail}")]
    MalformedTable {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    /// La tabla de unigramas no contiene exactamente las 26 letras A-Z.
    #[error("unigram table at {path} must cover exactly the 26 letters A-Z")]
    IncompleteAlphabet { path: PathBuf },

    /// Fallo de E/S durante la lectura de una tabla opcional.
    #[error("i/o failure while reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
