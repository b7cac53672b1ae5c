// [libs/domain/models/src/errors.rs]
/*!
 * APARATO: MODEL ERROR TAXONOMY
 * RESPONSABILIDAD: TRIAJE DE CONTRATOS MALFORMADOS
 */

use thiserror::Error;

/// Fallos del estrato de contratos.
#[derive(Debug, Error)]
pub enum ModelError {
    /// El texto cifrado quedó vacío tras el saneamiento.
    #[error("ciphertext is empty after stripping non-letters")]
    EmptyCiphertext,

    /// Fichero de texto cifrado ilegible.
    #[error("ciphertext file unreadable at {path}: {source}")]
    UnreadableCiphertext {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parámetros estructuralmente inválidos (p. ej. composite anidado).
    #[error("invalid attack parameters: {0}")]
    InvalidParameters(String),

    /// La serialización canónica falló (contrato roto aguas arriba).
    #[error("canonical serialization failure: {0}")]
    Canonicalization(#[from] serde_json::Error),
}
