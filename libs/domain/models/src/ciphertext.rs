// [libs/domain/models/src/ciphertext.rs]
/*!
 * =================================================================
 * APARATO: CIPHERTEXT CONTRACT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: TEXTO CIFRADO VALIDADO E INMUTABLE
 *
 * Contrato de ingesta: los no-letras se descartan con advertencia,
 * las minúsculas se promueven sin advertencia, el vacío es fatal.
 * Internamente el texto vive como índices de letra 0..=25.
 * =================================================================
 */

use std::path::Path;

use kryptarch_core_ciphers::alphabet::indices_to_text;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ModelError;

/// Secuencia inmutable de letras A-Z como índices 0..=25.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ciphertext {
    indices: Vec<u8>,
}

impl Ciphertext {
    /// Sanea y valida texto crudo.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let mut indices = Vec::with_capacity(raw.len());
        let mut stripped = 0usize;

        for byte in raw.bytes() {
            if byte.is_ascii_alphabetic() {
                indices.push(byte.to_ascii_uppercase() - b'A');
            } else if !byte.is_ascii_whitespace() {
                stripped += 1;
            }
        }

        if stripped > 0 {
            warn!(
                "⚠️ [CIPHERTEXT]: Stripped {} non-letter symbols during ingestion.",
                stripped
            );
        }
        if indices.is_empty() {
            return Err(ModelError::EmptyCiphertext);
        }
        Ok(Self { indices })
    }

    /// Carga y sanea un fichero de texto cifrado.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ModelError::UnreadableCiphertext {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&raw)
    }

    /// Longitud en letras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Verdadero solo para el contrato imposible; la construcción lo veta.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Índices de letra 0..=25.
    #[must_use]
    pub fn as_indices(&self) -> &[u8] {
        &self.indices
    }

    /// Representación A-Z.
    #[must_use]
    pub fn to_text(&self) -> String {
        indices_to_text(&self.indices)
    }
}

impl TryFrom<String> for Ciphertext {
    type Error = ModelError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ciphertext> for String {
    fn from(ciphertext: Ciphertext) -> Self {
        ciphertext.to_text()
    }
}
