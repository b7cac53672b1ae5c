// [libs/infra/ledger/src/candidate_vault.rs]
/*!
 * =================================================================
 * APARATO: CANDIDATE VAULT
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: ALMACÉN DURABLE DE CANDIDATOS PROMOVIDOS
 *
 * Un candidato cruza el umbral de promoción una sola vez; queda
 * sellado como línea JSON y disponible para el documento de
 * exportación top-K de inspección humana.
 * =================================================================
 */

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kryptarch_domain_models::Candidate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::LedgerError;

/// Candidato sellado con su instante de promoción.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Instante de promoción, RFC 3339.
    pub promoted_at: String,
    #[serde(flatten)]
    pub candidate: Candidate,
}

struct VaultInner {
    promoted: Vec<VaultEntry>,
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
}

/// Bóveda de candidatos promovidos.
pub struct CandidateVault {
    inner: Mutex<VaultInner>,
}

impl CandidateVault {
    /// Abre (o crea) la bóveda y rehidrata los candidatos previos.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let mut promoted = Vec::new();

        if path.exists() {
            let file = File::open(path).map_err(|source| LedgerError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            for line in BufReader::new(file).lines() {
                let line = line.map_err(|source| LedgerError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<VaultEntry>(&line) {
                    Ok(entry) => promoted.push(entry),
                    Err(parse_fault) => {
                        warn!(
                            "⚠️ [VAULT_REPLAY]: Malformed candidate line ({}). Discarding tail.",
                            parse_fault
                        );
                        break;
                    }
                }
            }
            debug!(
                "🏦 [VAULT_REPLAY]: Hydrated {} promoted candidates from {}.",
                promoted.len(),
                path.display()
            );
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LedgerError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            inner: Mutex::new(VaultInner {
                promoted,
                writer: Some(BufWriter::new(file)),
                path: Some(path.to_path_buf()),
            }),
        })
    }

    /// Bóveda efímera sin respaldo en disco.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            inner: Mutex::new(VaultInner {
                promoted: Vec::new(),
                writer: None,
                path: None,
            }),
        }
    }

    /// Sella un candidato promovido con marca de tiempo.
    pub fn submit(&self, candidate: Candidate) -> Result<(), LedgerError> {
        let mut guard = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let inner = &mut *guard;

        let entry = VaultEntry {
            promoted_at: chrono::Utc::now().to_rfc3339(),
            candidate,
        };
        let line = serde_json::to_string(&entry)?;
        if let Some(writer) = inner.writer.as_mut() {
            let path = inner.path.clone().unwrap_or_default();
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .and_then(|_| writer.flush())
                .map_err(|source| LedgerError::Io { path, source })?;
        }
        inner.promoted.push(entry);
        Ok(())
    }

    /// Los K mejores candidatos por confianza descendente.
    #[must_use]
    pub fn top(&self, k: usize) -> Vec<Candidate> {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut pool: Vec<Candidate> = inner
            .promoted
            .iter()
            .map(|entry| entry.candidate.clone())
            .collect();
        Candidate::sort_by_confidence(&mut pool);
        pool.truncate(k);
        pool
    }

    /// Documento estructurado de exportación (top-K por confianza).
    pub fn export_document(&self, k: usize) -> Result<String, LedgerError> {
        #[derive(Serialize)]
        struct VaultDocument {
            exported_at: String,
            total_promoted: usize,
            candidates: Vec<VaultEntry>,
        }

        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut entries = inner.promoted.clone();
        drop(inner);
        entries.sort_by(|a, b| {
            b.candidate
                .confidence
                .partial_cmp(&a.candidate.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.candidate.plaintext.cmp(&b.candidate.plaintext))
        });
        let total = entries.len();
        entries.truncate(k);

        let document = VaultDocument {
            exported_at: chrono::Utc::now().to_rfc3339(),
            total_promoted: total,
            candidates: entries,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Cantidad total de candidatos promovidos.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner.promoted.len()
    }

    /// Verdadero cuando ningún candidato ha sido promovido.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
