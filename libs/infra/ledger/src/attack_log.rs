// [libs/infra/ledger/src/attack_log.rs]
/*!
 * =================================================================
 * APARATO: ATTACK LOG (APPEND-ONLY, DEDUPLICADO)
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: A LO SUMO UN REGISTRO POR HUELLA, PARA SIEMPRE
 *
 * Formato físico: una línea JSON por registro, autodelimitada por
 * salto de línea. En el arranque el fichero se reproduce a un
 * índice en memoria clavado por huella (chequeo de duplicado O(1)).
 * La reproducción tolera una última línea truncada: acepta todos
 * los registros completos hasta la primera línea malformada y
 * descarta el resto.
 *
 * El check-insert es atómico bajo un único cerrojo; un segundo
 * registro con la misma huella es un no-op que devuelve el registro
 * existente sin reescribir su desenlace.
 * =================================================================
 */

use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kryptarch_domain_models::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::LedgerError;

/// Filtro de consulta sobre el libro mayor.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub family: Option<CipherFamily>,
    pub success_only: bool,
    pub min_confidence: Option<f64>,
    pub tag: Option<String>,
}

/// Resumen agregado del libro mayor.
#[derive(Debug, Clone, Serialize)]
pub struct LogStatistics {
    pub total_records: u64,
    pub duplicates_prevented: u64,
    pub successes: u64,
    /// (intentos, éxitos) por etiqueta de familia.
    pub per_family: BTreeMap<String, (u64, u64)>,
}

/// Formato de exportación del libro mayor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Una línea por registro, apta para streaming.
    Jsonl,
    /// Documento estructurado para análisis.
    Document,
}

struct LogInner {
    index: HashMap<Fingerprint, AttackRecord>,
    /// Orden de finalización, para exportaciones estables.
    completion_order: Vec<Fingerprint>,
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    duplicates_prevented: u64,
}

/// Libro mayor de ataques con índice en memoria.
pub struct AttackLog {
    inner: Mutex<LogInner>,
}

impl AttackLog {
    /// Abre (o crea) el fichero y reproduce su contenido al índice.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let mut index = HashMap::new();
        let mut completion_order = Vec::new();

        if path.exists() {
            let file = File::open(path).map_err(|source| LedgerError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let mut accepted = 0usize;
            let mut skipped = 0usize;
            let mut reader = BufReader::new(file);
            let mut line = String::new();

            loop {
                line.clear();
                let read = reader.read_line(&mut line).map_err(|source| LedgerError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                if read == 0 {
                    break;
                }
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match serde_json::from_str::<AttackRecord>(trimmed) {
                    Ok(record) => {
                        if !index.contains_key(&record.id) {
                            completion_order.push(record.id.clone());
                            index.insert(record.id.clone(), record);
                        }
                        accepted += 1;
                    }
                    Err(parse_fault) => {
                        // Cola truncada o corrupta: se preserva todo lo
                        // anterior y se descarta el resto del fichero.
                        skipped += 1;
                        warn!(
                            "⚠️ [LOG_REPLAY]: Malformed line after {} records ({}). Discarding tail.",
                            accepted, parse_fault
                        );
                        break;
                    }
                }
            }
            debug!(
                "📜 [LOG_REPLAY]: Hydrated {} records ({} skipped) from {}.",
                index.len(),
                skipped,
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
            inner: Mutex::new(LogInner {
                index,
                completion_order,
                writer: Some(BufWriter::new(file)),
                path: Some(path.to_path_buf()),
                duplicates_prevented: 0,
            }),
        })
    }

    /// Libro mayor efímero sin respaldo en disco.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            inner: Mutex::new(LogInner {
                index: HashMap::new(),
                completion_order: Vec::new(),
                writer: None,
                path: None,
                duplicates_prevented: 0,
            }),
        }
    }

    /// Registra un ataque sellado. Devuelve `(registro, es_duplicado)`.
    ///
    /// Si la huella ya existe, el desenlace NO se reescribe: se
    /// devuelve el registro original y la bandera de duplicado. El
    /// índice solo se actualiza tras una escritura exitosa, de modo
    /// que un reintento tras fallo de disco es seguro.
    pub fn log(&self, record: AttackRecord) -> Result<(AttackRecord, bool), LedgerError> {
        let mut guard = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let inner = &mut *guard;

        if let Some(existing) = inner.index.get(&record.id) {
            let existing = existing.clone();
            inner.duplicates_prevented += 1;
            return Ok((existing, true));
        }

        let line = serde_json::to_string(&record)?;
        if let Some(writer) = inner.writer.as_mut() {
            let path = inner.path.clone().unwrap_or_default();
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .and_then(|_| writer.flush())
                .map_err(|source| LedgerError::Io { path, source })?;
        }

        inner.completion_order.push(record.id.clone());
        inner.index.insert(record.id.clone(), record.clone());
        Ok((record, false))
    }

    /// Chequeo O(1) de huella ya registrada.
    #[must_use]
    pub fn is_duplicate(&self, fingerprint: &Fingerprint) -> bool {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner.index.contains_key(fingerprint)
    }

    /// Registros que satisfacen el filtro, en orden de finalización.
    #[must_use]
    pub fn query(&self, filter: &LogQuery) -> Vec<AttackRecord> {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner
            .completion_order
            .iter()
            .filter_map(|fingerprint| inner.index.get(fingerprint))
            .filter(|record| {
                if let Some(family) = filter.family {
                    if record.parameters.cipher_family() != family {
                        return false;
                    }
                }
                if filter.success_only && !record.outcome.is_success() {
                    return false;
                }
                if let Some(minimum) = filter.min_confidence {
                    match &record.outcome {
                        AttackOutcome::Success { confidence, .. } if *confidence >= minimum => {}
                        _ => return false,
                    }
                }
                if let Some(tag) = &filter.tag {
                    if !record.tags.iter().any(|t| t == tag) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Resumen agregado: totales, duplicados prevenidos y tasa por familia.
    #[must_use]
    pub fn statistics(&self) -> LogStatistics {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut per_family: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        let mut successes = 0u64;

        for record in inner.index.values() {
            let entry = per_family
                .entry(record.parameters.cipher_family().label().to_string())
                .or_insert((0, 0));
            entry.0 += 1;
            if record.outcome.is_success() {
                entry.1 += 1;
                successes += 1;
            }
        }

        LogStatistics {
            total_records: inner.index.len() as u64,
            duplicates_prevented: inner.duplicates_prevented,
            successes,
            per_family,
        }
    }

    /// Serializa el libro mayor completo.
    pub fn export(&self, format: ExportFormat) -> Result<String, LedgerError> {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        let records: Vec<&AttackRecord> = inner
            .completion_order
            .iter()
            .filter_map(|fingerprint| inner.index.get(fingerprint))
            .collect();

        match format {
            ExportFormat::Jsonl => {
                let mut output = String::new();
                for record in records {
                    output.push_str(&serde_json::to_string(record)?);
                    output.push('\n');
                }
                Ok(output)
            }
            ExportFormat::Document => {
                #[derive(Serialize)]
                struct LogDocument<'a> {
                    exported_at: String,
                    total: usize,
                    records: Vec<&'a AttackRecord>,
                }
                let document = LogDocument {
                    exported_at: chrono::Utc::now().to_rfc3339(),
                    total: records.len(),
                    records,
                };
                Ok(serde_json::to_string_pretty(&document)?)
            }
        }
    }

    /// Cantidad de registros únicos.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner.index.len()
    }

    /// Verdadero cuando el libro está vacío.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
