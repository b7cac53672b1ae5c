// [libs/infra/ledger/src/coverage.rs]
/*!
 * =================================================================
 * APARATO: COVERAGE TRACKER
 * CLASIFICACIÓN: INFRA PERSISTENCE (ESTRATO L3)
 * RESPONSABILIDAD: CONTABILIDAD MONÓTONA DE EXPLORACIÓN POR REGIÓN
 *
 * Invariantes: `register_region` es idempotente y nunca resetea
 * contadores; `record` solo suma; `record(region, 0, 0)` es un
 * no-op observable. Las recomendaciones ordenan por
 * (1 − coverage_ratio) × priority_weight descendente.
 * =================================================================
 */

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use kryptarch_domain_models::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::LedgerError;

/// Documento de instantánea en disco.
#[derive(Debug, Serialize, Deserialize)]
struct CoverageSnapshot {
    snapshot_at: String,
    regions: Vec<KeySpaceRegion>,
}

/// Rastreador de cobertura tras un único cerrojo.
pub struct CoverageTracker {
    regions: Mutex<HashMap<String, KeySpaceRegion>>,
}

impl Default for CoverageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageTracker {
    /// Rastreador vacío.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: Mutex::new(HashMap::new()),
        }
    }

    /// Registra una región. Idempotente: una región existente conserva
    /// sus contadores y su peso original.
    pub fn register_region(
        &self,
        region_id: &str,
        family: CipherFamily,
        total_size: u128,
        priority_weight: f64,
    ) {
        let mut regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        regions.entry(region_id.to_string()).or_insert_with(|| {
            KeySpaceRegion::register(region_id.to_string(), family, total_size, priority_weight)
        });
    }

    /// Suma atómica a los contadores de la región.
    pub fn record(&self, region_id: &str, attempted: u64, successful: u64) {
        if attempted == 0 && successful == 0 {
            return;
        }
        let mut regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        match regions.get_mut(region_id) {
            Some(region) => {
                region.explored_count = region.explored_count.saturating_add(attempted);
                region.successful_count = region.successful_count.saturating_add(successful);
                region.last_updated = chrono::Utc::now().to_rfc3339();
            }
            None => {
                warn!(
                    "⚠️ [COVERAGE]: Ignoring counters for unregistered region `{}`.",
                    region_id
                );
            }
        }
    }

    /// Fracción explorada de una región concreta.
    #[must_use]
    pub fn coverage(&self, region_id: &str) -> Option<f64> {
        let regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        regions.get(region_id).map(KeySpaceRegion::coverage_ratio)
    }

    /// Cobertura agregada de una familia: explorado total / teórico total.
    #[must_use]
    pub fn family_coverage(&self, family: CipherFamily) -> f64 {
        let regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut explored = 0.0f64;
        let mut theoretical = 0.0f64;
        for region in regions.values().filter(|r| r.family == family) {
            explored += region.explored_count as f64;
            theoretical += region.total_size as f64;
        }
        if theoretical <= 0.0 {
            return 0.0;
        }
        (explored / theoretical).clamp(0.0, 1.0)
    }

    /// Regiones de la familia con cobertura bajo el umbral, orden
    /// ascendente por cobertura (la más desatendida primero).
    #[must_use]
    pub fn gaps(&self, family: CipherFamily, min_ratio: f64) -> Vec<KeySpaceRegion> {
        let regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut under_explored: Vec<KeySpaceRegion> = regions
            .values()
            .filter(|region| region.family == family && region.coverage_ratio() < min_ratio)
            .cloned()
            .collect();
        under_explored.sort_by(|a, b| {
            a.coverage_ratio()
                .partial_cmp(&b.coverage_ratio())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.region_id.cmp(&b.region_id))
        });
        under_explored
    }

    /// Top-N regiones por (1 − cobertura) × peso de prioridad.
    #[must_use]
    pub fn recommendations(&self, top_n: usize) -> Vec<(KeySpaceRegion, f64)> {
        let regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut ranked: Vec<(KeySpaceRegion, f64)> = regions
            .values()
            .map(|region| {
                let urgency = (1.0 - region.coverage_ratio()) * region.priority_weight;
                (region.clone(), urgency)
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.region_id.cmp(&b.0.region_id))
        });
        ranked.truncate(top_n);
        ranked
    }

    /// Todas las regiones, orden estable por identificador.
    #[must_use]
    pub fn all_regions(&self) -> Vec<KeySpaceRegion> {
        let regions = self.regions.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut all: Vec<KeySpaceRegion> = regions.values().cloned().collect();
        all.sort_by(|a, b| a.region_id.cmp(&b.region_id));
        all
    }

    /// Escribe la instantánea JSON al camino dado.
    pub fn snapshot(&self, path: &Path) -> Result<(), LedgerError> {
        let document = CoverageSnapshot {
            snapshot_at: chrono::Utc::now().to_rfc3339(),
            regions: self.all_regions(),
        };
        let serialized = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, serialized).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("📸 [COVERAGE]: Snapshot sealed at {}.", path.display());
        Ok(())
    }

    /// Reconstruye el rastreador desde una instantánea previa.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CoverageSnapshot =
            serde_json::from_str(&raw).map_err(|fault| LedgerError::MalformedSnapshot {
                path: path.to_path_buf(),
                detail: fault.to_string(),
            })?;

        let mut regions = HashMap::with_capacity(document.regions.len());
        for region in document.regions {
            regions.insert(region.region_id.clone(), region);
        }
        Ok(Self {
            regions: Mutex::new(regions),
        })
    }
}
