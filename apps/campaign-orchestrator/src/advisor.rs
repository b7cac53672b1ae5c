// [apps/campaign-orchestrator/src/advisor.rs]
/*!
 * =================================================================
 * APARATO: STRATEGIC ADVISOR CONTRACT
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: FRONTERA OPACA HACIA EL DIRECTOR ESTRATÉGICO
 *
 * El núcleo no sabe quién produce las pistas: solo conoce la forma
 * estructurada del contrato. El motor opera correctamente sin
 * asesor (NullAdvisor); las pistas influyen únicamente en la
 * prioridad de los ataques, nunca en la corrección.
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_domain_models::AdvisorHint;
use tracing::{debug, warn};

/// Fuente opaca de pistas estructuradas.
pub trait StrategicAdvisor: Send + Sync {
    /// Solicita un lote fresco de pistas.
    fn request_hints(&self) -> Vec<AdvisorHint>;

    /// Nombre nominal para el rastro.
    fn name(&self) -> &'static str;
}

/// Asesor nulo: la campaña autónoma pura.
#[derive(Debug, Default)]
pub struct NullAdvisor;

impl StrategicAdvisor for NullAdvisor {
    fn request_hints(&self) -> Vec<AdvisorHint> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Asesor respaldado por fichero: un documento JSON con una lista de
/// pistas, depositado por el colaborador externo.
#[derive(Debug)]
pub struct FileAdvisor {
    hints_path: PathBuf,
}

impl FileAdvisor {
    #[must_use]
    pub fn new(hints_path: PathBuf) -> Self {
        Self { hints_path }
    }
}

impl StrategicAdvisor for FileAdvisor {
    /// Lee el fichero en cada solicitud; un fichero ausente o
    /// malformado degrada a lote vacío con advertencia (el asesor
    /// jamás compromete la campaña).
    fn request_hints(&self) -> Vec<AdvisorHint> {
        let raw = match std::fs::read_to_string(&self.hints_path) {
            Ok(content) => content,
            Err(read_fault) => {
                warn!(
                    "⚠️ [ADVISOR]: Hints file {} unreadable ({read_fault}). Proceeding unadvised.",
                    self.hints_path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<AdvisorHint>>(&raw) {
            Ok(hints) => {
                debug!("🧭 [ADVISOR]: Ingested {} structured hints.", hints.len());
                hints
            }
            Err(parse_fault) => {
                warn!(
                    "⚠️ [ADVISOR]: Hints file {} malformed ({parse_fault}). Proceeding unadvised.",
                    self.hints_path.display()
                );
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
