// [apps/campaign-orchestrator/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN ORCHESTRATOR LIBRARY
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: NÚCLEO REUTILIZABLE DEL PROCESO DE CAMPAÑA
 *
 * El binario es una cáscara fina sobre esta biblioteca; el Proving
 * Grounds ejerce la campaña completa a través de ella.
 * =================================================================
 */

/// Configuración de campaña y caminos de estado.
pub mod config;

/// Carga de texto cifrado, tablas y estado persistente.
pub mod bootstrap;

/// Contrato opaco del asesor estratégico.
pub mod advisor;

/// Bucle principal: cola, pool de trabajadores, validación, sellado.
pub mod kernel;

pub use crate::advisor::{FileAdvisor, NullAdvisor, StrategicAdvisor};
pub use crate::bootstrap::CampaignState;
pub use crate::config::CampaignConfig;
pub use crate::kernel::{CampaignKernel, CampaignSummary};
