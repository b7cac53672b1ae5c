// [apps/campaign-orchestrator/src/config.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN CONFIGURATION
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: PERILLAS DE CAMPAÑA Y CAMINOS DE ESTADO
 *
 * Cada perilla es a la vez bandera de línea de mando y variable de
 * entorno (WORKERS, RNG_SEED, MAX_ATTACK_SECONDS, CHECKPOINT_EVERY,
 * PROMOTION_THRESHOLD). Los artefactos persistentes viven bajo un
 * directorio de estado único.
 * =================================================================
 */

use std::path::PathBuf;

/// Configuración inmutable de una campaña.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Fichero de texto cifrado objetivo.
    pub ciphertext_path: PathBuf,
    /// Directorio de tablas de referencia.
    pub data_dir: PathBuf,
    /// Directorio de estado persistente de la campaña.
    pub state_dir: PathBuf,
    /// Trabajadores del pool.
    pub workers: usize,
    /// Semilla global de los RNG de solvers.
    pub rng_seed: u64,
    /// Presupuesto: máximo de ataques (acumulado con `resume`).
    pub max_attacks: u64,
    /// Presupuesto: máximo de segundos de muro.
    pub max_seconds: u64,
    /// Plazo de muro por ataque individual.
    pub max_attack_seconds: u64,
    /// Ataques entre checkpoints.
    pub checkpoint_every: u64,
    /// Umbral de confianza de promoción del validador.
    pub promotion_threshold: f64,
    /// Reanudar desde el cursor persistido.
    pub resume: bool,
    /// Fichero opcional de pistas estructuradas del asesor.
    pub hints_path: Option<PathBuf>,
}

impl CampaignConfig {
    /// Camino del libro mayor de ataques.
    #[must_use]
    pub fn attack_log_path(&self) -> PathBuf {
        self.state_dir.join("attack_log.jsonl")
    }

    /// Camino de la instantánea de cobertura.
    #[must_use]
    pub fn coverage_path(&self) -> PathBuf {
        self.state_dir.join("coverage.json")
    }

    /// Camino de la bóveda de candidatos promovidos.
    #[must_use]
    pub fn candidates_path(&self) -> PathBuf {
        self.state_dir.join("candidates.jsonl")
    }

    /// Camino del cursor de reanudación.
    #[must_use]
    pub fn checkpoint_path(&self) -> PathBuf {
        self.state_dir.join("checkpoint.json")
    }
}
