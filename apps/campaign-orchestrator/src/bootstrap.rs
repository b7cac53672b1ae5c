// [apps/campaign-orchestrator/src/bootstrap.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN BOOTSTRAP
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: IGNICIÓN DEL ESTADO COMPLETO DE LA CAMPAÑA
 *
 * Orden de hidratación: texto cifrado → tablas de referencia →
 * libro mayor (replay) → cobertura (instantánea previa o vacía) →
 * bóveda → cursor. Los fallos se clasifican para que el binario
 * mapee códigos de salida: entrada malformada (3), E/S fatal (2).
 * =================================================================
 */

use std::sync::Arc;

use kryptarch_core_scoring::{CribSpec, ReferenceTables, Scorer, ScoringError};
use kryptarch_domain_models::{kryptos, AdvisorHint, Ciphertext, ModelError};
use kryptarch_domain_validation::{ValidationThresholds, Validator};
use kryptarch_infra_ledger::{
    AttackLog, CandidateVault, CheckpointCursor, CoverageTracker, LedgerError,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::CampaignConfig;

/// Fallos de arranque y campaña, clasificados por código de salida.
#[derive(Debug, Error)]
pub enum CampaignError {
    /// Entrada malformada: texto cifrado o tabla obligatoria. Salida 3.
    #[error("malformed input: {0}")]
    Input(#[from] ModelError),

    /// Tablas de referencia ilegibles o corruptas. Salida 3.
    #[error("reference tables: {0}")]
    Tables(#[from] ScoringError),

    /// E/S fatal sobre el estado persistente. Salida 2.
    #[error("persistent state: {0}")]
    Ledger(#[from] LedgerError),
}

impl CampaignError {
    /// Código de salida del proceso según la taxonomía de fallos.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Tables(_) => 3,
            Self::Ledger(_) => 2,
        }
    }
}

/// Estado completo e hidratado de la campaña.
pub struct CampaignState {
    pub ciphertext: Ciphertext,
    pub scorer: Arc<Scorer>,
    pub log: Arc<AttackLog>,
    pub coverage: Arc<CoverageTracker>,
    pub vault: CandidateVault,
    pub validator: Validator,
    pub resume_cursor: Option<CheckpointCursor>,
}

/// Hidrata el estado de campaña completo.
pub fn ignite(config: &CampaignConfig, hints: &[AdvisorHint]) -> Result<CampaignState, CampaignError> {
    // 1. TEXTO CIFRADO (entrada vacía o ilegible es fatal)
    let ciphertext = Ciphertext::from_file(&config.ciphertext_path)?;
    info!(
        "🎯 [BOOTSTRAP]: Target ciphertext ingested ({} letters).",
        ciphertext.len()
    );

    // 2. TABLAS DE REFERENCIA
    let tables = ReferenceTables::load(&config.data_dir)?;
    let scorer = Arc::new(Scorer::new(tables));

    // 3. DIRECTORIO DE ESTADO
    std::fs::create_dir_all(&config.state_dir).map_err(|source| {
        LedgerError::Io {
            path: config.state_dir.clone(),
            source,
        }
    })?;

    // 4. LIBRO MAYOR (REPLAY) + COBERTURA + BÓVEDA + CURSOR
    let log = Arc::new(AttackLog::open(&config.attack_log_path())?);
    let coverage = if config.coverage_path().exists() {
        Arc::new(CoverageTracker::load(&config.coverage_path())?)
    } else {
        Arc::new(CoverageTracker::new())
    };
    let vault = CandidateVault::open(&config.candidates_path())?;
    let resume_cursor = if config.resume {
        CheckpointCursor::load(&config.checkpoint_path())?
    } else {
        None
    };
    if config.resume && resume_cursor.is_none() {
        warn!("⚠️ [BOOTSTRAP]: Resume requested but no checkpoint cursor found. Fresh start.");
    }

    // 5. VALIDADOR CON LOS CRIBS DE LA CAMPAÑA
    let validator = Validator::new(
        ValidationThresholds::with_promotion(config.promotion_threshold),
        campaign_cribs(&ciphertext, hints),
    );

    info!(
        "🚀 [BOOTSTRAP]: Campaign state levelized ({} prior records, {} promoted).",
        log.len(),
        vault.len()
    );

    Ok(CampaignState {
        ciphertext,
        scorer,
        log,
        coverage,
        vault,
        validator,
        resume_cursor,
    })
}

/// Lista de cribs de la campaña: pistas del asesor más los cribs
/// confirmados del panel cuando el objetivo es K4.
fn campaign_cribs(ciphertext: &Ciphertext, hints: &[AdvisorHint]) -> Vec<CribSpec> {
    let mut cribs: Vec<CribSpec> = hints
        .iter()
        .filter_map(|hint| match hint {
            AdvisorHint::Crib {
                fragment,
                position: Some(position),
                ..
            } => Some(CribSpec::anchored(fragment, *position)),
            AdvisorHint::Crib {
                fragment,
                position: None,
                ..
            } => Some(CribSpec::floating(fragment)),
            _ => None,
        })
        .collect();

    if ciphertext.to_text() == kryptos::K4_CIPHERTEXT {
        for (fragment, position) in kryptos::k4_confirmed_cribs() {
            let spec = CribSpec::anchored(fragment, position);
            if !cribs.contains(&spec) {
                cribs.push(spec);
            }
        }
    }
    cribs
}
