// [libs/domain/validation/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CANDIDATE VALIDATOR
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: CASCADA DE VALIDACIÓN Y CONFIANZA COMPUESTA
 *
 * Cuatro etapas con umbrales (0.30, 0.50, 0.50, 0.50):
 *   1. Filtro rápido de frecuencia (rechaza la masa de basura).
 *   2. Evidencia de cribs: máximo entre el mejor crib posicional
 *      (descartado bajo el umbral de calidad) y la cobertura de
 *      diccionario. No rechaza: una campaña sin cribs valida igual.
 *   3. Plausibilidad lingüística.
 *   4. Confianza compuesta 0.4·freq + 0.3·crib + 0.3·ling; la
 *      promoción es monótona en la confianza.
 *
 * Las sub-puntuaciones quedan retenidas en el candidato también
 * cuando la cascada lo rechaza.
 * =================================================================
 */

use kryptarch_core_scoring::{CribSpec, Scorer};
use kryptarch_domain_models::{Candidate, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Umbrales de la cascada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationThresholds {
    /// Etapa 1: ajuste de frecuencia mínimo.
    pub frequency_floor: f64,
    /// Etapa 2: calidad mínima de un crib posicional para acreditarse.
    pub crib_quality_floor: f64,
    /// Etapa 3: plausibilidad lingüística mínima.
    pub linguistic_floor: f64,
    /// Etapa 4: confianza compuesta de promoción.
    pub promotion: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            frequency_floor: 0.30,
            crib_quality_floor: 0.50,
            linguistic_floor: 0.50,
            promotion: 0.50,
        }
    }
}

impl ValidationThresholds {
    /// Umbrales por defecto con promoción ajustada por el operador.
    #[must_use]
    pub fn with_promotion(promotion: f64) -> Self {
        Self {
            promotion: promotion.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

/// Etapa que rechazó un candidato.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionStage {
    FrequencyGate,
    LinguisticGate,
    BelowPromotion,
}

/// Resultado de la cascada sobre un candidato.
#[derive(Debug, Clone)]
pub enum ValidationVerdict {
    /// Cruzó la promoción; el candidato lleva confianza y sub-puntuaciones finales.
    Promoted(Candidate),
    /// Rechazado en una etapa; las sub-puntuaciones calculadas se retienen.
    Rejected {
        stage: RejectionStage,
        candidate: Candidate,
    },
}

impl ValidationVerdict {
    /// Candidato subyacente, promovido o no.
    #[must_use]
    pub fn candidate(&self) -> &Candidate {
        match self {
            Self::Promoted(candidate) => candidate,
            Self::Rejected { candidate, .. } => candidate,
        }
    }

    #[must_use]
    pub fn is_promoted(&self) -> bool {
        matches!(self, Self::Promoted(_))
    }
}

/// Validador de campaña: umbrales + lista de cribs conocidos.
pub struct Validator {
    thresholds: ValidationThresholds,
    campaign_cribs: Vec<CribSpec>,
}

impl Validator {
    #[must_use]
    pub fn new(thresholds: ValidationThresholds, campaign_cribs: Vec<CribSpec>) -> Self {
        Self {
            thresholds,
            campaign_cribs,
        }
    }

    /// Ejecuta la cascada completa sobre un candidato crudo.
    #[must_use]
    pub fn validate(&self, scorer: &Scorer, mut candidate: Candidate) -> ValidationVerdict {
        // ETAPA 1: FILTRO RÁPIDO DE FRECUENCIA
        let frequency = scorer.dictionary_fit(&candidate.plaintext);
        candidate.scores.frequency = frequency;
        if frequency < self.thresholds.frequency_floor {
            candidate.confidence = 0.0;
            return ValidationVerdict::Rejected {
                stage: RejectionStage::FrequencyGate,
                candidate,
            };
        }

        // ETAPA 2: EVIDENCIA DE CRIBS (NO RECHAZA)
        let positional = scorer.crib_evidence(&candidate.plaintext, &self.campaign_cribs);
        let positional = if positional >= self.thresholds.crib_quality_floor {
            positional
        } else {
            0.0
        };
        let coverage = scorer.word_coverage(&candidate.plaintext);
        let crib = positional.max(coverage);
        candidate.scores.crib = crib;

        // ETAPA 3: PLAUSIBILIDAD LINGÜÍSTICA
        let linguistic = scorer.linguistic_plausibility(&candidate.plaintext);
        candidate.scores.linguistic = linguistic;
        if linguistic < self.thresholds.linguistic_floor {
            candidate.confidence = compose(&candidate.scores);
            return ValidationVerdict::Rejected {
                stage: RejectionStage::LinguisticGate,
                candidate,
            };
        }

        // ETAPA 4: CONFIANZA COMPUESTA Y PROMOCIÓN
        candidate.confidence = compose(&candidate.scores);
        if candidate.confidence < self.thresholds.promotion {
            return ValidationVerdict::Rejected {
                stage: RejectionStage::BelowPromotion,
                candidate,
            };
        }

        debug!(
            "🏆 [VALIDATOR]: Promoted candidate at {:.3} (freq {:.2} / crib {:.2} / ling {:.2}).",
            candidate.confidence,
            candidate.scores.frequency,
            candidate.scores.crib,
            candidate.scores.linguistic
        );
        ValidationVerdict::Promoted(candidate)
    }
}

/// Composición de confianza: 0.4·frecuencia + 0.3·crib + 0.3·lingüística.
#[must_use]
pub fn compose(scores: &ScoreBreakdown) -> f64 {
    (0.4 * scores.frequency + 0.3 * scores.crib + 0.3 * scores.linguistic).clamp(0.0, 1.0)
}
