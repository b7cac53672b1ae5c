// [libs/domain/models/src/hints.rs]
/*!
 * APARATO: ADVISOR HINT CONTRACT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: PISTAS ESTRUCTURADAS DEL ASESOR EXTERNO
 *
 * El asesor es opaco: el núcleo solo conoce esta forma. Las pistas
 * influyen en la prioridad de los ataques generados, nunca en la
 * corrección del motor; una campaña sin asesor opera igual.
 */

use serde::{Deserialize, Serialize};

use crate::attack::CipherFamily;

/// Pista estructurada con confianza en [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdvisorHint {
    /// Longitud de clave Vigenère sugerida (análisis de frecuencia/IC).
    KeyLength { length: usize, confidence: f64 },
    /// Periodo de transposición sugerido.
    TranspositionPeriod { period: usize, confidence: f64 },
    /// Fragmento de texto plano conocido con posición probable.
    Crib {
        fragment: String,
        position: Option<usize>,
        confidence: f64,
    },
    /// Familia de cifrado a enfatizar.
    FamilyEmphasis {
        family: CipherFamily,
        confidence: f64,
    },
}

impl AdvisorHint {
    /// Confianza declarada, saturada a [0, 1].
    #[must_use]
    pub fn confidence(&self) -> f64 {
        let raw = match self {
            Self::KeyLength { confidence, .. }
            | Self::TranspositionPeriod { confidence, .. }
            | Self::Crib { confidence, .. }
            | Self::FamilyEmphasis { confidence, .. } => *confidence,
        };
        raw.clamp(0.0, 1.0)
    }
}
