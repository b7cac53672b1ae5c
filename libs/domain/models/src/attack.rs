// [libs/domain/models/src/attack.rs]
/*!
 * =================================================================
 * APARATO: ATTACK PARAMETER CONTRACTS
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: DEFINICIÓN POLIMÓRFICA DEL ATAQUE CRIPTOANALÍTICO
 *
 * El conjunto de familias es cerrado: variantes etiquetadas con su
 * carga propia, de modo que el despacho de solvers sea exhaustivo
 * en compilación. Un composite es un árbol acotado de profundidad 2
 * por construcción (`validate` lo certifica).
 * =================================================================
 */

use std::collections::BTreeMap;

use kryptarch_core_ciphers::{HillMatrix, TableauAlphabet};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fingerprint::Fingerprint;

/// Familias de cifrado soportadas por la biblioteca de ataques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherFamily {
    Vigenere,
    ColumnarTransposition,
    Hill2x2,
    Hill3x3,
    MonoalphaSubstitution,
    Composite,
}

impl CipherFamily {
    /// Etiqueta estable usada en identificadores de región y filtros.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vigenere => "vigenere",
            Self::ColumnarTransposition => "columnar_transposition",
            Self::Hill2x2 => "hill_2x2",
            Self::Hill3x3 => "hill_3x3",
            Self::MonoalphaSubstitution => "monoalpha_substitution",
            Self::Composite => "composite",
        }
    }
}

/// Programa de enfriamiento del recocido simulado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schedule", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// T(t) = T₀ · (1 − t / N).
    Linear,
    /// T ← T · factor en cada paso.
    Geometric { factor: f64 },
}

/// Parámetros explícitos del recocido. Participan en la huella: dos
/// ataques con perfiles distintos son ataques distintos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingProfile {
    pub iterations: u64,
    pub restarts: u32,
    pub initial_temperature: f64,
    pub cooling: CoolingSchedule,
}

impl AnnealingProfile {
    /// Perfil de referencia de la campaña (aplicado por el generador).
    #[must_use]
    pub fn campaign_default() -> Self {
        Self {
            iterations: 50_000,
            restarts: 3,
            initial_temperature: 10.0,
            cooling: CoolingSchedule::Geometric { factor: 0.9995 },
        }
    }
}

/// Método de resolución elegido por el generador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodHint {
    Exhaustive,
    SimAnnealing { profile: AnnealingProfile },
    ConstraintDriven,
    FrequencyRecovery,
}

impl MethodHint {
    /// Etiqueta estable para despacho y registro.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::SimAnnealing { .. } => "sim_annealing",
            Self::ConstraintDriven => "constraint_driven",
            Self::FrequencyRecovery => "frequency_recovery",
        }
    }
}

/// Carga específica de familia del ataque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "spec", rename_all = "snake_case")]
pub enum KeySpec {
    /// Vigenère sobre tableau; `key` explícita fija el descifrado,
    /// ausente ordena recuperarla por frecuencia de columnas.
    Vigenere {
        key_length: usize,
        key: Option<String>,
        alphabet: TableauAlphabet,
    },
    /// Transposición columnar; `column_order` explícito fija la
    /// permutación, ausente ordena buscarla.
    ColumnarTransposition {
        period: usize,
        column_order: Option<Vec<usize>>,
    },
    /// Hill 2×2/3×3; `matrix` explícita fija la clave, ausente ordena
    /// derivarla desde los cribs.
    Hill {
        block_size: usize,
        matrix: Option<HillMatrix>,
    },
    /// Sustitución monoalfabética; `alphabet` explícito fija la clave,
    /// ausente ordena recuperarla por recocido.
    MonoalphaSubstitution { alphabet: Option<TableauAlphabet> },
    /// Par ordenado de etapas: el descifrado invierte primero la
    /// segunda etapa (última cifrada, primera descifrada).
    Composite {
        first_stage: Box<AttackParameters>,
        second_stage: Box<AttackParameters>,
    },
}

/// Espacio teórico de claves 2×2 invertibles mod 26 (|GL₂(ℤ/26)|).
pub const HILL_2X2_KEYSPACE: u128 = 157_248;
/// Espacio teórico de claves 3×3 invertibles mod 26 (|GL₃(ℤ/26)|).
pub const HILL_3X3_KEYSPACE: u128 = 1_634_038_189_056;

/// Factorial en precisión de 128 bits, saturante.
#[must_use]
pub fn factorial_u128(n: usize) -> u128 {
    (1..=n as u128).fold(1u128, |acc, k| acc.saturating_mul(k))
}

/// Parámetros completos e inmutables de un ataque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackParameters {
    pub key_spec: KeySpec,
    /// Posición de texto cifrado → letra plana esperada.
    pub crib_constraints: BTreeMap<usize, char>,
    pub method_hint: Option<MethodHint>,
}

impl AttackParameters {
    /// Parámetros sin cribs ni método, solo carga de familia.
    #[must_use]
    pub fn bare(key_spec: KeySpec) -> Self {
        Self {
            key_spec,
            crib_constraints: BTreeMap::new(),
            method_hint: None,
        }
    }

    /// Familia de cifrado de la carga.
    #[must_use]
    pub fn cipher_family(&self) -> CipherFamily {
        match &self.key_spec {
            KeySpec::Vigenere { .. } => CipherFamily::Vigenere,
            KeySpec::ColumnarTransposition { .. } => CipherFamily::ColumnarTransposition,
            KeySpec::Hill { block_size, .. } if *block_size == 2 => CipherFamily::Hill2x2,
            KeySpec::Hill { .. } => CipherFamily::Hill3x3,
            KeySpec::MonoalphaSubstitution { .. } => CipherFamily::MonoalphaSubstitution,
            KeySpec::Composite { .. } => CipherFamily::Composite,
        }
    }

    /// Huella canónica de 128 bits (identidad única del ataque).
    pub fn fingerprint(&self) -> Result<Fingerprint, ModelError> {
        Fingerprint::of(self)
    }

    /// Certifica la estructura: dimensiones soportadas, composites de
    /// profundidad 1 y permutaciones consistentes con el periodo.
    pub fn validate(&self) -> Result<(), ModelError> {
        match &self.key_spec {
            KeySpec::Vigenere { key_length, key, .. } => {
                if *key_length == 0 {
                    return Err(ModelError::InvalidParameters(
                        "vigenere key length must be positive".into(),
                    ));
                }
                if let Some(key) = key {
                    if key.len() != *key_length
                        || !key.bytes().all(|b| b.is_ascii_uppercase())
                    {
                        return Err(ModelError::InvalidParameters(
                            "explicit vigenere key disagrees with declared length".into(),
                        ));
                    }
                }
            }
            KeySpec::ColumnarTransposition { period, column_order } => {
                if *period == 0 {
                    return Err(ModelError::InvalidParameters(
                        "transposition period must be positive".into(),
                    ));
                }
                if let Some(order) = column_order {
                    if order.len() != *period {
                        return Err(ModelError::InvalidParameters(
                            "explicit column order disagrees with declared period".into(),
                        ));
                    }
                }
            }
            KeySpec::Hill { block_size, matrix } => {
                if *block_size != 2 && *block_size != 3 {
                    return Err(ModelError::InvalidParameters(format!(
                        "unsupported hill block size {block_size}"
                    )));
                }
                if let Some(matrix) = matrix {
                    if matrix.size != *block_size {
                        return Err(ModelError::InvalidParameters(
                            "explicit hill matrix disagrees with declared block size".into(),
                        ));
                    }
                }
            }
            KeySpec::MonoalphaSubstitution { .. } => {}
            KeySpec::Composite { first_stage, second_stage } => {
                for stage in [first_stage.as_ref(), second_stage.as_ref()] {
                    if matches!(stage.key_spec, KeySpec::Composite { .. }) {
                        return Err(ModelError::InvalidParameters(
                            "composite stages must not nest further composites".into(),
                        ));
                    }
                    stage.validate()?;
                }
            }
        }
        Ok(())
    }

    /// Identificador estable de la región del espacio de claves que
    /// este ataque explora.
    #[must_use]
    pub fn region_id(&self) -> String {
        match &self.key_spec {
            KeySpec::Vigenere { key_length, alphabet, .. } => {
                let tableau_label = if alphabet.is_standard() {
                    "standard".to_string()
                } else {
                    alphabet.letters()
                };
                format!("vigenere/len-{key_length}/{tableau_label}")
            }
            KeySpec::ColumnarTransposition { period, .. } => {
                format!("transposition/period-{period}")
            }
            KeySpec::Hill { block_size, .. } => format!("hill/{block_size}x{block_size}"),
            KeySpec::MonoalphaSubstitution { .. } => "monoalpha".to_string(),
            KeySpec::Composite { first_stage, second_stage } => format!(
                "composite/{}+{}",
                first_stage.cipher_family().label(),
                second_stage.cipher_family().label()
            ),
        }
    }

    /// Tamaño teórico de la región (entero de 128 bits, saturante).
    #[must_use]
    pub fn region_size(&self) -> u128 {
        match &self.key_spec {
            KeySpec::Vigenere { key_length, .. } => {
                26u128.saturating_pow((*key_length).min(27) as u32)
            }
            KeySpec::ColumnarTransposition { period, .. } => factorial_u128(*period),
            KeySpec::Hill { block_size, .. } => {
                if *block_size == 2 {
                    HILL_2X2_KEYSPACE
                } else {
                    HILL_3X3_KEYSPACE
                }
            }
            KeySpec::MonoalphaSubstitution { .. } => factorial_u128(26),
            KeySpec::Composite { first_stage, second_stage } => first_stage
                .region_size()
                .saturating_mul(second_stage.region_size()),
        }
    }
}
