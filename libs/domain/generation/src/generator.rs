// [libs/domain/generation/src/generator.rs]
/*!
 * =================================================================
 * APARATO: ATTACK GENERATOR
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: EXPANSIÓN DE PISTAS Y BRECHAS EN ATAQUES CONCRETOS
 *
 * Determinismo: con pistas, cobertura y libro mayor idénticos, la
 * cola resultante es idéntica entre llamadas. El orden es prioridad
 * estrictamente descendente; los empates se rompen por región menos
 * explorada y después por huella.
 *
 * El índice de coincidencia del propio texto cifrado sesga el
 * énfasis de familia: IC alto apunta a transposición/sustitución
 * (preservan frecuencias), IC plano apunta a polialfabéticos.
 * =================================================================
 */

use std::collections::{BTreeMap, HashMap};

use kryptarch_core_ciphers::TableauAlphabet;
use kryptarch_core_scoring::Scorer;
use kryptarch_domain_models::kryptos;
use kryptarch_domain_models::prelude::*;
use kryptarch_infra_ledger::{AttackLog, CoverageTracker};
use tracing::{debug, warn};

use crate::priority::{gap_weight, hint_weight, priority, DEFAULT_SWEEP_WEIGHT};

/// IC por encima del cual las familias que preservan frecuencias
/// (transposición, sustitución) reciben el sesgo positivo.
const FREQUENCY_PRESERVING_IC: f64 = 0.055;

/// Ataque propuesto con su prioridad y procedencia.
#[derive(Debug, Clone)]
pub struct PrioritizedAttack {
    pub params: AttackParameters,
    pub fingerprint: Fingerprint,
    pub priority: f64,
    /// Marcas de procedencia (`q-hint`, `coverage-gap`, `default-sweep`, `crib:...`).
    pub tags: Vec<String>,
    /// Claves ya probadas en la región del ataque (desempate).
    pub region_explored: u64,
}

/// Configuración del barrido por defecto.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub vigenere_lengths: std::ops::RangeInclusive<usize>,
    pub transposition_periods: std::ops::RangeInclusive<usize>,
    pub include_monoalpha: bool,
    pub include_composites: bool,
    /// Tableau clavado adicional al alfabeto estándar.
    pub keyed_tableau: Option<TableauAlphabet>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vigenere_lengths: 3..=15,
            transposition_periods: 2..=12,
            include_monoalpha: true,
            include_composites: true,
            keyed_tableau: kryptos::sculpture_tableau().ok(),
        }
    }
}

/// Generador determinista de ataques.
pub struct AttackGenerator {
    config: GeneratorConfig,
}

impl Default for AttackGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl AttackGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Expande pistas directas del asesor en ataques priorizados.
    #[must_use]
    pub fn from_hints(
        &self,
        ciphertext: &Ciphertext,
        hints: &[AdvisorHint],
    ) -> Vec<PrioritizedAttack> {
        let crib_map = positioned_crib_map(ciphertext, hints);
        let crib_tags: Vec<String> = hints
            .iter()
            .filter_map(|hint| match hint {
                AdvisorHint::Crib { fragment, .. } => Some(format!("crib:{fragment}")),
                _ => None,
            })
            .collect();

        let mut proposals = Vec::new();
        for hint in hints {
            match hint {
                AdvisorHint::KeyLength { length, .. } => {
                    for alphabet in self.tableau_variants() {
                        let mut params = AttackParameters::bare(KeySpec::Vigenere {
                            key_length: *length,
                            key: None,
                            alphabet,
                        });
                        params.method_hint = Some(if crib_map.is_empty() {
                            MethodHint::FrequencyRecovery
                        } else {
                            MethodHint::ConstraintDriven
                        });
                        params.crib_constraints = crib_map.clone();
                        let mut tags = vec!["q-hint".to_string()];
                        tags.extend(crib_tags.iter().cloned());
                        self.push_proposal(
                            &mut proposals,
                            params,
                            hint_weight(hint.confidence()),
                            &tags,
                        );
                    }
                }
                AdvisorHint::TranspositionPeriod { period, .. } => {
                    let mut params = AttackParameters::bare(KeySpec::ColumnarTransposition {
                        period: *period,
                        column_order: None,
                    });
                    params.method_hint = Some(if *period <= 8 {
                        MethodHint::Exhaustive
                    } else {
                        MethodHint::SimAnnealing {
                            profile: AnnealingProfile::campaign_default(),
                        }
                    });
                    self.push_proposal(
                        &mut proposals,
                        params,
                        hint_weight(hint.confidence()),
                        &["q-hint".to_string()],
                    );
                }
                AdvisorHint::Crib { .. } => {
                    // Los cribs posicionados habilitan la derivación de Hill.
                    for block_size in [2usize, 3] {
                        if crib_map.is_empty() {
                            continue;
                        }
                        let mut params = AttackParameters::bare(KeySpec::Hill {
                            block_size,
                            matrix: None,
                        });
                        params.method_hint = Some(MethodHint::ConstraintDriven);
                        params.crib_constraints = crib_map.clone();
                        let mut tags = vec!["q-hint".to_string()];
                        tags.extend(crib_tags.iter().cloned());
                        self.push_proposal(
                            &mut proposals,
                            params,
                            hint_weight(hint.confidence()),
                            &tags,
                        );
                    }
                }
                AdvisorHint::FamilyEmphasis { family, .. } => {
                    for params in self.default_sweep_for_family(*family, &crib_map) {
                        self.push_proposal(
                            &mut proposals,
                            params,
                            hint_weight(hint.confidence()),
                            &["q-hint".to_string()],
                        );
                    }
                }
            }
        }
        proposals
    }

    /// Propone ataques hacia las regiones menos exploradas.
    #[must_use]
    pub fn from_gaps(
        &self,
        coverage: &CoverageTracker,
        families: &[CipherFamily],
        limit: usize,
    ) -> Vec<PrioritizedAttack> {
        let mut proposals = Vec::new();
        for family in families {
            for params in self.default_sweep_for_family(*family, &BTreeMap::new()) {
                let ratio = coverage.coverage(&params.region_id()).unwrap_or(0.0);
                self.push_proposal(
                    &mut proposals,
                    params,
                    gap_weight(ratio),
                    &["coverage-gap".to_string()],
                );
            }
        }
        // Brecha más grande primero; el recorte respeta el límite pedido.
        proposals.sort_by(compare_proposals);
        proposals.truncate(limit);
        proposals
    }

    /// Cola completa: pistas + brechas + barrido por defecto, fusionada,
    /// deduplicada (dentro del lote y contra el libro mayor) y ordenada.
    #[must_use]
    pub fn comprehensive(
        &self,
        ciphertext: &Ciphertext,
        hints: &[AdvisorHint],
        coverage: &CoverageTracker,
        log: &AttackLog,
        limit: usize,
    ) -> Vec<PrioritizedAttack> {
        let scorer = Scorer::new(kryptarch_core_scoring::ReferenceTables::degenerate_uniform());
        let observed_ic = scorer.index_of_coincidence(&ciphertext.to_text());

        let mut proposals = self.from_hints(ciphertext, hints);

        // Barrido por defecto con sesgo de IC por familia.
        let crib_map = positioned_crib_map(ciphertext, hints);
        for family in [
            CipherFamily::Vigenere,
            CipherFamily::ColumnarTransposition,
            CipherFamily::Hill2x2,
            CipherFamily::Hill3x3,
            CipherFamily::MonoalphaSubstitution,
            CipherFamily::Composite,
        ] {
            let bias = family_ic_bias(family, observed_ic);
            for params in self.default_sweep_for_family(family, &crib_map) {
                self.push_proposal(
                    &mut proposals,
                    params,
                    DEFAULT_SWEEP_WEIGHT * bias,
                    &["default-sweep".to_string()],
                );
            }
        }

        // Enriquecimiento con cobertura: desempate por región explorada.
        for proposal in &mut proposals {
            if let Some(region) = coverage
                .all_regions()
                .into_iter()
                .find(|region| region.region_id == proposal.params.region_id())
            {
                proposal.region_explored = region.explored_count;
            }
        }

        // 1. DEDUP INTRA-LOTE: conserva la copia de mayor prioridad.
        let mut best_by_fingerprint: HashMap<Fingerprint, PrioritizedAttack> = HashMap::new();
        for proposal in proposals {
            match best_by_fingerprint.get(&proposal.fingerprint) {
                Some(existing) if existing.priority >= proposal.priority => {}
                _ => {
                    best_by_fingerprint.insert(proposal.fingerprint.clone(), proposal);
                }
            }
        }

        // 2. DEDUP CONTRA EL LIBRO MAYOR: lo ya intentado no vuelve.
        let mut queue: Vec<PrioritizedAttack> = best_by_fingerprint
            .into_values()
            .filter(|proposal| !log.is_duplicate(&proposal.fingerprint))
            .collect();

        queue.sort_by(compare_proposals);
        queue.truncate(limit);
        debug!(
            "🗺️ [GENERATOR]: Comprehensive queue sealed with {} attacks (ic={:.4}).",
            queue.len(),
            observed_ic
        );
        queue
    }

    // --- EXPANSIÓN INTERNA ---

    fn tableau_variants(&self) -> Vec<TableauAlphabet> {
        let mut variants = vec![TableauAlphabet::standard()];
        if let Some(keyed) = &self.config.keyed_tableau {
            variants.push(keyed.clone());
        }
        variants
    }

    /// Barrido por defecto de una familia, con cribs posicionados
    /// cuando la familia los necesita.
    fn default_sweep_for_family(
        &self,
        family: CipherFamily,
        crib_map: &BTreeMap<usize, char>,
    ) -> Vec<AttackParameters> {
        let mut sweep = Vec::new();
        match family {
            CipherFamily::Vigenere => {
                for key_length in self.config.vigenere_lengths.clone() {
                    for alphabet in self.tableau_variants() {
                        let mut params = AttackParameters::bare(KeySpec::Vigenere {
                            key_length,
                            key: None,
                            alphabet,
                        });
                        params.method_hint = Some(MethodHint::FrequencyRecovery);
                        sweep.push(params);
                    }
                }
            }
            CipherFamily::ColumnarTransposition => {
                for period in self.config.transposition_periods.clone() {
                    let mut params = AttackParameters::bare(KeySpec::ColumnarTransposition {
                        period,
                        column_order: None,
                    });
                    params.method_hint = Some(if period <= 8 {
                        MethodHint::Exhaustive
                    } else {
                        MethodHint::SimAnnealing {
                            profile: AnnealingProfile::campaign_default(),
                        }
                    });
                    sweep.push(params);
                }
            }
            CipherFamily::Hill2x2 | CipherFamily::Hill3x3 => {
                // Sin cribs posicionados no hay sistema lineal que derivar.
                if crib_map.is_empty() {
                    return sweep;
                }
                let block_size = if family == CipherFamily::Hill2x2 { 2 } else { 3 };
                let mut params = AttackParameters::bare(KeySpec::Hill {
                    block_size,
                    matrix: None,
                });
                params.method_hint = Some(MethodHint::ConstraintDriven);
                params.crib_constraints = crib_map.clone();
                sweep.push(params);
            }
            CipherFamily::MonoalphaSubstitution => {
                if self.config.include_monoalpha {
                    let mut params =
                        AttackParameters::bare(KeySpec::MonoalphaSubstitution { alphabet: None });
                    params.method_hint = Some(MethodHint::SimAnnealing {
                        profile: AnnealingProfile::campaign_default(),
                    });
                    sweep.push(params);
                }
            }
            CipherFamily::Composite => {
                if !self.config.include_composites {
                    return sweep;
                }
                // Conjunto acotado: transposición corta encadenada con
                // Vigenère corto, en ambos órdenes de cifrado.
                for period in [3usize, 4] {
                    for key_length in [5usize, 7] {
                        let transposition =
                            AttackParameters::bare(KeySpec::ColumnarTransposition {
                                period,
                                column_order: None,
                            });
                        let vigenere = AttackParameters::bare(KeySpec::Vigenere {
                            key_length,
                            key: None,
                            alphabet: TableauAlphabet::standard(),
                        });
                        sweep.push(AttackParameters::bare(KeySpec::Composite {
                            first_stage: Box::new(vigenere.clone()),
                            second_stage: Box::new(transposition.clone()),
                        }));
                        sweep.push(AttackParameters::bare(KeySpec::Composite {
                            first_stage: Box::new(transposition),
                            second_stage: Box::new(vigenere),
                        }));
                    }
                }
            }
        }
        sweep
    }

    fn push_proposal(
        &self,
        proposals: &mut Vec<PrioritizedAttack>,
        params: AttackParameters,
        source_weight: f64,
        tags: &[String],
    ) {
        let crib_alignment = if params.crib_constraints.is_empty() { 0.0 } else { 1.0 };
        match params.fingerprint() {
            Ok(fingerprint) => proposals.push(PrioritizedAttack {
                priority: priority(source_weight, crib_alignment),
                fingerprint,
                params,
                tags: tags.to_vec(),
                region_explored: 0,
            }),
            Err(fault) => warn!("⚠️ [GENERATOR]: Unfingerprintable proposal dropped ({fault})."),
        }
    }
}

/// Orden canónico de la cola: prioridad descendente, región menos
/// explorada primero, huella como desempate final estable.
fn compare_proposals(a: &PrioritizedAttack, b: &PrioritizedAttack) -> std::cmp::Ordering {
    b.priority
        .partial_cmp(&a.priority)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| a.region_explored.cmp(&b.region_explored))
        .then_with(|| a.fingerprint.cmp(&b.fingerprint))
}

/// Mapa posición → letra plana desde los cribs posicionados cuyos
/// fragmentos caben dentro del texto cifrado.
fn positioned_crib_map(ciphertext: &Ciphertext, hints: &[AdvisorHint]) -> BTreeMap<usize, char> {
    let mut map = BTreeMap::new();
    for hint in hints {
        if let AdvisorHint::Crib {
            fragment,
            position: Some(position),
            ..
        } = hint
        {
            if position + fragment.len() > ciphertext.len() {
                continue;
            }
            for (offset, letter) in fragment.chars().enumerate() {
                map.entry(position + offset).or_insert(letter.to_ascii_uppercase());
            }
        }
    }
    map
}

/// Sesgo de familia según el IC observado del texto cifrado.
fn family_ic_bias(family: CipherFamily, observed_ic: f64) -> f64 {
    let frequency_preserving = matches!(
        family,
        CipherFamily::ColumnarTransposition | CipherFamily::MonoalphaSubstitution
    );
    if observed_ic >= FREQUENCY_PRESERVING_IC {
        if frequency_preserving { 1.1 } else { 0.9 }
    } else if frequency_preserving {
        0.9
    } else {
        1.1
    }
}
