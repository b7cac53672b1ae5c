/**
 * =================================================================
 * APARATO: CASCADE CALIBRATION TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: CALIBRACIÓN DEL VALIDADOR SOBRE TABLAS REALES
 *
 * Escenarios de calibración: el pangrama inglés debe puntuar al
 * menos 0.55; la tira uniforme como máximo 0.10; el texto plano
 * verdadero de K1 debe alcanzar 0.6 de confianza.
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_core_scoring::{CribSpec, ReferenceTables, Scorer};
use kryptarch_domain_models::{Candidate, Fingerprint, Provenance, ScoreBreakdown};
use kryptarch_domain_validation::{ValidationThresholds, Validator};

const K1_PLAINTEXT: &str =
    "BETWEENSUBTLESHADINGANDTHEABSENCEOFLIGHTLIESTHENUANCEOFIQLUSION";

fn real_scorer() -> Scorer {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    Scorer::new(ReferenceTables::load(&data_dir).expect("repository data directory"))
}

fn raw_candidate(plaintext: &str) -> Candidate {
    Candidate {
        plaintext: plaintext.to_string(),
        confidence: 0.0,
        scores: ScoreBreakdown::default(),
        provenance: Provenance {
            attack_fingerprint: Fingerprint::of(&plaintext).expect("fp"),
            solver: "calibration".to_string(),
            elapsed_ms: 0,
        },
    }
}

#[test]
fn certify_pangram_clears_calibration_floor() {
    let validator = Validator::new(ValidationThresholds::default(), vec![]);
    let verdict = validator.validate(
        &real_scorer(),
        raw_candidate("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"),
    );
    assert!(
        verdict.candidate().confidence >= 0.55,
        "pangram fell to {:.3}",
        verdict.candidate().confidence
    );
    assert!(verdict.is_promoted());
}

#[test]
fn certify_uniform_run_stays_on_the_floor() {
    let validator = Validator::new(ValidationThresholds::default(), vec![]);
    let verdict = validator.validate(
        &real_scorer(),
        raw_candidate("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
    );
    assert!(
        verdict.candidate().confidence <= 0.10,
        "uniform run rose to {:.3}",
        verdict.candidate().confidence
    );
    assert!(!verdict.is_promoted());
}

#[test]
fn certify_k1_ground_truth_reaches_promotion_band() {
    let validator = Validator::new(ValidationThresholds::default(), vec![]);
    let verdict = validator.validate(&real_scorer(), raw_candidate(K1_PLAINTEXT));
    assert!(
        verdict.candidate().confidence >= 0.6,
        "K1 ground truth fell to {:.3}",
        verdict.candidate().confidence
    );
}

#[test]
fn certify_sub_scores_are_retained_on_rejection() {
    let validator = Validator::new(ValidationThresholds::default(), vec![]);
    // Consonantes sin estructura: rechazo con sub-puntuaciones visibles.
    let verdict = validator.validate(&real_scorer(), raw_candidate("QZXKWVJQZXKWVJQZXKWVJ"));
    assert!(!verdict.is_promoted());
    let scores = verdict.candidate().scores;
    assert!(scores.frequency >= 0.0 && scores.frequency <= 1.0);
}

#[test]
fn certify_anchored_crib_dominates_coverage_fallback() {
    let cribs = vec![CribSpec::anchored("BERLIN", 0)];
    let validator = Validator::new(ValidationThresholds::default(), cribs);
    let scorer = real_scorer();

    let verdict = validator.validate(&scorer, raw_candidate("BERLINSTREETSATENIGHTFALL"));
    assert!((verdict.candidate().scores.crib - 1.0).abs() < 1e-9);
}
