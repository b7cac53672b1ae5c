/**
 * =================================================================
 * APARATO: GENERATOR ORDERING TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: PRIORIDAD DESCENDENTE ESTRICTA Y DETERMINISMO
 * =================================================================
 */

use kryptarch_domain_generation::AttackGenerator;
use kryptarch_domain_models::kryptos;
use kryptarch_domain_models::prelude::*;
use kryptarch_infra_ledger::{AttackLog, CoverageTracker};

fn k4() -> Ciphertext {
    Ciphertext::parse(kryptos::K4_CIPHERTEXT).expect("k4")
}

#[test]
fn certify_strictly_descending_priority() {
    let generator = AttackGenerator::default();
    let hints = vec![
        AdvisorHint::KeyLength { length: 10, confidence: 0.9 },
        AdvisorHint::TranspositionPeriod { period: 7, confidence: 0.6 },
    ];

    let queue = generator.comprehensive(
        &k4(),
        &hints,
        &CoverageTracker::new(),
        &AttackLog::ephemeral(),
        500,
    );
    assert!(queue.len() > 30, "sweep must populate the queue");
    for window in queue.windows(2) {
        assert!(window[0].priority >= window[1].priority, "ORDERING_VIOLATION");
    }
}

#[test]
fn certify_hints_outrank_default_sweep() {
    let generator = AttackGenerator::default();
    let hints = vec![AdvisorHint::KeyLength { length: 10, confidence: 1.0 }];

    let queue = generator.comprehensive(
        &k4(),
        &hints,
        &CoverageTracker::new(),
        &AttackLog::ephemeral(),
        500,
    );
    assert!(queue[0].tags.contains(&"q-hint".to_string()));

    // Todo ataque de pista pura (sin cribs) supera a todo barrido puro.
    let worst_hint = queue
        .iter()
        .filter(|p| p.tags.contains(&"q-hint".to_string()))
        .map(|p| p.priority)
        .fold(f64::INFINITY, f64::min);
    let best_sweep = queue
        .iter()
        .filter(|p| p.tags.contains(&"default-sweep".to_string()))
        .map(|p| p.priority)
        .fold(0.0f64, f64::max);
    assert!(worst_hint > best_sweep);
}

#[test]
fn certify_repeated_calls_are_stable() {
    let generator = AttackGenerator::default();
    let coverage = CoverageTracker::new();
    let log = AttackLog::ephemeral();
    let hints = vec![AdvisorHint::Crib {
        fragment: "BERLIN".to_string(),
        position: Some(63),
        confidence: 0.95,
    }];

    let first = generator.comprehensive(&k4(), &hints, &coverage, &log, 300);
    let second = generator.comprehensive(&k4(), &hints, &coverage, &log, 300);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.fingerprint, b.fingerprint, "STABILITY_DRIFT");
        assert!((a.priority - b.priority).abs() < 1e-12);
    }
}

#[test]
fn certify_gap_targeting_prefers_virgin_regions() {
    let generator = AttackGenerator::default();
    let coverage = CoverageTracker::new();
    coverage.register_region("transposition/period-2", CipherFamily::ColumnarTransposition, 2, 0.4);
    coverage.record("transposition/period-2", 2, 0);

    let proposals = generator.from_gaps(
        &coverage,
        &[CipherFamily::ColumnarTransposition],
        5,
    );
    assert!(!proposals.is_empty());
    // La región saturada no puede encabezar la lista de brechas.
    assert_ne!(proposals[0].params.region_id(), "transposition/period-2");
    assert!(proposals[0].tags.contains(&"coverage-gap".to_string()));
}
