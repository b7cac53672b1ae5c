/**
 * =================================================================
 * APARATO: EXECUTOR DISPATCH TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: CERTIFICACIÓN DEL DESPACHO POLIMÓRFICO
 * =================================================================
 */

use std::path::PathBuf;
use std::time::Duration;

use kryptarch_core_ciphers::TableauAlphabet;
use kryptarch_core_scoring::{ReferenceTables, Scorer};
use kryptarch_domain_models::prelude::*;
use kryptarch_domain_solvers::{CancellationToken, SolverBudget, SolverExecutor};

fn real_scorer() -> Scorer {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    Scorer::new(ReferenceTables::load(&data_dir).expect("repository data directory"))
}

#[test]
fn certify_family_to_engine_routing() {
    let scorer = real_scorer();
    let ciphertext = Ciphertext::parse("OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOT").expect("ciphertext");

    let cases: Vec<(AttackParameters, &str)> = vec![
        (
            AttackParameters::bare(KeySpec::Vigenere {
                key_length: 4,
                key: None,
                alphabet: TableauAlphabet::standard(),
            }),
            "vigenere_frequency",
        ),
        (
            AttackParameters::bare(KeySpec::ColumnarTransposition {
                period: 4,
                column_order: None,
            }),
            "exhaustive_permutation",
        ),
        (
            {
                let mut params = AttackParameters::bare(KeySpec::ColumnarTransposition {
                    period: 10,
                    column_order: None,
                });
                params.method_hint = Some(MethodHint::SimAnnealing {
                    profile: AnnealingProfile {
                        iterations: 200,
                        restarts: 1,
                        initial_temperature: 5.0,
                        cooling: CoolingSchedule::Linear,
                    },
                });
                params
            },
            "transposition_annealing",
        ),
        (
            AttackParameters::bare(KeySpec::MonoalphaSubstitution {
                alphabet: Some(TableauAlphabet::standard()),
            }),
            "monoalpha_annealing",
        ),
    ];

    for (params, expected_engine) in cases {
        let verdict = SolverExecutor::execute(
            &ciphertext,
            &params,
            &scorer,
            &SolverBudget::unbounded(0),
        );
        assert_eq!(verdict.solver, expected_engine, "DISPATCH_DRIFT");
        assert!(verdict.failure_detail.is_none());
        assert_eq!(verdict.attack_fingerprint, params.fingerprint().expect("fp"));
    }
}

#[test]
fn certify_insufficient_hill_cribs_is_failure_not_panic() {
    let scorer = real_scorer();
    let ciphertext = Ciphertext::parse("OBKRUOXOGHUL").expect("ciphertext");
    let params = AttackParameters::bare(KeySpec::Hill {
        block_size: 2,
        matrix: None,
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &scorer,
        &SolverBudget::unbounded(0),
    );
    assert!(verdict.failure_detail.is_some(), "fault must be sealed, not thrown");
    assert!(verdict.candidates.is_empty());
}

#[test]
fn certify_expired_deadline_seals_timeout() {
    let scorer = real_scorer();
    let ciphertext = Ciphertext::parse("SGNIKCATTAEHTNWODNWADTAKCATTA").expect("ciphertext");
    let mut params = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 9,
        column_order: None,
    });
    params.method_hint = Some(MethodHint::SimAnnealing {
        profile: AnnealingProfile::campaign_default(),
    });

    // Plazo ya vencido: el motor debe retornar de inmediato.
    let budget = SolverBudget::with_deadline(0, Duration::from_secs(0), CancellationToken::new());
    let verdict = SolverExecutor::execute(&ciphertext, &params, &scorer, &budget);
    assert_eq!(verdict.abort_reason.as_deref(), Some("timeout"));
}

#[test]
fn certify_candidates_sorted_descending() {
    let scorer = real_scorer();
    let ciphertext = Ciphertext::parse("EHTKCIUQNWORBXOFSPMUJREVOEHTYZAL").expect("ciphertext");
    let params = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 4,
        column_order: None,
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &scorer,
        &SolverBudget::unbounded(0),
    );
    for window in verdict.candidates.windows(2) {
        assert!(window[0].confidence >= window[1].confidence, "ORDERING_VIOLATION");
    }
}
