/**
 * =================================================================
 * APARATO: EXHAUSTIVE BOUNDARIES TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: FRONTERAS EXACTAS Y RECUPERACIÓN POR ENUMERACIÓN
 *
 * Fronteras del contrato: periodo 1 emite exactamente un candidato;
 * periodo 8 evalúa exactamente 40.320 órdenes. Escenario semilla:
 * el texto HELLOWORLD... cifrado con la permutación [2,0,4,1,3]
 * debe recuperarse como mejor candidato.
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices};
use kryptarch_core_ciphers::transposition;
use kryptarch_core_scoring::{ReferenceTables, Scorer};
use kryptarch_domain_models::prelude::*;
use kryptarch_domain_solvers::{SolverBudget, SolverExecutor};

const SEED_PLAINTEXT: &str = "HELLOWORLDTHISISATESTOFTHESYSTEM";

fn real_scorer() -> Scorer {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    Scorer::new(ReferenceTables::load(&data_dir).expect("repository data directory"))
}

#[test]
fn certify_period_one_emits_exactly_one() {
    let ciphertext = Ciphertext::parse(SEED_PLAINTEXT).expect("ciphertext");
    let params = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 1,
        column_order: None,
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    assert_eq!(verdict.candidates.len(), 1);
    assert_eq!(verdict.keys_explored, 1);
    assert_eq!(verdict.candidates[0].plaintext, SEED_PLAINTEXT);
}

#[test]
fn certify_period_eight_enumerates_40320() {
    // Texto sin estructura: nada dispara corte temprano.
    let ciphertext = Ciphertext::parse("QZJXKWVBQZJXKWVBQZJXKWVBQZJXKWVBQZJXKWVB").expect("ciphertext");
    let params = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 8,
        column_order: None,
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    assert_eq!(verdict.keys_explored, 40_320, "8! exact enumeration");
    assert!(verdict.abort_reason.is_none());
}

#[test]
fn certify_seed_scenario_period_five_recovery() {
    let plain = text_to_indices(SEED_PLAINTEXT).expect("plain");
    let order = [2usize, 0, 4, 1, 3];
    let cipher = transposition::encrypt(&plain, &order).expect("encrypt");
    let ciphertext = Ciphertext::parse(&indices_to_text(&cipher)).expect("ciphertext");

    let params = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 5,
        column_order: None,
    });
    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );

    assert_eq!(verdict.keys_explored, 120, "5! exact enumeration");
    assert_eq!(
        verdict.candidates[0].plaintext, SEED_PLAINTEXT,
        "original ordering must rank first"
    );
}
