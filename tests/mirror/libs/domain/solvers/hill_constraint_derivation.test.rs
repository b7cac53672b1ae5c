/**
 * =================================================================
 * APARATO: HILL CONSTRAINT DERIVATION TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: DERIVACIÓN DE CLAVE DESDE CRIBS ANCLADOS
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices};
use kryptarch_core_ciphers::HillMatrix;
use kryptarch_core_scoring::{ReferenceTables, Scorer};
use kryptarch_domain_models::prelude::*;
use kryptarch_domain_solvers::{SolverBudget, SolverExecutor};

fn real_scorer() -> Scorer {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    Scorer::new(ReferenceTables::load(&data_dir).expect("repository data directory"))
}

const PLAINTEXT: &str = "THEBERLINCLOCKTICKSPASTMIDNIGHTAGAIN";

#[test]
fn certify_2x2_key_recovery_from_anchored_crib() {
    let key = HillMatrix::new(2, vec![3, 3, 2, 5]).expect("key");
    let plain = text_to_indices(PLAINTEXT).expect("plain");
    let cipher = key.encrypt(&plain);
    let ciphertext = Ciphertext::parse(&indices_to_text(&cipher)).expect("ciphertext");

    // Crib BERLIN anclado en 3: cubre los bloques [4,5] y [6,7] y
    // junto con THE los primeros dos bloques completos.
    let mut params = AttackParameters::bare(KeySpec::Hill {
        block_size: 2,
        matrix: None,
    });
    params.method_hint = Some(MethodHint::ConstraintDriven);
    for (offset, letter) in "THEBERLIN".chars().enumerate() {
        params.crib_constraints.insert(offset, letter);
    }

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    assert!(verdict.failure_detail.is_none());
    assert_eq!(
        verdict.candidates[0].plaintext, PLAINTEXT,
        "derived key must reproduce the full plaintext"
    );
}

#[test]
fn certify_3x3_key_recovery_from_anchored_crib() {
    let key = HillMatrix::new(3, vec![6, 24, 1, 13, 16, 10, 20, 17, 15]).expect("key");
    let plain = text_to_indices(PLAINTEXT).expect("plain");
    let cipher = key.encrypt(&plain);
    let ciphertext = Ciphertext::parse(&indices_to_text(&cipher)).expect("ciphertext");

    let mut params = AttackParameters::bare(KeySpec::Hill {
        block_size: 3,
        matrix: None,
    });
    params.method_hint = Some(MethodHint::ConstraintDriven);
    // Doce letras ancladas: cuatro bloques 3×3 completos.
    for (offset, letter) in PLAINTEXT.chars().take(12).enumerate() {
        params.crib_constraints.insert(offset, letter);
    }

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    assert_eq!(verdict.candidates[0].plaintext, PLAINTEXT);
}

#[test]
fn certify_explicit_matrix_rejects_non_coprime_determinant() {
    let scorer = real_scorer();
    let ciphertext = Ciphertext::parse("ABCDEFGH").expect("ciphertext");

    // det = 2·8 − 4·6 = −8 ≡ 18, gcd(18, 26) = 2: clave inválida.
    let singular = HillMatrix::new(2, vec![2, 4, 6, 8]).expect("construct");
    let params = AttackParameters::bare(KeySpec::Hill {
        block_size: 2,
        matrix: Some(singular),
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &scorer,
        &SolverBudget::unbounded(0),
    );
    assert!(
        verdict.failure_detail.is_some(),
        "non-invertible explicit matrices must fail, not panic"
    );
}
