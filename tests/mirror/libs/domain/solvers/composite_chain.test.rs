/**
 * =================================================================
 * APARATO: COMPOSITE CHAIN TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: DESCIFRADO EN DOS ETAPAS, ÚLTIMA CIFRADA PRIMERO
 *
 * Construcción: texto → Vigenère(OSCAR) → transposición [2,0,1].
 * El ataque composite declara (etapa1 = vigenère, etapa2 =
 * transposición); el motor invierte primero la transposición y
 * después el Vigenère.
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices, TableauAlphabet};
use kryptarch_core_ciphers::{transposition, vigenere};
use kryptarch_core_scoring::{ReferenceTables, Scorer};
use kryptarch_domain_models::prelude::*;
use kryptarch_domain_solvers::{SolverBudget, SolverExecutor};

const PLAINTEXT: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

fn real_scorer() -> Scorer {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    Scorer::new(ReferenceTables::load(&data_dir).expect("repository data directory"))
}

fn two_stage_ciphertext() -> Ciphertext {
    let tableau = TableauAlphabet::standard();
    let plain = text_to_indices(PLAINTEXT).expect("plain");
    let key = text_to_indices("OSCAR").expect("key");

    let stage_one = vigenere::encrypt(&plain, &key, &tableau).expect("stage one");
    let stage_two = transposition::encrypt(&stage_one, &[2, 0, 1]).expect("stage two");
    Ciphertext::parse(&indices_to_text(&stage_two)).expect("ciphertext")
}

#[test]
fn certify_composite_inversion_order() {
    let ciphertext = two_stage_ciphertext();

    // Etapa 1 con clave explícita; etapa 2 buscada exhaustivamente.
    let first_stage = AttackParameters::bare(KeySpec::Vigenere {
        key_length: 5,
        key: Some("OSCAR".to_string()),
        alphabet: TableauAlphabet::standard(),
    });
    let second_stage = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 3,
        column_order: None,
    });
    let params = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(first_stage),
        second_stage: Box::new(second_stage),
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );

    assert_eq!(verdict.solver, "composite_chain");
    assert!(
        verdict
            .candidates
            .iter()
            .any(|candidate| candidate.plaintext == PLAINTEXT),
        "chain must invert stage two then stage one"
    );
}

#[test]
fn certify_composite_explores_both_stages() {
    let ciphertext = two_stage_ciphertext();
    let params = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(AttackParameters::bare(KeySpec::Vigenere {
            key_length: 5,
            key: Some("OSCAR".to_string()),
            alphabet: TableauAlphabet::standard(),
        })),
        second_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 3,
            column_order: None,
        })),
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    // La etapa 2 enumera 3! órdenes y cada intermedio paga 1 descifrado.
    assert!(verdict.keys_explored > 6, "both stages must account effort");
}

#[test]
fn certify_nested_composite_is_rejected() {
    let ciphertext = two_stage_ciphertext();
    let inner = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 2,
            column_order: None,
        })),
        second_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 3,
            column_order: None,
        })),
    });
    let params = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(inner),
        second_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 2,
            column_order: None,
        })),
    });

    let verdict = SolverExecutor::execute(
        &ciphertext,
        &params,
        &real_scorer(),
        &SolverBudget::unbounded(0),
    );
    assert!(verdict.failure_detail.is_some(), "depth cap must hold");
    assert!(verdict.candidates.is_empty());
}
