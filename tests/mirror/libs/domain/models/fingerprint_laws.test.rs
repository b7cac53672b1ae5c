/**
 * =================================================================
 * APARATO: FINGERPRINT LAWS TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: LEYES DE EQUIVALENCIA DE LA HUELLA CANÓNICA
 *
 * fingerprint(p) == fingerprint(q) ⟺ serializaciones canónicas
 * byte-iguales. Parámetros que difieren solo en orden de mapas o
 * tipos cosméticos de entero deben colisionar; cualquier cambio
 * semántico debe separar.
 * =================================================================
 */

use std::collections::BTreeMap;

use kryptarch_core_ciphers::TableauAlphabet;
use kryptarch_domain_models::prelude::*;

fn vigenere(length: usize) -> AttackParameters {
    AttackParameters::bare(KeySpec::Vigenere {
        key_length: length,
        key: None,
        alphabet: TableauAlphabet::standard(),
    })
}

#[test]
fn certify_equivalence_is_reflexive_and_stable() {
    let params = vigenere(10);
    let first = params.fingerprint().expect("fp");
    let second = params.clone().fingerprint().expect("fp");
    assert_eq!(first, second);
    assert_eq!(first.as_str().len(), 32);
}

#[test]
fn certify_crib_map_order_is_canonical() {
    let mut ascending = BTreeMap::new();
    ascending.insert(21usize, 'E');
    ascending.insert(63usize, 'B');

    let mut descending = BTreeMap::new();
    descending.insert(63usize, 'B');
    descending.insert(21usize, 'E');

    let mut first = vigenere(7);
    first.crib_constraints = ascending;
    let mut second = vigenere(7);
    second.crib_constraints = descending;

    assert_eq!(
        first.fingerprint().expect("fp"),
        second.fingerprint().expect("fp"),
        "insertion order must not bifurcate identity"
    );
}

#[test]
fn certify_semantic_changes_separate() {
    let base = vigenere(7).fingerprint().expect("fp");
    assert_ne!(base, vigenere(8).fingerprint().expect("fp"));

    let mut with_method = vigenere(7);
    with_method.method_hint = Some(MethodHint::FrequencyRecovery);
    assert_ne!(base, with_method.fingerprint().expect("fp"));

    let mut with_crib = vigenere(7);
    with_crib.crib_constraints.insert(0, 'B');
    assert_ne!(base, with_crib.fingerprint().expect("fp"));
}

#[test]
fn certify_annealing_profile_participates() {
    let mut coarse = AttackParameters::bare(KeySpec::ColumnarTransposition {
        period: 10,
        column_order: None,
    });
    coarse.method_hint = Some(MethodHint::SimAnnealing {
        profile: AnnealingProfile::campaign_default(),
    });

    let mut fine = coarse.clone();
    fine.method_hint = Some(MethodHint::SimAnnealing {
        profile: AnnealingProfile {
            iterations: 100_000,
            ..AnnealingProfile::campaign_default()
        },
    });

    assert_ne!(
        coarse.fingerprint().expect("fp"),
        fine.fingerprint().expect("fp"),
        "annealing tuning is part of the attack identity"
    );
}

#[test]
fn certify_composite_nesting_is_stable() {
    let composite = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(vigenere(5)),
        second_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 4,
            column_order: None,
        })),
    });
    let reversed = AttackParameters::bare(KeySpec::Composite {
        first_stage: Box::new(AttackParameters::bare(KeySpec::ColumnarTransposition {
            period: 4,
            column_order: None,
        })),
        second_stage: Box::new(vigenere(5)),
    });

    assert_eq!(
        composite.fingerprint().expect("fp"),
        composite.clone().fingerprint().expect("fp")
    );
    assert_ne!(
        composite.fingerprint().expect("fp"),
        reversed.fingerprint().expect("fp"),
        "stage order is semantic"
    );
}
