/**
 * =================================================================
 * APARATO: RECORD SERIALIZATION TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: PARIDAD JSON DE LOS CONTRATOS PERSISTENTES
 *
 * Valida la cadena completa Struct → JSON → Struct para registros
 * de ataque y regiones, incluyendo el transporte de tamaños de
 * espacio de claves que desbordan 64 bits como cadenas decimales.
 * =================================================================
 */

use kryptarch_core_ciphers::TableauAlphabet;
use kryptarch_domain_models::prelude::*;

#[test]
fn certify_attack_record_roundtrip() {
    let mut params = AttackParameters::bare(KeySpec::Vigenere {
        key_length: 10,
        key: None,
        alphabet: TableauAlphabet::from_keyword("KRYPTOS").expect("tableau"),
    });
    params.method_hint = Some(MethodHint::ConstraintDriven);
    params.crib_constraints.insert(0, 'B');
    let id = params.fingerprint().expect("fp");

    let record = AttackRecord::seal(
        id.clone(),
        params,
        AttackOutcome::Success {
            plaintext: "BETWEENSUBTLESHADING".to_string(),
            confidence: 0.83,
        },
        0.83,
        412,
        vec!["q-hint".to_string(), "crib:BETWEEN".to_string()],
    );

    let line = serde_json::to_string(&record).expect("serialize");
    assert!(line.contains("\"family\":\"vigenere\""), "tagged family drift");
    assert!(line.contains("\"status\":\"success\""), "tagged outcome drift");

    let recovered: AttackRecord = serde_json::from_str(&line).expect("deserialize");
    assert_eq!(recovered.id, id);
    assert_eq!(recovered, record);
}

#[test]
fn certify_outcome_variants_roundtrip() {
    for outcome in [
        AttackOutcome::Failure,
        AttackOutcome::Aborted {
            reason: "timeout".to_string(),
        },
    ] {
        let wire = serde_json::to_string(&outcome).expect("serialize");
        let back: AttackOutcome = serde_json::from_str(&wire).expect("deserialize");
        assert_eq!(back, outcome);
        assert!(!back.is_success());
    }
}

#[test]
fn certify_region_u128_string_carriage() {
    // 26²⁰ desborda u64: debe viajar como cadena decimal.
    let monster = 26u128.pow(20);
    let region = KeySpaceRegion::register(
        "vigenere/len-20/standard".to_string(),
        CipherFamily::Vigenere,
        monster,
        0.4,
    );

    let wire = serde_json::to_string(&region).expect("serialize");
    assert!(wire.contains(&format!("\"{monster}\"")), "U64_OVERFLOW_HAZARD");

    let back: KeySpaceRegion = serde_json::from_str(&wire).expect("deserialize");
    assert_eq!(back.total_size, monster);
}

#[test]
fn certify_candidate_roundtrip() {
    let fingerprint = Fingerprint::of(&"seed").expect("fp");
    let candidate = Candidate {
        plaintext: "BERLINCLOCK".to_string(),
        confidence: 0.71,
        scores: ScoreBreakdown {
            frequency: 0.6,
            crib: 1.0,
            linguistic: 0.55,
        },
        provenance: Provenance {
            attack_fingerprint: fingerprint,
            solver: "hill_constraint".to_string(),
            elapsed_ms: 88,
        },
    };

    let wire = serde_json::to_string(&candidate).expect("serialize");
    let back: Candidate = serde_json::from_str(&wire).expect("deserialize");
    assert_eq!(back, candidate);
}
