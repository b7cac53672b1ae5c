/**
 * =================================================================
 * APARATO: ATTACK LOG REPLAY TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: DURABILIDAD, DEDUPLICACIÓN Y COLA TRUNCADA
 * =================================================================
 */

use std::io::Write;

use kryptarch_core_ciphers::TableauAlphabet;
use kryptarch_domain_models::prelude::*;
use kryptarch_infra_ledger::{AttackLog, ExportFormat, LogQuery};

fn sealed_record(length: usize, outcome: AttackOutcome) -> AttackRecord {
    let params = AttackParameters::bare(KeySpec::Vigenere {
        key_length: length,
        key: None,
        alphabet: TableauAlphabet::standard(),
    });
    let id = params.fingerprint().expect("fp");
    AttackRecord::seal(id, params, outcome, 0.2, 7, vec!["coverage-gap".to_string()])
}

#[test]
fn certify_replay_restores_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("attack_log.jsonl");

    let first_fingerprint = {
        let log = AttackLog::open(&path).expect("open");
        for length in 3..=7 {
            log.log(sealed_record(length, AttackOutcome::Failure)).expect("log");
        }
        log.query(&LogQuery::default())[0].id.clone()
    };

    // Reapertura: el índice se reconstruye por replay.
    let reopened = AttackLog::open(&path).expect("reopen");
    assert_eq!(reopened.len(), 5);
    assert!(reopened.is_duplicate(&first_fingerprint));

    let (existing, duplicate) = reopened
        .log(sealed_record(3, AttackOutcome::Success {
            plaintext: "X".to_string(),
            confidence: 0.9,
        }))
        .expect("relog");
    assert!(duplicate, "replayed fingerprints must dedup");
    assert_eq!(existing.outcome, AttackOutcome::Failure, "outcome is never rewritten");
}

#[test]
fn certify_truncated_tail_tolerance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("attack_log.jsonl");

    {
        let log = AttackLog::open(&path).expect("open");
        for length in 3..=6 {
            log.log(sealed_record(length, AttackOutcome::Failure)).expect("log");
        }
    }

    // Simula un colapso a mitad de escritura: última línea cortada.
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&path)
        .expect("append");
    file.write_all(b"{\"id\":\"deadbeef\",\"timestamp\":\"2026-")
        .expect("write torn line");
    drop(file);

    let recovered = AttackLog::open(&path).expect("reopen with torn tail");
    assert_eq!(recovered.len(), 4, "complete records before the tear survive");
}

#[test]
fn certify_statistics_and_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("attack_log.jsonl");
    let log = AttackLog::open(&path).expect("open");

    log.log(sealed_record(4, AttackOutcome::Failure)).expect("log");
    log.log(sealed_record(5, AttackOutcome::Success {
        plaintext: "BETWEEN".to_string(),
        confidence: 0.8,
    }))
    .expect("log");
    log.log(sealed_record(4, AttackOutcome::Failure)).expect("duplicate");

    let statistics = log.statistics();
    assert_eq!(statistics.total_records, 2);
    assert_eq!(statistics.duplicates_prevented, 1);
    assert_eq!(statistics.successes, 1);
    assert_eq!(statistics.per_family.get("vigenere"), Some(&(2, 1)));

    let jsonl = log.export(ExportFormat::Jsonl).expect("jsonl");
    assert_eq!(jsonl.lines().count(), 2);

    let successes = log.query(&LogQuery {
        success_only: true,
        min_confidence: Some(0.5),
        ..LogQuery::default()
    });
    assert_eq!(successes.len(), 1);

    let tagged = log.query(&LogQuery {
        tag: Some("coverage-gap".to_string()),
        ..LogQuery::default()
    });
    assert_eq!(tagged.len(), 2);
}
