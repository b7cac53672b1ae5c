/**
 * =================================================================
 * APARATO: CAMPAIGN DEDUP & RESUME TEST
 * CLASIFICACIÓN: PROVING GROUNDS (E2E)
 * RESPONSABILIDAD: GARANTÍA DE DEDUPLICACIÓN Y REANUDACIÓN ±1
 *
 * Una campaña interrumpida tras N ataques y reanudada con el mismo
 * presupuesto total debe converger al mismo conteo acumulado que
 * una campaña ininterrumpida (±1). Ningún ataque sellado se
 * recomputa jamás.
 * =================================================================
 */

use std::path::{Path, PathBuf};

use kryptarch_campaign_lib::{bootstrap, CampaignConfig, CampaignKernel, NullAdvisor};
use kryptarch_domain_solvers::CancellationToken;
use kryptarch_infra_ledger::{AttackLog, LogQuery};

const TARGET_TEXT: &str = "SHADOWFORCESLURKEDINTHEDIGITALDARKNESS";

fn repository_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn config_for(sandbox: &Path, state_dir: &str, max_attacks: u64, resume: bool) -> CampaignConfig {
    CampaignConfig {
        ciphertext_path: sandbox.join("target.txt"),
        data_dir: repository_data_dir(),
        state_dir: sandbox.join(state_dir),
        workers: 1,
        rng_seed: 7,
        max_attacks,
        max_seconds: 600,
        max_attack_seconds: 30,
        checkpoint_every: 3,
        promotion_threshold: 0.5,
        resume,
        hints_path: None,
    }
}

fn run_campaign(config: CampaignConfig) -> (u64, u64) {
    let state = bootstrap::ignite(&config, &[]).expect("ignition");
    let kernel = CampaignKernel::new(config, state, Box::new(NullAdvisor), CancellationToken::new());
    let summary = kernel.run().expect("campaign");
    (summary.attacks_executed, summary.cumulative_attacks)
}

#[test]
fn certify_interrupted_resume_matches_uninterrupted() {
    let sandbox = tempfile::tempdir().expect("tempdir");
    std::fs::write(sandbox.path().join("target.txt"), TARGET_TEXT).expect("target");

    // FASE A: campaña "interrumpida" tras 6 ataques.
    let (executed_a, cumulative_a) =
        run_campaign(config_for(sandbox.path(), "interrupted", 6, false));
    assert_eq!(executed_a, 6);
    assert_eq!(cumulative_a, 6);

    // Garantía de deduplicación: lo sellado responde como duplicado.
    let log = AttackLog::open(&sandbox.path().join("interrupted/attack_log.jsonl")).expect("log");
    let sealed = log.query(&LogQuery::default());
    assert_eq!(sealed.len(), 6);
    for record in &sealed {
        assert!(log.is_duplicate(&record.id));
    }
    drop(log);

    // FASE B: reanudación hasta el presupuesto total de 14.
    let (executed_b, cumulative_b) =
        run_campaign(config_for(sandbox.path(), "interrupted", 14, true));
    assert!(executed_b <= 8);

    // FASE C: campaña ininterrumpida de referencia con el mismo total.
    let (_, cumulative_c) = run_campaign(config_for(sandbox.path(), "uninterrupted", 14, false));

    let difference = cumulative_b.abs_diff(cumulative_c);
    assert!(
        difference <= 1,
        "resume drift: resumed {cumulative_b} vs uninterrupted {cumulative_c}"
    );

    // El libro mayor reanudado no contiene recomputaciones.
    let resumed_log =
        AttackLog::open(&sandbox.path().join("interrupted/attack_log.jsonl")).expect("log");
    assert_eq!(resumed_log.len() as u64, cumulative_b);
    assert_eq!(resumed_log.statistics().duplicates_prevented, 0);
}

#[test]
fn certify_zero_budget_exits_without_side_effects() {
    let sandbox = tempfile::tempdir().expect("tempdir");
    std::fs::write(sandbox.path().join("target.txt"), TARGET_TEXT).expect("target");

    let (executed, cumulative) = run_campaign(config_for(sandbox.path(), "empty", 0, false));
    assert_eq!(executed, 0);
    assert_eq!(cumulative, 0);

    let log = AttackLog::open(&sandbox.path().join("empty/attack_log.jsonl")).expect("log");
    assert!(log.is_empty(), "zero-budget campaign must not seal attacks");
}
