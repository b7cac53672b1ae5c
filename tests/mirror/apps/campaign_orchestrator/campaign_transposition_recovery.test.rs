/**
 * =================================================================
 * APARATO: CAMPAIGN TRANSPOSITION RECOVERY TEST
 * CLASIFICACIÓN: PROVING GROUNDS (E2E)
 * RESPONSABILIDAD: ESCENARIO SEMILLA DE TRANSPOSICIÓN (PERIODO 5)
 *
 * HELLOWORLD... cifrado con la permutación [2,0,4,1,3]; con el
 * periodo 5 como pista la campaña debe recuperar el original con
 * confianza ≥ 0.6.
 * =================================================================
 */

use std::io::Write;
use std::path::PathBuf;

use kryptarch_campaign_lib::{bootstrap, CampaignConfig, CampaignKernel, FileAdvisor, StrategicAdvisor};
use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices};
use kryptarch_core_ciphers::transposition;
use kryptarch_domain_solvers::CancellationToken;

const SEED_PLAINTEXT: &str = "HELLOWORLDTHISISATESTOFTHESYSTEM";

fn repository_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn certify_period_five_campaign_recovery() {
    let sandbox = tempfile::tempdir().expect("tempdir");

    let plain = text_to_indices(SEED_PLAINTEXT).expect("plain");
    let cipher = transposition::encrypt(&plain, &[2, 0, 4, 1, 3]).expect("encrypt");
    let ciphertext_path = sandbox.path().join("transposed.txt");
    std::fs::write(&ciphertext_path, indices_to_text(&cipher)).expect("ciphertext file");

    let hints_path = sandbox.path().join("hints.json");
    let mut hints_file = std::fs::File::create(&hints_path).expect("hints file");
    hints_file
        .write_all(br#"[{"kind":"transposition_period","period":5,"confidence":1.0}]"#)
        .expect("hints payload");

    let config = CampaignConfig {
        ciphertext_path,
        data_dir: repository_data_dir(),
        state_dir: sandbox.path().join("state"),
        workers: 1,
        rng_seed: 0,
        max_attacks: 8,
        max_seconds: 300,
        max_attack_seconds: 30,
        checkpoint_every: 4,
        promotion_threshold: 0.5,
        resume: false,
        hints_path: Some(hints_path.clone()),
    };

    let advisor = FileAdvisor::new(hints_path);
    let hints = advisor.request_hints();
    let state = bootstrap::ignite(&config, &hints).expect("ignition");
    let kernel = CampaignKernel::new(config, state, Box::new(advisor), CancellationToken::new());

    let summary = kernel.run().expect("campaign");
    assert!(summary.promoted > 0, "the hinted exhaustive attack must promote");

    let recovered = kernel
        .state()
        .vault
        .top(10)
        .into_iter()
        .find(|candidate| candidate.plaintext == SEED_PLAINTEXT)
        .expect("original plaintext must be vaulted");
    assert!(
        recovered.confidence >= 0.6,
        "confidence collapsed to {:.3}",
        recovered.confidence
    );
}
