/**
 * =================================================================
 * APARATO: CAMPAIGN K1 RECOVERY TEST
 * CLASIFICACIÓN: PROVING GROUNDS (E2E)
 * RESPONSABILIDAD: ESCENARIO SEMILLA DE RECUPERACIÓN DE K1
 *
 * Con el prefijo de 24 letras del panel K1, el tableau de la
 * escultura, longitud de clave 10 como pista y el crib público
 * BETWEEN, la campaña debe emitir un candidato que contenga
 * BETWEEN dentro de su top 3 por confianza.
 * =================================================================
 */

use std::io::Write;
use std::path::PathBuf;

use kryptarch_campaign_lib::{bootstrap, CampaignConfig, CampaignKernel, FileAdvisor, StrategicAdvisor};
use kryptarch_domain_solvers::CancellationToken;

const K1_CIPHERTEXT_PREFIX: &str = "EMUFPHZLRFAXYUSDJKZLDKRN";

fn repository_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn certify_k1_prefix_recovery_with_hints() {
    let sandbox = tempfile::tempdir().expect("tempdir");

    let ciphertext_path = sandbox.path().join("k1_prefix.txt");
    std::fs::write(&ciphertext_path, K1_CIPHERTEXT_PREFIX).expect("ciphertext file");

    let hints_path = sandbox.path().join("hints.json");
    let mut hints_file = std::fs::File::create(&hints_path).expect("hints file");
    hints_file
        .write_all(
            br#"[
                {"kind":"key_length","length":10,"confidence":1.0},
                {"kind":"crib","fragment":"BETWEEN","position":0,"confidence":0.95}
            ]"#,
        )
        .expect("hints payload");

    let config = CampaignConfig {
        ciphertext_path,
        data_dir: repository_data_dir(),
        state_dir: sandbox.path().join("state"),
        workers: 2,
        rng_seed: 0,
        max_attacks: 25,
        max_seconds: 300,
        max_attack_seconds: 30,
        checkpoint_every: 10,
        promotion_threshold: 0.5,
        resume: false,
        hints_path: Some(hints_path.clone()),
    };

    let advisor = FileAdvisor::new(hints_path);
    let hints = advisor.request_hints();
    let state = bootstrap::ignite(&config, &hints).expect("ignition");
    let kernel = CampaignKernel::new(config, state, Box::new(advisor), CancellationToken::new());

    let summary = kernel.run().expect("campaign");
    assert!(summary.attacks_executed > 0);
    assert!(summary.promoted > 0, "the hinted attack must promote");

    let top_three = kernel.state().vault.top(3);
    assert!(
        top_three
            .iter()
            .any(|candidate| candidate.plaintext.contains("BETWEEN")),
        "BETWEEN missing from top 3: {:?}",
        top_three
            .iter()
            .map(|candidate| (candidate.plaintext.clone(), candidate.confidence))
            .collect::<Vec<_>>()
    );
}
