// [apps/campaign-orchestrator/src/main.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN ORCHESTRATOR BINARY
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: SUPERFICIE DE MANDO Y CÓDIGOS DE SALIDA
 *
 * Códigos de salida: 0 finalización normal, 1 presupuesto agotado
 * (no es error), 2 E/S fatal, 3 entrada malformada.
 * =================================================================
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use kryptarch_campaign_lib::bootstrap;
use kryptarch_campaign_lib::{
    CampaignConfig, CampaignKernel, FileAdvisor, NullAdvisor, StrategicAdvisor,
};
use kryptarch_domain_solvers::CancellationToken;
use kryptarch_infra_ledger::{AttackLog, CandidateVault, ExportFormat};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(
    name = "campaign-orchestrator",
    about = "Motor autónomo de criptoanálisis clásico para la campaña K4",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ejecuta una campaña (o la reanuda desde el último checkpoint).
    Run(RunArgs),
    /// Resume el libro mayor de ataques.
    Stats {
        #[arg(long, default_value = "state")]
        state_dir: PathBuf,
    },
    /// Exporta el libro mayor o la bóveda de candidatos.
    Export {
        /// Formato: `jsonl`, `document` o `candidates`.
        format: String,
        #[arg(long, default_value = "state")]
        state_dir: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Fichero de texto cifrado objetivo.
    ciphertext: PathBuf,

    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[arg(long, default_value = "state")]
    state_dir: PathBuf,

    /// Trabajadores del pool (defecto: núcleos físicos).
    #[arg(long, env = "WORKERS")]
    workers: Option<usize>,

    /// Semilla global de los RNG de solvers.
    #[arg(long, env = "RNG_SEED", default_value_t = 0)]
    rng_seed: u64,

    /// Presupuesto: máximo de ataques.
    #[arg(long, default_value_t = 1_000)]
    max_attacks: u64,

    /// Presupuesto: máximo de segundos de muro.
    #[arg(long, default_value_t = 3_600)]
    max_seconds: u64,

    /// Plazo de muro por ataque individual.
    #[arg(long, env = "MAX_ATTACK_SECONDS", default_value_t = 60)]
    max_attack_seconds: u64,

    /// Ataques entre checkpoints.
    #[arg(long, env = "CHECKPOINT_EVERY", default_value_t = 100)]
    checkpoint_every: u64,

    /// Umbral de confianza de promoción.
    #[arg(long, env = "PROMOTION_THRESHOLD", default_value_t = 0.5)]
    promotion_threshold: f64,

    /// Reanudar desde el cursor persistido.
    #[arg(long)]
    resume: bool,

    /// Fichero JSON de pistas del asesor externo.
    #[arg(long)]
    hints: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    kryptarch_shared_argos::init_tracing("kryptarch_campaign");

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_campaign(args),
        Command::Stats { state_dir } => show_stats(&state_dir),
        Command::Export { format, state_dir } => export_artifacts(&format, &state_dir),
    }
}

fn run_campaign(args: RunArgs) -> ExitCode {
    let config = CampaignConfig {
        ciphertext_path: args.ciphertext,
        data_dir: args.data_dir,
        state_dir: args.state_dir,
        workers: args.workers.unwrap_or_else(num_cpus::get).max(1),
        rng_seed: args.rng_seed,
        max_attacks: args.max_attacks,
        max_seconds: args.max_seconds,
        max_attack_seconds: args.max_attack_seconds.max(1),
        checkpoint_every: args.checkpoint_every.max(1),
        promotion_threshold: args.promotion_threshold,
        resume: args.resume,
        hints_path: args.hints,
    };

    let advisor: Box<dyn StrategicAdvisor> = match &config.hints_path {
        Some(path) => Box::new(FileAdvisor::new(path.clone())),
        None => Box::new(NullAdvisor),
    };

    // Señal de cancelación: Ctrl-C drena el pool y sella el estado.
    let cancellation = CancellationToken::new();
    let interrupt_token = cancellation.clone();
    if let Err(handler_fault) = ctrlc::set_handler(move || {
        warn!("🛑 [SIGNAL]: Interrupt received. Draining workers.");
        interrupt_token.cancel();
    }) {
        warn!("⚠️ [SIGNAL]: Interrupt handler unavailable ({handler_fault}).");
    }

    let hints = advisor.request_hints();
    let state = match bootstrap::ignite(&config, &hints) {
        Ok(state) => state,
        Err(ignition_fault) => {
            error!("❌ [FATAL]: {ignition_fault}");
            return ExitCode::from(ignition_fault.exit_code() as u8);
        }
    };

    let kernel = CampaignKernel::new(config, state, advisor, cancellation);
    match kernel.run() {
        Ok(summary) => {
            info!(
                "📊 [SUMMARY]: {} attacks this run / {} cumulative / {} promoted.",
                summary.attacks_executed, summary.cumulative_attacks, summary.promoted
            );
            if summary.budget_exhausted {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(campaign_fault) => {
            error!("❌ [FATAL]: {campaign_fault}");
            ExitCode::from(campaign_fault.exit_code() as u8)
        }
    }
}

fn show_stats(state_dir: &PathBuf) -> ExitCode {
    let rendered = (|| -> anyhow::Result<String> {
        let log = AttackLog::open(&state_dir.join("attack_log.jsonl"))?;
        Ok(serde_json::to_string_pretty(&log.statistics())?)
    })();
    match rendered {
        Ok(payload) => {
            println!("{payload}");
            ExitCode::SUCCESS
        }
        Err(stats_fault) => {
            error!("❌ [FATAL]: {stats_fault}");
            ExitCode::from(2)
        }
    }
}

fn export_artifacts(format: &str, state_dir: &PathBuf) -> ExitCode {
    let rendered = (|| -> anyhow::Result<String> {
        match format {
            "jsonl" => {
                Ok(AttackLog::open(&state_dir.join("attack_log.jsonl"))?.export(ExportFormat::Jsonl)?)
            }
            "document" => Ok(AttackLog::open(&state_dir.join("attack_log.jsonl"))?
                .export(ExportFormat::Document)?),
            "candidates" => {
                Ok(CandidateVault::open(&state_dir.join("candidates.jsonl"))?.export_document(10)?)
            }
            unknown => anyhow::bail!("unknown export format `{unknown}` (jsonl|document|candidates)"),
        }
    })();

    match rendered {
        Ok(payload) => {
            println!("{payload}");
            ExitCode::SUCCESS
        }
        Err(export_fault) => {
            error!("❌ [FATAL]: {export_fault}");
            // Formato desconocido es entrada malformada; el resto es E/S.
            if format == "jsonl" || format == "document" || format == "candidates" {
                ExitCode::from(2)
            } else {
                ExitCode::from(3)
            }
        }
    }
}
