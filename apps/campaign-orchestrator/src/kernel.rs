// [apps/campaign-orchestrator/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: CAMPAIGN KERNEL
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: BUCLE PRINCIPAL DE CAMPAÑA Y POOL DE TRABAJADORES
 *
 * Disciplina de escritor único: N trabajadores ejecutan ataques y
 * devuelven veredictos por canal; solo el hilo orquestador toca el
 * libro mayor, la cobertura y la bóveda. La cola emite en orden
 * estricto de prioridad; el libro registra orden de finalización.
 *
 * Presupuestos independientes: máximo de ataques y máximo de muro.
 * El primero en dispararse termina la campaña limpiamente; el
 * ataque en curso termina su plazo. La cancelación externa se
 * propaga por la señal compartida y los trabajadores retornan en su
 * siguiente punto de observación.
 * =================================================================
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use kryptarch_domain_generation::{AttackGenerator, AttackQueue, PrioritizedAttack};
use kryptarch_domain_models::prelude::*;
use kryptarch_domain_solvers::{CancellationToken, SolverBudget, SolverExecutor, SolverVerdict};
use kryptarch_infra_ledger::CheckpointCursor;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::bootstrap::{CampaignError, CampaignState};
use crate::config::CampaignConfig;
use crate::StrategicAdvisor;

/// Reporte de un trabajador: ataque más veredicto sellado.
struct WorkerReport {
    attack: PrioritizedAttack,
    verdict: SolverVerdict,
}

/// Resumen final de la campaña.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignSummary {
    /// Ataques ejecutados en esta corrida.
    pub attacks_executed: u64,
    /// Ataques acumulados (cursor previo incluido).
    pub cumulative_attacks: u64,
    /// Candidatos promovidos en esta corrida.
    pub promoted: u64,
    /// Duplicados evitados antes del despacho.
    pub duplicates_skipped: u64,
    /// Un presupuesto se agotó con trabajo pendiente.
    pub budget_exhausted: bool,
    /// La campaña recibió cancelación externa.
    pub cancelled: bool,
}

/// Núcleo orquestador de la campaña.
pub struct CampaignKernel {
    config: CampaignConfig,
    state: CampaignState,
    advisor: Box<dyn StrategicAdvisor>,
    cancellation: CancellationToken,
}

impl CampaignKernel {
    #[must_use]
    pub fn new(
        config: CampaignConfig,
        state: CampaignState,
        advisor: Box<dyn StrategicAdvisor>,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            config,
            state,
            advisor,
            cancellation,
        }
    }

    /// Ejecuta la campaña completa hasta agotar cola o presupuestos.
    pub fn run(&self) -> Result<CampaignSummary, CampaignError> {
        let prior_attacks = self
            .state
            .resume_cursor
            .as_ref()
            .map(|cursor| cursor.attacks_completed)
            .unwrap_or(0);
        let prior_elapsed = self
            .state
            .resume_cursor
            .as_ref()
            .map(|cursor| cursor.elapsed_seconds)
            .unwrap_or(0);

        let remaining_attacks = self.config.max_attacks.saturating_sub(prior_attacks);
        let remaining_seconds = self.config.max_seconds.saturating_sub(prior_elapsed);
        let campaign_deadline = Instant::now() + Duration::from_secs(remaining_seconds);
        let campaign_ignition = Instant::now();

        info!(
            "🛰️ [KERNEL]: Campaign ignition (advisor={}, workers={}, budget={} attacks / {}s).",
            self.advisor.name(),
            self.config.workers,
            remaining_attacks,
            remaining_seconds
        );

        let generator = AttackGenerator::default();
        let mut executed_total = 0u64;
        let mut promoted_total = 0u64;
        let mut duplicates_total = 0u64;
        let mut pending_after_stop = 0usize;

        // Rondas de generación: cada ronda consulta al asesor, regenera
        // la cola (el libro mayor filtra lo ya intentado) y la drena.
        loop {
            if self.budgets_spent(remaining_attacks, executed_total, campaign_deadline) {
                break;
            }

            let hints = self.advisor.request_hints();
            let queue_limit = remaining_attacks.saturating_sub(executed_total);
            let proposals = generator.comprehensive(
                &self.state.ciphertext,
                &hints,
                &self.state.coverage,
                &self.state.log,
                queue_limit.min(4_096) as usize,
            );
            if proposals.is_empty() {
                info!("🏜️ [KERNEL]: Queue regeneration produced nothing new. Campaign complete.");
                break;
            }

            // Registro idempotente de regiones antes del despacho.
            for proposal in &proposals {
                self.state.coverage.register_region(
                    &proposal.params.region_id(),
                    proposal.params.cipher_family(),
                    proposal.params.region_size(),
                    proposal.priority,
                );
            }

            let (executed, promoted, duplicates, pending) = self.drain_queue(
                proposals,
                remaining_attacks.saturating_sub(executed_total),
                campaign_deadline,
                prior_attacks + executed_total,
                prior_elapsed,
                campaign_ignition,
            )?;

            executed_total += executed;
            promoted_total += promoted;
            duplicates_total += duplicates;
            pending_after_stop = pending;

            if self.cancellation.is_cancelled() {
                break;
            }
        }

        // SELLADO FINAL: cobertura, cursor y resumen. Una campaña que
        // no ejecutó nada y no reanuda nada termina sin efectos.
        if executed_total > 0 || self.state.resume_cursor.is_some() {
            self.checkpoint(prior_attacks + executed_total, prior_elapsed, campaign_ignition)?;
        }

        let cancelled = self.cancellation.is_cancelled();
        let budget_exhausted = pending_after_stop > 0
            && !cancelled
            && self.budgets_spent(remaining_attacks, executed_total, campaign_deadline);

        let summary = CampaignSummary {
            attacks_executed: executed_total,
            cumulative_attacks: prior_attacks + executed_total,
            promoted: promoted_total,
            duplicates_skipped: duplicates_total,
            budget_exhausted,
            cancelled,
        };
        info!(
            "🏁 [KERNEL]: Campaign sealed. Executed {} attacks ({} promoted, {} duplicates skipped).",
            summary.attacks_executed, summary.promoted, summary.duplicates_skipped
        );
        Ok(summary)
    }

    /// Verdadero cuando algún presupuesto global está agotado.
    fn budgets_spent(&self, remaining_attacks: u64, executed: u64, deadline: Instant) -> bool {
        executed >= remaining_attacks || Instant::now() >= deadline
    }

    /// Drena una cola con el pool de trabajadores. Devuelve
    /// (ejecutados, promovidos, duplicados, pendientes al parar).
    #[allow(clippy::too_many_arguments)]
    fn drain_queue(
        &self,
        proposals: Vec<PrioritizedAttack>,
        attack_allowance: u64,
        campaign_deadline: Instant,
        cumulative_base: u64,
        prior_elapsed: u64,
        campaign_ignition: Instant,
    ) -> Result<(u64, u64, u64, usize), CampaignError> {
        let queue = Arc::new(AttackQueue::from_sorted(proposals));
        let dispatched = AtomicU64::new(0);
        let duplicates = AtomicU64::new(0);
        let (report_sender, report_receiver) = mpsc::channel::<WorkerReport>();

        let progress = ProgressBar::new(queue.len() as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner} [{elapsed_precise}] {bar:32} {pos}/{len} attacks {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut executed = 0u64;
        let mut promoted_count = 0u64;

        std::thread::scope(|scope| -> Result<(), CampaignError> {
            // 1. IGNICIÓN DEL POOL DE TRABAJADORES
            for _ in 0..self.config.workers.max(1) {
                let worker_sender = report_sender.clone();
                let worker_queue = Arc::clone(&queue);
                let dispatched = &dispatched;
                let duplicates = &duplicates;
                scope.spawn(move || {
                    loop {
                        if self.cancellation.is_cancelled()
                            || Instant::now() >= campaign_deadline
                            || dispatched.load(Ordering::SeqCst) >= attack_allowance
                        {
                            break;
                        }
                        let Some(attack) = worker_queue.pop_highest_priority() else {
                            break;
                        };
                        // Dedup pre-despacho: lo ya sellado no se recomputa.
                        if self.state.log.is_duplicate(&attack.fingerprint) {
                            duplicates.fetch_add(1, Ordering::Relaxed);
                            continue;
                        }
                        let ticket = dispatched.fetch_add(1, Ordering::SeqCst);
                        if ticket >= attack_allowance {
                            break;
                        }

                        let budget = SolverBudget::with_deadline(
                            self.config.rng_seed ^ attack.fingerprint.seed_component(),
                            Duration::from_secs(self.config.max_attack_seconds),
                            self.cancellation.clone(),
                        );
                        let verdict = SolverExecutor::execute(
                            &self.state.ciphertext,
                            &attack.params,
                            &self.state.scorer,
                            &budget,
                        );
                        if worker_sender.send(WorkerReport { attack, verdict }).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(report_sender);

            // 2. BUCLE DEL ESCRITOR ÚNICO (VALIDACIÓN Y PERSISTENCIA)
            while let Ok(report) = report_receiver.recv() {
                let promoted_here = self.persist_report(report)?;
                promoted_count += promoted_here;
                executed += 1;
                progress.inc(1);

                if executed % self.config.checkpoint_every.max(1) == 0 {
                    self.checkpoint(cumulative_base + executed, prior_elapsed, campaign_ignition)?;
                }
            }
            Ok(())
        })?;

        progress.finish_and_clear();
        Ok((
            executed,
            promoted_count,
            duplicates.load(Ordering::Relaxed),
            queue.len(),
        ))
    }

    /// Valida, promueve y sella un veredicto. Devuelve promovidos.
    fn persist_report(&self, report: WorkerReport) -> Result<u64, CampaignError> {
        let WorkerReport { attack, verdict } = report;
        let SolverVerdict {
            attack_fingerprint,
            solver: _,
            candidates,
            keys_explored,
            duration_ms,
            abort_reason,
            failure_detail,
        } = verdict;
        let raw_best_confidence = candidates
            .first()
            .map(|candidate| candidate.confidence)
            .unwrap_or(0.0);

        // 1. CASCADA DE VALIDACIÓN
        let mut best_promoted: Option<Candidate> = None;
        let mut promoted_here = 0u64;
        for candidate in candidates {
            let outcome = self.state.validator.validate(&self.state.scorer, candidate);
            if outcome.is_promoted() {
                let candidate = outcome.candidate().clone();
                if best_promoted
                    .as_ref()
                    .map(|best| candidate.confidence > best.confidence)
                    .unwrap_or(true)
                {
                    best_promoted = Some(candidate.clone());
                }
                // Persistencia de candidato: reintento único ante E/S.
                if let Err(first_fault) = self.state.vault.submit(candidate.clone()) {
                    warn!("⚠️ [KERNEL]: Vault write failed once ({first_fault}). Retrying.");
                    if let Err(second_fault) = self.state.vault.submit(candidate) {
                        error!("❌ [KERNEL]: Vault write lost after retry ({second_fault}).");
                    }
                }
                promoted_here += 1;
            }
        }

        // 2. DESENLACE DEL ATAQUE
        let outcome = match (&best_promoted, &abort_reason) {
            (Some(candidate), _) => AttackOutcome::Success {
                plaintext: candidate.plaintext.clone(),
                confidence: candidate.confidence,
            },
            (None, Some(reason)) => AttackOutcome::Aborted {
                reason: reason.clone(),
            },
            (None, None) => AttackOutcome::Failure,
        };
        let best_score = best_promoted
            .as_ref()
            .map(|candidate| candidate.confidence)
            .unwrap_or(raw_best_confidence);

        if let Some(detail) = &failure_detail {
            warn!("⚠️ [KERNEL]: Attack {attack_fingerprint} failed internally: {detail}");
        }

        // 3. SELLADO EN EL LIBRO MAYOR (REINTENTO ÚNICO ANTE E/S)
        let record = AttackRecord::seal(
            attack_fingerprint,
            attack.params.clone(),
            outcome,
            best_score,
            duration_ms,
            attack.tags.clone(),
        );
        if let Err(first_fault) = self.state.log.log(record.clone()) {
            warn!("⚠️ [KERNEL]: Ledger write failed once ({first_fault}). Retrying.");
            if let Err(second_fault) = self.state.log.log(record) {
                // Registro perdido: el formato por líneas preserva el resto.
                error!("❌ [KERNEL]: Attack record lost after retry ({second_fault}).");
            }
        }

        // 4. CONTABILIDAD DE COBERTURA
        self.state.coverage.record(
            &attack.params.region_id(),
            keys_explored,
            u64::from(promoted_here > 0),
        );

        Ok(promoted_here)
    }

    /// Instantánea de cobertura + cursor de reanudación.
    fn checkpoint(
        &self,
        cumulative_attacks: u64,
        prior_elapsed: u64,
        campaign_ignition: Instant,
    ) -> Result<(), CampaignError> {
        self.state.coverage.snapshot(&self.config.coverage_path())?;
        let elapsed = prior_elapsed + campaign_ignition.elapsed().as_secs();
        CheckpointCursor::seal(cumulative_attacks, elapsed).write(&self.config.checkpoint_path())?;
        Ok(())
    }

    /// Acceso de solo lectura al estado (informes y pruebas).
    #[must_use]
    pub fn state(&self) -> &CampaignState {
        &self.state
    }
}
