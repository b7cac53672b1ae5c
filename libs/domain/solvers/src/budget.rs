// [libs/domain/solvers/src/budget.rs]
/*!
 * =================================================================
 * APARATO: SOLVER BUDGET
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: PLAZO POR ATAQUE, CANCELACIÓN Y SEMILLA RNG
 *
 * Los motores observan el presupuesto en sus bucles calientes al
 * menos cada 10.000 iteraciones internas. Un plazo vencido devuelve
 * el mejor estado visto hasta el momento, nunca un colapso.
 * =================================================================
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Señal de terminación compartida entre orquestador y motores.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Señal nueva, no disparada.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispara la señal para todos los portadores.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Observa la señal (lectura relajada apta para bucles calientes).
    #[inline(always)]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Motivos de interrupción estandarizados del veredicto.
pub const ABORT_REASON_TIMEOUT: &str = "timeout";
pub const ABORT_REASON_CANCELLED: &str = "cancelled";

/// Presupuesto inmutable de una invocación de motor.
#[derive(Debug, Clone)]
pub struct SolverBudget {
    /// Plazo absoluto de muro; `None` = sin plazo.
    pub deadline: Option<Instant>,
    /// Señal de cancelación de campaña.
    pub cancellation: CancellationToken,
    /// Semilla determinista de los RNG del motor.
    pub rng_seed: u64,
}

impl SolverBudget {
    /// Presupuesto sin plazo con la semilla dada.
    #[must_use]
    pub fn unbounded(rng_seed: u64) -> Self {
        Self {
            deadline: None,
            cancellation: CancellationToken::new(),
            rng_seed,
        }
    }

    /// Presupuesto con plazo relativo desde ahora.
    #[must_use]
    pub fn with_deadline(rng_seed: u64, budget: Duration, cancellation: CancellationToken) -> Self {
        Self {
            deadline: Some(Instant::now() + budget),
            cancellation,
            rng_seed,
        }
    }

    /// Motivo de interrupción vigente, si lo hay. La cancelación tiene
    /// precedencia sobre el plazo.
    #[inline]
    #[must_use]
    pub fn interruption(&self) -> Option<&'static str> {
        if self.cancellation.is_cancelled() {
            return Some(ABORT_REASON_CANCELLED);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(ABORT_REASON_TIMEOUT);
            }
        }
        None
    }
}
