// [libs/domain/generation/src/queue.rs]
/*!
 * APARATO: ATTACK QUEUE
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: EMISIÓN EN ORDEN ESTRICTO DE PRIORIDAD
 *
 * La cola nace ya ordenada por el generador; aquí solo se consume.
 * Los trabajadores extraen en orden de prioridad aunque completen
 * fuera de orden.
 */

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::generator::PrioritizedAttack;

/// Cola de consumo único para el pool de trabajadores.
pub struct AttackQueue {
    inner: Mutex<VecDeque<PrioritizedAttack>>,
}

impl AttackQueue {
    /// Construye desde una lista ya ordenada (prioridad descendente).
    #[must_use]
    pub fn from_sorted(attacks: Vec<PrioritizedAttack>) -> Self {
        Self {
            inner: Mutex::new(attacks.into()),
        }
    }

    /// Extrae el ataque de mayor prioridad pendiente.
    #[must_use]
    pub fn pop_highest_priority(&self) -> Option<PrioritizedAttack> {
        let mut inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner.pop_front()
    }

    /// Ataques pendientes.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        inner.len()
    }

    /// Verdadero sin pendientes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
