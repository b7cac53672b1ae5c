// [libs/domain/generation/src/priority.rs]
/*!
 * =================================================================
 * APARATO: PRIORITY FORMULA
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: PRIORIDAD ESCALAR DE CADA ATAQUE PROPUESTO
 *
 * priority = 0.5 + 0.4 × source_weight + 0.1 × crib_alignment
 *
 * Pesos de fuente: pista directa 1.0 (escalada por la confianza de
 * la propia pista), brecha de cobertura 0.5–0.7 (escalada por el
 * tamaño de la brecha), barrido por defecto 0.4. La alineación de
 * cribs vale 1.0 cuando el ataque porta restricciones de texto
 * plano y 0.0 en caso contrario.
 * =================================================================
 */

/// Peso de fuente para barridos por defecto.
pub const DEFAULT_SWEEP_WEIGHT: f64 = 0.4;

/// Prioridad escalar en [0.5, 1.0].
#[must_use]
pub fn priority(source_weight: f64, crib_alignment: f64) -> f64 {
    0.5 + 0.4 * source_weight.clamp(0.0, 1.0) + 0.1 * crib_alignment.clamp(0.0, 1.0)
}

/// Peso de fuente de una pista directa, escalado por su confianza.
#[must_use]
pub fn hint_weight(hint_confidence: f64) -> f64 {
    hint_confidence.clamp(0.0, 1.0)
}

/// Peso de fuente de una brecha de cobertura: 0.5 en brecha mínima,
/// 0.7 en región virgen.
#[must_use]
pub fn gap_weight(coverage_ratio: f64) -> f64 {
    0.5 + 0.2 * (1.0 - coverage_ratio.clamp(0.0, 1.0))
}
