// [libs/core/scoring/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SCORING STRATUM ROOT
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: PUNTUACIÓN DETERMINISTA DE TEXTOS CANDIDATOS
 *
 * Todas las métricas son funciones puras sobre tablas de referencia
 * inmutables cargadas una sola vez en el arranque. Ningún método
 * muta estado compartido; el Scorer es seguro para lectura
 * concurrente desde todos los hilos de solvers.
 * =================================================================
 */

/// Definiciones de errores semánticos para el triaje de fallos de ingesta.
pub mod errors;

/// Carga y representación de las tablas de frecuencia de referencia.
pub mod tables;

/// Métricas de frecuencia: chi-cuadrado, n-gramas, índice de coincidencia.
pub mod metrics;

/// Plausibilidad lingüística: vocales, dígrafos comunes, repeticiones.
pub mod linguistic;

/// Evidencia de cribs y cobertura de diccionario.
pub mod cribs;

pub use crate::cribs::CribSpec;
pub use crate::errors::ScoringError;
pub use crate::tables::{NgramModel, ReferenceTables};

/// Puntuador central. Posee las tablas de referencia y expone todas
/// las métricas como métodos de solo lectura.
pub struct Scorer {
    /// Tablas de frecuencia inmutables compartidas por todos los hilos.
    pub tables: ReferenceTables,
}

impl Scorer {
    /// Construye un puntuador sobre tablas ya cargadas.
    #[must_use]
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }
}

/// Colección de tipos de alta frecuencia para inyección directa en motores.
pub mod prelude {
    pub use crate::cribs::CribSpec;
    pub use crate::errors::ScoringError;
    pub use crate::tables::ReferenceTables;
    pub use crate::Scorer;
}
