// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN MODELS ROOT
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATOS INMUTABLES DE LA CAMPAÑA
 *
 * Todo artefacto persistente del sistema (parámetros, registros,
 * candidatos, regiones) se define aquí, junto con la huella
 * canónica que sella la identidad de cada ataque.
 * =================================================================
 */

/// Errores semánticos del estrato de contratos.
pub mod errors;

/// Texto cifrado validado A-Z.
pub mod ciphertext;

/// Parámetros de ataque: familias, claves, cribs y método.
pub mod attack;

/// Huella canónica de 128 bits de los parámetros.
pub mod fingerprint;

/// Registro inmutable de ataque y su desenlace.
pub mod record;

/// Candidatos puntuados con procedencia.
pub mod candidate;

/// Pistas estructuradas del asesor externo.
pub mod hints;

/// Regiones del espacio de claves y su contabilidad.
pub mod region;

/// Datos de referencia de la escultura Kryptos.
pub mod kryptos;

pub use crate::attack::{
    AnnealingProfile, AttackParameters, CipherFamily, CoolingSchedule, KeySpec, MethodHint,
};
pub use crate::candidate::{Candidate, Provenance, ScoreBreakdown};
pub use crate::ciphertext::Ciphertext;
pub use crate::errors::ModelError;
pub use crate::fingerprint::Fingerprint;
pub use crate::hints::AdvisorHint;
pub use crate::record::{AttackOutcome, AttackRecord};
pub use crate::region::KeySpaceRegion;

/// Colección de tipos de alta frecuencia para inyección directa.
pub mod prelude {
    pub use crate::attack::{
        AnnealingProfile, AttackParameters, CipherFamily, CoolingSchedule, KeySpec, MethodHint,
    };
    pub use crate::candidate::{Candidate, Provenance, ScoreBreakdown};
    pub use crate::ciphertext::Ciphertext;
    pub use crate::errors::ModelError;
    pub use crate::fingerprint::Fingerprint;
    pub use crate::hints::AdvisorHint;
    pub use crate::record::{AttackOutcome, AttackRecord};
    pub use crate::region::KeySpaceRegion;
}
