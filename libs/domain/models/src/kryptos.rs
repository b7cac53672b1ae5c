// [libs/domain/models/src/kryptos.rs]
/*!
 * =================================================================
 * APARATO: KRYPTOS REFERENCE DATA
 * CLASIFICACIÓN: DOMAIN CONTRACTS (ESTRATO L2)
 * RESPONSABILIDAD: DATOS PÚBLICOS DE LA ESCULTURA (CALIBRACIÓN Y OBJETIVO)
 *
 * K1 sirve de verdad de terreno para calibrar primitivas y
 * validador; K4 es el objetivo de campaña con sus cribs confirmados
 * públicamente por el escultor.
 * =================================================================
 */

use kryptarch_core_ciphers::TableauAlphabet;

use crate::errors::ModelError;

/// Palabra clave del tableau de la escultura.
pub const TABLEAU_KEYWORD: &str = "KRYPTOS";

/// Panel K1 cifrado (63 letras).
pub const K1_CIPHERTEXT: &str =
    "EMUFPHZLRFAXYUSDJKZLDKRNSHGNFIVJYQTQUXQBQVYUVLLTREVJYQTMKYRDMFD";

/// Texto plano confirmado de K1 (IQLUSION conserva la errata del panel).
pub const K1_PLAINTEXT: &str =
    "BETWEENSUBTLESHADINGANDTHEABSENCEOFLIGHTLIESTHENUANCEOFIQLUSION";

/// Clave Vigenère de K1.
pub const K1_KEY: &str = "PALIMPSEST";

/// Clave Vigenère de K2.
pub const K2_KEY: &str = "ABSCISSA";

/// Panel K4 cifrado (97 letras), objetivo de la campaña.
pub const K4_CIPHERTEXT: &str =
    "OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOTWTQSJQSSEKZZWATJKLUDIAWINFBNYPVTTMZFPKWGDKZXTJCDIGKUHUAUEKCAR";

/// Crib confirmado: EASTNORTHEAST en los caracteres 22-34 del panel
/// (posición 21 en base cero).
pub const K4_CRIB_EAST_NORTHEAST: (&str, usize) = ("EASTNORTHEAST", 21);

/// Crib confirmado: BERLIN en los caracteres 64-69 (posición 63 en base cero).
pub const K4_CRIB_BERLIN: (&str, usize) = ("BERLIN", 63);

/// Crib confirmado: CLOCK en los caracteres 70-74 (posición 69 en base cero).
pub const K4_CRIB_CLOCK: (&str, usize) = ("CLOCK", 69);

/// Tableau clavado de la escultura (KRYPTOSABCDEFGHIJLMNQUVWXZ).
pub fn sculpture_tableau() -> Result<TableauAlphabet, ModelError> {
    TableauAlphabet::from_keyword(TABLEAU_KEYWORD)
        .map_err(|fault| ModelError::InvalidParameters(fault.to_string()))
}

/// Cribs confirmados de K4, anclados en coordenadas base cero.
#[must_use]
pub fn k4_confirmed_cribs() -> Vec<(&'static str, usize)> {
    vec![K4_CRIB_EAST_NORTHEAST, K4_CRIB_BERLIN, K4_CRIB_CLOCK]
}
