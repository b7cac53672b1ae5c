// [libs/core/ciphers/src/monoalpha.rs]
/*!
 * APARATO: MONOALPHABETIC SUBSTITUTION PRIMITIVE
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: SUSTITUCIÓN SIMPLE POR ALFABETO PERMUTADO
 *
 * La clave es un `TableauAlphabet`: la letra plana i se sustituye
 * por la letra en la posición i del tableau.
 */

use crate::alphabet::TableauAlphabet;

/// Cifra sustituyendo cada letra por su imagen en el tableau.
#[must_use]
pub fn encrypt(plaintext: &[u8], key: &TableauAlphabet) -> Vec<u8> {
    plaintext
        .iter()
        .map(|&letter| key.letter_at(letter))
        .collect()
}

/// Descifra aplicando la permutación inversa.
#[must_use]
pub fn decrypt(ciphertext: &[u8], key: &TableauAlphabet) -> Vec<u8> {
    ciphertext
        .iter()
        .map(|&letter| key.position_of(letter))
        .collect()
}
