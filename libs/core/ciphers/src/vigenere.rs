// [libs/core/ciphers/src/vigenere.rs]
/*!
 * =================================================================
 * APARATO: VIGENERE / QUAGMIRE-III PRIMITIVE
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: CIFRADO POLIALFABÉTICO SOBRE TABLEAU CLAVADO
 *
 * Convención Quagmire III: texto plano y clave se proyectan a
 * coordenadas del tableau; el cifrado suma posiciones módulo 26 y
 * vuelve a letras por el mismo tableau. Con el tableau identidad la
 * primitiva degenera al Vigenère clásico.
 *
 * # Mathematical Proof (Paridad con el panel K1):
 * Con tableau KRYPTOSABCDEFGHIJLMNQUVWXZ y clave PALIMPSEST, la
 * posición de B es 8 y la de P es 3; 8+3 = 11 → E, primera letra del
 * panel. La ley inversa (c − k mod 26) reconstruye el texto plano.
 * =================================================================
 */

use crate::alphabet::TableauAlphabet;
use crate::errors::CipherError;

/// Cifra índices de letra con la clave y el tableau dados.
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8],
    alphabet: &TableauAlphabet,
) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() || key.iter().any(|&k| k > 25) {
        return Err(CipherError::InvalidKey);
    }

    Ok(plaintext
        .iter()
        .enumerate()
        .map(|(index, &plain_letter)| {
            let plain_position = alphabet.position_of(plain_letter) as u16;
            let key_position = alphabet.position_of(key[index % key.len()]) as u16;
            alphabet.letter_at(((plain_position + key_position) % 26) as u8)
        })
        .collect())
}

/// Descifra índices de letra con la clave y el tableau dados.
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8],
    alphabet: &TableauAlphabet,
) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() || key.iter().any(|&k| k > 25) {
        return Err(CipherError::InvalidKey);
    }

    Ok(ciphertext
        .iter()
        .enumerate()
        .map(|(index, &cipher_letter)| {
            let cipher_position = alphabet.position_of(cipher_letter) as u16;
            let key_position = alphabet.position_of(key[index % key.len()]) as u16;
            alphabet.letter_at(((cipher_position + 26 - key_position) % 26) as u8)
        })
        .collect())
}

/// Descifra una sola letra conocida la posición de clave en el tableau.
/// Forma desnuda usada por la recuperación columna a columna.
#[inline(always)]
#[must_use]
pub fn decrypt_letter_with_shift(
    cipher_letter: u8,
    key_tableau_position: u8,
    alphabet: &TableauAlphabet,
) -> u8 {
    let cipher_position = alphabet.position_of(cipher_letter) as u16;
    alphabet.letter_at(((cipher_position + 26 - key_tableau_position as u16) % 26) as u8)
}

/// Deriva la posición de clave en el tableau que lleva la letra
/// cifrada a la letra plana esperada. Base de la fijación por cribs.
#[inline(always)]
#[must_use]
pub fn key_position_for_pair(
    cipher_letter: u8,
    plain_letter: u8,
    alphabet: &TableauAlphabet,
) -> u8 {
    let cipher_position = alphabet.position_of(cipher_letter) as u16;
    let plain_position = alphabet.position_of(plain_letter) as u16;
    ((cipher_position + 26 - plain_position) % 26) as u8
}
