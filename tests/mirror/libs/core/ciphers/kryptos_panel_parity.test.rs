/**
 * =================================================================
 * APARATO: KRYPTOS PANEL PARITY TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: PARIDAD BIT-PERFECTA CON EL PANEL K1 PÚBLICO
 *
 * Verdad de terreno independiente: las constantes van incrustadas
 * aquí para que una regresión en los datos del dominio no pueda
 * ocultar una regresión en la primitiva.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::{indices_to_text, text_to_indices, TableauAlphabet};
use kryptarch_core_ciphers::vigenere;

const K1_PLAINTEXT: &str =
    "BETWEENSUBTLESHADINGANDTHEABSENCEOFLIGHTLIESTHENUANCEOFIQLUSION";
const K1_CIPHERTEXT: &str =
    "EMUFPHZLRFAXYUSDJKZLDKRNSHGNFIVJYQTQUXQBQVYUVLLTREVJYQTMKYRDMFD";

#[test]
fn certify_k1_encryption_parity() {
    let tableau = TableauAlphabet::from_keyword("KRYPTOS").expect("tableau");
    assert_eq!(tableau.letters(), "KRYPTOSABCDEFGHIJLMNQUVWXZ");

    let plain = text_to_indices(K1_PLAINTEXT).expect("plain");
    let key = text_to_indices("PALIMPSEST").expect("key");

    let cipher = vigenere::encrypt(&plain, &key, &tableau).expect("encrypt");
    assert_eq!(indices_to_text(&cipher), K1_CIPHERTEXT, "PANEL_PARITY_DRIFT");
}

#[test]
fn certify_k1_decryption_parity() {
    let tableau = TableauAlphabet::from_keyword("KRYPTOS").expect("tableau");
    let cipher = text_to_indices(K1_CIPHERTEXT).expect("cipher");
    let key = text_to_indices("PALIMPSEST").expect("key");

    let plain = vigenere::decrypt(&cipher, &key, &tableau).expect("decrypt");
    assert_eq!(indices_to_text(&plain), K1_PLAINTEXT);
}

#[test]
fn certify_standard_tableau_degenerates_to_classic() {
    let tableau = TableauAlphabet::standard();
    let plain = text_to_indices("DIVERTTROOPSTOEASTRIDGE").expect("plain");
    let key = text_to_indices("OSCAR").expect("key");

    let cipher = vigenere::encrypt(&plain, &key, &tableau).expect("encrypt");
    // Vigenère clásico: C = P + K (mod 26) en coordenadas estándar.
    for (index, (&p, &c)) in plain.iter().zip(&cipher).enumerate() {
        let expected = (p + key[index % key.len()]) % 26;
        assert_eq!(c, expected);
    }
}
