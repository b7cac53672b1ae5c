/**
 * =================================================================
 * APARATO: ROUNDTRIP LAWS TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: LEYES DE IDA Y VUELTA DE TODAS LAS PRIMITIVAS
 *
 * Para toda clave válida: decrypt(encrypt(x)) = x. Las claves se
 * generan por propiedad; las matrices de Hill se filtran a las
 * invertibles módulo 26.
 * =================================================================
 */

use kryptarch_core_ciphers::alphabet::TableauAlphabet;
use kryptarch_core_ciphers::{hill::HillMatrix, monoalpha, transposition, vigenere};
use proptest::prelude::*;

/// Texto como índices de letra 0..=25.
fn letters(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..26, 1..max_len)
}

/// Alfabeto de tableau desde una palabra clave arbitraria.
fn tableau() -> impl Strategy<Value = TableauAlphabet> {
    "[A-Z]{1,12}".prop_map(|keyword| {
        TableauAlphabet::from_keyword(&keyword).expect("keyword alphabets are total")
    })
}

proptest! {
    #[test]
    fn law_vigenere_roundtrip(
        plain in letters(120),
        key in prop::collection::vec(0u8..26, 1..12),
        alphabet in tableau(),
    ) {
        let cipher = vigenere::encrypt(&plain, &key, &alphabet).expect("encrypt");
        let recovered = vigenere::decrypt(&cipher, &key, &alphabet).expect("decrypt");
        prop_assert_eq!(recovered, plain);
    }

    #[test]
    fn law_transposition_roundtrip(
        plain in letters(140),
        sort_keys in prop::collection::vec(any::<u64>(), 1..12),
    ) {
        // Permutación arbitraria: orden inducido por claves aleatorias.
        let period = sort_keys.len();
        let mut order: Vec<usize> = (0..period).collect();
        order.sort_by_key(|&column| (sort_keys[column], column));

        let cipher = transposition::encrypt(&plain, &order).expect("encrypt");
        prop_assert_eq!(cipher.len(), plain.len());
        let recovered = transposition::decrypt(&cipher, &order).expect("decrypt");
        prop_assert_eq!(recovered, plain);
    }

    #[test]
    fn law_monoalpha_roundtrip(plain in letters(120), alphabet in tableau()) {
        let cipher = monoalpha::encrypt(&plain, &alphabet);
        let recovered = monoalpha::decrypt(&cipher, &alphabet);
        prop_assert_eq!(recovered, plain);
    }

    #[test]
    fn law_hill_roundtrip(
        plain in letters(120),
        entries in prop::collection::vec(0u8..26, 4),
    ) {
        let matrix = HillMatrix::new(2, entries).expect("construct");
        // Solo las claves invertibles participan de la ley.
        prop_assume!(matrix.is_invertible());

        let cipher = matrix.encrypt(&plain);
        let recovered = matrix.decrypt(&cipher).expect("decrypt");
        prop_assert_eq!(recovered, plain);
    }

    #[test]
    fn law_hill_3x3_roundtrip(
        plain in letters(90),
        entries in prop::collection::vec(0u8..26, 9),
    ) {
        let matrix = HillMatrix::new(3, entries).expect("construct");
        prop_assume!(matrix.is_invertible());

        let cipher = matrix.encrypt(&plain);
        let recovered = matrix.decrypt(&cipher).expect("decrypt");
        prop_assert_eq!(recovered, plain);
    }
}
