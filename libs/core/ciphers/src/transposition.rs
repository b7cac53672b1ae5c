// [libs/core/ciphers/src/transposition.rs]
/*!
 * =================================================================
 * APARATO: COLUMNAR TRANSPOSITION PRIMITIVE
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: TRANSPOSICIÓN COLUMNAR CON COLUMNAS IRREGULARES
 *
 * Semántica del orden: `column_order[k]` es el índice de la columna
 * original leída en k-ésimo lugar. El texto se escribe por filas en
 * una rejilla de `period` columnas; con longitud no múltiplo del
 * periodo las primeras `len % period` columnas llevan una fila
 * extra. `decrypt` con el mismo orden es el inverso exacto de
 * `encrypt`.
 * =================================================================
 */

use crate::errors::CipherError;

/// Valida que el vector sea una permutación de 0..period.
pub fn validate_column_order(column_order: &[usize]) -> Result<(), CipherError> {
    let period = column_order.len();
    let mut seen = vec![false; period];
    for &column in column_order {
        if column >= period || seen[column] {
            return Err(CipherError::InvalidPermutation { period });
        }
        seen[column] = true;
    }
    if period == 0 {
        return Err(CipherError::InvalidPermutation { period });
    }
    Ok(())
}

/// Invierte una permutación válida.
#[must_use]
pub fn invert_column_order(column_order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; column_order.len()];
    for (read_rank, &column) in column_order.iter().enumerate() {
        inverse[column] = read_rank;
    }
    inverse
}

/// Longitud de cada columna original para un texto dado.
fn column_lengths(text_len: usize, period: usize) -> Vec<usize> {
    let full_rows = text_len / period;
    let extra = text_len % period;
    (0..period)
        .map(|column| full_rows + usize::from(column < extra))
        .collect()
}

/// Cifra leyendo las columnas en el orden dado.
pub fn encrypt(plaintext: &[u8], column_order: &[usize]) -> Result<Vec<u8>, CipherError> {
    validate_column_order(column_order)?;
    let period = column_order.len();

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for &column in column_order {
        let mut position = column;
        while position < plaintext.len() {
            ciphertext.push(plaintext[position]);
            position += period;
        }
    }
    Ok(ciphertext)
}

/// Descifra un texto cifrado con el mismo orden de columnas.
pub fn decrypt(ciphertext: &[u8], column_order: &[usize]) -> Result<Vec<u8>, CipherError> {
    validate_column_order(column_order)?;
    let period = column_order.len();
    let lengths = column_lengths(ciphertext.len(), period);

    // 1. REPARTO: cada tramo secuencial del cifrado pertenece a la
    //    columna que fue leída en ese turno.
    let mut columns: Vec<&[u8]> = vec![&[]; period];
    let mut cursor = 0usize;
    for &column in column_order {
        let span = lengths[column];
        columns[column] = &ciphertext[cursor..cursor + span];
        cursor += span;
    }

    // 2. RECONSTRUCCIÓN POR FILAS
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut offsets = vec![0usize; period];
    for index in 0..ciphertext.len() {
        let column = index % period;
        plaintext.push(columns[column][offsets[column]]);
        offsets[column] += 1;
    }
    Ok(plaintext)
}
