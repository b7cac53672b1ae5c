// [libs/core/ciphers/src/hill.rs]
/*!
 * =================================================================
 * APARATO: HILL CIPHER PRIMITIVE (ℤ/26)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: ÁLGEBRA MATRICIAL MÓDULO 26 PARA BLOQUES 2×2 / 3×3
 *
 * # Mathematical Proof (Invertibilidad):
 * Una matriz K es clave válida sii gcd(det K, 26) = 1; en ese caso
 * K⁻¹ = det⁻¹ · adj(K) (mod 26) y decrypt(encrypt(x)) = x para todo
 * bloque x. La derivación por texto plano conocido resuelve
 * K = C · P⁻¹ cuando la matriz de bloques planos P es invertible.
 *
 * El bloque parcial final de un texto cuya longitud no es múltiplo
 * del tamaño de bloque atraviesa la primitiva sin transformar.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use crate::errors::CipherError;

const MODULUS: i64 = 26;

/// Matriz de clave de Hill, fila a fila, entradas 0..=25.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillMatrix {
    /// Dimensión del bloque (2 o 3).
    pub size: usize,
    /// Entradas en orden fila-mayor, longitud size².
    pub rows: Vec<u8>,
}

#[inline(always)]
fn reduce(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Inverso modular por gcd extendido; None si no es coprimo con 26.
fn modular_inverse(value: i64) -> Option<i64> {
    let value = reduce(value);
    let (mut old_r, mut r) = (value, MODULUS);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    if old_r == 1 {
        Some(reduce(old_s))
    } else {
        None
    }
}

impl HillMatrix {
    /// Construye y valida dimensión y rango de entradas.
    pub fn new(size: usize, rows: Vec<u8>) -> Result<Self, CipherError> {
        if size != 2 && size != 3 {
            return Err(CipherError::UnsupportedBlockSize(size));
        }
        if rows.len() != size * size || rows.iter().any(|&entry| entry > 25) {
            return Err(CipherError::InvalidKey);
        }
        Ok(Self { size, rows })
    }

    #[inline(always)]
    fn entry(&self, row: usize, column: usize) -> i64 {
        self.rows[row * self.size + column] as i64
    }

    /// Determinante módulo 26.
    #[must_use]
    pub fn determinant(&self) -> i64 {
        match self.size {
            2 => reduce(self.entry(0, 0) * self.entry(1, 1) - self.entry(0, 1) * self.entry(1, 0)),
            _ => {
                let positive = self.entry(0, 0) * self.entry(1, 1) * self.entry(2, 2)
                    + self.entry(0, 1) * self.entry(1, 2) * self.entry(2, 0)
                    + self.entry(0, 2) * self.entry(1, 0) * self.entry(2, 1);
                let negative = self.entry(0, 2) * self.entry(1, 1) * self.entry(2, 0)
                    + self.entry(0, 0) * self.entry(1, 2) * self.entry(2, 1)
                    + self.entry(0, 1) * self.entry(1, 0) * self.entry(2, 2);
                reduce(positive - negative)
            }
        }
    }

    /// Verdadero sii la matriz es clave de Hill válida.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        modular_inverse(self.determinant()).is_some()
    }

    /// Matriz inversa módulo 26.
    pub fn inverse(&self) -> Result<Self, CipherError> {
        let determinant = self.determinant();
        let determinant_inverse = modular_inverse(determinant)
            .ok_or(CipherError::NonInvertibleMatrix { determinant })?;

        let adjugate: Vec<i64> = match self.size {
            2 => vec![
                self.entry(1, 1),
                -self.entry(0, 1),
                -self.entry(1, 0),
                self.entry(0, 0),
            ],
            _ => {
                // Adjunta = transpuesta de la matriz de cofactores.
                let mut values = vec![0i64; 9];
                for row in 0..3 {
                    for column in 0..3 {
                        let minor_rows: Vec<usize> = (0..3).filter(|&r| r != row).collect();
                        let minor_columns: Vec<usize> = (0..3).filter(|&c| c != column).collect();
                        let minor = self.entry(minor_rows[0], minor_columns[0])
                            * self.entry(minor_rows[1], minor_columns[1])
                            - self.entry(minor_rows[0], minor_columns[1])
                                * self.entry(minor_rows[1], minor_columns[0]);
                        let sign = if (row + column) % 2 == 0 { 1 } else { -1 };
                        // Posición transpuesta: cofactor(fila, col) → adj(col, fila).
                        values[column * 3 + row] = sign * minor;
                    }
                }
                values
            }
        };

        let rows: Vec<u8> = adjugate
            .into_iter()
            .map(|value| reduce(value * determinant_inverse) as u8)
            .collect();

        Ok(Self {
            size: self.size,
            rows,
        })
    }

    /// Aplica la matriz a cada bloque completo; el resto pasa intacto.
    #[must_use]
    pub fn apply(&self, text: &[u8]) -> Vec<u8> {
        let block_size = self.size;
        let full_span = (text.len() / block_size) * block_size;
        let mut output = Vec::with_capacity(text.len());

        for block in text[..full_span].chunks_exact(block_size) {
            for row in 0..block_size {
                let mut accumulator = 0i64;
                for (column, &letter) in block.iter().enumerate() {
                    accumulator += self.entry(row, column) * letter as i64;
                }
                output.push(reduce(accumulator) as u8);
            }
        }
        output.extend_from_slice(&text[full_span..]);
        output
    }

    /// Cifra el texto (alias semántico de `apply`).
    #[must_use]
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        self.apply(plaintext)
    }

    /// Descifra aplicando la matriz inversa.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(self.inverse()?.apply(ciphertext))
    }

    /// Deriva la clave desde `size` pares (bloque plano, bloque cifrado).
    ///
    /// # Logic:
    /// Con los bloques como columnas, C = K·P. Si P es invertible,
    /// K = C·P⁻¹ es única. Una P singular no tiene derivación aquí.
    pub fn solve_from_pairs(
        size: usize,
        plain_blocks: &[&[u8]],
        cipher_blocks: &[&[u8]],
    ) -> Result<Self, CipherError> {
        if size != 2 && size != 3 {
            return Err(CipherError::UnsupportedBlockSize(size));
        }
        if plain_blocks.len() != size
            || cipher_blocks.len() != size
            || plain_blocks.iter().any(|block| block.len() != size)
            || cipher_blocks.iter().any(|block| block.len() != size)
        {
            return Err(CipherError::InvalidKey);
        }

        // Matrices con los bloques como columnas: M[fila][col] = bloque_col[fila].
        let column_matrix = |blocks: &[&[u8]]| -> Vec<u8> {
            let mut rows = vec![0u8; size * size];
            for (column, block) in blocks.iter().enumerate() {
                for (row, &letter) in block.iter().enumerate() {
                    rows[row * size + column] = letter;
                }
            }
            rows
        };

        let plain_matrix = Self::new(size, column_matrix(plain_blocks))?;
        let cipher_matrix = Self::new(size, column_matrix(cipher_blocks))?;
        let plain_inverse = plain_matrix.inverse()?;

        // Producto C · P⁻¹.
        let mut key_rows = vec![0u8; size * size];
        for row in 0..size {
            for column in 0..size {
                let mut accumulator = 0i64;
                for inner in 0..size {
                    accumulator += cipher_matrix.entry(row, inner) * plain_inverse.entry(inner, column);
                }
                key_rows[row * size + column] = reduce(accumulator) as u8;
            }
        }
        Self::new(size, key_rows)
    }
}
