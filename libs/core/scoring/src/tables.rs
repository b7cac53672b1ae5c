// [libs/core/scoring/src/tables.rs]
/*!
 * =================================================================
 * APARATO: REFERENCE TABLE INGESTION
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: CARGA Y NORMALIZACIÓN DE TABLAS DE FRECUENCIA
 *
 * Contrato de disco: ficheros TSV `<CLAVE>\t<VALOR>` bajo un
 * directorio de datos. La tabla de unigramas es obligatoria; las
 * tablas de n-gramas y la lista de palabras son opcionales y
 * degradan a distribuciones uniformes con una advertencia.
 *
 * Un VALOR positivo se interpreta como conteo crudo; un VALOR no
 * positivo se interpreta como log10 de probabilidad ya calculada.
 * =================================================================
 */

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::ScoringError;

/// Nombre del fichero obligatorio de frecuencias de letras.
pub const LETTER_FREQUENCY_FILE: &str = "letter_freq.tsv";
/// Ficheros opcionales de n-gramas, por orden ascendente.
pub const BIGRAM_FILE: &str = "bigrams.tsv";
pub const TRIGRAM_FILE: &str = "trigrams.tsv";
pub const QUADGRAM_FILE: &str = "quadgrams.tsv";
/// Lista de palabras en mayúsculas, una por línea.
pub const WORDLIST_FILE: &str = "wordlist.txt";

/// Modelo de n-gramas con probabilidades log10 y piso para gramas ausentes.
#[derive(Debug, Clone)]
pub struct NgramModel {
    /// Longitud del grama (2, 3 o 4).
    pub order: usize,
    /// log10 de probabilidad por grama observado.
    log_probabilities: HashMap<String, f64>,
    /// Valor asignado a gramas no observados.
    pub floor_log_probability: f64,
    /// Esperanza de log10 p bajo la propia distribución (texto inglés).
    pub english_reference: f64,
    /// Esperanza de log10 p bajo gramas uniformemente aleatorios.
    pub random_reference: f64,
    /// Verdadero cuando el fichero faltó y el modelo degradó a uniforme.
    pub is_fallback: bool,
}

impl NgramModel {
    /// log10 de probabilidad del grama dado; piso si no fue observado.
    #[inline(always)]
    #[must_use]
    pub fn log_probability(&self, gram: &str) -> f64 {
        match self.log_probabilities.get(gram) {
            Some(&lp) => lp,
            None => self.floor_log_probability,
        }
    }

    /// Modelo uniforme de respaldo para un orden dado.
    #[must_use]
    pub fn uniform(order: usize) -> Self {
        let uniform_log = -(order as f64) * 26f64.log10();
        Self {
            order,
            log_probabilities: HashMap::new(),
            floor_log_probability: uniform_log,
            english_reference: uniform_log,
            random_reference: uniform_log,
            is_fallback: true,
        }
    }

    /// Construye el modelo desde pares (grama, valor) ya validados.
    ///
    /// # Logic:
    /// 1. Valores positivos son conteos; se normalizan contra el total.
    /// 2. Valores no positivos son log10 p directos.
    /// 3. Las referencias inglesa y aleatoria quedan selladas aquí para
    ///    que la normalización de fitness sea autocalibrada.
    fn from_rows(order: usize, rows: Vec<(String, f64)>) -> Self {
        let looks_like_counts = rows.iter().any(|(_, value)| *value > 0.0);

        let mut log_probabilities = HashMap::with_capacity(rows.len());
        let floor_log_probability;

        if looks_like_counts {
            let total: f64 = rows.iter().map(|(_, count)| count.max(0.0)).sum();
            let safe_total = if total > 0.0 { total } else { 1.0 };
            for (gram, count) in rows {
                if count > 0.0 {
                    log_probabilities.insert(gram, (count / safe_total).log10());
                }
            }
            floor_log_probability = (0.01 / safe_total).log10();
        } else {
            let mut minimum_observed = 0.0f64;
            for (gram, log_probability) in rows {
                minimum_observed = minimum_observed.min(log_probability);
                log_probabilities.insert(gram, log_probability);
            }
            floor_log_probability = minimum_observed - 2.0;
        }

        // Referencia inglesa: Σ p·log10 p sobre gramas observados.
        let english_reference: f64 = log_probabilities
            .values()
            .map(|&lp| 10f64.powf(lp) * lp)
            .sum();

        // Referencia aleatoria: esperanza de log10 p para gramas uniformes,
        // contando el piso para las celdas nunca observadas.
        let cell_space = 26f64.powi(order as i32);
        let observed_sum: f64 = log_probabilities.values().sum();
        let unseen_cells = cell_space - log_probabilities.len() as f64;
        let random_reference =
            (observed_sum + unseen_cells * floor_log_probability) / cell_space;

        Self {
            order,
            log_probabilities,
            floor_log_probability,
            english_reference,
            random_reference,
            is_fallback: false,
        }
    }

    /// Cantidad de gramas observados en el modelo.
    #[must_use]
    pub fn observed_grams(&self) -> usize {
        self.log_probabilities.len()
    }
}

/// Tablas de referencia inmutables compartidas por toda la campaña.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// Frecuencias relativas de A-Z, normalizadas a suma 1.
    pub unigram_frequencies: [f64; 26],
    /// Modelos de n-gramas (uniformes cuando el fichero faltó).
    pub bigrams: NgramModel,
    pub trigrams: NgramModel,
    pub quadgrams: NgramModel,
    /// Palabras del diccionario, mayúsculas A-Z, ordenadas por longitud descendente.
    pub wordlist: Vec<String>,
}

impl ReferenceTables {
    /// Carga todas las tablas desde el directorio de datos.
    ///
    /// # Errors:
    /// La tabla de unigramas ilegible o incompleta es fatal. Las tablas
    /// opcionales ausentes degradan a uniforme con advertencia.
    pub fn load(data_directory: &Path) -> Result<Self, ScoringError> {
        let unigram_path = data_directory.join(LETTER_FREQUENCY_FILE);
        let unigram_frequencies = load_unigram_table(&unigram_path)?;

        let bigrams = load_optional_ngram_table(data_directory.join(BIGRAM_FILE), 2)?;
        let trigrams = load_optional_ngram_table(data_directory.join(TRIGRAM_FILE), 3)?;
        let quadgrams = load_optional_ngram_table(data_directory.join(QUADGRAM_FILE), 4)?;
        let wordlist = load_wordlist(data_directory.join(WORDLIST_FILE));

        debug!(
            "📚 [TABLES]: Ingested reference strata (bigrams: {}, trigrams: {}, quadgrams: {}, words: {}).",
            bigrams.observed_grams(),
            trigrams.observed_grams(),
            quadgrams.observed_grams(),
            wordlist.len()
        );

        Ok(Self {
            unigram_frequencies,
            bigrams,
            trigrams,
            quadgrams,
            wordlist,
        })
    }

    /// Tablas degeneradas completamente uniformes, sin diccionario.
    /// Mantiene el motor operativo cuando solo se dispone de unigramas.
    #[must_use]
    pub fn degenerate_uniform() -> Self {
        Self {
            unigram_frequencies: [1.0 / 26.0; 26],
            bigrams: NgramModel::uniform(2),
            trigrams: NgramModel::uniform(3),
            quadgrams: NgramModel::uniform(4),
            wordlist: Vec::new(),
        }
    }

    /// Selecciona el modelo de n-gramas por orden.
    #[must_use]
    pub fn ngram_model(&self, order: usize) -> &NgramModel {
        match order {
            2 => &self.bigrams,
            3 => &self.trigrams,
            _ => &self.quadgrams,
        }
    }
}

/// Carga la tabla obligatoria de 26 unigramas y la normaliza a suma 1.
fn load_unigram_table(path: &Path) -> Result<[f64; 26], ScoringError> {
    let rows = read_tsv_rows(path).map_err(|source| match source {
        ScoringError::Io { path, source } => ScoringError::MissingMandatoryTable { path, source },
        other => other,
    })?;

    let mut frequencies = [0.0f64; 26];
    let mut seen = [false; 26];

    for (gram, value) in rows {
        let mut letters = gram.bytes();
        let letter = letters.next().filter(|b| b.is_ascii_uppercase());
        match (letter, letters.next()) {
            (Some(byte), None) => {
                let index = (byte - b'A') as usize;
                frequencies[index] = value.max(0.0);
                seen[index] = true;
            }
            _ => {
                return Err(ScoringError::MalformedTable {
                    path: path.to_path_buf(),
                    line: 0,
                    detail: format!("expected single letter A-Z, found `{gram}`"),
                })
            }
        }
    }

    if seen.iter().any(|present| !present) {
        return Err(ScoringError::IncompleteAlphabet {
            path: path.to_path_buf(),
        });
    }

    let total: f64 = frequencies.iter().sum();
    if total <= 0.0 {
        return Err(ScoringError::MalformedTable {
            path: path.to_path_buf(),
            line: 0,
            detail: "letter frequencies sum to zero".to_string(),
        });
    }
    for frequency in &mut frequencies {
        *frequency /= total;
    }
    Ok(frequencies)
}

/// Carga una tabla de n-gramas; ausencia degrada a uniforme con advertencia.
fn load_optional_ngram_table(path: PathBuf, order: usize) -> Result<NgramModel, ScoringError> {
    if !path.exists() {
        warn!(
            "⚠️ [TABLES]: Optional table {} absent. Falling back to uniform order-{} model.",
            path.display(),
            order
        );
        return Ok(NgramModel::uniform(order));
    }

    let rows = read_tsv_rows(&path)?;
    for (gram, _) in &rows {
        if gram.len() != order || !gram.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ScoringError::MalformedTable {
                path,
                line: 0,
                detail: format!("expected {order}-letter uppercase gram, found `{gram}`"),
            });
        }
    }
    Ok(NgramModel::from_rows(order, rows))
}

/// Lee pares `<CLAVE>\t<VALOR>` de un TSV.
fn read_tsv_rows(path: &Path) -> Result<Vec<(String, f64)>, ScoringError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(false)
        .from_path(path)
        .map_err(|error| match error.kind() {
            csv::ErrorKind::Io(_) => ScoringError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, error.to_string()),
            },
            _ => ScoringError::MalformedTable {
                path: path.to_path_buf(),
                line: 0,
                detail: error.to_string(),
            },
        })?;

    let mut rows = Vec::new();
    for (line_index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| ScoringError::MalformedTable {
            path: path.to_path_buf(),
            line: line_index + 1,
            detail: error.to_string(),
        })?;

        let key = record.get(0).unwrap_or_default().trim().to_ascii_uppercase();
        let raw_value = record.get(1).unwrap_or_default().trim();
        let value: f64 = raw_value.parse().map_err(|_| ScoringError::MalformedTable {
            path: path.to_path_buf(),
            line: line_index + 1,
            detail: format!("value `{raw_value}` is not a number"),
        })?;

        if key.is_empty() {
            return Err(ScoringError::MalformedTable {
                path: path.to_path_buf(),
                line: line_index + 1,
                detail: "empty key column".to_string(),
            });
        }
        rows.push((key, value));
    }
    Ok(rows)
}

/// Carga la lista de palabras; ausencia deja el diccionario vacío.
fn load_wordlist(path: PathBuf) -> Vec<String> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            warn!(
                "⚠️ [TABLES]: Wordlist {} absent. Dictionary evidence disabled.",
                path.display()
            );
            return Vec::new();
        }
    };

    let unique: BTreeSet<String> = raw
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| word.len() >= 2 && word.bytes().all(|b| b.is_ascii_uppercase()))
        .collect();

    let mut words: Vec<String> = unique.into_iter().collect();
    // Orden por longitud descendente: la cobertura codiciosa marca
    // primero las palabras largas.
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}
