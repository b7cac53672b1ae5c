/**
 * =================================================================
 * APARATO: TABLE INGESTION TEST
 * CLASIFICACIÓN: PROVING GROUNDS
 * RESPONSABILIDAD: CERTIFICACIÓN DE LAS TABLAS DE REFERENCIA REALES
 *
 * Ejercita el directorio de datos del repositorio: unigramas
 * obligatorios, bigramas y trigramas poblados, cuadrigramas
 * ausentes degradando a uniforme, y lista de palabras cargada.
 * =================================================================
 */

use std::path::PathBuf;

use kryptarch_core_scoring::{ReferenceTables, Scorer};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn certify_repository_tables_hydrate() {
    let tables = ReferenceTables::load(&data_dir()).expect("repository data directory");

    let total: f64 = tables.unigram_frequencies.iter().sum();
    assert!((total - 1.0).abs() < 1e-9, "NORMALIZATION_DRIFT");

    assert!(!tables.bigrams.is_fallback, "bigrams.tsv must hydrate");
    assert!(!tables.trigrams.is_fallback, "trigrams.tsv must hydrate");
    // El fichero de cuadrigramas no se distribuye: ruta de respaldo.
    assert!(tables.quadgrams.is_fallback, "quadgrams must fall back");
    assert!(tables.wordlist.len() > 500, "wordlist must hydrate");
}

#[test]
fn certify_english_reference_dominates_random() {
    let tables = ReferenceTables::load(&data_dir()).expect("repository data directory");
    assert!(tables.bigrams.english_reference > tables.bigrams.random_reference);
    assert!(tables.trigrams.english_reference > tables.trigrams.random_reference);
}

#[test]
fn certify_ngram_fitness_separates_english_from_scramble() {
    let tables = ReferenceTables::load(&data_dir()).expect("repository data directory");
    let scorer = Scorer::new(tables);

    let english = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    let scramble = "QZJXKWVQZJXKWVQZJXKWVQZJXKWVQZJXKWV";

    let english_fitness = scorer.ngram_fitness(english, 2);
    let scramble_fitness = scorer.ngram_fitness(scramble, 2);
    assert!(
        english_fitness > scramble_fitness + 0.3,
        "bigram fitness must separate ({english_fitness:.3} vs {scramble_fitness:.3})"
    );
}
