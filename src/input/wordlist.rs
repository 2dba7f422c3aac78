//! Word-list loading and normalization
//!
//! Words reach the engine already normalized: trimmed, uppercased and, by
//! default, with German umlauts folded to their ASCII digraphs. Note that
//! uppercasing alone maps ß to SS, so sharp S folds even when umlauts are
//! kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Normalize one raw word for placement
pub fn normalize(raw: &str, keep_umlauts: bool) -> String {
    let word = raw.trim().to_uppercase();
    if keep_umlauts {
        word
    } else {
        fold_umlauts(&word)
    }
}

fn fold_umlauts(word: &str) -> String {
    word.replace('Ä', "AE")
        .replace('Ö', "OE")
        .replace('Ü', "UE")
}

/// Read normalized words from any line-oriented source, skipping blank lines
pub fn read_words<R: BufRead>(reader: R, keep_umlauts: bool) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read word list line")?;
        let word = normalize(&line, keep_umlauts);
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load the word list from a file
pub fn load_words(path: &Path, keep_umlauts: bool) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open word list {}", path.display()))?;
    read_words(BufReader::new(file), keep_umlauts)
}
