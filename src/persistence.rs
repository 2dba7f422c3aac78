//! Puzzle report persistence
//!
//! Serializes a finished puzzle to JSON so the placement can be consumed by
//! other tools: the grid rows, every placed word with its exact cell path,
//! the dropped words and the noise-cell coordinates.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::puzzle::{PlacedWord, Position, Puzzle};

/// Everything a consumer needs to reconstruct or check a puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleReport {
    pub width: usize,
    pub height: usize,
    /// Seed the puzzle was generated from, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub emplaced: Vec<PlacedWord>,
    pub dropped: Vec<String>,
    pub random_fill: Vec<Position>,
    pub fill_percent: f64,
    /// Grid contents, one string per row
    pub grid: Vec<String>,
    /// Generator version, for compatibility checking
    pub version: String,
}

impl PuzzleReport {
    pub fn new(puzzle: &Puzzle, seed: Option<u64>) -> Self {
        Self {
            width: puzzle.grid.width(),
            height: puzzle.grid.height(),
            seed,
            emplaced: puzzle.emplaced.clone(),
            dropped: puzzle.dropped.clone(),
            random_fill: puzzle.random_fill.clone(),
            fill_percent: 100.0 * puzzle.fill_fraction(),
            grid: puzzle.grid.rows(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Write the report as pretty JSON, creating parent directories if needed
pub fn save_report(report: &PuzzleReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(report).context("failed to serialize puzzle report")?;
    fs::write(path, json).with_context(|| format!("failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{PlacementEngine, PuzzleConfig};

    fn sample_report() -> PuzzleReport {
        let mut engine = PlacementEngine::seeded(PuzzleConfig::small(), 42);
        let puzzle = engine.construct(&["CAT".to_string()]);
        PuzzleReport::new(&puzzle, Some(42))
    }

    #[test]
    fn test_report_reflects_puzzle() {
        let report = sample_report();

        assert_eq!(report.width, 5);
        assert_eq!(report.height, 5);
        assert_eq!(report.seed, Some(42));
        assert_eq!(report.emplaced.len(), 1);
        assert_eq!(report.emplaced[0].text, "CAT");
        assert_eq!(report.grid.len(), 5);
        for row in &report.grid {
            assert_eq!(row.chars().count(), 5);
        }
        assert!((report.fill_percent - 88.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();

        let json = serde_json::to_string(&report).unwrap();
        let parsed: PuzzleReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.width, report.width);
        assert_eq!(parsed.emplaced[0].path, report.emplaced[0].path);
        assert_eq!(parsed.random_fill, report.random_fill);
    }

    #[test]
    fn test_seed_omitted_when_absent() {
        let mut engine = PlacementEngine::seeded(PuzzleConfig::small(), 1);
        let puzzle = engine.construct(&[]);
        let report = PuzzleReport::new(&puzzle, None);

        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("\"seed\""));
    }
}
