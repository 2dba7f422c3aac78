use std::time::{Duration, Instant};

use crate::puzzle::Puzzle;

/// Session metrics for the viewer and the CLI summary
pub struct PlacementMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub puzzles_generated: u32,
    pub best_emplaced: usize,
}

impl PlacementMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            puzzles_generated: 0,
            best_emplaced: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_generate(&mut self, emplaced: usize) {
        self.puzzles_generated += 1;
        if emplaced > self.best_emplaced {
            self.best_emplaced = emplaced;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for PlacementMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical fill summary line, singular/plural correct
pub fn fill_summary(puzzle: &Puzzle) -> String {
    let count = puzzle.random_fill.len();
    format!(
        "Randomly filled {} cell{} ({:.1}%)",
        count,
        if count != 1 { "s" } else { "" },
        100.0 * puzzle.fill_fraction(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{PlacementEngine, PuzzleConfig};

    #[test]
    fn test_time_formatting() {
        let mut metrics = PlacementMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_best_emplaced_tracking() {
        let mut metrics = PlacementMetrics::new();

        metrics.on_generate(3);
        assert_eq!(metrics.best_emplaced, 3);
        assert_eq!(metrics.puzzles_generated, 1);

        metrics.on_generate(1);
        assert_eq!(metrics.best_emplaced, 3); // Should not decrease
        assert_eq!(metrics.puzzles_generated, 2);

        metrics.on_generate(5);
        assert_eq!(metrics.best_emplaced, 5);
    }

    #[test]
    fn test_fill_summary_plural() {
        let mut engine = PlacementEngine::seeded(PuzzleConfig::small(), 42);
        let puzzle = engine.construct(&["CAT".to_string()]);
        assert_eq!(fill_summary(&puzzle), "Randomly filled 22 cells (88.0%)");
    }

    #[test]
    fn test_fill_summary_singular() {
        let mut engine = PlacementEngine::seeded(PuzzleConfig::new(1, 1), 0);
        let puzzle = engine.construct(&["AB".to_string()]);
        assert_eq!(fill_summary(&puzzle), "Randomly filled 1 cell (100.0%)");
    }
}
