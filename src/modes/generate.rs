use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::metrics::fill_summary;
use crate::persistence::{save_report, PuzzleReport};
use crate::puzzle::{PlacementEngine, Puzzle, PuzzleConfig};
use crate::render::{svg, text};

/// Output options for one-shot generation, beyond the engine configuration
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for reproducible output; `None` uses the thread RNG
    pub seed: Option<u64>,
    pub svg_path: Option<PathBuf>,
    /// Tint word letters in the SVG (solution sheet)
    pub svg_solution: bool,
    pub report_path: Option<PathBuf>,
    pub color: bool,
}

pub struct GenerateMode {
    config: PuzzleConfig,
    options: GenerateOptions,
}

impl GenerateMode {
    pub fn new(config: PuzzleConfig, options: GenerateOptions) -> Self {
        Self { config, options }
    }

    /// Generate one puzzle and emit every requested output
    pub fn run(&self, words: &[String]) -> Result<()> {
        self.config.validate()?;
        let puzzle = self.build_puzzle(words);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        writeln!(out, "Emplaced words:")?;
        writeln!(out)?;
        for placed in &puzzle.emplaced {
            writeln!(out, "- {}", placed.text)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", fill_summary(&puzzle))?;
        writeln!(out)?;
        text::write_grid(&mut out, &puzzle, self.options.color)?;

        if let Some(path) = &self.options.svg_path {
            svg::write_svg(&puzzle, path, self.options.svg_solution)?;
        }
        if let Some(path) = &self.options.report_path {
            save_report(&PuzzleReport::new(&puzzle, self.options.seed), path)?;
        }
        Ok(())
    }

    fn build_puzzle(&self, words: &[String]) -> Puzzle {
        match self.options.seed {
            Some(seed) => PlacementEngine::seeded(self.config.clone(), seed).construct(words),
            None => PlacementEngine::new(self.config.clone()).construct(words),
        }
    }
}
