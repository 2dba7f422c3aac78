use std::cmp::Reverse;
use std::collections::HashSet;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::config::{AnchorPolicy, PuzzleConfig, SortOrder};
use super::direction::Direction;
use super::grid::{Grid, Position, ALPHABET};
use super::policy::select_direction;

/// A word written into the grid, with the cells it occupies in letter order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    pub path: Vec<Position>,
}

/// Result of a construction run: the filled grid plus everything the
/// renderers and reports need to tell words from noise
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// Successfully placed words, in processing order
    pub emplaced: Vec<PlacedWord>,
    /// Words whose trials were exhausted, in processing order
    pub dropped: Vec<String>,
    /// Cells the fill pass wrote, in row-major order
    pub random_fill: Vec<Position>,
}

impl Puzzle {
    /// Fraction of cells holding random filler rather than word letters
    pub fn fill_fraction(&self) -> f64 {
        let total = self.grid.width() * self.grid.height();
        self.random_fill.len() as f64 / total as f64
    }

    /// Fill coordinates as a set, for per-cell lookups while rendering
    pub fn random_fill_set(&self) -> HashSet<Position> {
        self.random_fill.iter().copied().collect()
    }
}

/// The placement engine that owns the grid during construction.
///
/// Randomness is injected: `new` uses the thread RNG, `seeded` produces
/// reproducible puzzles, `with_rng` accepts any source for tests.
pub struct PlacementEngine<R: Rng> {
    config: PuzzleConfig,
    rng: R,
}

impl PlacementEngine<ThreadRng> {
    /// Create an engine with the thread-local RNG
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }
}

impl PlacementEngine<StdRng> {
    /// Create an engine whose output is fully determined by `seed`
    pub fn seeded(config: PuzzleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PlacementEngine<R> {
    pub fn with_rng(config: PuzzleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Place the words and fill the leftovers.
    ///
    /// Words are sorted once per `sort_order`, then each gets up to
    /// `max_tries` independent trials. Unplaceable words are dropped, never
    /// an error. Afterwards no cell is left empty.
    pub fn construct(&mut self, words: &[String]) -> Puzzle {
        let words = sorted_words(words, self.config.sort_order);
        let mut grid = Grid::new(self.config.width, self.config.height, self.config.wrap);

        let mut emplaced = Vec::new();
        let mut dropped = Vec::new();
        for word in words {
            match self.place_word(&mut grid, &word) {
                Some(placed) => emplaced.push(placed),
                None => dropped.push(word),
            }
        }

        let random_fill = self.fill_empty(&mut grid);

        Puzzle {
            grid,
            emplaced,
            dropped,
            random_fill,
        }
    }

    /// Try to place one word; `None` means every trial failed
    fn place_word(&mut self, grid: &mut Grid, word: &str) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Some(PlacedWord {
                text: word.to_string(),
                path: Vec::new(),
            });
        }

        for _ in 0..self.config.effective_max_tries() {
            // No usable anchor: the word is abandoned outright, not retried
            let anchor = self.random_anchor(grid, letters[0])?;
            if let Some(path) = self.walk(grid, anchor, &letters) {
                return Some(PlacedWord {
                    text: word.to_string(),
                    path,
                });
            }
        }
        None
    }

    /// Sample up to `width * height` random cells for a usable anchor
    fn random_anchor(&mut self, grid: &Grid, first_letter: char) -> Option<Position> {
        for _ in 0..self.config.width * self.config.height {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.width) as i32,
                self.rng.gen_range(0..self.config.height) as i32,
            );
            match grid.get(pos) {
                None => return Some(pos),
                Some(letter)
                    if self.config.anchor_policy == AnchorPolicy::MatchFirstLetter
                        && letter == first_letter =>
                {
                    return Some(pos)
                }
                Some(_) => {}
            }
        }
        None
    }

    /// Walk the word from the anchor, one step per letter.
    ///
    /// Every letter, the first included, lands one step away from the
    /// cursor; the anchor cell itself is never written. On a dead end the
    /// undo journal restores every touched cell and the trial fails.
    fn walk(&mut self, grid: &mut Grid, anchor: Position, letters: &[char]) -> Option<Vec<Position>> {
        let mut undo: Vec<(Position, Option<char>)> = Vec::with_capacity(letters.len());
        let mut path = Vec::with_capacity(letters.len());
        let mut cursor = anchor;
        let mut last_direction: Option<Direction> = None;

        for &letter in letters {
            let Some((direction, target)) = select_direction(
                grid,
                &self.config,
                cursor,
                letter,
                last_direction,
                &mut self.rng,
            ) else {
                for (pos, previous) in undo.into_iter().rev() {
                    grid.set(pos, previous);
                }
                return None;
            };

            undo.push((target, grid.get(target)));
            grid.set(target, Some(letter));
            path.push(target);
            cursor = target;
            if self.config.forbid_same_direction {
                last_direction = Some(direction);
            }
        }
        Some(path)
    }

    /// Assign a uniformly random letter to every still-empty cell
    fn fill_empty(&mut self, grid: &mut Grid) -> Vec<Position> {
        let positions: Vec<Position> = grid.positions().collect();
        let mut filled = Vec::new();
        for pos in positions {
            if grid.get(pos).is_none() {
                let letter = ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char;
                grid.set(pos, Some(letter));
                filled.push(pos);
            }
        }
        filled
    }
}

/// Apply the configured sort once, before any placement. Stable, so equal
/// lengths keep their input order.
fn sorted_words(words: &[String], order: SortOrder) -> Vec<String> {
    let mut words = words.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => words.sort_by_key(|w| w.chars().count()),
        SortOrder::Descending => words.sort_by_key(|w| Reverse(w.chars().count())),
    }
    words
}
