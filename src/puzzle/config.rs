use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// How the direction selector orders its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionPolicy {
    /// Random permutation of the remaining directions (uniform)
    Shuffle,
    /// Fixed canonical order: right, left, down, up
    ForceOrder,
    /// Weighted permutation favoring right by `right_weight`
    PreferRight,
}

/// Word-list ordering applied once before placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    None,
    /// Shortest words first
    Ascending,
    /// Longest words first; packs dense grids better
    Descending,
}

/// Which cells qualify as a placement anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPolicy {
    /// Only empty cells
    EmptyOnly,
    /// Empty cells, or cells already holding the word's first letter
    MatchFirstLetter,
}

/// Non-fatal configuration findings reported by [`PuzzleConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The prefer-right policy never removes the excluded direction, so
    /// `forbid_same_direction` has no effect under it
    PreferRightIgnoresSameDirection,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::PreferRightIgnoresSameDirection => write!(
                f,
                "the prefer-right policy does not respect forbid-same-direction"
            ),
        }
    }
}

/// Configuration for the placement engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Cells skipped per step when walking a word
    pub hop: usize,
    /// Toroidal addressing when true, bounded when false
    pub wrap: bool,
    /// Placement attempts per word; defaults to `10 * width * height`
    pub max_tries: Option<usize>,
    /// Disallow two consecutive steps in the same direction
    pub forbid_same_direction: bool,
    pub direction_policy: DirectionPolicy,
    /// Relative weight of the right direction under prefer-right
    pub right_weight: f64,
    pub sort_order: SortOrder,
    pub anchor_policy: AnchorPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            hop: 1,
            wrap: true,
            max_tries: None,
            forbid_same_direction: false,
            direction_policy: DirectionPolicy::Shuffle,
            right_weight: 2.0,
            sort_order: SortOrder::None,
            anchor_policy: AnchorPolicy::MatchFirstLetter,
        }
    }
}

impl PuzzleConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(5, 5)
    }

    /// Placement attempts per word, with the computed default applied
    pub fn effective_max_tries(&self) -> usize {
        self.max_tries.unwrap_or(10 * self.width * self.height)
    }

    /// Check the configuration.
    ///
    /// Zero-sized grids are a hard error; everything else that is merely
    /// inconsistent comes back as a warning for the caller to surface.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "grid dimensions must be positive, got {}x{}",
                self.width,
                self.height
            );
        }

        let mut warnings = Vec::new();
        if self.forbid_same_direction && self.direction_policy == DirectionPolicy::PreferRight {
            warnings.push(ConfigWarning::PreferRightIgnoresSameDirection);
        }
        Ok(warnings)
    }
}
