//! Direction selection for the placement walk.
//!
//! The selector inspects the grid but never mutates it. A candidate
//! direction is accepted when its target cell (after hop scaling and
//! wrap/bounds resolution) is empty or already holds the letter about to be
//! written there. The three policies only differ in how candidates are
//! ordered.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::{DirectionPolicy, PuzzleConfig};
use super::direction::Direction;
use super::grid::{Grid, Position};

/// Pick one valid direction for the next letter, or `None` when the walk is
/// stuck. Returns the resolved target cell along with the direction.
pub fn select_direction<R: Rng>(
    grid: &Grid,
    config: &PuzzleConfig,
    from: Position,
    letter: char,
    excluded: Option<Direction>,
    rng: &mut R,
) -> Option<(Direction, Position)> {
    let candidates = match config.direction_policy {
        DirectionPolicy::Shuffle => {
            let mut directions = without_excluded(excluded);
            directions.shuffle(rng);
            directions
        }
        DirectionPolicy::ForceOrder => without_excluded(excluded),
        // The excluded direction stays in the pool here; see
        // ConfigWarning::PreferRightIgnoresSameDirection.
        DirectionPolicy::PreferRight => weighted_permutation(config.right_weight, rng),
    };

    for direction in candidates {
        let Some(target) = grid.step(from, direction, config.hop) else {
            continue;
        };
        match grid.get(target) {
            None => return Some((direction, target)),
            Some(existing) if existing == letter => return Some((direction, target)),
            Some(_) => {}
        }
    }
    None
}

fn without_excluded(excluded: Option<Direction>) -> Vec<Direction> {
    Direction::CANONICAL
        .iter()
        .copied()
        .filter(|d| Some(*d) != excluded)
        .collect()
}

/// Permutation of all four directions drawn by weighted sampling without
/// replacement: `right_weight` for right, 1 for the rest.
fn weighted_permutation<R: Rng>(right_weight: f64, rng: &mut R) -> Vec<Direction> {
    // WeightedIndex rejects non-positive weights; fall back to uniform.
    let right_weight = if right_weight.is_finite() && right_weight > 0.0 {
        right_weight
    } else {
        1.0
    };

    let mut remaining = Direction::CANONICAL.to_vec();
    let mut weights: Vec<f64> = remaining
        .iter()
        .map(|d| {
            if *d == Direction::Right {
                right_weight
            } else {
                1.0
            }
        })
        .collect();

    let mut order = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let dist = WeightedIndex::new(&weights).expect("direction weights are positive");
        let i = dist.sample(rng);
        order.push(remaining.remove(i));
        weights.remove(i);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config_with(policy: DirectionPolicy) -> PuzzleConfig {
        PuzzleConfig {
            width: 3,
            height: 3,
            wrap: false,
            direction_policy: policy,
            ..PuzzleConfig::default()
        }
    }

    #[test]
    fn test_force_order_prefers_right() {
        let grid = Grid::new(3, 3, false);
        let config = config_with(DirectionPolicy::ForceOrder);
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(1, 1), 'A', None, &mut rng);
        assert_eq!(picked, Some((Direction::Right, Position::new(2, 1))));
    }

    #[test]
    fn test_force_order_skips_occupied_target() {
        let mut grid = Grid::new(3, 3, false);
        grid.set(Position::new(2, 1), Some('Z'));
        let config = config_with(DirectionPolicy::ForceOrder);
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(1, 1), 'A', None, &mut rng);
        assert_eq!(picked, Some((Direction::Left, Position::new(0, 1))));
    }

    #[test]
    fn test_matching_letter_is_a_valid_target() {
        let mut grid = Grid::new(3, 3, false);
        grid.set(Position::new(2, 1), Some('A'));
        let config = config_with(DirectionPolicy::ForceOrder);
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(1, 1), 'A', None, &mut rng);
        assert_eq!(picked, Some((Direction::Right, Position::new(2, 1))));
    }

    #[test]
    fn test_excluded_direction_is_never_picked_by_shuffle() {
        let grid = Grid::new(3, 3, false);
        let config = config_with(DirectionPolicy::Shuffle);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let (direction, _) = select_direction(
                &grid,
                &config,
                Position::new(1, 1),
                'A',
                Some(Direction::Right),
                &mut rng,
            )
            .unwrap();
            assert_ne!(direction, Direction::Right);
        }
    }

    #[test]
    fn test_none_when_every_direction_is_blocked() {
        let mut grid = Grid::new(3, 3, false);
        for pos in [
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(0, 1),
            Position::new(2, 1),
        ] {
            grid.set(pos, Some('Z'));
        }
        let config = config_with(DirectionPolicy::Shuffle);
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(1, 1), 'A', None, &mut rng);
        assert_eq!(picked, None);
    }

    #[test]
    fn test_none_when_bounded_grid_has_no_targets() {
        let grid = Grid::new(1, 1, false);
        let config = PuzzleConfig {
            width: 1,
            height: 1,
            wrap: false,
            ..PuzzleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(0, 0), 'A', None, &mut rng);
        assert_eq!(picked, None);
    }

    #[test]
    fn test_prefer_right_ignores_exclusion() {
        // Left, up and down blocked: right is the only valid candidate even
        // though it is the excluded direction. Shuffle refuses, prefer-right
        // takes it.
        let mut grid = Grid::new(3, 3, false);
        for pos in [
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(0, 1),
        ] {
            grid.set(pos, Some('Z'));
        }
        let mut rng = StdRng::seed_from_u64(0);

        let shuffled = select_direction(
            &grid,
            &config_with(DirectionPolicy::Shuffle),
            Position::new(1, 1),
            'A',
            Some(Direction::Right),
            &mut rng,
        );
        assert_eq!(shuffled, None);

        let preferred = select_direction(
            &grid,
            &config_with(DirectionPolicy::PreferRight),
            Position::new(1, 1),
            'A',
            Some(Direction::Right),
            &mut rng,
        );
        assert_eq!(preferred, Some((Direction::Right, Position::new(2, 1))));
    }

    #[test]
    fn test_weighted_permutation_contains_all_directions() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let order = weighted_permutation(5.0, &mut rng);
            assert_eq!(order.len(), 4);
            for direction in Direction::CANONICAL {
                assert!(order.contains(&direction));
            }
        }
    }

    #[test]
    fn test_weighted_permutation_sanitizes_bad_weight() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(weighted_permutation(0.0, &mut rng).len(), 4);
        assert_eq!(weighted_permutation(f64::NAN, &mut rng).len(), 4);
    }

    #[test]
    fn test_hop_scales_the_step() {
        let grid = Grid::new(5, 5, false);
        let config = PuzzleConfig {
            width: 5,
            height: 5,
            hop: 2,
            wrap: false,
            direction_policy: DirectionPolicy::ForceOrder,
            ..PuzzleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select_direction(&grid, &config, Position::new(0, 0), 'A', None, &mut rng);
        assert_eq!(picked, Some((Direction::Right, Position::new(2, 0))));
    }
}
