use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// The alphabet the fill pass draws from
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A position on the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Rectangular letter grid, row-major.
///
/// Every cell is either empty (`None`) or holds a single uppercase letter.
/// The wrap policy is fixed at construction: toroidal grids reduce
/// out-of-range coordinates modulo the dimensions, bounded grids reject them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Option<char>>,
    width: usize,
    height: usize,
    wrap: bool,
}

impl Grid {
    /// Create an empty grid. Dimensions must be positive (validated by the
    /// engine configuration before any grid is built).
    pub fn new(width: usize, height: usize, wrap: bool) -> Self {
        Self {
            cells: vec![None; width * height],
            width,
            height,
            wrap,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos));
        pos.y as usize * self.width + pos.x as usize
    }

    /// Whether a position lies inside the grid proper (no wrapping applied)
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Resolve a possibly out-of-range coordinate to a grid position.
    ///
    /// Toroidal grids reduce with the Euclidean remainder so negative
    /// coordinates wrap correctly; bounded grids return `None` off-grid.
    pub fn resolve(&self, x: i32, y: i32) -> Option<Position> {
        if self.wrap {
            Some(Position::new(
                x.rem_euclid(self.width as i32),
                y.rem_euclid(self.height as i32),
            ))
        } else {
            let pos = Position::new(x, y);
            self.contains(pos).then_some(pos)
        }
    }

    /// The cell one hop-scaled step away from `from`, or `None` when the
    /// step leaves a bounded grid
    pub fn step(&self, from: Position, direction: Direction, hop: usize) -> Option<Position> {
        let (dx, dy) = direction.delta(hop as i32);
        self.resolve(from.x + dx, from.y + dy)
    }

    /// Letter at a resolved position, `None` for an empty cell
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.index(pos)]
    }

    /// Write a cell (also used to restore a previous value during rollback)
    pub fn set(&mut self, pos: Position, cell: Option<char>) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    /// Iterate all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Grid contents as one string per row, empty cells as spaces
    pub fn rows(&self) -> Vec<String> {
        (0..self.height as i32)
            .map(|y| {
                (0..self.width as i32)
                    .map(|x| self.get(Position::new(x, y)).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }
}
