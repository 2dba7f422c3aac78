use std::io::Write;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::puzzle::{Position, Puzzle};

/// Print the grid row by row.
///
/// With color on, word letters render bold green and randomly-filled
/// letters bold red. After the fill pass every cell holds a letter.
pub fn write_grid<W: Write>(out: &mut W, puzzle: &Puzzle, color: bool) -> Result<()> {
    let noise = puzzle.random_fill_set();

    for y in 0..puzzle.grid.height() as i32 {
        for x in 0..puzzle.grid.width() as i32 {
            let pos = Position::new(x, y);
            let letter = puzzle.grid.get(pos).unwrap_or(' ');
            if !color {
                write!(out, "{letter}")?;
            } else if noise.contains(&pos) {
                write!(out, "{}", letter.red().bold())?;
            } else {
                write!(out, "{}", letter.green().bold())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
