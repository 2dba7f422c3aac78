//! SVG rendering of a finished puzzle
//!
//! One square cell per letter with a black grid stroke on a white frame,
//! monospace glyphs centered in the cells. Optionally tints word letters so
//! the same renderer produces the solution sheet.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::puzzle::{Position, Puzzle};

const CELL: usize = 44;
const STROKE_WIDTH: usize = 2;
const STROKE: &str = "black";
const FILL: &str = "white";
const WORD_TINT: &str = "#1a7f37";

/// Build the SVG document for a puzzle
pub fn render_svg(puzzle: &Puzzle, highlight_words: bool) -> String {
    let w = puzzle.grid.width();
    let h = puzzle.grid.height();
    let noise = puzzle.random_fill_set();

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg version=\"1.1\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        -(STROKE_WIDTH as i32),
        -(STROKE_WIDTH as i32),
        CELL * w + STROKE_WIDTH * 2,
        CELL * h + STROKE_WIDTH * 2,
        CELL * w,
        CELL * h,
    ));
    svg.push_str(&format!(
        "  <g stroke=\"{STROKE}\" stroke-width=\"{STROKE_WIDTH}\">\n"
    ));

    // Frame
    svg.push_str(&format!(
        "    <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"0\" fill=\"{FILL}\" />\n",
        w * CELL,
        h * CELL,
    ));
    // Horizontal lines
    for y in 1..h {
        svg.push_str(&format!(
            "    <line x1=\"0\" y1=\"{0}\" x2=\"{1}\" y2=\"{0}\" />\n",
            y * CELL,
            w * CELL,
        ));
    }
    // Vertical lines
    for x in 1..w {
        svg.push_str(&format!(
            "    <line x1=\"{0}\" y1=\"0\" x2=\"{0}\" y2=\"{1}\" />\n",
            x * CELL,
            h * CELL,
        ));
    }

    svg.push_str("    <style>\n");
    svg.push_str("        text {\n");
    svg.push_str("            font-family: \"Courier New\", Courier, monospace;\n");
    svg.push_str(&format!(
        "            font-size: {:.2}px;\n",
        CELL as f64 / 1.618
    ));
    svg.push_str("            text-anchor: middle;\n");
    svg.push_str("            dominant-baseline: middle;\n");
    svg.push_str("        }\n");
    svg.push_str("    </style>\n");

    for y in 0..h {
        for x in 0..w {
            let pos = Position::new(x as i32, y as i32);
            let letter = puzzle.grid.get(pos).unwrap_or(' ');
            let cx = CELL / 2 + x * CELL;
            let cy = CELL / 2 + y * CELL;
            if highlight_words && !noise.contains(&pos) {
                svg.push_str(&format!(
                    "    <text x=\"{cx}\" y=\"{cy}\" fill=\"{WORD_TINT}\">{letter}</text>\n"
                ));
            } else {
                svg.push_str(&format!("    <text x=\"{cx}\" y=\"{cy}\">{letter}</text>\n"));
            }
        }
    }

    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG to a file, creating parent directories if needed
pub fn write_svg(puzzle: &Puzzle, path: &Path, highlight_words: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, render_svg(puzzle, highlight_words))
        .with_context(|| format!("failed to write SVG to {}", path.display()))
}
