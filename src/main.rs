use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use snakeword::input;
use snakeword::modes::{GenerateMode, GenerateOptions, ViewMode};
use snakeword::puzzle::{AnchorPolicy, DirectionPolicy, PuzzleConfig, SortOrder};

#[derive(Parser)]
#[command(name = "snakeword")]
#[command(version, about = "Snake word search puzzle generator")]
struct Cli {
    /// Word list file, one word per line
    wordfile: PathBuf,

    /// Execution mode
    #[arg(long, default_value = "generate")]
    mode: Mode,

    /// Width of the grid
    #[arg(short = 'w', long, default_value = "10")]
    width: usize,

    /// Height of the grid
    #[arg(short = 'H', long, default_value = "10")]
    height: usize,

    /// Hop so many cells to place the next letter
    #[arg(long, default_value = "1")]
    hop: usize,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Write the grid to an SVG file
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Tint word letters in the SVG (solution sheet)
    #[arg(long, requires = "svg")]
    svg_solution: bool,

    /// Write a JSON placement report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Maximum placement attempts per word [default: 10 * width * height]
    #[arg(long)]
    max_tries: Option<usize>,

    /// Sort the word list by length before placement
    #[arg(long)]
    sort: Option<SortArg>,

    /// Direction-selection policy
    #[arg(long, default_value = "shuffle")]
    policy: PolicyArg,

    /// Prefer the right direction n times as much as the others
    #[arg(long, default_value_t = 2.0)]
    right_weight: f64,

    /// Anchor-cell acceptance rule
    #[arg(long, default_value = "first-letter")]
    anchor: AnchorArg,

    /// Don't replace German umlauts with AE, OE, UE
    #[arg(long)]
    allow_umlauts: bool,

    /// Do not continue words across edges
    #[arg(long)]
    forbid_wrap: bool,

    /// Don't go into the same direction twice in a row
    #[arg(long)]
    forbid_same_direction: bool,

    /// Disable colored terminal output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Generate one puzzle and print it
    Generate,
    /// Browse puzzles interactively in the terminal
    View,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Shuffle,
    ForceOrder,
    PreferRight,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    /// Only empty cells may start a word
    Empty,
    /// Cells already holding the word's first letter also qualify
    FirstLetter,
}

fn config_from(cli: &Cli) -> PuzzleConfig {
    PuzzleConfig {
        width: cli.width,
        height: cli.height,
        hop: cli.hop,
        wrap: !cli.forbid_wrap,
        max_tries: cli.max_tries,
        forbid_same_direction: cli.forbid_same_direction,
        direction_policy: match cli.policy {
            PolicyArg::Shuffle => DirectionPolicy::Shuffle,
            PolicyArg::ForceOrder => DirectionPolicy::ForceOrder,
            PolicyArg::PreferRight => DirectionPolicy::PreferRight,
        },
        right_weight: cli.right_weight,
        sort_order: match cli.sort {
            None => SortOrder::None,
            Some(SortArg::Ascending) => SortOrder::Ascending,
            Some(SortArg::Descending) => SortOrder::Descending,
        },
        anchor_policy: match cli.anchor {
            AnchorArg::Empty => AnchorPolicy::EmptyOnly,
            AnchorArg::FirstLetter => AnchorPolicy::MatchFirstLetter,
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.hop == 0 {
        bail!("--hop must be at least 1");
    }
    if !(cli.right_weight > 0.0) {
        bail!("--right-weight must be positive");
    }

    let config = config_from(&cli);
    for warning in config.validate()? {
        eprintln!("warning: {warning}");
    }

    let words = input::load_words(&cli.wordfile, cli.allow_umlauts)?;

    match cli.mode {
        Mode::Generate => {
            let options = GenerateOptions {
                seed: cli.seed,
                svg_path: cli.svg,
                svg_solution: cli.svg_solution,
                report_path: cli.report,
                color: !cli.no_color,
            };
            GenerateMode::new(config, options).run(&words)?;
        }
        Mode::View => {
            let mut view = ViewMode::new(config, words, cli.seed)?;
            view.run().await?;
        }
    }

    Ok(())
}
