//! Snakeword - a snake word search puzzle generator
//!
//! This library provides:
//! - Core placement logic (puzzle module): grid, direction policies and the
//!   randomized backtracking engine
//! - Word-list loading and viewer key handling (input module)
//! - Terminal, SVG and TUI rendering (render module)
//! - Session metrics and summary formatting (metrics module)
//! - JSON report persistence (persistence module)
//! - Execution modes: one-shot generation and the interactive viewer
//!   (modes module)

pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod puzzle;
pub mod render;
