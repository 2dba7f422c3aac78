pub mod svg;
pub mod text;
pub mod tui;

pub use tui::Renderer;
