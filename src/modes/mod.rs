pub mod generate;
pub mod view;

pub use generate::{GenerateMode, GenerateOptions};
pub use view::ViewMode;
