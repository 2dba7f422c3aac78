pub mod placement;

pub use placement::{fill_summary, PlacementMetrics};
