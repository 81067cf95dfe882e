mod bounds;
mod config;
mod radius;
mod ranges;

pub use bounds::{BoundingBox, bounding_box, estimate_step};
pub use config::{DistanceUnit, SearchConfig};
pub use radius::{SearchArea, search_area, search_box_ranges};
pub use ranges::ScoreRange;
