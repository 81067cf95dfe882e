//! # geohash-rs
//!
//! 52-bit interleaved geohash cells for sorted-index range queries.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Raw Cell Codes
//!
//! ```
//! use geohash_rs::{GeoRanges, decode, encode, neighbors};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = encode(&GeoRanges::STORAGE, &(13.816, 23.357), 26)?;
//! let rect = decode(&GeoRanges::STORAGE, &cell);
//! assert!(rect.contains(&(13.816, 23.357)));
//!
//! let around = neighbors(cell);
//! assert_eq!(around.north.step, 26);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `search_box_ranges` - Radius Queries
//!
//! Produces the 9 score ranges (center, N, S, E, W, NE, NW, SE, SW) an ordered
//! index must scan to find every point within a radius. Pruned cells come back
//! as empty ranges.
//!
//! ```
//! use geohash_rs::search_box_ranges;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! // 10 meters around a point
//! let ranges = search_box_ranges(13.816, 23.357, 10.0, 1.0)?;
//! for range in ranges.iter().filter(|r| !r.is_empty()) {
//!     println!("scan [{}, {})", range.min, range.max);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeoCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::GeoCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeoCell::from_wgs84(&(13.361389, 38.115556), 26)?;
//! assert_eq!(cell.id, "sqc8b49rny0");
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;
pub mod search;

pub use cell::{GeoCell, cells_from_points};
pub use coord::{Axis, AxisRange, Coordinate, GeoRanges, distance_meters, validate_public};
pub use error::GeohashError;
pub use geom::{parse_geojson, parse_geometry, parse_wkt};
pub use index::{
    Cell, DEFAULT_BITS, DEFAULT_STEP, MAX_STEP, MIN_STEP, Neighbors, Rectangle,
    align_to_full_width, decode, deinterleave, encode, from_geohash_string, interleave,
    move_axis, neighbors, to_geohash_string,
};
pub use io::{CellsToGeometry, GeometryFormat, search_area_to_geojson};
pub use search::{
    BoundingBox, DistanceUnit, ScoreRange, SearchArea, SearchConfig, bounding_box,
    estimate_step, search_area, search_box_ranges,
};

pub use geo_types;
