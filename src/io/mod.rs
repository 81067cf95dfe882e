mod geometry;

pub use geometry::{CellsToGeometry, GeometryFormat, search_area_to_geojson};
