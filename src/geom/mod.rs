mod parse;

pub use parse::{centroid, parse_geojson, parse_geometry, parse_wkt};
