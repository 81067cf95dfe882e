use crate::error::GeohashError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn parse_error(msg: impl ToString) -> GeohashError {
    GeohashError::GeometryParseError(msg.to_string())
}

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON geometry or feature into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let geojson: GeoJson = s.parse().map_err(|e: geojson::Error| parse_error(e))?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| parse_error("feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(parse_error("expected a single geometry, got a FeatureCollection"));
        }
    };
    Geometry::try_from(geometry).map_err(parse_error)
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let wkt: Wkt<f64> = Wkt::from_str(s).map_err(parse_error)?;
    wkt.try_into()
        .map_err(|_| parse_error("WKT has no geo-types equivalent"))
}

/// Representative lon/lat point of a geometry; a point is its own centroid.
pub fn centroid(geometry: &Geometry<f64>) -> Result<Point<f64>, GeohashError> {
    geometry
        .centroid()
        .ok_or_else(|| parse_error("geometry is empty and has no centroid"))
}
