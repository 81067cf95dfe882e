use crate::cell::GeoCell;
use crate::error::GeohashError;
use crate::search::SearchArea;
use geo_types::Polygon;
use geojson::{Feature, FeatureCollection, GeoJson};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

impl GeometryFormat {
    pub fn format_polygon(&self, polygon: &Polygon<f64>) -> String {
        match self {
            GeometryFormat::Wkt => {
                use wkt::ToWkt;
                polygon.wkt_string()
            }
            GeometryFormat::GeoJson => geojson::Geometry::from(polygon).to_string(),
        }
    }
}

fn cell_feature(cell: &GeoCell) -> Feature {
    let mut feature = Feature::from(geojson::Geometry::from(&cell.to_polygon()));
    feature.set_property("geohash", cell.id.clone());
    feature.set_property("bits", cell.cell.bits);
    feature.set_property("step", cell.step());
    feature
}

/// Trait for converting collections of [`GeoCell`]s to geometry output.
///
/// Implemented for `[GeoCell]` and, through deref, `Vec<GeoCell>`.
pub trait CellsToGeometry {
    /// Converts cells to their rectangular polygons.
    fn to_polygons(&self) -> Vec<Polygon<f64>>;
    /// Renders every cell polygon in the given format.
    fn to_strings(&self, format: GeometryFormat) -> Vec<String>;
    /// Builds a FeatureCollection with geohash, bits and step properties.
    fn to_feature_collection(&self) -> FeatureCollection;
    fn to_geojson(&self) -> String {
        GeoJson::from(self.to_feature_collection()).to_string()
    }
}

impl CellsToGeometry for [GeoCell] {
    fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.par_iter().map(|c: &GeoCell| c.to_polygon()).collect()
    }

    fn to_strings(&self, format: GeometryFormat) -> Vec<String> {
        self.par_iter()
            .map(|c| format.format_polygon(&c.to_polygon()))
            .collect()
    }

    fn to_feature_collection(&self) -> FeatureCollection {
        self.iter().map(cell_feature).collect()
    }
}

/// Renders the non-zeroed cells of a search area plus the query bounding box
/// as a GeoJSON FeatureCollection.
pub fn search_area_to_geojson(area: &SearchArea) -> Result<String, GeohashError> {
    let cells = area
        .active_cells()
        .map(GeoCell::from_cell)
        .collect::<Result<Vec<_>, _>>()?;

    let mut collection = cells.to_feature_collection();
    let mut bounds = Feature::from(geojson::Geometry::from(&area.bounds.to_rect().to_polygon()));
    bounds.set_property("role", "bounds");
    collection.features.push(bounds);

    Ok(GeoJson::from(collection).to_string())
}
