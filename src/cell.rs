use crate::coord::{Coordinate, GeoRanges};
use crate::error::GeohashError;
use crate::geom::{centroid, parse_geometry};
use crate::index::{
    Cell, DEFAULT_BITS, DEFAULT_STEP, Rectangle, align_to_full_width, decode, encode,
    from_geohash_string, neighbors, to_geohash_string,
};
use crate::search::ScoreRange;
use geo_types::{Geometry, Point, Polygon};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A single geohash cell stored against the Mercator-compatible band.
///
/// Each `GeoCell` carries its interleaved code, the lon/lat center of the
/// area it covers, and the standard base32 geohash of that center.
///
/// # Example
///
/// ```
/// use geohash_rs::GeoCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = GeoCell::from_wgs84(&(13.361389, 38.115556), 26)?;
/// println!("Geohash: {}", cell.id);
/// println!("Center: ({}, {})", cell.lng(), cell.lat());
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCell {
    /// 11-character base32 geohash of the cell center
    pub id: String,
    /// Interleaved code at `cell.step` bits per axis
    pub cell: Cell,
    /// Center of the covered area (x = longitude, y = latitude)
    pub center: Point<f64>,
}

fn public_geohash(lng: f64, lat: f64) -> Result<String, GeohashError> {
    let public = encode(&GeoRanges::PUBLIC, &(lng, lat), DEFAULT_STEP)?;
    Ok(to_geohash_string(public.bits))
}

impl GeoCell {
    /// Wraps an existing storage-range code.
    pub fn from_cell(cell: Cell) -> Result<Self, GeohashError> {
        if cell.step == 0 {
            return Err(GeohashError::StepOutOfRange(0));
        }
        let (lng, lat) = decode(&GeoRanges::STORAGE, &cell).center();
        Ok(Self {
            id: public_geohash(lng, lat)?,
            cell,
            center: Point::new(lng, lat),
        })
    }

    /// Create a GeoCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // From tuple
    /// let cell = GeoCell::from_wgs84(&(-2.248, 53.481), 20)?;
    /// // From Point
    /// let same = GeoCell::from_wgs84(&Point::new(-2.248, 53.481), 20)?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, step: u8) -> Result<Self, GeohashError> {
        let cell = encode(&GeoRanges::STORAGE, coord, step)?;
        Self::from_cell(cell)
    }

    /// Create a GeoCell at full precision from a base32 geohash string.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeoCell::from_wgs84(&(13.361389, 38.115556), 26)?;
    /// let restored = GeoCell::from_geohash(&cell.id)?;
    /// assert_eq!(restored.id, cell.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_geohash(hash: &str) -> Result<Self, GeohashError> {
        let public = from_geohash_string(hash)?;
        let center = decode(&GeoRanges::PUBLIC, &public).center();
        Self::from_wgs84(&center, DEFAULT_STEP)
    }

    /// Create a GeoCell at the centroid of any geometry.
    pub fn from_geometry(geometry: &Geometry<f64>, step: u8) -> Result<Self, GeohashError> {
        let point = centroid(geometry)?;
        Self::from_wgs84(&point, step)
    }

    /// Create a GeoCell from WKT or GeoJSON text, using the geometry's centroid.
    pub fn from_geometry_str(s: &str, step: u8) -> Result<Self, GeohashError> {
        let geometry = parse_geometry(s)?;
        Self::from_geometry(&geometry, step)
    }

    pub fn step(&self) -> u8 {
        self.cell.step
    }

    /// Returns the longitude of the cell center.
    pub fn lng(&self) -> f64 {
        self.center.x()
    }

    /// Returns the latitude of the cell center.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    pub fn rect(&self) -> Rectangle {
        decode(&GeoRanges::STORAGE, &self.cell)
    }

    /// Converts this cell to its rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.rect().to_polygon()
    }

    /// The 8 adjacent cells in the order N, S, E, W, NE, NW, SE, SW.
    pub fn neighbors(&self) -> Result<Vec<GeoCell>, GeohashError> {
        neighbors(self.cell)
            .to_array()
            .into_iter()
            .map(GeoCell::from_cell)
            .collect()
    }

    /// Score of this cell in the default 52-bit keyspace.
    pub fn score(&self) -> u64 {
        align_to_full_width(&self.cell, DEFAULT_BITS)
    }

    pub fn score_range(&self) -> ScoreRange {
        ScoreRange::from_cell(&self.cell, DEFAULT_BITS)
    }
}

/// Encodes many points in parallel.
///
/// Fails on the first point that falls outside the storage band.
pub fn cells_from_points<C>(points: &[C], step: u8) -> Result<Vec<GeoCell>, GeohashError>
where
    C: Coordinate + Sync,
{
    points
        .par_iter()
        .map(|p| GeoCell::from_wgs84(p, step))
        .collect()
}
