mod distance;

pub use distance::{EARTH_RADIUS_METERS, deg_to_rad, distance_meters, rad_to_deg};

use crate::error::GeohashError;
use crate::index::constants::{
    GEO_LAT_MAX, GEO_LAT_MIN, GEO_LNG_MAX, GEO_LNG_MIN, PUBLIC_LAT_MAX, PUBLIC_LAT_MIN,
};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// One of the two interleaved axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Odd (high) bit lanes.
    Longitude,
    /// Even (low) bit lanes.
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Closed interval over one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn center(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    pub(crate) fn check(&self, axis: Axis, value: f64) -> Result<(), GeohashError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(GeohashError::CoordinateOutOfRange {
                axis,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// The pair of axis ranges a code is quantized against.
///
/// [`GeoRanges::STORAGE`] is the Mercator-compatible band every stored code
/// uses. [`GeoRanges::PUBLIC`] is the full-latitude range used for validating
/// external input and for producing standard base32 geohash strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRanges {
    pub lng: AxisRange,
    pub lat: AxisRange,
}

impl GeoRanges {
    pub const STORAGE: GeoRanges = GeoRanges {
        lng: AxisRange::new(GEO_LNG_MIN, GEO_LNG_MAX),
        lat: AxisRange::new(GEO_LAT_MIN, GEO_LAT_MAX),
    };

    pub const PUBLIC: GeoRanges = GeoRanges {
        lng: AxisRange::new(GEO_LNG_MIN, GEO_LNG_MAX),
        lat: AxisRange::new(PUBLIC_LAT_MIN, PUBLIC_LAT_MAX),
    };

    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        self.lng.contains(coord.x()) && self.lat.contains(coord.y())
    }

    /// Checks both axes, longitude first.
    pub fn check<C: Coordinate>(&self, coord: &C) -> Result<(), GeohashError> {
        self.lng.check(Axis::Longitude, coord.x())?;
        self.lat.check(Axis::Latitude, coord.y())
    }
}

impl Default for GeoRanges {
    fn default() -> Self {
        GeoRanges::STORAGE
    }
}

/// Validates a coordinate against the externally advertised ranges
/// (longitude ±180, latitude ±90).
pub fn validate_public<C: Coordinate>(coord: &C) -> Result<(), GeohashError> {
    GeoRanges::PUBLIC.check(coord)
}
