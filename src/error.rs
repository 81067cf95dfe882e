use crate::coord::Axis;
use thiserror::Error;

/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// The step (bits per axis) is outside the valid range (1-32).
    #[error("Step out of range: {0}")]
    StepOutOfRange(u8),
    /// A coordinate falls outside the axis range it is encoded against.
    #[error("{axis} out of range: {value} not in [{min}, {max}]")]
    CoordinateOutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The base32 geohash text is malformed.
    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),
    /// A search configuration cannot produce aligned score ranges.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}

impl GeohashError {
    /// True for the errors `encode` raises when its input is outside the grid.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            GeohashError::StepOutOfRange(_) | GeohashError::CoordinateOutOfRange { .. }
        )
    }
}
