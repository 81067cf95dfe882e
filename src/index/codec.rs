use crate::coord::{Axis, AxisRange, Coordinate, GeoRanges};
use crate::error::GeohashError;
use crate::index::constants::{MAX_STEP, MIN_STEP};
use crate::index::interleave::{deinterleave, interleave};
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// An interleaved grid code with `2 * step` significant low bits.
///
/// Even bit positions carry the latitude magnitude, odd positions the
/// longitude magnitude. A cell with `step == 0` is the zeroed sentinel used to
/// mark neighbors excluded from a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub bits: u64,
    pub step: u8,
}

impl Cell {
    /// The excluded-from-search sentinel.
    pub const ZEROED: Cell = Cell { bits: 0, step: 0 };

    pub const fn new(bits: u64, step: u8) -> Self {
        Self { bits, step }
    }

    pub fn is_zeroed(&self) -> bool {
        self.step == 0 && self.bits == 0
    }
}

/// The geographic area a [`Cell`] covers at its step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lng: AxisRange,
    pub lat: AxisRange,
    pub cell: Cell,
}

impl Rectangle {
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        self.lng.contains(coord.x()) && self.lat.contains(coord.y())
    }

    /// Center as `(lng, lat)`.
    pub fn center(&self) -> (f64, f64) {
        (self.lng.center(), self.lat.center())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lng.min, y: self.lat.min },
            coord! { x: self.lng.max, y: self.lat.max },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

fn quantize(range: &AxisRange, value: f64, step: u8) -> u32 {
    let cells = (1u64 << step) as f64;
    let offset = (value - range.min) / range.span() * cells;
    // value == range.max lands one past the last cell
    (offset as u64).min((1u64 << step) - 1) as u32
}

/// Encodes a lon/lat point into a [`Cell`] of `step` bits per axis.
///
/// Fails with an out-of-range error when `step` is not in 1..=32 or a
/// coordinate lies outside `ranges`.
///
/// # Example
/// ```
/// use geohash_rs::{GeoRanges, encode};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = encode(&GeoRanges::STORAGE, &(-180.0, -85.05112878), 1)?;
/// assert_eq!(cell.bits, 0);
/// assert_eq!(cell.step, 1);
/// # Ok(())
/// # }
/// ```
pub fn encode<C: Coordinate>(
    ranges: &GeoRanges,
    coord: &C,
    step: u8,
) -> Result<Cell, GeohashError> {
    if !(MIN_STEP..=MAX_STEP).contains(&step) {
        return Err(GeohashError::StepOutOfRange(step));
    }
    let (lng, lat) = (coord.x(), coord.y());
    ranges.lng.check(Axis::Longitude, lng)?;
    ranges.lat.check(Axis::Latitude, lat)?;

    let lat_mag = quantize(&ranges.lat, lat, step);
    let lng_mag = quantize(&ranges.lng, lng, step);

    Ok(Cell::new(interleave(lat_mag, lng_mag), step))
}

/// Decodes a [`Cell`] into the rectangle it covers under `ranges`.
///
/// Steps above 32 are read as 32.
pub fn decode(ranges: &GeoRanges, cell: &Cell) -> Rectangle {
    let (lat_mag, lng_mag) = deinterleave(cell.bits);
    let cells = (1u64 << cell.step.min(MAX_STEP)) as f64;
    let lat_scale = ranges.lat.span();
    let lng_scale = ranges.lng.span();
    let lat_mag = lat_mag as f64;
    let lng_mag = lng_mag as f64;

    Rectangle {
        lng: AxisRange::new(
            ranges.lng.min + lng_mag / cells * lng_scale,
            ranges.lng.min + (lng_mag + 1.0) / cells * lng_scale,
        ),
        lat: AxisRange::new(
            ranges.lat.min + lat_mag / cells * lat_scale,
            ranges.lat.min + (lat_mag + 1.0) / cells * lat_scale,
        ),
        cell: *cell,
    }
}

/// Left-aligns a cell's bits to a `full_bits`-wide score so codes of
/// different steps share one sortable keyspace.
///
/// Cells finer than `full_bits` lose their lowest bits. `full_bits` above 64
/// is treated as 64, and bits shifted past either end of a `u64` are dropped.
pub fn align_to_full_width(cell: &Cell, full_bits: u8) -> u64 {
    let width = 2 * cell.step as u32;
    let full_bits = (full_bits as u32).min(u64::BITS);
    if width <= full_bits {
        cell.bits.checked_shl(full_bits - width).unwrap_or(0)
    } else {
        cell.bits.checked_shr(width - full_bits).unwrap_or(0)
    }
}
