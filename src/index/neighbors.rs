use crate::coord::Axis;
use crate::index::codec::Cell;
use serde::{Deserialize, Serialize};

const LAT_LANES: u64 = 0x5555555555555555;
const LNG_LANES: u64 = 0xAAAAAAAAAAAAAAAA;

/// Bits belonging to `axis` among the `2 * step` significant bits.
fn lane_mask(axis: Axis, step: u8) -> u64 {
    let width = 2 * step as u32;
    let significant = if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    match axis {
        Axis::Latitude => significant & LAT_LANES,
        Axis::Longitude => significant & LNG_LANES,
    }
}

/// Steps `cell` one grid unit along `axis`.
///
/// Only the axis's bit lane changes. Gaps between the lane's bits are filled
/// with ones before incrementing so the carry hops over the other lane, and
/// the result is masked back to the lane, which makes the grid wrap at its
/// edges. Only the sign of `delta` matters; zero returns the cell unchanged.
pub fn move_axis(cell: Cell, axis: Axis, delta: i8) -> Cell {
    if delta == 0 || cell.step == 0 {
        return cell;
    }

    let lane = lane_mask(axis, cell.step);
    let value = cell.bits & lane;
    let rest = cell.bits & !lane;

    let moved = if delta > 0 {
        (value | !lane).wrapping_add(1) & lane
    } else {
        value.wrapping_sub(1) & lane
    };

    Cell::new(moved | rest, cell.step)
}

/// The eight cells adjacent to a center cell, all at the center's step.
///
/// A zeroed entry ([`Cell::ZEROED`]) is excluded from a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Neighbors {
    pub north: Cell,
    pub south: Cell,
    pub east: Cell,
    pub west: Cell,
    pub north_east: Cell,
    pub north_west: Cell,
    pub south_east: Cell,
    pub south_west: Cell,
}

impl Neighbors {
    /// Neighbors in the fixed order N, S, E, W, NE, NW, SE, SW.
    pub fn to_array(&self) -> [Cell; 8] {
        [
            self.north,
            self.south,
            self.east,
            self.west,
            self.north_east,
            self.north_west,
            self.south_east,
            self.south_west,
        ]
    }

    pub fn zero_north(&mut self) {
        self.north = Cell::ZEROED;
        self.north_east = Cell::ZEROED;
        self.north_west = Cell::ZEROED;
    }

    pub fn zero_south(&mut self) {
        self.south = Cell::ZEROED;
        self.south_east = Cell::ZEROED;
        self.south_west = Cell::ZEROED;
    }

    pub fn zero_east(&mut self) {
        self.east = Cell::ZEROED;
        self.north_east = Cell::ZEROED;
        self.south_east = Cell::ZEROED;
    }

    pub fn zero_west(&mut self) {
        self.west = Cell::ZEROED;
        self.north_west = Cell::ZEROED;
        self.south_west = Cell::ZEROED;
    }

    pub fn zeroed_count(&self) -> usize {
        self.to_array().iter().filter(|c| c.is_zeroed()).count()
    }
}

fn shifted(cell: Cell, lng_delta: i8, lat_delta: i8) -> Cell {
    let cell = move_axis(cell, Axis::Longitude, lng_delta);
    move_axis(cell, Axis::Latitude, lat_delta)
}

/// Computes the 8 neighbors of `cell` without leaving integer space.
///
/// # Example
/// ```
/// use geohash_rs::{Cell, neighbors};
///
/// let center = Cell::new(0b0011, 2);
/// let n = neighbors(center);
/// assert_eq!(n.north.step, 2);
/// assert_ne!(n.north, center);
/// ```
pub fn neighbors(cell: Cell) -> Neighbors {
    Neighbors {
        north: shifted(cell, 0, 1),
        south: shifted(cell, 0, -1),
        east: shifted(cell, 1, 0),
        west: shifted(cell, -1, 0),
        north_east: shifted(cell, 1, 1),
        north_west: shifted(cell, -1, 1),
        south_east: shifted(cell, 1, -1),
        south_west: shifted(cell, -1, -1),
    }
}
