pub mod constants;
mod codec;
mod identifier;
mod interleave;
mod neighbors;

pub use codec::{Cell, Rectangle, align_to_full_width, decode, encode};
pub use constants::{DEFAULT_BITS, DEFAULT_STEP, MAX_STEP, MIN_STEP};
pub use identifier::{from_geohash_string, to_geohash_string};
pub use interleave::{deinterleave, interleave};
pub use neighbors::{Neighbors, move_axis, neighbors};
