use crate::index::{Cell, align_to_full_width};
use serde::{Deserialize, Serialize};

/// Half-open `[min, max)` span of aligned scores covered by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u64,
    pub max: u64,
}

impl ScoreRange {
    /// The range produced for a zeroed cell; scanning it reads nothing.
    pub const EMPTY: ScoreRange = ScoreRange { min: 0, max: 0 };

    /// Score range of `cell` in a `full_bits`-wide keyspace.
    ///
    /// `max` is the aligned code of the next cell at the same step, so a
    /// coarse cell covers every finer code sharing its prefix. In a 64-bit
    /// keyspace the last cell's end does not fit a `u64` and saturates, so its
    /// own final score falls outside the range; [`SearchConfig`] caps
    /// `full_bits` at 62 for that reason.
    ///
    /// [`SearchConfig`]: crate::search::SearchConfig
    pub fn from_cell(cell: &Cell, full_bits: u8) -> Self {
        if cell.is_zeroed() {
            return ScoreRange::EMPTY;
        }
        ScoreRange {
            min: align_to_full_width(cell, full_bits),
            max: aligned_end(cell, full_bits),
        }
    }

    pub fn contains(&self, score: u64) -> bool {
        score >= self.min && score < self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

// u128 so the cell after the last one at step 32 does not overflow
fn aligned_end(cell: &Cell, full_bits: u8) -> u64 {
    let width = 2 * cell.step as u32;
    let full_bits = (full_bits as u32).min(u64::BITS);
    let end = cell.bits as u128 + 1;
    let aligned = if width <= full_bits {
        end << (full_bits - width)
    } else {
        // end <= 2^64, so any divisor of 2^127 or more rounds up to 1
        let drop = (width - full_bits).min(127);
        end.div_ceil(1u128 << drop)
    };
    u64::try_from(aligned).unwrap_or(u64::MAX)
}
