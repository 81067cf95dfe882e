use crate::error::GeohashError;
use crate::index::codec::Cell;
use crate::index::constants::{DEFAULT_BITS, DEFAULT_STEP, GEOHASH_ALPHABET, GEOHASH_LENGTH};

/// Formats a 52-bit score as an 11-character base32 geohash.
///
/// Ten characters carry 50 bits; the 11th is always `'0'` because only 52
/// bits are stored, so the last two bits of the score are dropped.
pub fn to_geohash_string(bits: u64) -> String {
    let mut buf = String::with_capacity(GEOHASH_LENGTH);
    for i in 0..GEOHASH_LENGTH {
        let idx = if i == GEOHASH_LENGTH - 1 {
            0
        } else {
            let shift = DEFAULT_BITS as usize - (i + 1) * 5;
            ((bits >> shift) & 0x1f) as usize
        };
        buf.push(GEOHASH_ALPHABET[idx] as char);
    }
    buf
}

fn alphabet_index(c: char) -> Option<u64> {
    let lower = c.to_ascii_lowercase() as u8;
    GEOHASH_ALPHABET
        .iter()
        .position(|&b| b == lower)
        .map(|i| i as u64)
}

/// Parses an 11-character geohash back into a step-26 cell.
///
/// The two bits the string cannot carry are left as zero, so the result is
/// the south-west-most step-26 cell sharing the 50-bit prefix.
pub fn from_geohash_string(hash: &str) -> Result<Cell, GeohashError> {
    if hash.chars().count() != GEOHASH_LENGTH {
        return Err(GeohashError::InvalidGeohash(format!(
            "expected {} characters, got {}",
            GEOHASH_LENGTH,
            hash.chars().count()
        )));
    }

    let mut bits = 0u64;
    for (i, c) in hash.chars().enumerate() {
        let value = alphabet_index(c).ok_or_else(|| {
            GeohashError::InvalidGeohash(format!("invalid character '{}' in {}", c, hash))
        })?;
        if i < GEOHASH_LENGTH - 1 {
            bits = (bits << 5) | value;
        }
    }

    Ok(Cell::new(bits << 2, DEFAULT_STEP))
}
