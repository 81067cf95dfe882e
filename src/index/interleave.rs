// https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN

const SPREAD_MASKS: [u64; 5] = [
    0x5555555555555555,
    0x3333333333333333,
    0x0F0F0F0F0F0F0F0F,
    0x00FF00FF00FF00FF,
    0x0000FFFF0000FFFF,
];
const SPREAD_SHIFTS: [u32; 5] = [1, 2, 4, 8, 16];

/// Moves bit `i` of `x` to bit `2i`.
fn spread(x: u32) -> u64 {
    let mut x = x as u64;
    for round in (0..5).rev() {
        x = (x | (x << SPREAD_SHIFTS[round])) & SPREAD_MASKS[round];
    }
    x
}

/// Inverse of [`spread`]: collects the even bits of `x` into a u32.
fn squash(x: u64) -> u32 {
    let mut x = x & SPREAD_MASKS[0];
    x = (x | (x >> 1)) & SPREAD_MASKS[1];
    x = (x | (x >> 2)) & SPREAD_MASKS[2];
    x = (x | (x >> 4)) & SPREAD_MASKS[3];
    x = (x | (x >> 8)) & SPREAD_MASKS[4];
    x = (x | (x >> 16)) & 0x00000000FFFFFFFF;
    x as u32
}

/// Interleaves two axis magnitudes into one Morton code.
///
/// Latitude lands on the even bit positions, longitude on the odd ones.
pub fn interleave(lat: u32, lng: u32) -> u64 {
    spread(lat) | (spread(lng) << 1)
}

/// Splits a Morton code back into `(lat, lng)` magnitudes.
pub fn deinterleave(code: u64) -> (u32, u32) {
    (squash(code), squash(code >> 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_lane_assignment() {
        assert_eq!(interleave(0, 0), 0);
        assert_eq!(interleave(1, 0), 0b01);
        assert_eq!(interleave(0, 1), 0b10);
        assert_eq!(interleave(1, 1), 0b11);
        assert_eq!(interleave(0b10, 0), 0b0100);
        assert_eq!(interleave(0, 0b10), 0b1000);
    }

    #[test]
    fn test_full_width() {
        assert_eq!(interleave(u32::MAX, 0), 0x5555555555555555);
        assert_eq!(interleave(0, u32::MAX), 0xAAAAAAAAAAAAAAAA);
        assert_eq!(interleave(u32::MAX, u32::MAX), u64::MAX);
        assert_eq!(deinterleave(u64::MAX), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_deinterleave_inverts_interleave() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let lat: u32 = rng.r#gen();
            let lng: u32 = rng.r#gen();
            assert_eq!(deinterleave(interleave(lat, lng)), (lat, lng));
        }
    }

    #[test]
    fn test_interleave_inverts_deinterleave() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..10_000 {
            let code: u64 = rng.r#gen();
            let (lat, lng) = deinterleave(code);
            assert_eq!(interleave(lat, lng), code);
        }
    }
}
