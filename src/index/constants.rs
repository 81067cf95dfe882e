/// Smallest valid step (bits per axis)
pub const MIN_STEP: u8 = 1;

/// Largest valid step; two lanes of 32 bits fill a u64
pub const MAX_STEP: u8 = 32;

/// Default precision for stored codes and the coarsest-to-finest search clamp
pub const DEFAULT_STEP: u8 = 26;

/// Width of the sortable score keyspace (2 * DEFAULT_STEP)
pub const DEFAULT_BITS: u8 = 52;

/// Widest keyspace a search may align to; the end of the last cell must fit a u64
pub const MAX_FULL_BITS: u8 = 62;

/// Storage longitude bounds
pub const GEO_LNG_MIN: f64 = -180.0;
pub const GEO_LNG_MAX: f64 = 180.0;

/// Storage latitude bounds (the Web Mercator band)
pub const GEO_LAT_MIN: f64 = -85.05112878;
pub const GEO_LAT_MAX: f64 = 85.05112878;

/// Latitude bounds advertised to callers
pub const PUBLIC_LAT_MIN: f64 = -90.0;
pub const PUBLIC_LAT_MAX: f64 = 90.0;

/// Earth radius used by the haversine distance, in meters
pub const EARTH_RADIUS_METERS: f64 = 6372797.560856;

/// Half the Web Mercator world width, in meters
pub const MERCATOR_MAX: f64 = 20037726.37;

/// Base32 geohash alphabet
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Length of a geohash string
pub const GEOHASH_LENGTH: usize = 11;
