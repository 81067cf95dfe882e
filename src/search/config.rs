use crate::coord::GeoRanges;
use crate::error::GeohashError;
use crate::index::constants::{DEFAULT_BITS, DEFAULT_STEP, MAX_FULL_BITS, MAX_STEP, MIN_STEP};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit a search radius is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Multiplier converting one unit into meters.
    pub fn to_meters(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Miles => 1609.34,
            DistanceUnit::Feet => 0.3048,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" => Ok(DistanceUnit::Meters),
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "ft" => Ok(DistanceUnit::Feet),
            other => Err(GeohashError::InvalidConfig(format!(
                "unknown distance unit '{}', expected m, km, mi or ft",
                other
            ))),
        }
    }
}

/// Configuration for radius search boxes.
///
/// # Example
/// ```
/// use geohash_rs::{DistanceUnit, SearchConfig};
///
/// let config = SearchConfig::new().unit(DistanceUnit::Kilometers).max_step(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Finest step the builder may choose.
    pub max_step: u8,
    /// Width of the score keyspace the ranges are aligned to.
    pub full_bits: u8,
    pub unit: DistanceUnit,
    pub ranges: GeoRanges,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_step: DEFAULT_STEP,
            full_bits: DEFAULT_BITS,
            unit: DistanceUnit::default(),
            ranges: GeoRanges::STORAGE,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_step(mut self, max_step: u8) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn full_bits(mut self, full_bits: u8) -> Self {
        self.full_bits = full_bits;
        self
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn ranges(mut self, ranges: GeoRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn validate(&self) -> Result<(), GeohashError> {
        if !(MIN_STEP..=MAX_STEP).contains(&self.max_step) {
            return Err(GeohashError::InvalidConfig(format!(
                "max_step {} outside [{}, {}]",
                self.max_step, MIN_STEP, MAX_STEP
            )));
        }
        if self.full_bits == 0 || self.full_bits > MAX_FULL_BITS || self.full_bits % 2 != 0 {
            return Err(GeohashError::InvalidConfig(format!(
                "full_bits {} must be an even number in [2, {}]",
                self.full_bits, MAX_FULL_BITS
            )));
        }
        if 2 * self.max_step as u32 > self.full_bits as u32 {
            return Err(GeohashError::InvalidConfig(format!(
                "max_step {} needs {} bits but full_bits is {}",
                self.max_step,
                2 * self.max_step as u32,
                self.full_bits
            )));
        }
        if !(self.ranges.lng.min < self.ranges.lng.max && self.ranges.lat.min < self.ranges.lat.max)
        {
            return Err(GeohashError::InvalidConfig(
                "axis ranges must have min < max".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.max_step, 26);
        assert_eq!(config.full_bits, 52);
        assert_eq!(config.unit, DistanceUnit::Meters);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(SearchConfig::new().max_step(0).validate().is_err());
        assert!(SearchConfig::new().max_step(33).validate().is_err());
        assert!(SearchConfig::new().full_bits(51).validate().is_err());
        assert!(SearchConfig::new().full_bits(66).validate().is_err());
        assert!(matches!(
            SearchConfig::new().max_step(30).validate(),
            Err(GeohashError::InvalidConfig(_))
        ));
        assert!(SearchConfig::new().max_step(31).full_bits(62).validate().is_ok());
    }

    #[test]
    fn test_64_bit_keyspace_rejected() {
        // the last step-32 cell would end at 2^64
        for max_step in [26, 32] {
            assert!(matches!(
                SearchConfig::new().max_step(max_step).full_bits(64).validate(),
                Err(GeohashError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_distance_unit_parse() -> Result<(), GeohashError> {
        assert_eq!("km".parse::<DistanceUnit>()?, DistanceUnit::Kilometers);
        assert_eq!("M".parse::<DistanceUnit>()?, DistanceUnit::Meters);
        assert_eq!("mi".parse::<DistanceUnit>()?.to_meters(), 1609.34);
        assert_eq!("ft".parse::<DistanceUnit>()?.to_meters(), 0.3048);
        assert!("furlong".parse::<DistanceUnit>().is_err());
        Ok(())
    }
}
