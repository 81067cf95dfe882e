use crate::coord::{Coordinate, GeoRanges, distance_meters};
use crate::error::GeohashError;
use crate::index::{Cell, Neighbors, Rectangle, decode, encode, neighbors};
use crate::search::bounds::{BoundingBox, bounding_box, estimate_step};
use crate::search::config::SearchConfig;
use crate::search::ranges::ScoreRange;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The cells that must be scanned to answer a radius query.
///
/// Produced by [`search_area`]. Neighbors that cannot hold any point within
/// the radius are zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchArea {
    pub center: Cell,
    pub neighbors: Neighbors,
    /// Rectangle covered by the center cell.
    pub rect: Rectangle,
    /// Lon/lat box enclosing the query circle.
    pub bounds: BoundingBox,
}

impl SearchArea {
    /// Step every non-zeroed cell in the area shares.
    pub fn step(&self) -> u8 {
        self.center.step
    }

    /// Center followed by N, S, E, W, NE, NW, SE, SW.
    pub fn cells(&self) -> [Cell; 9] {
        let n = self.neighbors.to_array();
        [
            self.center, n[0], n[1], n[2], n[3], n[4], n[5], n[6], n[7],
        ]
    }

    /// Cells that were not pruned, in [`SearchArea::cells`] order.
    pub fn active_cells(&self) -> impl Iterator<Item = Cell> {
        self.cells().into_iter().filter(|c| !c.is_zeroed())
    }

    /// The 9 score ranges in [`SearchArea::cells`] order.
    pub fn ranges(&self, full_bits: u8) -> [ScoreRange; 9] {
        self.cells().map(|c| ScoreRange::from_cell(&c, full_bits))
    }
}

struct Candidate {
    center: Cell,
    neighbors: Neighbors,
    rect: Rectangle,
}

fn candidate_at(
    ranges: &GeoRanges,
    lng: f64,
    lat: f64,
    step: u8,
) -> Result<Candidate, GeohashError> {
    let center = encode(ranges, &(lng, lat), step)?;
    Ok(Candidate {
        center,
        neighbors: neighbors(center),
        rect: decode(ranges, &center),
    })
}

/// True when the far edge of a direct neighbor is still inside the radius,
/// meaning the 3x3 block at this step is too small to cover the circle.
fn neighbors_too_close(
    ranges: &GeoRanges,
    candidate: &Candidate,
    lng: f64,
    lat: f64,
    radius_meters: f64,
) -> bool {
    let north = decode(ranges, &candidate.neighbors.north);
    let south = decode(ranges, &candidate.neighbors.south);
    let east = decode(ranges, &candidate.neighbors.east);
    let west = decode(ranges, &candidate.neighbors.west);

    distance_meters(lng, lat, lng, north.lat.max) < radius_meters
        || distance_meters(lng, lat, lng, south.lat.min) < radius_meters
        || distance_meters(lng, lat, east.lng.max, lat) < radius_meters
        || distance_meters(lng, lat, west.lng.min, lat) < radius_meters
}

fn prune(area: &mut SearchArea) {
    let rect = &area.rect;
    let bounds = &area.bounds;
    let mut pruned = Vec::new();

    if rect.lat.min < bounds.min_lat {
        area.neighbors.zero_south();
        pruned.push("south");
    }
    if rect.lat.max > bounds.max_lat {
        area.neighbors.zero_north();
        pruned.push("north");
    }
    if rect.lng.min < bounds.min_lng {
        area.neighbors.zero_west();
        pruned.push("west");
    }
    if rect.lng.max > bounds.max_lng {
        area.neighbors.zero_east();
        pruned.push("east");
    }

    if !pruned.is_empty() {
        debug!("search area: pruned {} side(s)", pruned.join(", "));
    }
}

pub(crate) fn build_search_area(
    lng: f64,
    lat: f64,
    radius_meters: f64,
    config: &SearchConfig,
) -> Result<SearchArea, GeohashError> {
    config.validate()?;
    let ranges = &config.ranges;
    ranges.check(&(lng, lat)).inspect_err(|e| {
        warn!("search area: rejecting center ({}, {}): {}", lng, lat, e);
    })?;

    let bounds = bounding_box(lng, lat, radius_meters);
    let mut step = estimate_step(radius_meters, lat, config.max_step);
    debug!(
        "search area: center=({}, {}) radius={}m initial step={}",
        lng, lat, radius_meters, step
    );

    let mut candidate = candidate_at(ranges, lng, lat, step)?;
    if step > 1 && neighbors_too_close(ranges, &candidate, lng, lat, radius_meters) {
        step -= 1;
        debug!("search area: neighbors inside radius, refining to step {}", step);
        candidate = candidate_at(ranges, lng, lat, step)?;
    }

    let mut area = SearchArea {
        center: candidate.center,
        neighbors: candidate.neighbors,
        rect: candidate.rect,
        bounds,
    };
    if step >= 2 {
        prune(&mut area);
    }

    Ok(area)
}

/// Builds the search area for a radius query around `coord`.
///
/// `radius` is expressed in `config.unit`.
///
/// # Example
/// ```
/// use geohash_rs::{SearchConfig, search_area};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let area = search_area(&(13.816, 23.357), 10.0, &SearchConfig::default())?;
/// assert!(area.rect.contains(&(13.816, 23.357)));
/// assert_eq!(area.ranges(52).len(), 9);
/// # Ok(())
/// # }
/// ```
pub fn search_area<C: Coordinate>(
    coord: &C,
    radius: f64,
    config: &SearchConfig,
) -> Result<SearchArea, GeohashError> {
    build_search_area(
        coord.x(),
        coord.y(),
        radius * config.unit.to_meters(),
        config,
    )
}

/// Score ranges to scan for every point within `radius` of `(lng, lat)`.
///
/// `unit_to_meters` converts `radius` into meters. Returns 9 ranges in the
/// order center, N, S, E, W, NE, NW, SE, SW over the default 52-bit keyspace;
/// pruned neighbors yield [`ScoreRange::EMPTY`]. Ranges may overlap and the
/// caller deduplicates hits.
///
/// # Example
/// ```
/// use geohash_rs::search_box_ranges;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let ranges = search_box_ranges(13.816, 23.357, 10.0, 1.0)?;
/// assert_eq!(ranges.len(), 9);
/// assert!(ranges.iter().all(|r| r.min <= r.max));
/// # Ok(())
/// # }
/// ```
pub fn search_box_ranges(
    lng: f64,
    lat: f64,
    radius: f64,
    unit_to_meters: f64,
) -> Result<[ScoreRange; 9], GeohashError> {
    let config = SearchConfig::default();
    let area = build_search_area(lng, lat, radius * unit_to_meters, &config)?;
    Ok(area.ranges(config.full_bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::constants::GEO_LAT_MAX;
    use crate::index::{DEFAULT_BITS, DEFAULT_STEP, align_to_full_width};
    use crate::search::config::DistanceUnit;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CENTER: (f64, f64) = (13.81600230932235718, 23.35700050086033031);

    #[test]
    fn test_search_box_scenario() -> Result<(), GeohashError> {
        let ranges = search_box_ranges(CENTER.0, CENTER.1, 10.0, 1.0)?;
        assert_eq!(ranges.len(), 9);
        for r in &ranges {
            assert!(r.min <= r.max);
        }

        let area = search_area(&CENTER, 10.0, &SearchConfig::default())?;
        let direct = encode(&GeoRanges::STORAGE, &CENTER, area.step())?;
        let score = align_to_full_width(&direct, DEFAULT_BITS);
        assert!(ranges[0].contains(score));
        assert_eq!(ranges, area.ranges(DEFAULT_BITS));
        Ok(())
    }

    #[test]
    fn test_center_range_contains_full_precision_score() -> Result<(), GeohashError> {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let lng = rng.gen_range(-179.0..179.0);
            let lat = rng.gen_range(-80.0..80.0);
            let radius = 10f64.powf(rng.gen_range(0.0..6.0));
            let ranges = search_box_ranges(lng, lat, radius, 1.0)?;
            let fine = encode(&GeoRanges::STORAGE, &(lng, lat), DEFAULT_STEP)?;
            assert!(ranges[0].contains(align_to_full_width(&fine, DEFAULT_BITS)));
        }
        Ok(())
    }

    #[test]
    fn test_tiny_radius_prunes_every_neighbor() -> Result<(), GeohashError> {
        // center the query in a full-precision cell so the box fits inside it
        let cell = encode(&GeoRanges::STORAGE, &CENTER, DEFAULT_STEP)?;
        let middle = decode(&GeoRanges::STORAGE, &cell).center();

        let area = search_area(&middle, 0.01, &SearchConfig::default())?;
        assert_eq!(area.step(), DEFAULT_STEP);
        assert_eq!(area.center, cell);
        assert_eq!(area.neighbors.zeroed_count(), 8);

        let ranges = area.ranges(DEFAULT_BITS);
        assert!(!ranges[0].is_empty());
        for r in &ranges[1..] {
            assert_eq!(*r, ScoreRange::EMPTY);
        }
        assert_eq!(area.active_cells().count(), 1);
        Ok(())
    }

    #[test]
    fn test_pruned_only_when_outside_bounds() -> Result<(), GeohashError> {
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..500 {
            let lng = rng.gen_range(-170.0..170.0);
            let lat = rng.gen_range(-75.0..75.0);
            let radius = 10f64.powf(rng.gen_range(0.0..5.0));
            let area = search_area(&(lng, lat), radius, &SearchConfig::default())?;
            let n = area.neighbors;

            // a kept side's neighbor touches the box
            if !n.north.is_zeroed() {
                assert!(area.rect.lat.max <= area.bounds.max_lat);
            }
            if !n.south.is_zeroed() {
                assert!(area.rect.lat.min >= area.bounds.min_lat);
            }
            if !n.east.is_zeroed() {
                assert!(area.rect.lng.max <= area.bounds.max_lng);
            }
            if !n.west.is_zeroed() {
                assert!(area.rect.lng.min >= area.bounds.min_lng);
            }
        }
        Ok(())
    }

    #[test]
    fn test_area_cells_cover_query_circle() -> Result<(), GeohashError> {
        let ranges = GeoRanges::STORAGE;
        let (lng, lat, radius) = (CENTER.0, CENTER.1, 500.0);
        let area = search_area(&(lng, lat), radius, &SearchConfig::default())?;
        let rects: Vec<Rectangle> = area.active_cells().map(|c| decode(&ranges, &c)).collect();

        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..2000 {
            let p = (
                lng + rng.gen_range(-0.01..0.01),
                lat + rng.gen_range(-0.01..0.01),
            );
            if distance_meters(lng, lat, p.0, p.1) <= radius {
                assert!(rects.iter().any(|r| r.contains(&p)), "{:?} not covered", p);
            }
        }
        Ok(())
    }

    #[test]
    fn test_refinement_keeps_step_in_bounds() -> Result<(), GeohashError> {
        for radius in [0.5, 1.0, 7.0, 150.0, 2500.0, 80_000.0, 5_000_000.0] {
            let area = search_area(&CENTER, radius, &SearchConfig::default())?;
            assert!((1..=DEFAULT_STEP).contains(&area.step()));
            for cell in area.active_cells() {
                assert_eq!(cell.step, area.step());
            }
        }
        Ok(())
    }

    #[test]
    fn test_close_neighbor_edge_refines_step() -> Result<(), GeohashError> {
        // at this latitude the west neighbor's far edge sits ~2.21m away at step 23
        let (lng, lat, radius) = (13.816, 65.9, 2.3);
        let estimated = estimate_step(radius, lat, DEFAULT_STEP);
        assert_eq!(estimated, 23);

        let coarse = candidate_at(&GeoRanges::STORAGE, lng, lat, estimated)?;
        assert!(neighbors_too_close(&GeoRanges::STORAGE, &coarse, lng, lat, radius));

        let area = search_area(&(lng, lat), radius, &SearchConfig::default())?;
        assert_eq!(area.step(), estimated - 1);
        assert!(area.rect.contains(&(lng, lat)));

        let n = neighbors(area.center);
        let ranges = GeoRanges::STORAGE;
        let north = decode(&ranges, &n.north);
        let south = decode(&ranges, &n.south);
        let east = decode(&ranges, &n.east);
        let west = decode(&ranges, &n.west);
        assert!(distance_meters(lng, lat, lng, north.lat.max) >= radius);
        assert!(distance_meters(lng, lat, lng, south.lat.min) >= radius);
        assert!(distance_meters(lng, lat, east.lng.max, lat) >= radius);
        assert!(distance_meters(lng, lat, west.lng.min, lat) >= radius);
        Ok(())
    }

    #[test]
    fn test_no_refinement_when_neighbors_reach_past_radius() -> Result<(), GeohashError> {
        let (lng, lat, radius) = (13.816, 65.9, 3.0);
        let area = search_area(&(lng, lat), radius, &SearchConfig::default())?;
        assert_eq!(area.step(), estimate_step(radius, lat, DEFAULT_STEP));
        Ok(())
    }

    #[test]
    fn test_last_cell_range_contains_its_score() -> Result<(), GeohashError> {
        let corner = (180.0, GEO_LAT_MAX);
        let wide = SearchConfig::new().max_step(32).full_bits(64);
        assert!(matches!(
            search_area(&corner, 0.0, &wide),
            Err(GeohashError::InvalidConfig(_))
        ));

        let config = SearchConfig::new().max_step(31).full_bits(62);
        let area = search_area(&corner, 0.0, &config)?;
        assert_eq!(area.center, Cell::new((1u64 << 62) - 1, 31));

        let range = area.ranges(config.full_bits)[0];
        assert!(!range.is_empty());
        assert!(range.contains(align_to_full_width(&area.center, config.full_bits)));
        Ok(())
    }

    #[test]
    fn test_zero_radius_uses_max_step() -> Result<(), GeohashError> {
        let area = search_area(&CENTER, 0.0, &SearchConfig::default())?;
        assert_eq!(area.step(), DEFAULT_STEP);
        Ok(())
    }

    #[test]
    fn test_units_scale_radius() -> Result<(), GeohashError> {
        let meters = search_area(&CENTER, 2000.0, &SearchConfig::default())?;
        let km = search_area(
            &CENTER,
            2.0,
            &SearchConfig::new().unit(DistanceUnit::Kilometers),
        )?;
        assert_eq!(meters, km);
        assert_eq!(
            search_box_ranges(CENTER.0, CENTER.1, 2.0, 1000.0)?,
            meters.ranges(DEFAULT_BITS)
        );
        Ok(())
    }

    #[test]
    fn test_center_outside_storage_band() {
        let err = search_box_ranges(0.0, 89.0, 100.0, 1.0);
        assert!(matches!(
            err,
            Err(GeohashError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SearchConfig::new().max_step(30);
        assert!(matches!(
            search_area(&CENTER, 10.0, &config),
            Err(GeohashError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_polar_query_is_coarser() -> Result<(), GeohashError> {
        let equator = search_area(&(10.0, 0.0), 1000.0, &SearchConfig::default())?;
        let polar = search_area(&(10.0, 82.0), 1000.0, &SearchConfig::default())?;
        assert!(polar.step() < equator.step());
        Ok(())
    }
}
