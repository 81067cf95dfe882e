use crate::coord::{Coordinate, deg_to_rad, rad_to_deg};
use crate::index::constants::{EARTH_RADIUS_METERS, MERCATOR_MAX};
use geo_types::{Rect, coord};
use log::trace;
use serde::{Deserialize, Serialize};

/// Lon/lat box enclosing a query circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        coord.x() >= self.min_lng
            && coord.x() <= self.max_lng
            && coord.y() >= self.min_lat
            && coord.y() <= self.max_lat
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lng, y: self.min_lat },
            coord! { x: self.max_lng, y: self.max_lat },
        )
    }
}

fn lng_delta(width_meters: f64, edge_lat: f64) -> f64 {
    let cos = deg_to_rad(edge_lat).cos();
    if cos <= f64::EPSILON {
        // the edge reaches a pole, every longitude is in range
        return 180.0;
    }
    rad_to_deg(width_meters / EARTH_RADIUS_METERS / cos)
}

/// Bounding box of a circle of `radius_meters` around `(lng, lat)`.
///
/// Longitude degrees per meter grow away from the equator, so the longitude
/// half-width is taken at the box edge further from the equator: the
/// southern edge for southern-hemisphere centers, the northern edge otherwise.
pub fn bounding_box(lng: f64, lat: f64, radius_meters: f64) -> BoundingBox {
    let lat_delta = rad_to_deg(radius_meters / EARTH_RADIUS_METERS);
    let lng_delta_top = lng_delta(radius_meters, lat + lat_delta);
    let lng_delta_bottom = lng_delta(radius_meters, lat - lat_delta);

    let lng_delta = if lat < 0.0 {
        lng_delta_bottom
    } else {
        lng_delta_top
    };

    BoundingBox {
        min_lng: lng - lng_delta,
        min_lat: lat - lat_delta,
        max_lng: lng + lng_delta,
        max_lat: lat + lat_delta,
    }
}

/// Estimates the coarsest step whose cells are no smaller than the radius.
///
/// Doubles the radius until it spans the Mercator half-width, backs off two
/// steps, and one more each past 66° and 80° of latitude. A zero (or
/// non-positive) radius yields `max_step`; the result is clamped to
/// `1..=max_step`.
pub fn estimate_step(radius_meters: f64, lat: f64, max_step: u8) -> u8 {
    if !(radius_meters > 0.0) {
        return max_step;
    }

    let mut range = radius_meters;
    let mut step: i32 = 1;
    while range < MERCATOR_MAX {
        range *= 2.0;
        step += 1;
    }
    step -= 2;

    if lat.abs() > 66.0 {
        step -= 1;
    }
    if lat.abs() > 80.0 {
        step -= 1;
    }
    trace!(
        "estimate_step: radius={}m lat={} raw_step={}",
        radius_meters, lat, step
    );

    step.clamp(1, max_step as i32) as u8
}
