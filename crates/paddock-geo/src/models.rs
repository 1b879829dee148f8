//! Coordinate model for paddock-geo.
//!
//! Coordinates are stored latitude first, the way map views take them, and
//! converted to the `geo` crate's x/y order at the boundary.

use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::{Deserialize, Serialize};

/// A WGS 84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Atlantic-centered point; a low-zoom view around it shows every continent
    pub const WORLD_CENTER: Coordinate = Coordinate { lat: 20.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether the coordinate is finite and inside `[-90, 90] x [-180, 180]`
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// GeoJSON position (`[lng, lat]`)
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lng, c.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Coordinate::new(lat, lng)
    }
}

/// Planar mean of latitudes and longitudes, each averaged independently.
///
/// Sets straddling the antimeridian are not corrected for.
pub fn centroid(coords: &[Coordinate]) -> Option<Coordinate> {
    if coords.is_empty() {
        return None;
    }

    let n = coords.len() as f64;
    let lat = coords.iter().map(|c| c.lat).sum::<f64>() / n;
    let lng = coords.iter().map(|c| c.lng).sum::<f64>() / n;
    Some(Coordinate::new(lat, lng))
}

/// Bounding box of a set of coordinates, in `geo` x/y order
pub fn bounds(coords: &[Coordinate]) -> Option<Rect<f64>> {
    let points: Vec<Point<f64>> = coords.iter().map(|&c| c.into()).collect();
    MultiPoint::new(points).bounding_rect()
}
