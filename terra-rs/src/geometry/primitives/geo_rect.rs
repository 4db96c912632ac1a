use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::GeoPoint;
use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle in degree space.
/// Zero-extent rectangles are valid, a single vertex has one.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct GeoRect {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl GeoRect {
    pub fn try_new(lat_min: f64, lng_min: f64, lat_max: f64, lng_max: f64) -> Result<Self> {
        ensure!(
            lat_min <= lat_max && lng_min <= lng_max,
            "invalid rectangle, lat_min: {lat_min}, lat_max: {lat_max}, lng_min: {lng_min}, lng_max: {lng_max}"
        );
        Ok(GeoRect {
            lat_min,
            lng_min,
            lat_max,
            lng_max,
        })
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding(a: GeoRect, b: GeoRect) -> GeoRect {
        GeoRect {
            lat_min: f64::min(a.lat_min, b.lat_min),
            lng_min: f64::min(a.lng_min, b.lng_min),
            lat_max: f64::max(a.lat_max, b.lat_max),
            lng_max: f64::max(a.lng_max, b.lng_max),
        }
    }

    /// Returns a new rectangle expanded by `d` degrees on all four sides.
    pub fn pad(self, d: f64) -> GeoRect {
        GeoRect {
            lat_min: self.lat_min - d,
            lng_min: self.lng_min - d,
            lat_max: self.lat_max + d,
            lng_max: self.lng_max + d,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lng: (self.lng_min + self.lng_max) / 2.0,
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn lng_span(&self) -> f64 {
        self.lng_max - self.lng_min
    }
}

impl CollidesWith<GeoPoint> for GeoRect {
    #[inline(always)]
    fn collides_with(&self, point: &GeoPoint) -> bool {
        point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lng_min
            && point.lng <= self.lng_max
    }
}

impl CollidesWith<GeoRect> for GeoRect {
    #[inline(always)]
    fn collides_with(&self, other: &GeoRect) -> bool {
        f64::max(self.lat_min, other.lat_min) <= f64::min(self.lat_max, other.lat_max)
            && f64::max(self.lng_min, other.lng_min) <= f64::min(self.lng_max, other.lng_max)
    }
}
