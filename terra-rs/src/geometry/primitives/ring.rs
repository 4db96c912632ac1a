use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::geodesic;
use crate::geometry::primitives::{GeoPoint, GeoRect};

/// A closed chain of geographic vertices, stored without the duplicate closing vertex.
///
/// Degenerate rings (fewer than 3 vertices) are representable and enclose nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub points: Vec<GeoPoint>,
}

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Ring { points }
    }

    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    /// Iterates over the edges of the ring, including the one closing it.
    pub fn edge_iter(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl Shape for Ring {
    fn centroid(&self) -> Option<GeoPoint> {
        vertex_centroid(self.points.iter().copied())
    }

    fn area(&self) -> f64 {
        geodesic::ring_area(&self.points)
    }

    fn bbox(&self) -> Option<GeoRect> {
        vertex_bbox(self.points.iter().copied())
    }
}

impl Transformable for Ring {
    fn shift(&mut self, d_lat: f64, d_lng: f64) -> &mut Self {
        for p in self.points.iter_mut() {
            p.lat += d_lat;
            p.lng += d_lng;
        }
        self
    }

    fn scale_about(&mut self, anchor: GeoPoint, factor: f64) -> &mut Self {
        for p in self.points.iter_mut() {
            p.lat = anchor.lat + (p.lat - anchor.lat) * factor;
            p.lng = anchor.lng + (p.lng - anchor.lng) * factor;
        }
        self
    }
}

impl CollidesWith<GeoPoint> for Ring {
    /// Even-odd ray cast: a ray shot eastwards from `point`,
    /// counting how many edges it crosses.
    fn collides_with(&self, point: &GeoPoint) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edge_iter() {
            if (a.lat > point.lat) != (b.lat > point.lat) {
                let lng_at_lat = (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
                if point.lng < lng_at_lat {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Arithmetic mean of a set of vertices, `None` when empty.
pub(crate) fn vertex_centroid(points: impl Iterator<Item = GeoPoint>) -> Option<GeoPoint> {
    let (mut lat_sum, mut lng_sum, mut n) = (0.0, 0.0, 0usize);
    for p in points {
        lat_sum += p.lat;
        lng_sum += p.lng;
        n += 1;
    }
    match n {
        0 => None,
        n => Some(GeoPoint {
            lat: lat_sum / n as f64,
            lng: lng_sum / n as f64,
        }),
    }
}

/// Smallest rectangle containing a set of vertices, `None` when empty.
pub(crate) fn vertex_bbox(points: impl Iterator<Item = GeoPoint>) -> Option<GeoRect> {
    let (mut lat_min, mut lng_min) = (f64::MAX, f64::MAX);
    let (mut lat_max, mut lng_max) = (f64::MIN, f64::MIN);
    let mut empty = true;

    for p in points {
        lat_min = lat_min.min(p.lat);
        lng_min = lng_min.min(p.lng);
        lat_max = lat_max.max(p.lat);
        lng_max = lng_max.max(p.lng);
        empty = false;
    }
    match empty {
        true => None,
        false => Some(GeoRect {
            lat_min,
            lng_min,
            lat_max,
            lng_max,
        }),
    }
}
