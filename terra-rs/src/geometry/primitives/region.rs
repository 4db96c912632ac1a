use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{GeoPoint, GeoRect, Ring, vertex_bbox, vertex_centroid};

/// Polygonal geometry of a country, mirroring the two GeoJSON geometry kinds.
///
/// Every ring is an outer contour: hole rings carry no meaning in this system
/// and are discarded at import. Multi-polygon ring areas sum.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// A single landmass.
    Polygon(Ring),
    /// Several independent landmasses (a mainland and its islands).
    MultiPolygon(Vec<Ring>),
}

impl Region {
    pub fn rings(&self) -> &[Ring] {
        match self {
            Region::Polygon(ring) => std::slice::from_ref(ring),
            Region::MultiPolygon(rings) => rings,
        }
    }

    fn rings_mut(&mut self) -> &mut [Ring] {
        match self {
            Region::Polygon(ring) => std::slice::from_mut(ring),
            Region::MultiPolygon(rings) => rings,
        }
    }

    /// All vertices of all rings, in storage order.
    pub fn vertex_iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.rings().iter().flat_map(|r| r.points.iter()).copied()
    }
}

impl Shape for Region {
    fn centroid(&self) -> Option<GeoPoint> {
        vertex_centroid(self.vertex_iter())
    }

    /// Sum of the ring areas. Holes are not part of the model, nothing is subtracted.
    fn area(&self) -> f64 {
        self.rings().iter().map(Ring::area).sum()
    }

    fn bbox(&self) -> Option<GeoRect> {
        vertex_bbox(self.vertex_iter())
    }
}

impl Transformable for Region {
    fn shift(&mut self, d_lat: f64, d_lng: f64) -> &mut Self {
        for ring in self.rings_mut() {
            ring.shift(d_lat, d_lng);
        }
        self
    }

    fn scale_about(&mut self, anchor: GeoPoint, factor: f64) -> &mut Self {
        for ring in self.rings_mut() {
            ring.scale_about(anchor, factor);
        }
        self
    }
}

impl CollidesWith<GeoPoint> for Region {
    fn collides_with(&self, point: &GeoPoint) -> bool {
        self.rings().iter().any(|r| r.collides_with(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lat_0: f64, lng_0: f64, side: f64) -> Ring {
        Ring::new(vec![
            GeoPoint::new(lat_0, lng_0),
            GeoPoint::new(lat_0, lng_0 + side),
            GeoPoint::new(lat_0 + side, lng_0 + side),
            GeoPoint::new(lat_0 + side, lng_0),
        ])
    }

    #[test]
    fn multi_polygon_area_sums_over_rings() {
        let big = square(0.0, 0.0, 4.0);
        let small = square(0.0, 10.0, 2.0);
        let expected = big.area() + small.area();

        let region = Region::MultiPolygon(vec![big, small]);
        assert_eq!(region.area(), expected);
    }

    #[test]
    fn containment_covers_every_ring() {
        let region = Region::MultiPolygon(vec![square(0.0, 0.0, 4.0), square(0.0, 10.0, 2.0)]);
        assert!(region.collides_with(&GeoPoint::new(2.0, 2.0)));
        assert!(region.collides_with(&GeoPoint::new(1.0, 11.0)));
        // between the two landmasses
        assert!(!region.collides_with(&GeoPoint::new(1.0, 7.0)));
    }

    #[test]
    fn centroid_averages_over_all_rings() {
        let region = Region::MultiPolygon(vec![square(0.0, 0.0, 2.0), square(0.0, 10.0, 2.0)]);
        let c = region.centroid().unwrap();
        assert_eq!(c.lat, 1.0);
        assert_eq!(c.lng, 6.0);
    }
}
