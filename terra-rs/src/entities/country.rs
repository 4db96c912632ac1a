use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{GeoPoint, GeoRect, Region, Ring};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// A named draggable shape on the map. Countries with multiple landmasses
/// (a mainland and its islands) are dragged as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Country {
    pub name: String,
    pub region: Region,
}

impl Country {
    pub fn new(name: String, region: Region) -> Self {
        Country { name, region }
    }

    pub fn n_vertices(&self) -> usize {
        self.region.rings().iter().map(Ring::n_vertices).sum()
    }

    /// Midpoint of the widest east-west chord of the largest landmass,
    /// taken at the mid latitude of its bounding box.
    ///
    /// The vertex centroid of a concave shape can fall outside of it, this point cannot.
    pub fn interior_point(&self) -> Option<GeoPoint> {
        let largest = self
            .region
            .rings()
            .iter()
            .max_by_key(|r| OrderedFloat(r.area()))?;
        let bbox = largest.bbox()?;
        let scan_lat = bbox.center().lat;

        let mut crossings = vec![];
        for (a, b) in largest.edge_iter() {
            if (a.lat > scan_lat) != (b.lat > scan_lat) {
                crossings.push((b.lng - a.lng) * (scan_lat - a.lat) / (b.lat - a.lat) + a.lng);
            }
        }
        crossings.sort_by_key(|&lng| OrderedFloat(lng));

        let widest = crossings
            .iter()
            .copied()
            .tuples()
            .max_by_key(|&(west, east)| OrderedFloat(east - west));

        match widest {
            Some((west, east)) => Some(GeoPoint::new(scan_lat, (west + east) / 2.0)),
            None => self.centroid(),
        }
    }
}

impl Shape for Country {
    fn centroid(&self) -> Option<GeoPoint> {
        self.region.centroid()
    }

    fn area(&self) -> f64 {
        self.region.area()
    }

    fn bbox(&self) -> Option<GeoRect> {
        self.region.bbox()
    }
}

impl Transformable for Country {
    fn shift(&mut self, d_lat: f64, d_lng: f64) -> &mut Self {
        self.region.shift(d_lat, d_lng);
        self
    }

    fn scale_about(&mut self, anchor: GeoPoint, factor: f64) -> &mut Self {
        self.region.scale_about(anchor, factor);
        self
    }
}

impl CollidesWith<GeoPoint> for Country {
    fn collides_with(&self, point: &GeoPoint) -> bool {
        match self.bbox() {
            None => false,
            Some(bbox) => bbox.collides_with(point) && self.region.collides_with(point),
        }
    }
}
