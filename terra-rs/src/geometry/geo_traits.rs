use crate::geometry::primitives::{GeoPoint, GeoRect};

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of shapes on the map.
pub trait Shape {
    /// Arithmetic mean of all vertices, in degrees.
    /// `None` if the shape has no vertices.
    fn centroid(&self) -> Option<GeoPoint>;

    /// Area of the shape on the spherical earth, in m².
    fn area(&self) -> f64;

    /// Axis-aligned bounding box in degree space.
    /// `None` if the shape has no vertices.
    fn bbox(&self) -> Option<GeoRect>;
}

/// Trait for types that can be moved and resized in degree space.
pub trait Transformable: Clone {
    /// Shifts `self` by the given deltas, in degrees.
    fn shift(&mut self, d_lat: f64, d_lng: f64) -> &mut Self;

    /// Scales `self` towards or away from `anchor`:
    /// every vertex `v` becomes `anchor + (v - anchor) * factor`, component-wise.
    fn scale_about(&mut self, anchor: GeoPoint, factor: f64) -> &mut Self;

    /// Applies [Transformable::shift] to a clone.
    fn shift_clone(&self, d_lat: f64, d_lng: f64) -> Self {
        let mut clone = self.clone();
        clone.shift(d_lat, d_lng);
        clone
    }
}
