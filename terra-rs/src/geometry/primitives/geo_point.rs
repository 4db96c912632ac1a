/// Geographic coordinate in degrees, latitude first.
/// Values are not clamped to [-90, 90] / [-180, 180], dragged vertices may leave them.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}
