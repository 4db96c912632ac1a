use crate::geometry::primitives::GeoPoint;
use itertools::Itertools;

/// Radius of the spherical earth model, in meters.
/// All areas produced by this module are expressed in m² on this sphere.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Area enclosed by a ring of geographic vertices, in m², following
/// Chamberlain & Duquette: <https://www.semanticscholar.org/paper/79668c0fe32788176758a2285dd674fa8e7b8fa8>.
///
/// The ring is treated as closed, without a duplicate closing vertex.
/// Orientation does not matter, the result is always >= 0.
/// Line-degenerate rings (fewer than 3 vertices, or all vertices on one
/// line) enclose nothing and yield exactly 0.
pub fn ring_area(points: &[GeoPoint]) -> f64 {
    // The (2 + sin φ) edge weights do not cancel along a straight line,
    // so collinear rings must be caught before the summation.
    if points.len() < 3 || collinear(points) {
        return 0.0;
    }

    let sigma: f64 = points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| {
            wrap_delta_lng(b.lng - a.lng).to_radians()
                * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin())
        })
        .sum();

    sigma.abs() * EARTH_RADIUS_M.powi(2) / 2.0
}

/// Normalizes a longitude difference in degrees to [-180, 180).
///
/// Edges spanning the antimeridian would otherwise contribute near-full-circle
/// spans to [ring_area], e.g. a 1° edge from 179.5° to -179.5° reads as -359°.
pub fn wrap_delta_lng(d_lng: f64) -> f64 {
    let mut d = (d_lng + 180.0) % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    d - 180.0
}

/// True if all points lie on a single straight line in lat/lng space,
/// including rings where every point coincides.
/// The test is an exact cross product identity, no tolerance involved,
/// and NaN coordinates never count as collinear.
fn collinear(points: &[GeoPoint]) -> bool {
    let Some((first, rest)) = points.split_first() else {
        return true;
    };
    let Some(direction) = rest.iter().find(|p| **p != *first) else {
        return true;
    };
    let (d_lat, d_lng) = (direction.lat - first.lat, direction.lng - first.lng);
    points
        .iter()
        .all(|p| (p.lat - first.lat) * d_lng == (p.lng - first.lng) * d_lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn unit_square(lat_0: f64, lng_0: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(lat_0, lng_0),
            GeoPoint::new(lat_0, lng_0 + 1.0),
            GeoPoint::new(lat_0 + 1.0, lng_0 + 1.0),
            GeoPoint::new(lat_0 + 1.0, lng_0),
        ]
    }

    #[test]
    fn unit_square_at_equator() {
        let area = ring_area(&unit_square(0.0, 0.0));
        // 1° of arc is ~111.32 km, so the square covers ~1.239e10 m²
        assert!(area > 1.23e10 && area < 1.25e10, "area: {area}");
    }

    #[test]
    fn area_shrinks_with_latitude() {
        let at_equator = ring_area(&unit_square(0.0, 0.0));
        let at_60 = ring_area(&unit_square(60.0, 0.0));
        // cos(60.5°) ≈ 0.492
        assert!(at_60 < at_equator * 0.51, "at_60: {at_60}");
        assert!(at_60 > at_equator * 0.45, "at_60: {at_60}");
    }

    #[test]
    fn orientation_does_not_matter() {
        let ccw = unit_square(10.0, 20.0);
        let cw = ccw.iter().copied().rev().collect::<Vec<_>>();
        let a_ccw = ring_area(&ccw);
        let a_cw = ring_area(&cw);
        assert!(approx_eq!(f64, a_ccw, a_cw, epsilon = 1.0));
    }

    #[test]
    fn starting_vertex_does_not_matter() {
        let square = unit_square(45.0, -30.0);
        let rotated = {
            let mut r = square.clone();
            r.rotate_left(2);
            r
        };
        let a = ring_area(&square);
        let a_rotated = ring_area(&rotated);
        assert!(approx_eq!(f64, a, a_rotated, epsilon = 1.0));
    }

    #[test]
    fn antimeridian_square_matches_equatorial_square() {
        let straddling = vec![
            GeoPoint::new(0.0, 179.5),
            GeoPoint::new(0.0, -179.5),
            GeoPoint::new(1.0, -179.5),
            GeoPoint::new(1.0, 179.5),
        ];
        let reference = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ];
        let a = ring_area(&straddling);
        let b = ring_area(&reference);
        assert!(approx_eq!(f64, a, b, epsilon = 1.0), "a: {a}, b: {b}");
    }

    #[test]
    fn degenerate_rings_have_zero_area() {
        assert_eq!(ring_area(&[]), 0.0);
        assert_eq!(ring_area(&[GeoPoint::new(1.0, 2.0)]), 0.0);
        assert_eq!(
            ring_area(&[GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]),
            0.0
        );
        // 3 coincident vertices enclose nothing
        let p = GeoPoint::new(12.0, 34.0);
        assert_eq!(ring_area(&[p, p, p]), 0.0);
    }

    #[test]
    fn collinear_rings_have_zero_area() {
        // diagonal line, where the edge weights alone would not cancel
        let diagonal = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 2.0),
        ];
        assert_eq!(ring_area(&diagonal), 0.0);

        // out along a line and back, with an interior stop
        let spike = vec![
            GeoPoint::new(10.0, -3.0),
            GeoPoint::new(30.0, 7.0),
            GeoPoint::new(20.0, 2.0),
        ];
        assert_eq!(ring_area(&spike), 0.0);
    }

    #[test]
    fn wrap_delta_lng_normalizes_to_half_open_range() {
        assert_eq!(wrap_delta_lng(0.0), 0.0);
        assert_eq!(wrap_delta_lng(10.0), 10.0);
        assert_eq!(wrap_delta_lng(-10.0), -10.0);
        assert_eq!(wrap_delta_lng(350.0), -10.0);
        assert_eq!(wrap_delta_lng(-350.0), 10.0);
        assert_eq!(wrap_delta_lng(180.0), -180.0);
        assert_eq!(wrap_delta_lng(-180.0), -180.0);
        assert_eq!(wrap_delta_lng(359.0), -1.0);
    }
}
