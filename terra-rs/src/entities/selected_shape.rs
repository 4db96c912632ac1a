use crate::entities::Country;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::rescale::{RescaleConfig, RescaleOutcome, rescale_to_area};

/// The working copy of a grabbed [Country], together with the area it must keep.
///
/// `true_area` is captured when the copy is made and never updated afterwards,
/// so repeated drags cannot accumulate drift. Clearing the selection discards
/// the copy, the imported original was never touched.
#[derive(Clone, Debug)]
pub struct SelectedShape {
    country: Country,
    true_area: f64,
}

impl SelectedShape {
    pub fn new(country: Country) -> Self {
        let true_area = country.area();
        SelectedShape { country, true_area }
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn true_area(&self) -> f64 {
        self.true_area
    }

    /// Shifts the country by the given deltas and rescales it back to `true_area`.
    ///
    /// A null move returns without touching the shape, every bit stays as it was.
    pub fn shift_and_correct(
        &mut self,
        d_lat: f64,
        d_lng: f64,
        config: RescaleConfig,
    ) -> RescaleOutcome {
        if d_lat == 0.0 && d_lng == 0.0 {
            return RescaleOutcome::Unchanged;
        }
        self.country.shift(d_lat, d_lng);
        rescale_to_area(&mut self.country, self.true_area, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::{GeoPoint, Region, Ring};

    fn selected_square() -> SelectedShape {
        SelectedShape::new(Country::new(
            "boxland".into(),
            Region::Polygon(Ring::new(vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(1.0, 0.0),
            ])),
        ))
    }

    #[test]
    fn true_area_survives_many_drags() {
        let mut shape = selected_square();
        let true_area = shape.true_area();

        for leg in 0..20 {
            let d_lat = if leg % 2 == 0 { 37.0 } else { -37.0 };
            shape.shift_and_correct(d_lat, 3.0, RescaleConfig::default());
            let drift = (shape.country().area() - true_area).abs() / true_area;
            assert!(drift < 1e-6, "drift after leg {leg}: {drift}");
        }
        assert_eq!(shape.true_area(), true_area);
    }

    #[test]
    fn null_move_is_bit_for_bit_identity() {
        let mut shape = selected_square();
        shape.shift_and_correct(58.0, 12.0, RescaleConfig::default());

        let frozen = shape.country().clone();
        let outcome = shape.shift_and_correct(0.0, 0.0, RescaleConfig::default());
        assert_eq!(outcome, RescaleOutcome::Unchanged);

        let bits = |c: &Country| {
            c.region.rings()[0]
                .points
                .iter()
                .map(|p| (p.lat.to_bits(), p.lng.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&frozen), bits(shape.country()));
    }
}
