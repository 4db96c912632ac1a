use crate::entities::{Country, DragBoard};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Region, Ring};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// Builds a GeoJSON feature collection from the current state of the board,
/// in import order.
pub fn export(board: &DragBoard) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: board.countries().map(export_country).collect(),
        foreign_members: None,
    }
}

/// Converts one country back into a GeoJSON feature of the same geometry
/// kind it was imported as.
pub fn export_country(country: &Country) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(country.name.clone()));
    properties.insert("area_m2".to_string(), JsonValue::from(country.area()));

    let value = match &country.region {
        Region::Polygon(ring) => Value::Polygon(vec![ring_coords(ring)]),
        Region::MultiPolygon(rings) => {
            Value::MultiPolygon(rings.iter().map(|r| vec![ring_coords(r)]).collect())
        }
    };

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn ring_coords(ring: &Ring) -> Vec<Vec<f64>> {
    let mut positions: Vec<Vec<f64>> = ring.points.iter().map(|p| vec![p.lng, p.lat]).collect();
    //GeoJSON rings repeat the first position at the end
    if let Some(first) = positions.first().cloned() {
        positions.push(first);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Atlas;
    use crate::geometry::primitives::GeoPoint;
    use crate::geometry::rescale::RescaleConfig;

    fn square(lat_0: f64, lng_0: f64, side: f64) -> Ring {
        Ring::new(vec![
            GeoPoint::new(lat_0, lng_0),
            GeoPoint::new(lat_0, lng_0 + side),
            GeoPoint::new(lat_0 + side, lng_0 + side),
            GeoPoint::new(lat_0 + side, lng_0),
        ])
    }

    fn board() -> DragBoard {
        let atlas = Atlas::new(vec![
            Country::new("solo".into(), Region::Polygon(square(0.0, 0.0, 4.0))),
            Country::new(
                "duo".into(),
                Region::MultiPolygon(vec![square(0.0, 0.0, 4.0), square(0.0, 10.0, 2.0)]),
            ),
            Country::new("lonely".into(), Region::MultiPolygon(vec![square(20.0, 20.0, 1.0)])),
        ]);
        DragBoard::new(atlas, RescaleConfig::default())
    }

    #[test]
    fn exports_every_country_in_order() {
        let fc = export(&board());
        assert_eq!(fc.features.len(), 3);

        let names: Vec<&str> = fc
            .features
            .iter()
            .map(|f| f.properties.as_ref().unwrap()["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["solo", "duo", "lonely"]);
    }

    #[test]
    fn geometry_kind_survives_the_round_trip() {
        let fc = export(&board());
        let kinds: Vec<bool> = fc
            .features
            .iter()
            .map(|f| {
                matches!(
                    f.geometry.as_ref().unwrap().value,
                    Value::MultiPolygon(_)
                )
            })
            .collect();
        // a single-landmass multipolygon stays a multipolygon
        assert_eq!(kinds, vec![false, true, true]);
    }

    #[test]
    fn rings_are_closed_with_lng_lat_positions() {
        let fc = export(&board());
        let Value::Polygon(rings) = &fc.features[0].geometry.as_ref().unwrap().value else {
            panic!("expected a polygon");
        };
        let ring = &rings[0];
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        // second vertex is lat 0, lng 4
        assert_eq!(ring[1], vec![4.0, 0.0]);
    }
}
