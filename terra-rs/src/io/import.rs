use crate::entities::{Atlas, Country};
use crate::geometry::primitives::{GeoPoint, Region, Ring};
use anyhow::{Context, Result, bail};
use float_cmp::approx_eq;
use geojson::{Feature, FeatureCollection, Value};
use log::warn;

/// Converts GeoJSON features into the internal map representation.
#[derive(Clone, Debug)]
pub struct Importer {
    /// Feature property holding the country name.
    pub name_property: String,
}

impl Importer {
    /// Creates a new instance reading country names from the given feature property
    /// ("name" for most datasets, "ADMIN" or "NAME" for Natural Earth exports).
    pub fn new(name_property: &str) -> Importer {
        Importer {
            name_property: name_property.to_string(),
        }
    }

    /// Imports every usable feature of the collection.
    ///
    /// Features without a name or without polygonal geometry are skipped with a
    /// warning. Malformed coordinates and duplicate names are errors.
    pub fn import(&self, fc: &FeatureCollection) -> Result<Atlas> {
        let mut countries: Vec<Country> = vec![];
        for (idx, feature) in fc.features.iter().enumerate() {
            if let Some(country) = self.import_country(feature, idx)? {
                if countries.iter().any(|c| c.name == country.name) {
                    bail!("duplicate feature name: {}", country.name);
                }
                countries.push(country);
            }
        }
        Ok(Atlas::new(countries))
    }

    fn import_country(&self, feature: &Feature, idx: usize) -> Result<Option<Country>> {
        let name = feature
            .properties
            .as_ref()
            .and_then(|props| props.get(&self.name_property))
            .and_then(|v| v.as_str());
        let Some(name) = name else {
            warn!(
                "[IMPORT] feature {idx} has no \"{}\" property, skipped",
                self.name_property
            );
            return Ok(None);
        };

        let Some(geometry) = &feature.geometry else {
            warn!("[IMPORT] {name}: feature has no geometry, skipped");
            return Ok(None);
        };

        let region = match &geometry.value {
            Value::Polygon(rings) => Region::Polygon(self.import_outer(rings, name)?),
            Value::MultiPolygon(polygons) => Region::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| self.import_outer(rings, name))
                    .collect::<Result<Vec<Ring>>>()?,
            ),
            _ => {
                warn!("[IMPORT] {name}: geometry is not a polygon, skipped");
                return Ok(None);
            }
        };

        Ok(Some(Country::new(name.to_string(), region)))
    }

    /// Imports the outer ring of one GeoJSON polygon, dropping its hole rings.
    fn import_outer(&self, rings: &[Vec<Vec<f64>>], name: &str) -> Result<Ring> {
        let Some((outer, holes)) = rings.split_first() else {
            bail!("{name}: polygon without any ring");
        };
        if !holes.is_empty() {
            warn!(
                "[IMPORT] {name}: no area accounting for holes yet, ignoring {} hole ring(s)",
                holes.len()
            );
        }
        import_ring(outer).with_context(|| format!("outer ring of {name}"))
    }
}

/// Converts one GeoJSON ring. Positions are `[lng, lat]`, the duplicate closing
/// vertex is stripped.
pub fn import_ring(positions: &[Vec<f64>]) -> Result<Ring> {
    let mut points = positions
        .iter()
        .map(|pos| match pos.as_slice() {
            [lng, lat, ..] => Ok(GeoPoint {
                lat: *lat,
                lng: *lng,
            }),
            _ => bail!("position with fewer than 2 coordinates"),
        })
        .collect::<Result<Vec<GeoPoint>>>()?;

    //Strip the last vertex if it is the same as the first one
    if points.len() > 1 && points[0] == points[points.len() - 1] {
        points.pop();
    }
    eliminate_degenerate_points(&mut points);
    if points.len() < 3 {
        warn!("[IMPORT] ring with fewer than 3 distinct vertices, it encloses nothing");
    }
    Ok(Ring::new(points))
}

/// Removes consecutive (near-)duplicate vertices (e.g. [a, b, b, c] -> [a, b, c]).
pub fn eliminate_degenerate_points(points: &mut Vec<GeoPoint>) {
    let mut indices_to_remove = vec![];
    let n_points = points.len();
    for i in 0..n_points {
        let j = (i + 1) % n_points;
        let p_i = points[i];
        let p_j = points[j];
        if approx_eq!(f64, p_i.lat, p_j.lat) && approx_eq!(f64, p_i.lng, p_j.lng) {
            indices_to_remove.push(i);
        }
    }
    //remove points in reverse order to avoid shifting indices
    indices_to_remove.sort_unstable_by(|a, b| b.cmp(a));
    for index in indices_to_remove {
        if index < points.len() {
            let j = (index + 1) % points.len();
            warn!(
                "[IMPORT] degenerate vertex of input ring eliminated (idx: {}, {:?}, {:?})",
                index, points[index], points[j]
            );
            points.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::GeoJson;

    fn collection(json: &str) -> FeatureCollection {
        match json.parse::<GeoJson>().unwrap() {
            GeoJson::FeatureCollection(fc) => fc,
            other => panic!("not a feature collection: {other:?}"),
        }
    }

    #[test]
    fn imports_polygons_with_lng_lat_axis_order() {
        let fc = collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"boxland"},
                 "geometry":{"type":"Polygon","coordinates":[[[10.0,0.0],[11.0,0.0],[11.0,2.0],[10.0,2.0],[10.0,0.0]]]}}
            ]}"#,
        );
        let atlas = Importer::new("name").import(&fc).unwrap();
        assert_eq!(atlas.len(), 1);

        let country = atlas.get("boxland").unwrap();
        let Region::Polygon(ring) = &country.region else {
            panic!("expected a single landmass: {:?}", country.region);
        };
        // closing vertex stripped, lat is the second coordinate
        assert_eq!(ring.points.len(), 4);
        assert_eq!(ring.points[0], GeoPoint::new(0.0, 10.0));
        assert_eq!(ring.points[2], GeoPoint::new(2.0, 11.0));
    }

    #[test]
    fn holes_are_discarded() {
        let fc = collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"donutia"},
                 "geometry":{"type":"Polygon","coordinates":[
                    [[0.0,0.0],[10.0,0.0],[10.0,10.0],[0.0,10.0],[0.0,0.0]],
                    [[4.0,4.0],[6.0,4.0],[6.0,6.0],[4.0,6.0],[4.0,4.0]]
                 ]}}
            ]}"#,
        );
        let atlas = Importer::new("name").import(&fc).unwrap();
        let country = atlas.get("donutia").unwrap();
        let Region::Polygon(ring) = &country.region else {
            panic!("the hole ring must not surface as a landmass");
        };
        assert_eq!(ring.n_vertices(), 4);
    }

    #[test]
    fn multipolygons_keep_their_landmasses() {
        let fc = collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"islandia"},
                 "geometry":{"type":"MultiPolygon","coordinates":[
                    [[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0],[0.0,0.0]]],
                    [[[10.0,0.0],[12.0,0.0],[12.0,2.0],[10.0,2.0],[10.0,0.0]]]
                 ]}}
            ]}"#,
        );
        let atlas = Importer::new("name").import(&fc).unwrap();
        let country = atlas.get("islandia").unwrap();
        assert!(matches!(&country.region, Region::MultiPolygon(rings) if rings.len() == 2));
    }

    #[test]
    fn nameless_and_non_polygonal_features_are_skipped() {
        let fc = collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{},
                 "geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}},
                {"type":"Feature","properties":{"name":"lighthouse"},
                 "geometry":{"type":"Point","coordinates":[3.0,4.0]}}
            ]}"#,
        );
        let atlas = Importer::new("name").import(&fc).unwrap();
        assert!(atlas.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let fc = collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"twin"},
                 "geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}},
                {"type":"Feature","properties":{"name":"twin"},
                 "geometry":{"type":"Polygon","coordinates":[[[5.0,5.0],[6.0,5.0],[6.0,6.0],[5.0,5.0]]]}}
            ]}"#,
        );
        assert!(Importer::new("name").import(&fc).is_err());
    }

    #[test]
    fn consecutive_duplicate_vertices_are_eliminated() {
        let mut points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];
        eliminate_degenerate_points(&mut points);
        assert_eq!(
            points,
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(1.0, 1.0),
            ]
        );
    }
}
