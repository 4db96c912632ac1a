use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;
use terra_rs::entities::Country;
use terra_rs::geometry::primitives::{GeoPoint, GeoRect, Ring};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgMapTheme,
    ///Draw a graticule behind the countries
    #[serde(default)]
    pub graticule: bool,
    ///Draw the country names at their interior points
    #[serde(default)]
    pub labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgMapTheme::default(),
            graticule: true,
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgMapTheme {
    pub stroke_width_multiplier: f64,
    pub sea_fill: Color,
    pub land_fill: Color,
    /// Fill for countries that have been grabbed at least once
    pub selected_land_fill: Color,
    pub graticule_stroke: Color,
    pub label_fill: Color,
}

impl Default for SvgMapTheme {
    fn default() -> Self {
        SvgMapTheme::EARTH_TONES
    }
}

impl SvgMapTheme {
    pub const EARTH_TONES: SvgMapTheme = SvgMapTheme {
        stroke_width_multiplier: 2.0,
        sea_fill: Color(0xA0, 0xBC, 0xD4),
        land_fill: Color(0xFF, 0xC8, 0x79),
        selected_land_fill: Color(0xCC, 0x82, 0x4A),
        graticule_stroke: Color(0xFF, 0xFF, 0xFF),
        label_fill: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgMapTheme = SvgMapTheme {
        stroke_width_multiplier: 2.5,
        sea_fill: Color(0xFF, 0xFF, 0xFF),
        land_fill: Color(0x8F, 0x8F, 0x8F),
        selected_land_fill: Color(0x63, 0x63, 0x63),
        graticule_stroke: Color(0xC3, 0xC3, 0xC3),
        label_fill: Color(0x2D, 0x2D, 0x2D),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&*format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

/// Plate carrée projection with the y axis flipped, one degree per SVG unit.
pub fn project(p: GeoPoint) -> (f64, f64) {
    (p.lng, -p.lat)
}

/// One closed subpath per landmass.
pub fn country_data(country: &Country) -> Data {
    let mut data = Data::new();
    for ring in country.region.rings() {
        data = ring_data(data, ring);
    }
    data
}

fn ring_data(mut data: Data, ring: &Ring) -> Data {
    let mut points = ring.points.iter();
    if let Some(first) = points.next() {
        data = data.move_to(project(*first));
        for p in points {
            data = data.line_to(project(*p));
        }
        data = data.close();
    }
    data
}

/// Meridians and parallels at multiples of `spacing` degrees, clipped to `frame`.
pub fn graticule_data(frame: GeoRect, spacing: f64) -> Data {
    let mut data = Data::new();
    let mut lng = (frame.lng_min / spacing).ceil() * spacing;
    while lng <= frame.lng_max {
        data = data
            .move_to((lng, -frame.lat_max))
            .line_to((lng, -frame.lat_min));
        lng += spacing;
    }
    let mut lat = (frame.lat_min / spacing).ceil() * spacing;
    while lat <= frame.lat_max {
        data = data
            .move_to((frame.lng_min, -lat))
            .line_to((frame.lng_max, -lat));
        lat += spacing;
    }
    data
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
