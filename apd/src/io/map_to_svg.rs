use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};
use terra_rs::entities::DragBoard;
use terra_rs::geometry::geo_traits::Shape;
use terra_rs::geometry::primitives::GeoRect;
use thousands::Separable;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Spacing of the graticule, in degrees.
pub const GRATICULE_SPACING: f64 = 15.0;

/// Frame every rendered map at least covers. Countries dragged past it
/// extend the frame further.
pub const WORLD_FRAME: GeoRect = GeoRect {
    lat_min: -90.0,
    lng_min: -180.0,
    lat_max: 90.0,
    lng_max: 180.0,
};

pub fn board_to_svg(board: &DragBoard, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;

    let frame = board
        .countries()
        .filter_map(|c| c.bbox())
        .fold(WORLD_FRAME, GeoRect::bounding)
        .pad(GRATICULE_SPACING / 3.0);

    let stroke_width =
        f64::min(frame.lng_span(), frame.lat_span()) * 0.001 * theme.stroke_width_multiplier;

    let sea = Rectangle::new()
        .set("x", frame.lng_min)
        .set("y", -frame.lat_max)
        .set("width", frame.lng_span())
        .set("height", frame.lat_span())
        .set("fill", &*format!("{}", theme.sea_fill));

    let label = {
        //print some information above the left top of the map
        let n_selected = board
            .countries()
            .filter(|c| board.true_area(&c.name).is_some())
            .count();
        let font_size = f64::min(frame.lng_span(), frame.lat_span()) * 0.025;
        let label_content = format!(
            "countries: {} | selected: {} | {}",
            board.n_countries(),
            n_selected,
            title,
        );
        Text::new(label_content)
            .set("x", frame.lng_min + 0.5 * font_size)
            .set("y", -frame.lat_max + 1.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let graticule = match options.graticule {
        false => None,
        true => Some(
            svg_util::data_to_path(
                svg_util::graticule_data(frame, GRATICULE_SPACING),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.graticule_stroke)),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-opacity", "0.6"),
                ],
            )
            .set("id", "graticule"),
        ),
    };

    let countries_group = {
        let mut countries_group = Group::new().set("id", "countries");
        for country in board.countries() {
            let fill = match board.true_area(&country.name).is_some() {
                true => theme.selected_land_fill,
                false => theme.land_fill,
            };
            let stroke_color = svg_util::change_brightness(fill, 0.5);
            let title = Title::new(format!(
                "{}, area: {} km²",
                country.name,
                ((country.area() / 1e6).round() as u64).separate_with_commas()
            ));
            countries_group = countries_group.add(
                svg_util::data_to_path(
                    svg_util::country_data(country),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", &*format!("{stroke_color}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("stroke-linejoin", "round"),
                    ],
                )
                .add(title),
            );
        }
        countries_group
    };

    let labels_group = match options.labels {
        false => None,
        true => {
            let font_size = f64::min(frame.lng_span(), frame.lat_span()) * 0.015;
            let mut labels_group = Group::new().set("id", "labels");
            for country in board.countries() {
                if let Some(p) = country.interior_point() {
                    let (x, y) = svg_util::project(p);
                    labels_group = labels_group.add(
                        Text::new(country.name.clone())
                            .set("x", x)
                            .set("y", y)
                            .set("font-size", font_size)
                            .set("font-family", "monospace")
                            .set("text-anchor", "middle")
                            .set("fill", &*format!("{}", theme.label_fill)),
                    );
                }
            }
            Some(labels_group)
        }
    };

    let vbox_svg = (
        frame.lng_min,
        -frame.lat_max,
        frame.lng_span(),
        frame.lat_span(),
    );

    let mut doc = Document::new().set("viewBox", vbox_svg).add(sea);
    if let Some(graticule) = graticule {
        doc = doc.add(graticule);
    }
    doc = doc.add(countries_group);
    if let Some(labels) = labels_group {
        doc = doc.add(labels);
    }
    doc.add(label)
}
