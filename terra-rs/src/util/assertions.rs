use crate::entities::{Country, DragBoard, DragState};
use crate::geometry::geo_traits::Shape;
use std::collections::HashSet;

/// Used in `debug_assert!` after every event the board handles.
///
/// Atlas names are unique, every selection shadows an atlas country,
/// and a running drag refers to a selected shape.
pub fn board_is_coherent(board: &DragBoard) -> bool {
    let names: HashSet<_> = board.atlas.countries.iter().map(|c| c.name.as_str()).collect();
    if names.len() != board.atlas.len() {
        return false;
    }
    let selections_shadow_atlas = board
        .selected
        .keys()
        .all(|name| names.contains(name.as_str()));

    let drag_refers_to_selection = match &board.state {
        DragState::Idle => true,
        DragState::Dragging { name, .. } => board.selected.contains_key(name.as_str()),
    };

    selections_shadow_atlas && drag_refers_to_selection
}

/// The country's area matches `target` within relative tolerance `rel`.
pub fn area_within_rel(country: &Country, target: f64, rel: f64) -> bool {
    match target == 0.0 {
        true => country.area() == 0.0,
        false => (country.area() - target).abs() / target <= rel,
    }
}
