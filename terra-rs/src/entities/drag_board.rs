use std::collections::HashMap;

use crate::entities::{Atlas, Country, SelectedShape};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::geodesic::wrap_delta_lng;
use crate::geometry::primitives::GeoPoint;
use crate::geometry::rescale::{RescaleConfig, RescaleOutcome};
use crate::util::assertions;
use log::{debug, trace};

/// Pointer input in map coordinates. A single pointer is assumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(GeoPoint),
    Move(GeoPoint),
    Up,
}

/// Drag status of the board.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        name: String,
        /// Pointer position of the previous event, deltas are taken against it.
        last: GeoPoint,
    },
}

/// What a [PointerEvent] did to the board.
#[derive(Clone, Debug, PartialEq)]
pub enum DragTransition {
    /// Down hit a country, it is now held by the pointer.
    Grabbed { name: String },
    /// Move while holding: the country followed the pointer and was
    /// rescaled back to its true area.
    Moved {
        name: String,
        d_lat: f64,
        d_lng: f64,
        outcome: RescaleOutcome,
    },
    /// Up ended the drag.
    Released { name: String },
    /// The event changed nothing.
    Ignored,
}

/// Owns all countries of a map and coordinates dragging them:
/// hit-testing on Down, shift plus area correction on Move, release on Up.
///
/// The imported atlas is never modified. Grabbing a country copies it into
/// the selection registry as a [SelectedShape], which keeps the true area
/// captured at first selection and shadows the original until cleared.
pub struct DragBoard {
    pub(crate) atlas: Atlas,
    pub(crate) selected: HashMap<String, SelectedShape>,
    pub(crate) state: DragState,
    pub(crate) config: RescaleConfig,
}

impl DragBoard {
    pub fn new(atlas: Atlas, config: RescaleConfig) -> Self {
        DragBoard {
            atlas,
            selected: HashMap::new(),
            state: DragState::Idle,
            config,
        }
    }

    /// Advances the board by one pointer event and reports what changed.
    /// Never fails: events that make no sense in the current state are ignored.
    pub fn handle_event(&mut self, event: PointerEvent) -> DragTransition {
        let state = std::mem::take(&mut self.state);
        let (next_state, transition) = match (state, event) {
            (DragState::Idle, PointerEvent::Down(p)) => match self.country_at(p) {
                Some(name) => {
                    self.select(&name);
                    debug!("[BOARD] grabbed {name} at ({:.4}, {:.4})", p.lat, p.lng);
                    (
                        DragState::Dragging {
                            name: name.clone(),
                            last: p,
                        },
                        DragTransition::Grabbed { name },
                    )
                }
                None => (DragState::Idle, DragTransition::Ignored),
            },
            (DragState::Dragging { name, last }, PointerEvent::Move(p)) => {
                let d_lat = p.lat - last.lat;
                let d_lng = wrap_delta_lng(p.lng - last.lng);
                match self.selected.get_mut(&name) {
                    Some(shape) => {
                        let outcome = shape.shift_and_correct(d_lat, d_lng, self.config);
                        trace!("[BOARD] moved {name} by ({d_lat:.4}, {d_lng:.4}): {outcome:?}");
                        (
                            DragState::Dragging {
                                name: name.clone(),
                                last: p,
                            },
                            DragTransition::Moved {
                                name,
                                d_lat,
                                d_lng,
                                outcome,
                            },
                        )
                    }
                    None => (DragState::Idle, DragTransition::Ignored),
                }
            }
            (DragState::Dragging { name, .. }, PointerEvent::Up) => {
                debug!("[BOARD] released {name}");
                (DragState::Idle, DragTransition::Released { name })
            }
            // a second Down cannot occur mid-drag with a single pointer
            (dragging @ DragState::Dragging { .. }, PointerEvent::Down(_)) => {
                (dragging, DragTransition::Ignored)
            }
            (DragState::Idle, PointerEvent::Move(_) | PointerEvent::Up) => {
                (DragState::Idle, DragTransition::Ignored)
            }
        };
        self.state = next_state;
        debug_assert!(assertions::board_is_coherent(self));
        transition
    }

    /// Topmost country containing `p`. Later imports draw on top, so the scan
    /// runs in reverse import order.
    fn country_at(&self, p: GeoPoint) -> Option<String> {
        self.atlas
            .countries
            .iter()
            .rev()
            .map(|c| &c.name)
            .find(|name| {
                self.country(name)
                    .is_some_and(|country| country.collides_with(&p))
            })
            .cloned()
    }

    /// Copies a country from the atlas into the selection registry,
    /// capturing its true area. Reselection keeps the existing entry.
    fn select(&mut self, name: &str) {
        if !self.selected.contains_key(name)
            && let Some(country) = self.atlas.get(name)
        {
            let shape = SelectedShape::new(country.clone());
            debug!(
                "[BOARD] captured true area of {name}: {:.0} m²",
                shape.true_area()
            );
            self.selected.insert(name.to_string(), shape);
        }
    }

    /// Discards the working copy of `name`, the imported shape shows again.
    /// Clearing the country currently held also ends the drag.
    pub fn clear(&mut self, name: &str) {
        if self.selected.remove(name).is_some() {
            debug!("[BOARD] cleared {name}");
            if matches!(&self.state, DragState::Dragging { name: held, .. } if held == name) {
                self.state = DragState::Idle;
            }
            debug_assert!(assertions::board_is_coherent(self));
        }
    }

    /// Discards every working copy and ends any running drag.
    pub fn clear_all(&mut self) {
        debug!("[BOARD] cleared all {} selections", self.selected.len());
        self.selected.clear();
        self.state = DragState::Idle;
        debug_assert!(assertions::board_is_coherent(self));
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn n_countries(&self) -> usize {
        self.atlas.len()
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.selected
            .get(name)
            .map(SelectedShape::country)
            .or_else(|| self.atlas.get(name))
    }

    /// True area registered for `name`, if it is currently selected.
    pub fn true_area(&self, name: &str) -> Option<f64> {
        self.selected.get(name).map(SelectedShape::true_area)
    }

    /// All countries in import order, selected copies shadowing their originals.
    pub fn countries(&self) -> impl Iterator<Item = &Country> + '_ {
        self.atlas.countries.iter().map(|original| {
            self.selected
                .get(&original.name)
                .map(SelectedShape::country)
                .unwrap_or(original)
        })
    }
}
