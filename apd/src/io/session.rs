use serde::{Deserialize, Serialize};
use terra_rs::entities::PointerEvent;
use terra_rs::geometry::primitives::GeoPoint;

/// A scripted pointer session as stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtSession {
    /// Name of the session, output files are derived from it
    pub name: String,
    /// Pointer events in the order they are to be replayed
    pub events: Vec<ExtPointerEvent>,
}

/// External representation of a pointer event.
/// Positions are `[lng, lat]`, matching the GeoJSON axis order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ExtPointerEvent {
    Down([f64; 2]),
    Move([f64; 2]),
    Up,
}

impl From<&ExtPointerEvent> for PointerEvent {
    fn from(e: &ExtPointerEvent) -> Self {
        match e {
            ExtPointerEvent::Down([lng, lat]) => PointerEvent::Down(GeoPoint::new(*lat, *lng)),
            ExtPointerEvent::Move([lng, lat]) => PointerEvent::Move(GeoPoint::new(*lat, *lng)),
            ExtPointerEvent::Up => PointerEvent::Up,
        }
    }
}

impl From<PointerEvent> for ExtPointerEvent {
    fn from(e: PointerEvent) -> Self {
        match e {
            PointerEvent::Down(p) => ExtPointerEvent::Down([p.lng, p.lat]),
            PointerEvent::Move(p) => ExtPointerEvent::Move([p.lng, p.lat]),
            PointerEvent::Up => ExtPointerEvent::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_wire_format() {
        let json = r#"{
            "name": "nudge",
            "events": [
                {"type": "down", "data": [4.0, 50.5]},
                {"type": "move", "data": [5.0, 52.0]},
                {"type": "up"}
            ]
        }"#;
        let session: ExtSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.events.len(), 3);
        assert_eq!(session.events[0], ExtPointerEvent::Down([4.0, 50.5]));
        assert_eq!(session.events[2], ExtPointerEvent::Up);

        // axis order flips from [lng, lat] to (lat, lng)
        match PointerEvent::from(&session.events[1]) {
            PointerEvent::Move(p) => {
                assert_eq!(p.lat, 52.0);
                assert_eq!(p.lng, 5.0);
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_event_conversion_round_trips() {
        let events = [
            PointerEvent::Down(GeoPoint::new(-33.9, 18.4)),
            PointerEvent::Move(GeoPoint::new(0.0, -179.5)),
            PointerEvent::Up,
        ];
        for event in events {
            let ext = ExtPointerEvent::from(event);
            assert_eq!(PointerEvent::from(&ext), event);
        }
    }
}
