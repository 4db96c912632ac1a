use anyhow::{Context, Result};
use rand::prelude::SmallRng;
use rand_distr::{Distribution, Normal};
use terra_rs::entities::Country;

use crate::io::session::{ExtPointerEvent, ExtSession};

/// Max absolute latitude a generated pointer position can reach.
/// Steps past it are clamped, the board itself has no such limit.
pub const LAT_WALK_LIMIT: f64 = 85.0;

/// Samples random drag sessions: a Down at an interior point of a country,
/// a series of normally distributed Move steps and a final Up.
pub struct WalkSampler {
    step_distr: Normal<f64>,
    n_moves: usize,
}

impl WalkSampler {
    pub fn new(step_sigma: f64, n_moves: usize) -> Result<Self> {
        let step_distr = Normal::new(0.0, step_sigma)
            .context("walk step sigma must be finite and non-negative")?;
        Ok(Self {
            step_distr,
            n_moves,
        })
    }

    /// Returns `None` if no interior point of `country` could be determined.
    pub fn sample_session(&self, country: &Country, rng: &mut SmallRng) -> Option<ExtSession> {
        let start = country.interior_point()?;

        let mut events = Vec::with_capacity(self.n_moves + 2);
        events.push(ExtPointerEvent::Down([start.lng, start.lat]));

        let (mut lat, mut lng) = (start.lat, start.lng);
        for _ in 0..self.n_moves {
            lat = (lat + self.step_distr.sample(rng)).clamp(-LAT_WALK_LIMIT, LAT_WALK_LIMIT);
            lng += self.step_distr.sample(rng);
            events.push(ExtPointerEvent::Move([lng, lat]));
        }
        events.push(ExtPointerEvent::Up);

        Some(ExtSession {
            name: format!("walk_{}", country.name.to_lowercase().replace(' ', "_")),
            events,
        })
    }
}
