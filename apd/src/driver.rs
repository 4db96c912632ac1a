use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};
use terra_rs::entities::{DragBoard, DragTransition};
use terra_rs::geometry::geo_traits::Shape;
use terra_rs::geometry::rescale::RescaleOutcome;
use thousands::Separable;

use crate::config::ApdConfig;
use crate::io::session::ExtSession;
use crate::samplers::walk_sampler::WalkSampler;

/// Replays pointer sessions on a [DragBoard] and reports how well
/// the areas held up.
pub struct SessionDriver {
    pub board: DragBoard,
    pub config: ApdConfig,
}

impl SessionDriver {
    pub fn new(board: DragBoard, config: ApdConfig) -> Self {
        let total_area: f64 = board.countries().map(|c| c.area()).sum();
        let n_vertices: usize = board.countries().map(|c| c.n_vertices()).sum();
        info!(
            "[APD] board holds {} countries ({n_vertices} vertices), {} m² of land",
            board.n_countries(),
            (total_area.round() as u64).separate_with_commas()
        );
        Self { board, config }
    }

    /// Feeds every event of `session` to the board, in order.
    pub fn run(&mut self, session: &ExtSession) -> SessionReport {
        let start = Instant::now();
        info!(
            "[APD] replaying session '{}' ({} events)",
            session.name,
            session.events.len()
        );

        let mut n_moves = 0;
        let mut n_rescales = 0;
        let mut max_rel_drift = 0.0_f64;

        for ext_event in &session.events {
            match self.board.handle_event(ext_event.into()) {
                DragTransition::Grabbed { name } => {
                    let true_area = self.board.true_area(&name).unwrap_or(0.0);
                    info!(
                        "[APD] grabbed {name} ({} m²)",
                        (true_area.round() as u64).separate_with_commas()
                    );
                }
                DragTransition::Moved { name, outcome, .. } => {
                    n_moves += 1;
                    if let RescaleOutcome::Rescaled { .. } = outcome {
                        n_rescales += 1;
                    }
                    max_rel_drift = max_rel_drift.max(self.rel_drift(&name).unwrap_or(0.0));
                }
                DragTransition::Released { name } => {
                    debug!("[APD] released {name}");
                }
                DragTransition::Ignored => {
                    debug!("[APD] event ignored: {ext_event:?}");
                }
            }
        }

        let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "[APD] session '{}' finished in {:.3}ms: {n_moves} moves, {n_rescales} rescales, max area drift {max_rel_drift:.3e}",
            session.name, runtime_ms
        );

        let dragged = self
            .board
            .countries()
            .filter(|c| self.board.true_area(&c.name).is_some())
            .map(|c| c.name.as_str())
            .join(", ");
        if !dragged.is_empty() {
            info!("[APD] dragged so far: {dragged}");
        }

        SessionReport {
            n_events: session.events.len(),
            n_moves,
            n_rescales,
            max_rel_drift,
            runtime_ms,
            countries: self.country_reports(),
        }
    }

    /// Generates a pointer session that grabs the largest country and walks it
    /// across the map in normally distributed steps.
    pub fn sample_walk_session(&self, rng: &mut SmallRng) -> Result<ExtSession> {
        let target = self
            .board
            .countries()
            .max_by_key(|c| OrderedFloat(c.area()))
            .context("cannot sample a walk on an empty board")?;

        let sampler = WalkSampler::new(self.config.walk_step_sigma, self.config.walk_moves)?;
        sampler
            .sample_session(target, rng)
            .with_context(|| format!("no interior point found for {}", target.name))
    }

    /// Relative deviation of the current area from the true area,
    /// `None` if the country was never selected.
    fn rel_drift(&self, name: &str) -> Option<f64> {
        let true_area = self.board.true_area(name)?;
        let area = self.board.country(name)?.area();
        match true_area > 0.0 {
            true => Some((area - true_area).abs() / true_area),
            false => Some(0.0),
        }
    }

    fn country_reports(&self) -> Vec<CountryReport> {
        self.board
            .countries()
            .map(|c| CountryReport {
                name: c.name.clone(),
                area_m2: c.area(),
                true_area_m2: self.board.true_area(&c.name),
                rel_drift: self.rel_drift(&c.name),
            })
            .collect_vec()
    }
}

/// Summary of a replayed session.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionReport {
    pub n_events: usize,
    pub n_moves: usize,
    pub n_rescales: usize,
    /// Worst relative area deviation observed after any move
    pub max_rel_drift: f64,
    pub runtime_ms: f64,
    pub countries: Vec<CountryReport>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CountryReport {
    pub name: String,
    pub area_m2: f64,
    /// Area registered at first selection, absent if never selected
    pub true_area_m2: Option<f64>,
    pub rel_drift: Option<f64>,
}
