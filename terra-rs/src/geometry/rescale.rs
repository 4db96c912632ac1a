use crate::geometry::geo_traits::{Shape, Transformable};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Config for [rescale_to_area].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RescaleConfig {
    /// A correction pass is skipped once its scale factor is within this
    /// relative tolerance of 1.0.
    pub rel_tolerance: f64,
    /// Hard cap on the number of correction passes per call.
    ///
    /// A single pass scales in degree space, but areas on the sphere are not
    /// quadratic in degrees, so one pass slightly misses the target at high
    /// latitudes. Successive passes converge quickly, 2 or 3 suffice in practice.
    pub max_passes: usize,
}

impl Default for RescaleConfig {
    fn default() -> Self {
        RescaleConfig {
            rel_tolerance: 1e-9,
            max_passes: 16,
        }
    }
}

/// What [rescale_to_area] did to the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RescaleOutcome {
    /// The shape was scaled about its centroid by `factor` in total.
    Rescaled { factor: f64, passes: usize },
    /// The current area already matched the target, the shape is untouched.
    Unchanged,
    /// Target or current area is zero (or not finite), the shape is untouched.
    Degenerate,
}

/// Scales `shape` about its own centroid until its area matches `target_area`.
///
/// Every pass computes `factor = sqrt(target_area / current_area)` and applies
/// it to all vertices. Degenerate shapes are left untouched, never an error.
pub fn rescale_to_area<S>(shape: &mut S, target_area: f64, config: RescaleConfig) -> RescaleOutcome
where
    S: Shape + Transformable,
{
    if !(target_area.is_finite() && target_area > 0.0) {
        return RescaleOutcome::Degenerate;
    }

    let mut total_factor = 1.0;
    for pass in 1..=config.max_passes {
        let current_area = shape.area();
        if !(current_area.is_finite() && current_area > 0.0) {
            return match pass {
                1 => RescaleOutcome::Degenerate,
                _ => RescaleOutcome::Rescaled {
                    factor: total_factor,
                    passes: pass - 1,
                },
            };
        }

        let factor = (target_area / current_area).sqrt();
        if (factor - 1.0).abs() <= config.rel_tolerance {
            return match pass {
                1 => RescaleOutcome::Unchanged,
                _ => RescaleOutcome::Rescaled {
                    factor: total_factor,
                    passes: pass - 1,
                },
            };
        }

        let Some(anchor) = shape.centroid() else {
            return RescaleOutcome::Degenerate;
        };
        shape.scale_about(anchor, factor);
        total_factor *= factor;
        trace!("[RESCALE] pass {pass}: factor {factor:.9} about ({:.4}, {:.4})", anchor.lat, anchor.lng);
    }

    debug!(
        "[RESCALE] not converged after {} passes, cumulative factor {total_factor:.9}",
        config.max_passes
    );
    RescaleOutcome::Rescaled {
        factor: total_factor,
        passes: config.max_passes,
    }
}
