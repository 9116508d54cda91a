// File: crates/graph-core/src/sampling.rs
// Summary: Fixed plotted function and the stepped domain sweep.

use crate::types::{PlotConfig, DOMAIN_EPS, MAX_SAMPLES};

/// One `(x, f(x))` pair of the domain sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// f(x) = (x + cos 2x) / (x + 2)
pub fn lab_function(x: f64) -> f64 {
    (x + (2.0 * x).cos()) / (x + 2.0)
}

/// Number of whole steps between `x_start` and `x_end`, never negative
/// and never above [`MAX_SAMPLES`] even for an unvalidated config.
pub fn steps(config: &PlotConfig) -> usize {
    let n = ((config.x_end - config.x_start) / config.dx).round();
    if n > 0.0 { n.min(MAX_SAMPLES as f64) as usize } else { 0 }
}

/// Evaluate `f` at `x_start + i*dx` for `i in 0..=steps`.
///
/// Positions are computed from the index rather than accumulated, and a
/// position that drifts past `x_end` by more than [`DOMAIN_EPS`] is clamped.
pub fn sample<F>(config: &PlotConfig, f: F) -> Vec<Sample>
where
    F: Fn(f64) -> f64,
{
    let n = steps(config);
    (0..=n)
        .map(|i| {
            let mut x = config.x_start + i as f64 * config.dx;
            if x > config.x_end + DOMAIN_EPS {
                x = config.x_end;
            }
            Sample { x, y: f(x) }
        })
        .collect()
}
