// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (window sizes, margins, plot configuration).

use crate::error::ConfigError;

/// Initial client width of the host window, in pixels.
pub const WIDTH: i32 = 800;
/// Initial client height of the host window, in pixels.
pub const HEIGHT: i32 = 600;
/// Smallest client width the host window may be resized to.
pub const MIN_WIDTH: i32 = 10;
/// Smallest client height the host window may be resized to.
pub const MIN_HEIGHT: i32 = 10;
/// Host window title.
pub const TITLE: &str = "Resizable Graph";

/// Overshoot allowed when sweeping the domain before clamping to `x_end`.
pub const DOMAIN_EPS: f64 = 1e-9;
/// Spans narrower than this are treated as degenerate.
pub const SPAN_EPS: f64 = 1e-9;
/// Upper bound on whole steps in one domain sweep (samples = steps + 1).
pub const MAX_SAMPLES: usize = 100_000;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on all four sides.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right), saturating at `u32::MAX`.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating at `u32::MAX`.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// Named plot constants: domain sweep, margins and decoration sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub x_start: f64,
    pub x_end: f64,
    pub dx: f64,
    pub margin: Insets,
    /// Plot areas at or below this width/height show the message instead.
    pub min_plot_extent: i32,
    /// Number of equal intervals on the y axis (ticks = intervals + 1).
    pub y_tick_intervals: usize,
    pub tick_half_len: f32,
    pub x_label_gap: f32,
    pub y_label_gap: f32,
    pub marker_radius: f32,
    pub too_small_message: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_start: 0.2,
            x_end: 10.0,
            dx: 0.8,
            margin: Insets::default(),
            min_plot_extent: 50,
            y_tick_intervals: 5,
            tick_half_len: 4.0,
            x_label_gap: 6.0,
            y_label_gap: 6.0,
            marker_radius: 3.0,
            too_small_message: "window too small".to_string(),
        }
    }
}

impl PlotConfig {
    /// Check the values a caller may have overridden.
    ///
    /// `x_end < x_start` is accepted: the sweep then degenerates to a single sample.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [("x_start", self.x_start), ("x_end", self.x_end), ("dx", self.dx)] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite { name, value: v });
            }
        }
        if self.dx <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.dx));
        }
        let steps = ((self.x_end - self.x_start) / self.dx).round();
        if !(steps <= MAX_SAMPLES as f64) {
            return Err(ConfigError::TooManySamples { steps, max: MAX_SAMPLES });
        }
        for (name, near, far) in [
            ("left + right margin", self.margin.left, self.margin.right),
            ("top + bottom margin", self.margin.top, self.margin.bottom),
        ] {
            let total = u64::from(near) + u64::from(far);
            if total > i32::MAX as u64 {
                return Err(ConfigError::MarginTooLarge { name, total });
            }
        }
        if self.y_tick_intervals == 0 {
            return Err(ConfigError::NoTickIntervals);
        }
        for (name, v) in [
            ("tick_half_len", self.tick_half_len),
            ("x_label_gap", self.x_label_gap),
            ("y_label_gap", self.y_label_gap),
            ("marker_radius", self.marker_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::InvalidLength { name, value: v });
            }
        }
        Ok(())
    }
}
