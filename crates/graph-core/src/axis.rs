// File: crates/graph-core/src/axis.rs
// Summary: Axis line placement, tick values and tick label formatting.

use crate::grid::{linspace, stepped};
use crate::scale::PlotScale;
use crate::types::PlotConfig;

/// Decimal places shown on x tick labels.
pub const X_LABEL_DECIMALS: usize = 2;
/// Decimal places shown on y tick labels.
pub const Y_LABEL_DECIMALS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Pixel position of an axis line.
///
/// The horizontal axis sits on the `y = 0` row when zero is in range,
/// otherwise it is clamped to the nearer plot edge; the vertical axis
/// does the same with `x = 0` against the x bounds.
pub fn axis_position(scale: &PlotScale, orientation: Orientation) -> f32 {
    let b = &scale.bounds;
    let area = &scale.area;
    match orientation {
        Orientation::Horizontal => {
            if b.contains_y(0.0) {
                scale.to_px_y(0.0)
            } else if b.y_max < 0.0 {
                area.top as f32
            } else {
                area.bottom as f32
            }
        }
        Orientation::Vertical => {
            if b.contains_x(0.0) {
                scale.to_px_x(0.0)
            } else if b.x_max < 0.0 {
                area.right as f32
            } else {
                area.left as f32
            }
        }
    }
}

/// X tick values: every `dx` from `x_min` through `x_max`.
pub fn x_ticks(config: &PlotConfig, scale: &PlotScale) -> Vec<f64> {
    stepped(scale.bounds.x_min, scale.bounds.x_max, config.dx)
}

/// Y tick values: `y_tick_intervals + 1` values spanning the y bounds.
pub fn y_ticks(config: &PlotConfig, scale: &PlotScale) -> Vec<f64> {
    linspace(scale.bounds.y_min, scale.bounds.y_max, config.y_tick_intervals + 1)
}

/// Format with at most `decimals` places, trimming trailing zeros and the
/// point itself (`1.50 -> "1.5"`, `2.00 -> "2"`). Negative zero prints as `0`.
pub fn format_tick(v: f64, decimals: usize) -> String {
    let mut s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { s = "0".to_string(); }
    s
}
