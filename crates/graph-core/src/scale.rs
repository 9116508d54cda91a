// File: crates/graph-core/src/scale.rs
// Summary: Data bounds and the affine data -> pixel mapping of the plot area.

use crate::geometry::{Point, RectI32};
use crate::sampling::Sample;
use crate::types::{PlotConfig, SPAN_EPS};

/// Axis-aligned data bounds. X comes from the configured domain, Y from the samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn from_samples(config: &PlotConfig, samples: &[Sample]) -> Self {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in samples {
            y_min = y_min.min(s.y);
            y_max = y_max.max(s.y);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            // nothing usable to reduce (all NaN / infinite)
            y_min = -1.0;
            y_max = 1.0;
        }
        if (y_max - y_min).abs() < SPAN_EPS {
            y_max = y_min + 1.0;
            y_min -= 1.0;
        }
        Self { x_min: config.x_start, x_max: config.x_end, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    pub fn contains_x(&self, x: f64) -> bool { self.x_min <= x && x <= self.x_max }
    pub fn contains_y(&self, y: f64) -> bool { self.y_min <= y && y <= self.y_max }
}

/// Maps data coordinates into `area`. Y is flipped: larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotScale {
    pub area: RectI32,
    pub bounds: Bounds,
}

impl PlotScale {
    pub fn new(area: RectI32, bounds: Bounds) -> Self {
        Self { area, bounds }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        // an empty domain (x_start == x_end) still needs a non-zero divisor
        let span = guard_span(self.bounds.x_span());
        (self.area.left as f64 + (x - self.bounds.x_min) / span * self.area.width() as f64) as f32
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        let span = guard_span(self.bounds.y_span());
        (self.area.bottom as f64 - (y - self.bounds.y_min) / span * self.area.height() as f64) as f32
    }

    pub fn to_px(&self, s: &Sample) -> Point {
        Point::new(self.to_px_x(s.x), self.to_px_y(s.y))
    }
}

#[inline]
fn guard_span(span: f64) -> f64 {
    if span.abs() < SPAN_EPS { SPAN_EPS.copysign(span) } else { span }
}
