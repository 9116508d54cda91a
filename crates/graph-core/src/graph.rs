// File: crates/graph-core/src/graph.rs
// Summary: Graph struct and the size -> scene layout pass (sampling, bounds, axes, data).

use tracing::{debug, trace};

use crate::axis::{axis_position, format_tick, x_ticks, y_ticks, Orientation, X_LABEL_DECIMALS, Y_LABEL_DECIMALS};
use crate::geometry::{Point, RectI32};
use crate::sampling::{lab_function, sample, Sample};
use crate::scale::{Bounds, PlotScale};
use crate::scene::{Anchor, LayoutState, LineRole, Primitive, Scene, TextRole};
use crate::types::PlotConfig;

/// The plotted function together with the constants that shape its layout.
#[derive(Clone, Debug)]
pub struct Graph {
    pub config: PlotConfig,
    pub function: fn(f64) -> f64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_config(PlotConfig::default())
    }

    pub fn with_config(config: PlotConfig) -> Self {
        Self { config, function: lab_function }
    }

    pub fn samples(&self) -> Vec<Sample> {
        sample(&self.config, self.function)
    }

    /// Client rectangle shrunk by the configured margin.
    pub fn plot_area(&self, width: i32, height: i32) -> RectI32 {
        RectI32::from_ltwh(0, 0, width, height).shrink(&self.config.margin)
    }

    pub fn state_for(&self, area: &RectI32) -> LayoutState {
        let min = self.config.min_plot_extent;
        if area.width() <= min || area.height() <= min {
            LayoutState::TooSmall
        } else {
            LayoutState::Normal
        }
    }

    /// Lay out one frame for a `width` x `height` client area.
    ///
    /// Pure: the same size always yields an equal scene. Nothing is cached
    /// between calls; samples and bounds are recomputed every time.
    pub fn layout(&self, width: i32, height: i32) -> Scene {
        let plot_area = self.plot_area(width, height);
        let state = self.state_for(&plot_area);
        debug!(width, height, ?state, "layout");

        let primitives = match state {
            LayoutState::TooSmall => vec![Primitive::Text {
                text: self.config.too_small_message.clone(),
                at: RectI32::from_ltwh(0, 0, width, height).center(),
                anchor: Anchor::Center,
                role: TextRole::Message,
            }],
            LayoutState::Normal => self.plot_primitives(plot_area),
        };
        trace!(count = primitives.len(), "primitives");

        Scene { width, height, state, plot_area, primitives }
    }

    fn plot_primitives(&self, area: RectI32) -> Vec<Primitive> {
        let cfg = &self.config;
        let samples = self.samples();
        let bounds = Bounds::from_samples(cfg, &samples);
        let scale = PlotScale::new(area, bounds);
        debug!(samples = samples.len(), y_min = bounds.y_min, y_max = bounds.y_max, "bounds");

        let points: Vec<Point> = samples.iter().map(|s| scale.to_px(s)).collect();
        let row = axis_position(&scale, Orientation::Horizontal);
        let col = axis_position(&scale, Orientation::Vertical);
        let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
        let half = cfg.tick_half_len;

        let mut out = Vec::with_capacity(4 + 3 * points.len() + 2 * (cfg.y_tick_intervals + 1));

        // Axes
        out.push(Primitive::Line { from: Point::new(l, row), to: Point::new(r, row), role: LineRole::Axis });
        out.push(Primitive::Line { from: Point::new(col, t), to: Point::new(col, b), role: LineRole::Axis });

        for x in x_ticks(cfg, &scale) {
            let tx = scale.to_px_x(x);
            out.push(Primitive::Line {
                from: Point::new(tx, row - half),
                to: Point::new(tx, row + half),
                role: LineRole::Tick,
            });
            out.push(Primitive::Text {
                text: format_tick(x, X_LABEL_DECIMALS),
                at: Point::new(tx, row + cfg.x_label_gap),
                anchor: Anchor::TopCenter,
                role: TextRole::TickLabel,
            });
        }

        for y in y_ticks(cfg, &scale) {
            let ty = scale.to_px_y(y);
            out.push(Primitive::Line {
                from: Point::new(col - half, ty),
                to: Point::new(col + half, ty),
                role: LineRole::Tick,
            });
            out.push(Primitive::Text {
                text: format_tick(y, Y_LABEL_DECIMALS),
                at: Point::new(col - cfg.y_label_gap, ty),
                anchor: Anchor::MiddleRight,
                role: TextRole::TickLabel,
            });
        }

        // Data: line first, markers on top
        if points.len() >= 2 {
            out.push(Primitive::Polyline { points: points.clone() });
        }
        out.extend(points.into_iter().map(|center| Primitive::Marker { center, radius: cfg.marker_radius }));

        out.push(Primitive::Border { rect: area });
        out
    }
}
