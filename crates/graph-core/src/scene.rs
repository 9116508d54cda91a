// File: crates/graph-core/src/scene.rs
// Summary: Backend-agnostic drawing primitives produced by one layout pass.

use crate::geometry::{Point, RectI32};

/// Which side of the anchor point a label hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Horizontally centred, top edge on the anchor (x tick labels).
    TopCenter,
    /// Vertically centred, right edge on the anchor (y tick labels).
    MiddleRight,
    /// Centred on both axes (the too-small message).
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Axis,
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    TickLabel,
    Message,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, role: LineRole },
    /// Connected data line; only emitted with two or more points.
    Polyline { points: Vec<Point> },
    /// Filled circular point marker.
    Marker { center: Point, radius: f32 },
    /// Plot-area outline.
    Border { rect: RectI32 },
    Text { text: String, at: Point, anchor: Anchor, role: TextRole },
}

/// Layout outcome, decided once per pass from the plot-area size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutState {
    Normal,
    TooSmall,
}

/// Everything needed to paint one frame, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub state: LayoutState,
    pub plot_area: RectI32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn lines(&self, role: LineRole) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Line { from, to, role: r } if *r == role => Some((from, to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Point> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Marker { center, .. } => Some(center),
            _ => None,
        })
    }

    pub fn polyline(&self) -> Option<&[Point]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Polyline { points } => Some(points.as_slice()),
            _ => None,
        })
    }
}
