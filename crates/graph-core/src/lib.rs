// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the graph layout and rendering API.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod render;
pub mod sampling;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod types;

pub use error::{ConfigError, GraphError, Result};
pub use geometry::{Point, RectI32};
pub use graph::Graph;
pub use render::{paint_scene, RenderOptions};
pub use sampling::{lab_function, Sample};
pub use scale::{Bounds, PlotScale};
pub use scene::{Anchor, LayoutState, LineRole, Primitive, Scene, TextRole};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, PlotConfig};
