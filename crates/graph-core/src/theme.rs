// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for graph rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub border: skia::Color,
    pub message: skia::Color,
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    /// White paper, black axes, blue line, red points.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            line_stroke: skia::Color::from_argb(255, 0, 0, 255),
            marker: skia::Color::from_argb(255, 255, 0, 0),
            border: skia::Color::from_argb(255, 128, 128, 128),
            message: skia::Color::from_argb(255, 128, 128, 128),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker: skia::Color::from_argb(255, 220, 80, 80),
            border: skia::Color::from_argb(255, 90, 90, 100),
            message: skia::Color::from_argb(255, 150, 150, 160),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
