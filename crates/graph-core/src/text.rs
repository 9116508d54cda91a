// File: crates/graph-core/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and draws anchored labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::geometry::Point;
use crate::scene::Anchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `anchor` describes where `at` sits on its box.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: Point,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        let origin = match anchor {
            Anchor::TopCenter => (at.x - w / 2.0, at.y),
            Anchor::MiddleRight => (at.x - w, at.y - h / 2.0),
            Anchor::Center => (at.x - w / 2.0, at.y - h / 2.0),
        };
        // Paragraph paints from its top-left corner
        p.paint(canvas, origin);
    }
}
