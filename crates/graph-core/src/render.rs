// File: crates/graph-core/src/render.rs
// Summary: Headless Skia raster pipeline: paints a Scene to RGBA pixels or PNG.

use skia_safe as skia;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::scene::{LineRole, Primitive, Scene, TextRole};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Tick labels and the too-small message. Off keeps output font-independent.
    pub draw_labels: bool,
    pub label_size: f32,
    pub message_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            draw_labels: true,
            label_size: 12.0,
            message_size: 13.0,
        }
    }
}

impl Graph {
    /// Lay out and paint one frame into a fresh RGBA8888 raster surface.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = rgba_info(w, h);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(GraphError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(GraphError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        // Layout sees the real size; the surface cannot be empty.
        let scene = self.layout(opts.width, opts.height);
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster(&rgba_info(w, h), None, None)
            .ok_or(GraphError::Surface { width: w, height: h })?;
        paint_scene(surface.canvas(), &scene, opts);
        Ok(surface)
    }
}

fn rgba_info(w: i32, h: i32) -> skia::ImageInfo {
    skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None)
}

/// Paint `scene` onto `canvas` in primitive order.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let axis = stroke_paint(theme.axis_line, 1.0);
    let tick = stroke_paint(theme.tick, 1.0);
    let data = stroke_paint(theme.line_stroke, 2.0);
    let border = stroke_paint(theme.border, 1.0);
    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.marker);

    // Font collection setup is not free; skip it when nothing needs text.
    let shaper = opts.draw_labels.then(TextShaper::new);

    for p in &scene.primitives {
        match p {
            Primitive::Line { from, to, role } => {
                let paint = match role { LineRole::Axis => &axis, LineRole::Tick => &tick };
                canvas.draw_line((from.x, from.y), (to.x, to.y), paint);
            }
            Primitive::Polyline { points } => {
                let pts: Vec<skia::Point> = points.iter().map(|p| skia::Point::new(p.x, p.y)).collect();
                canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &data);
            }
            Primitive::Marker { center, radius } => {
                canvas.draw_circle((center.x, center.y), *radius, &marker);
            }
            Primitive::Border { rect } => {
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                canvas.draw_rect(r, &border);
            }
            Primitive::Text { text, at, anchor, role } => {
                let Some(shaper) = shaper.as_ref() else { continue };
                let (size, color) = match role {
                    TextRole::TickLabel => (opts.label_size, theme.tick_label),
                    TextRole::Message => (opts.message_size, theme.message),
                };
                shaper.draw_anchored(canvas, text, *at, *anchor, size, color);
            }
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}
