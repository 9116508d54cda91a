// File: crates/graph-window/src/main.rs
// Summary: Resizable window that redraws the graph on every resize via RGBA blit (CPU) using winit + softbuffer.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use graph_core::types::{HEIGHT, MIN_HEIGHT, MIN_WIDTH, TITLE, WIDTH};
use graph_core::{theme, Graph, Insets, PlotConfig, RenderOptions};
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "graph-window")]
#[command(about = "Plots f(x) = (x + cos 2x) / (x + 2) in a resizable window", long_about = None)]
struct Args {
    /// Initial client width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Initial client height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// First sampled x value
    #[arg(long, allow_negative_numbers = true)]
    x_start: Option<f64>,

    /// Last x value of the domain
    #[arg(long, allow_negative_numbers = true)]
    x_end: Option<f64>,

    /// Sampling step
    #[arg(long)]
    step: Option<f64>,

    /// Margin around the plot area, same on every side
    #[arg(long)]
    margin: Option<u32>,

    /// Render a single frame to this PNG and exit instead of opening a window
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let graph = Graph::with_config(plot_config(&args)?);
    let mut opts = RenderOptions::default();
    opts.width = args.width;
    opts.height = args.height;
    opts.theme = theme::find(&args.theme);
    info!(theme = opts.theme.name, "starting {TITLE}");

    if let Some(path) = &args.export {
        graph
            .render_to_png(&opts, path)
            .with_context(|| format!("failed to export '{}'", path.display()))?;
        info!(path = %path.display(), width = opts.width, height = opts.height, "exported frame");
        return Ok(());
    }

    run_window(graph, opts)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("bad log filter '{level}'"))?;
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn plot_config(args: &Args) -> Result<PlotConfig> {
    let mut cfg = PlotConfig::default();
    if let Some(v) = args.x_start { cfg.x_start = v; }
    if let Some(v) = args.x_end { cfg.x_end = v; }
    if let Some(v) = args.step { cfg.dx = v; }
    if let Some(v) = args.margin { cfg.margin = Insets::uniform(v); }
    cfg.validate().context("invalid plot options")?;
    Ok(cfg)
}

fn run_window(graph: Graph, mut opts: RenderOptions) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(initial_size(&opts))
        .with_min_inner_size(PhysicalSize::new(MIN_WIDTH as u32, MIN_HEIGHT as u32))
        .build(&event_loop)
        .map_err(|e| anyhow!("failed to build window: {e}"))?;

    // Context must outlive the surface; `run` never returns so both stay alive.
    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!("close requested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    debug!(width = new_size.width, height = new_size.height, "resized");
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    size = *new_inner_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(e) = redraw(&graph, &mut surface, &mut opts, size) {
                    warn!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

/// Requested client size in device pixels, so the first frame matches
/// `--width` x `--height` regardless of the display scale factor.
fn initial_size(opts: &RenderOptions) -> PhysicalSize<u32> {
    PhysicalSize::new(opts.width.max(MIN_WIDTH) as u32, opts.height.max(MIN_HEIGHT) as u32)
}

/// Render one frame at the current client size and present it.
fn redraw(graph: &Graph, surface: &mut softbuffer::Surface, opts: &mut RenderOptions, size: PhysicalSize<u32>) -> Result<()> {
    // Minimized windows report a zero size; nothing to present.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("surface resize: {e}"))?;

    opts.width = size.width as i32;
    opts.height = size.height as i32;
    let (rgba, _, _, _) = graph.render_to_rgba8(opts).context("render frame")?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("surface buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_window_constants() {
        let args = Args::parse_from(["graph-window"]);
        assert_eq!((args.width, args.height), (WIDTH, HEIGHT));
        assert_eq!(plot_config(&args).expect("defaults"), PlotConfig::default());
    }

    #[test]
    fn cli_overrides_domain() {
        let args = Args::parse_from(["graph-window", "--x-start", "-1.5", "--x-end", "2", "--step", "0.25", "--margin", "20"]);
        let cfg = plot_config(&args).expect("valid overrides");
        assert_eq!((cfg.x_start, cfg.x_end, cfg.dx), (-1.5, 2.0, 0.25));
        assert_eq!(cfg.margin, Insets::uniform(20));
    }

    #[test]
    fn cli_rejects_zero_step() {
        let args = Args::parse_from(["graph-window", "--step", "0"]);
        assert!(plot_config(&args).is_err());
    }

    #[test]
    fn cli_rejects_step_that_floods_the_sweep() {
        let args = Args::parse_from(["graph-window", "--step", "1e-300"]);
        assert!(plot_config(&args).is_err());
    }

    #[test]
    fn cli_rejects_margin_past_pixel_range() {
        let args = Args::parse_from(["graph-window", "--margin", "4000000000"]);
        assert!(plot_config(&args).is_err());
        let args = Args::parse_from(["graph-window", "--margin", "1500000000"]);
        assert!(plot_config(&args).is_err());
    }

    #[test]
    fn initial_size_is_physical_and_clamped() {
        let mut opts = RenderOptions::default();
        assert_eq!(initial_size(&opts), PhysicalSize::new(WIDTH as u32, HEIGHT as u32));
        opts.width = 3;
        opts.height = -20;
        assert_eq!(initial_size(&opts), PhysicalSize::new(MIN_WIDTH as u32, MIN_HEIGHT as u32));
    }
}
