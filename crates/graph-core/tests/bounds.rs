// File: crates/graph-core/tests/bounds.rs
// Purpose: Validate bounds reduction, degenerate-range widening and the pixel mapping.

use graph_core::sampling::sample;
use graph_core::{Bounds, Graph, PlotConfig, PlotScale, RectI32};

fn default_bounds() -> Bounds {
    let graph = Graph::new();
    Bounds::from_samples(&graph.config, &graph.samples())
}

#[test]
fn bounds_bracket_every_sample() {
    let graph = Graph::new();
    let b = default_bounds();
    assert_eq!(b.x_min, 0.2);
    assert_eq!(b.x_max, 10.0);
    for s in graph.samples() {
        assert!(b.y_min <= s.y && s.y <= b.y_max);
    }
    assert!(graph.samples().iter().any(|s| s.y == b.y_min));
    assert!(graph.samples().iter().any(|s| s.y == b.y_max));
}

#[test]
fn bounds_are_bit_identical_across_runs() {
    let a = default_bounds();
    let b = default_bounds();
    assert_eq!(a.y_min.to_bits(), b.y_min.to_bits());
    assert_eq!(a.y_max.to_bits(), b.y_max.to_bits());
}

#[test]
fn constant_function_widens_to_two() {
    let cfg = PlotConfig::default();
    let b = Bounds::from_samples(&cfg, &sample(&cfg, |_| 3.0));
    assert_eq!(b.y_min, 2.0);
    assert_eq!(b.y_max, 4.0);
    assert_eq!(b.y_span(), 2.0);
}

#[test]
fn nan_samples_fall_back_to_unit_range() {
    let cfg = PlotConfig::default();
    let b = Bounds::from_samples(&cfg, &sample(&cfg, |_| f64::NAN));
    assert_eq!((b.y_min, b.y_max), (-1.0, 1.0));
}

#[test]
fn mapping_hits_plot_edges() {
    let area = RectI32::from_ltrb(50, 50, 750, 550);
    let b = default_bounds();
    let scale = PlotScale::new(area, b);
    assert!((scale.to_px_x(b.x_min) - 50.0).abs() < 1e-3);
    assert!((scale.to_px_x(b.x_max) - 750.0).abs() < 1e-3);
    assert!((scale.to_px_y(b.y_min) - 550.0).abs() < 1e-3);
    assert!((scale.to_px_y(b.y_max) - 50.0).abs() < 1e-3);
}

#[test]
fn mapping_is_monotonic_and_y_is_flipped() {
    let scale = PlotScale::new(RectI32::from_ltrb(50, 50, 750, 550), default_bounds());
    let xs: Vec<f32> = (0..50).map(|i| scale.to_px_x(0.2 + i as f64 * 0.2)).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    let ys: Vec<f32> = (0..50).map(|i| scale.to_px_y(-1.0 + i as f64 * 0.05)).collect();
    assert!(ys.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn empty_domain_does_not_divide_by_zero() {
    let cfg = PlotConfig { x_start: 1.0, x_end: 1.0, ..PlotConfig::default() };
    let b = Bounds::from_samples(&cfg, &sample(&cfg, |x| x));
    let scale = PlotScale::new(RectI32::from_ltrb(0, 0, 100, 100), b);
    assert!(scale.to_px_x(1.0).is_finite());
    assert!(scale.to_px_y(1.0).is_finite());
}
