// File: crates/graph-core/src/grid.rs
// Summary: Simple grid/tick value helpers.

use crate::types::{DOMAIN_EPS, MAX_SAMPLES};

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 { return vec![start, end]; }
    let intervals = (count - 1) as f64;
    (0..count).map(|i| start + (end - start) * i as f64 / intervals).collect()
}

/// `start, start + step, ...` up to and including `end` (with [`DOMAIN_EPS`] slack).
/// At most `MAX_SAMPLES + 1` values.
pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !start.is_finite() || !end.is_finite() {
        return vec![start];
    }
    let mut out = Vec::new();
    for k in 0..=MAX_SAMPLES {
        let v = start + k as f64 * step;
        if v > end + DOMAIN_EPS { break; }
        out.push(v);
    }
    if out.is_empty() { out.push(start); }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(-1.0, 1.0, 6);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], -1.0);
        assert_eq!(v[5], 1.0);
        assert!((v[1] - -0.6).abs() < 1e-12);
    }

    #[test]
    fn stepped_includes_end_within_tolerance() {
        let v = stepped(0.0, 1.0, 0.25);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn stepped_degenerate_inputs() {
        assert_eq!(stepped(3.0, 1.0, 0.5), vec![3.0]);
        assert_eq!(stepped(0.0, 1.0, 0.0), vec![0.0]);
        assert_eq!(stepped(0.0, 1.0, -1.0), vec![0.0]);
    }

    #[test]
    fn stepped_stops_at_the_sample_cap() {
        let v = stepped(0.0, 1.0, 1e-300);
        assert_eq!(v.len(), MAX_SAMPLES + 1);
        assert_eq!(v[0], 0.0);
    }
}
