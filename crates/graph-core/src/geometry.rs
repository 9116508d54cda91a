// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right.saturating_sub(self.left) }
    pub const fn height(&self) -> i32 { self.bottom.saturating_sub(self.top) }

    /// Shrink by `insets` on each side. Width/height go negative when the
    /// insets exceed the rectangle; callers check before drawing. Edges
    /// saturate at the `i32` range instead of wrapping.
    pub fn shrink(&self, insets: &Insets) -> Self {
        let px = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::from_ltrb(
            self.left.saturating_add(px(insets.left)),
            self.top.saturating_add(px(insets.top)),
            self.right.saturating_sub(px(insets.right)),
            self.bottom.saturating_sub(px(insets.bottom)),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left as f32 + self.width() as f32 / 2.0,
            self.top as f32 + self.height() as f32 / 2.0,
        )
    }
}

/// Pixel-space point; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_by_margin() {
        let client = RectI32::from_ltwh(0, 0, 800, 600);
        let area = client.shrink(&Insets::uniform(50));
        assert_eq!(area, RectI32::from_ltrb(50, 50, 750, 550));
        assert_eq!((area.width(), area.height()), (700, 500));
    }

    #[test]
    fn shrink_past_zero_goes_negative() {
        let area = RectI32::from_ltwh(0, 0, 40, 40).shrink(&Insets::uniform(50));
        assert_eq!(area.width(), -60);
        assert_eq!(area.height(), -60);
    }

    #[test]
    fn shrink_by_huge_insets_saturates() {
        let client = RectI32::from_ltwh(0, 0, 800, 600);
        let area = client.shrink(&Insets::uniform(u32::MAX));
        assert_eq!(area.left, i32::MAX);
        assert!(area.width() <= 0);
        assert!(area.height() <= 0);

        // wraps to a large positive width if the sums are cast naively
        let area = client.shrink(&Insets::uniform(1_500_000_000));
        assert!(area.width() < 0);
        assert!(area.height() < 0);
    }
}
