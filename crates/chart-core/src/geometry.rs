// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot area, crop bounds).

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
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    /// Grow by `pad` on every side.
    pub const fn outset(&self, pad: i32) -> Self {
        Self::from_ltrb(self.left - pad, self.top - pad, self.right + pad, self.bottom + pad)
    }

    /// Intersection with `other`; may be empty.
    pub fn intersect(&self, other: &RectI32) -> Self {
        Self::from_ltrb(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }
}
