// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, paddings).

/// Figure edge length in inches (square figure).
pub const FIGURE_INCHES: f32 = 8.0;
/// Rendering density in dots per inch.
pub const DPI: f32 = 64.0;
/// Default surface width in pixels (8 in at 64 DPI).
pub const WIDTH: i32 = 512;
/// Default surface height in pixels (8 in at 64 DPI).
pub const HEIGHT: i32 = 512;

/// Convert typographic points to pixels at [`DPI`].
#[inline]
pub fn pt_to_px(pt: f32) -> f32 {
    pt * DPI / 72.0
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for the y label and tick labels on the left, title on top,
    /// and tick labels, x label and footnote below.
    fn default() -> Self {
        Self::new(80, 24, 52, 80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_is_512_square() {
        assert_eq!((FIGURE_INCHES * DPI) as i32, WIDTH);
        assert_eq!((FIGURE_INCHES * DPI) as i32, HEIGHT);
    }

    #[test]
    fn insets_leave_a_plot_area() {
        let i = Insets::default();
        assert!((i.hsum() as i32) < WIDTH / 2);
        assert!((i.vsum() as i32) < HEIGHT / 2);
        assert!((pt_to_px(72.0) - DPI).abs() < 1e-6);
    }
}
