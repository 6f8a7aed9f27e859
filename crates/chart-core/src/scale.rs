// File: crates/chart-core/src/scale.rs
// Summary: Category (X) band scale and Value (Y) linear scale transforms.

/// Value Y coordinate (e.g., response minutes).
pub type Value = f64;

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    /// True when `y` lies inside the visible range.
    #[inline]
    pub fn contains(&self, y: Value) -> bool {
        y >= self.vmin && y <= self.vmax
    }
}

/// Horizontal categorical scale: `count` equal bands across [left, right].
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count: count.max(1) }
    }
    /// Width of one category band in pixels.
    #[inline]
    pub fn band_px(&self) -> f32 {
        (self.right_px - self.left_px) / self.count as f32
    }
    /// Horizontal center of band `i`.
    #[inline]
    pub fn center_px(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.band_px()
    }
}
