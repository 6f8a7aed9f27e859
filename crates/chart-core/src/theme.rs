// File: crates/chart-core/src/theme.rs
// Summary: Light "whitegrid" theming with a qualitative fill palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub violin_edge: skia::Color,
    /// Fill colors, cycled per violin.
    pub palette: [skia::Color; 8],
}

impl Theme {
    /// White background, light grey grid and frame, "Set2" fills.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 204, 204, 204),
            frame: skia::Color::from_argb(255, 204, 204, 204),
            axis_label: skia::Color::from_argb(255, 38, 38, 38),
            tick_label: skia::Color::from_argb(255, 38, 38, 38),
            violin_edge: skia::Color::from_argb(255, 64, 64, 64),
            palette: [
                skia::Color::from_argb(255, 0x66, 0xc2, 0xa5),
                skia::Color::from_argb(255, 0xfc, 0x8d, 0x62),
                skia::Color::from_argb(255, 0x8d, 0xa0, 0xcb),
                skia::Color::from_argb(255, 0xe7, 0x8a, 0xc3),
                skia::Color::from_argb(255, 0xa6, 0xd8, 0x54),
                skia::Color::from_argb(255, 0xff, 0xd9, 0x2f),
                skia::Color::from_argb(255, 0xe5, 0xc4, 0x94),
                skia::Color::from_argb(255, 0xb3, 0xb3, 0xb3),
            ],
        }
    }

    /// Fill color for the `i`-th group.
    pub fn fill(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::whitegrid()
    }
}
