// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use skia_safe as skia;
use tracing::debug;

use crate::crop::auto_crop;
use crate::error::{RenderError, Result};
use crate::grid::{nice_ticks, tick_label};
use crate::scale::{BandScale, ValueScale};
use crate::series::{Violin, ViolinSeries, ViolinShape};
use crate::stats::Summary;
use crate::text::{HAlign, TextShaper, TextSpec};
use crate::types::{pt_to_px, Insets, HEIGHT, WIDTH};
use crate::{Axis, CategoryAxis, Theme};

/// Fraction of a category band the widest violin occupies.
pub const VIOLIN_WIDTH: f64 = 0.8;
/// Footnote offset below the plot area, as a fraction of plot height.
const FOOTNOTE_OFFSET: f32 = 0.12;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text (tick labels, titles); keeps pixel output font-independent.
    pub draw_labels: bool,
    /// Trim uniform background leaving this many pixels; `None` keeps the full canvas.
    pub crop_padding: Option<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::whitegrid(),
            draw_labels: true,
            crop_padding: Some(6), // 0.1 in at 64 DPI
        }
    }
}

pub struct Chart {
    pub series: Vec<ViolinSeries>,
    pub x_axis: CategoryAxis,
    pub y_axis: Axis,
    pub title: String,
    pub footnote: Option<String>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: CategoryAxis::default(),
            y_axis: Axis::default_y(),
            title: String::new(),
            footnote: None,
        }
    }

    pub fn add_series(&mut self, series: ViolinSeries) {
        self.series.push(series);
    }

    /// Total number of samples across all series.
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(ViolinSeries::len).sum()
    }

    /// Reject charts with nothing to plot.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(RenderError::EmptyChart);
        }
        if let Some(s) = self.series.iter().find(|s| s.is_empty()) {
            return Err(RenderError::EmptySeries { label: s.label.clone() });
        }
        Ok(())
    }

    /// Render the full canvas and return `(rgba_pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.validate()?;
        let (w, h) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Render, crop (when enabled) and encode as an RGB PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let mut img = RgbaImage::from_raw(w, h, px).ok_or(RenderError::ReadPixels)?;
        if let Some(pad) = opts.crop_padding {
            let bg = opts.theme.background;
            img = auto_crop(&img, Rgba([bg.r(), bg.g(), bg.b(), bg.a()]), pad);
        }
        debug!(width = img.width(), height = img.height(), "encoding png");

        let rgb = DynamicImage::ImageRgba8(img).to_rgb8();
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(rgb).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source: std::io::Error| RenderError::Io { path: path.display().to_string(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, &bytes).map_err(io_err)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Plot rect
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let r = (opts.width - opts.insets.right as i32) as f32;
        let b = (opts.height - opts.insets.bottom as i32) as f32;
        debug!(
            plot_w = opts.width - opts.insets.hsum() as i32,
            plot_h = opts.height - opts.insets.vsum() as i32,
            series = self.series.len(),
            "plot area"
        );

        let ys = ValueScale::new_linear(t, b, self.y_axis.min, self.y_axis.max);
        let xs = BandScale::new(l, r, self.series.len());
        let ticks = nice_ticks(ys.vmin, ys.vmax, 8);

        draw_grid(canvas, theme, &ys, &ticks, l, r);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
        draw_violins(canvas, theme, &self.series, &xs, &ys);
        canvas.restore();

        draw_frame(canvas, theme, l, t, r, b);

        if opts.draw_labels {
            self.draw_labels(canvas, theme, &xs, &ys, &ticks, (l, t, r, b));
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        theme: &Theme,
        xs: &BandScale,
        ys: &ValueScale,
        ticks: &[f64],
        (l, t, r, b): (f32, f32, f32, f32),
    ) {
        let shaper = TextShaper::new();
        let tick_spec = TextSpec::new(pt_to_px(16.5), theme.tick_label);
        let label_spec = TextSpec::new(pt_to_px(18.0), theme.axis_label);
        let title_spec = TextSpec::new(pt_to_px(18.0), theme.axis_label).bold();
        let note_spec = TextSpec::new(pt_to_px(10.0), theme.axis_label);
        let gap = pt_to_px(7.0);

        // Y tick labels, right-aligned against the frame
        let mut tick_w: f32 = 0.0;
        for &v in ticks {
            let text = tick_label(v);
            tick_w = tick_w.max(shaper.measure(&text, &tick_spec).0);
            shaper.draw_mid(canvas, &text, l - gap, ys.to_px(v), HAlign::Right, &tick_spec);
        }

        // Category labels under each band
        let mut tick_h: f32 = 0.0;
        for (i, s) in self.series.iter().enumerate() {
            tick_h = tick_h.max(shaper.measure(&s.label, &tick_spec).1);
            shaper.draw(canvas, &s.label, xs.center_px(i), b + gap, HAlign::Center, &tick_spec);
        }

        let cx = (l + r) * 0.5;
        let x_label_top = b + gap + tick_h + gap * 0.5;
        let (_, x_label_h) = shaper.measure(&self.x_axis.label, &label_spec);
        shaper.draw(canvas, &self.x_axis.label, cx, x_label_top, HAlign::Center, &label_spec);

        let (_, y_label_h) = shaper.measure(&self.y_axis.label, &label_spec);
        let y_label_cx = l - gap - tick_w - gap * 0.5 - y_label_h * 0.5;
        shaper.draw_vertical(canvas, &self.y_axis.label, y_label_cx, (t + b) * 0.5, &label_spec);

        if !self.title.is_empty() {
            let (_, title_h) = shaper.measure(&self.title, &title_spec);
            let top = t - pt_to_px(14.0) - title_h;
            shaper.draw(canvas, &self.title, cx, top, HAlign::Center, &title_spec);
        }

        if let Some(note) = &self.footnote {
            let top = (b + FOOTNOTE_OFFSET * (b - t)).max(x_label_top + x_label_h + gap * 0.5);
            shaper.draw(canvas, note, cx, top, HAlign::Center, &note_spec);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, ys: &ValueScale, ticks: &[f64], l: f32, r: f32) {
    let paint = stroke_paint(theme.grid, pt_to_px(1.5));
    for &v in ticks.iter().filter(|v| ys.contains(**v)) {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let paint = stroke_paint(theme.frame, pt_to_px(1.875));
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
}

fn draw_violins(canvas: &skia::Canvas, theme: &Theme, series: &[ViolinSeries], xs: &BandScale, ys: &ValueScale) {
    let violins: Vec<Option<Violin>> = series.iter().map(ViolinSeries::violin).collect();
    // "area" scaling: one peak shared by all violins
    let peak = violins.iter().flatten().map(|v| v.shape.peak()).fold(0.0, f64::max);
    let half_max = xs.band_px() as f64 * VIOLIN_WIDTH * 0.5;
    let half_width = |d: f64| if peak > 0.0 { (d / peak * half_max) as f32 } else { 0.0 };

    let edge = stroke_paint(theme.violin_edge, pt_to_px(1.0));
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, violin) in violins.iter().enumerate() {
        let Some(Violin { shape, summary }) = violin else { continue };
        let cx = xs.center_px(i);

        match shape {
            ViolinShape::Flat(v) => {
                let y = ys.to_px(*v);
                let hw = half_max as f32;
                canvas.draw_line((cx - hw, y), (cx + hw, y), &edge);
            }
            ViolinShape::Density(curve) => {
                let mut path = skia::Path::new();
                let (v0, d0) = curve[0];
                path.move_to((cx + half_width(d0), ys.to_px(v0)));
                for &(v, d) in curve.iter().skip(1) {
                    path.line_to((cx + half_width(d), ys.to_px(v)));
                }
                for &(v, d) in curve.iter().rev() {
                    path.line_to((cx - half_width(d), ys.to_px(v)));
                }
                path.close();

                fill.set_color(theme.fill(i));
                canvas.draw_path(&path, &fill);
                canvas.draw_path(&path, &edge);

                draw_quartiles(canvas, theme, shape, summary, cx, ys, &half_width);
            }
        }
    }
}

fn draw_quartiles(
    canvas: &skia::Canvas,
    theme: &Theme,
    shape: &ViolinShape,
    sum: &Summary,
    cx: f32,
    ys: &ValueScale,
    half_width: &dyn Fn(f64) -> f32,
) {
    let lw = pt_to_px(1.0);
    for (q, dash) in [(sum.q1, lw * 1.5), (sum.median, lw * 3.0), (sum.q3, lw * 1.5)] {
        let mut paint = stroke_paint(theme.violin_edge, lw);
        paint.set_path_effect(skia::PathEffect::dash(&[dash, dash], 0.0));
        let hw = half_width(shape.density_at(q));
        let y = ys.to_px(q);
        canvas.draw_line((cx - hw, y), (cx + hw, y), &paint);
    }
}
