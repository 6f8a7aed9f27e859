// File: crates/chart-core/tests/violins.rs
// Purpose: Violin layout in rendered pixels: shared-peak width scaling and quartile lines.

use chart_core::chart::VIOLIN_WIDTH;
use chart_core::scale::{BandScale, ValueScale};
use chart_core::{Axis, Chart, RenderOptions, ViolinSeries, ViolinShape};

struct Frame {
    px: Vec<u8>,
    stride: usize,
    xs: BandScale,
    ys: ValueScale,
}

impl Frame {
    /// R+G+B at `(x, y)`.
    fn sum(&self, x: i32, y: i32) -> u32 {
        let i = y as usize * self.stride + x as usize * 4;
        self.px[i..i + 3].iter().map(|&c| c as u32).sum()
    }
}

fn render(chart: &Chart) -> Frame {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let ins = opts.insets;
    let xs = BandScale::new(ins.left as f32, w as f32 - ins.right as f32, chart.series.len());
    let ys = ValueScale::new_linear(ins.top as f32, h as f32 - ins.bottom as f32, chart.y_axis.min, chart.y_axis.max);
    Frame { px, stride, xs, ys }
}

/// Horizontal extent of violin paint (fill, outline, quartile dashes) in `band` on row `y`.
/// White background and the light grey grid/frame do not count.
fn painted_width(f: &Frame, band: usize, y: i32) -> i32 {
    let half = f.xs.band_px() * 0.5;
    let cx = f.xs.center_px(band);
    let hits: Vec<i32> = ((cx - half) as i32..(cx + half) as i32).filter(|&x| f.sum(x, y) < 580).collect();
    match (hits.first(), hits.last()) {
        (Some(a), Some(b)) => b - a + 1,
        _ => 0,
    }
}

/// Value with the highest density in the series' outline.
fn densest_value(s: &ViolinSeries) -> f64 {
    let ViolinShape::Density(curve) = s.violin().expect("violin").shape else { panic!("expected density") };
    curve.iter().fold((0.0, f64::MIN), |best, &(v, d)| if d > best.1 { (v, d) } else { best }).0
}

/// Evenly spaced quantiles of a triangular distribution on [-1, 1].
fn triangular(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let p = (i as f64 + 0.5) / n as f64;
            if p < 0.5 { -1.0 + (2.0 * p).sqrt() } else { 1.0 - (2.0 * (1.0 - p)).sqrt() }
        })
        .collect()
}

#[test]
fn widest_violin_fills_band_fraction_and_others_share_its_peak() {
    // Same shape, three times the spread: density peak is one third.
    let t = triangular(120);
    let tight = ViolinSeries::new("tight", t.iter().map(|o| 50.0 + 10.0 * o).collect());
    let loose = ViolinSeries::new("loose", t.iter().map(|o| 50.0 + 30.0 * o).collect());

    let mut chart = Chart::new();
    chart.y_axis = Axis::new("Y", 0.0, 120.0);
    chart.add_series(tight.clone());
    chart.add_series(loose.clone());
    let f = render(&chart);

    let y_tight = f.ys.to_px(densest_value(&tight)).round() as i32;
    let w_tight = painted_width(&f, 0, y_tight) as f32;
    let want = f.xs.band_px() * VIOLIN_WIDTH as f32;
    assert!((w_tight - want).abs() <= 6.0, "widest violin {w_tight}px, expected ~{want}px");

    let y_loose = f.ys.to_px(densest_value(&loose)).round() as i32;
    let w_loose = painted_width(&f, 1, y_loose) as f32;
    assert!(w_loose < w_tight * 0.5, "loose {w_loose}px should be thinner than tight {w_tight}px");
    assert!((w_loose - w_tight / 3.0).abs() <= 6.0, "loose {w_loose}px, expected ~{}px", w_tight / 3.0);
}

#[test]
fn quartile_lines_sit_at_q1_median_q3() {
    // Roughly uniform over 20..100 so the violin is wide at every quartile.
    let values: Vec<f64> = (0..200).map(|i| 20.0 + i as f64 * 0.4).collect();
    let series = ViolinSeries::new("u", values);
    let summary = series.summary().expect("summary");

    let mut chart = Chart::new();
    chart.y_axis = Axis::new("Y", 0.0, 120.0);
    chart.add_series(series);
    let f = render(&chart);
    let cx = f.xs.center_px(0) as i32;

    // Edge color blended into the fill is well below the fill's own R+G+B.
    let dark_near_row = |value: f64| -> usize {
        let y = f.ys.to_px(value).round() as i32;
        (y - 1..=y + 1)
            .flat_map(|yy| (cx - 100..=cx + 100).map(move |x| (x, yy)))
            .filter(|&(x, yy)| f.sum(x, yy) < 400)
            .count()
    };

    for (name, q) in [("q1", summary.q1), ("median", summary.median), ("q3", summary.q3)] {
        let n = dark_near_row(q);
        assert!(n >= 20, "{name} at {q}: only {n} dark pixels");
    }

    // Between Q1 and the median the body is plain fill.
    let between = (summary.q1 + summary.median) * 0.5;
    assert_eq!(dark_near_row(between), 0, "unexpected line at {between}");
}
