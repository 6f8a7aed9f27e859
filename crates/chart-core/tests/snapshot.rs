// File: crates/chart-core/tests/snapshot.rs
// Purpose: Rendering the same chart twice yields identical pixels.

use chart_core::{Axis, Chart, RenderOptions, ViolinSeries};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.y_axis = Axis::new("Y", 0.0, 12.0);
    chart.add_series(ViolinSeries::new("a", vec![1.0, 2.0, 2.0, 3.0, 3.5, 4.0, 6.0, 9.0]));
    chart.add_series(ViolinSeries::new("b", vec![4.0, 5.0, 5.5, 6.0, 6.0, 6.5, 7.0, 11.0]));
    chart.add_series(ViolinSeries::new("c", vec![2.0, 2.2, 2.4, 2.6, 2.8, 3.0, 3.2, 3.4]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.dimensions(), b.dimensions());
    assert_eq!(a.as_raw(), b.as_raw());
}
