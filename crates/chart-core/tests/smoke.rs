// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, CategoryAxis, Chart, RenderOptions, ViolinSeries};

fn small_chart() -> Chart {
    let mut chart = Chart::new();
    chart.title = "Smoke".into();
    chart.x_axis = CategoryAxis::new("Group");
    chart.y_axis = Axis::new("Value", 0.0, 10.0);
    chart.add_series(ViolinSeries::new("a", vec![1.0, 2.0, 2.5, 3.0, 4.0, 6.0]));
    chart.add_series(ViolinSeries::new("b", vec![5.0, 5.5, 6.0, 7.5, 8.0, 9.5]));
    chart.footnote = Some(format!("n = {}", chart.sample_count()));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rerender_overwrites_existing_file() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/overwrite.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"stale").unwrap();

    chart.render_to_png(&opts, &out).expect("first render");
    chart.render_to_png(&opts, &out).expect("second render");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn cropped_png_is_rgb_and_not_larger_than_canvas() {
    let chart = small_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert!(img.width() <= 512 && img.height() <= 512);
    // grid and frame span the plot area, so the crop cannot collapse
    assert!(img.width() > 256 && img.height() > 256);
}

#[test]
fn crop_can_be_disabled() {
    let chart = small_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.crop_padding = None;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (512, 512));
}
