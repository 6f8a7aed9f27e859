// File: crates/chart-core/src/crop.rs
// Summary: Tight bounding-box crop of a rendered RGBA buffer (background trimmed, padding kept).

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::geometry::RectI32;

/// Bounding box of all pixels that differ from `background`, or `None` if
/// the buffer is uniformly background.
pub fn content_bounds(img: &RgbaImage, background: Rgba<u8>) -> Option<RectI32> {
    let (w, h) = img.dimensions();
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut any = false;
    for (x, y, px) in img.enumerate_pixels() {
        if *px != background {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
            any = true;
        }
    }
    if !any || w == 0 || h == 0 {
        return None;
    }
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32 + 1, bottom as i32 + 1))
}

/// Crop to content bounds grown by `pad` pixels, never beyond the source.
/// A blank image is returned unchanged.
pub fn auto_crop(img: &RgbaImage, background: Rgba<u8>, pad: u32) -> RgbaImage {
    let canvas = RectI32::from_ltwh(0, 0, img.width() as i32, img.height() as i32);
    let Some(content) = content_bounds(img, background) else {
        return img.clone();
    };
    let r = content.outset(pad as i32).intersect(&canvas);
    if r.is_empty() {
        return img.clone();
    }
    debug!(left = r.left, top = r.top, width = r.width(), height = r.height(), "auto-crop");
    image::imageops::crop_imm(img, r.left as u32, r.top as u32, r.width() as u32, r.height() as u32).to_image()
}
