use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::constants::upscale;

// Rec. 601 luma, the weighting PIL uses for its grayscale degenerate
fn luma(r: u8, g: u8, b: u8) -> f32 {
    r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114
}

fn clamp_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Lanczos-resize so the longest side is `target`, preserving aspect ratio
pub fn resize_long_side(img: &RgbaImage, target: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let scale = target as f32 / w.max(h) as f32;
    let new_w = (w as f32 * scale) as u32;
    let new_h = (h as f32 * scale) as u32;
    imageops::resize(img, new_w, new_h, FilterType::Lanczos3)
}

/// Blend every channel away from the image's mean luma. Factor 1.0 is a
/// no-op, above 1.0 increases contrast. Alpha is untouched.
pub fn adjust_contrast(img: &RgbaImage, factor: f32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let sum: f64 = img.pixels().map(|p| luma(p[0], p[1], p[2]) as f64).sum();
    let mean = (sum / (w as f64 * h as f64)) as f32;

    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        for i in 0..3 {
            pixel[i] = clamp_channel(mean + (pixel[i] as f32 - mean) * factor);
        }
    }
    out
}

/// Blend every channel away from the pixel's own luma. Factor 1.0 is a
/// no-op, 0.0 is grayscale, above 1.0 boosts saturation. Alpha is untouched.
pub fn adjust_saturation(img: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let gray = luma(pixel[0], pixel[1], pixel[2]);
        for i in 0..3 {
            pixel[i] = clamp_channel(gray + (pixel[i] as f32 - gray) * factor);
        }
    }
    out
}

/// Full enhancement pass for the brand artwork: upscale to 2048 on the
/// longest side, sharpen, then mild contrast and saturation boosts.
pub fn upscale_artwork(img: &RgbaImage) -> RgbaImage {
    let resized = resize_long_side(img, upscale::TARGET_LONG_SIDE);
    let sharpened = imageops::unsharpen(&resized, upscale::UNSHARP_SIGMA, upscale::UNSHARP_THRESHOLD);
    let contrasted = adjust_contrast(&sharpened, upscale::CONTRAST_FACTOR);
    adjust_saturation(&contrasted, upscale::SATURATION_FACTOR)
}
