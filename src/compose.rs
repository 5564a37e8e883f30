use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::mask;

/// Uniformly scale (w, h) to fit inside a box_dim square, truncating the
/// scaled dimensions. Returns the resized dimensions.
pub fn fit_dimensions(w: u32, h: u32, box_dim: u32) -> (u32, u32) {
    let scale = (box_dim as f32 / w as f32).min(box_dim as f32 / h as f32);
    ((w as f32 * scale) as u32, (h as f32 * scale) as u32)
}

// Lanczos resize into the box, then alpha-composite centered on the canvas
fn paste_centered(canvas: &mut RgbaImage, artwork: &RgbaImage, box_dim: u32) {
    let (w, h) = artwork.dimensions();
    let (new_w, new_h) = fit_dimensions(w, h, box_dim);
    let resized = imageops::resize(artwork, new_w, new_h, FilterType::Lanczos3);

    let x = (canvas.width() - new_w) / 2;
    let y = (canvas.height() - new_h) / 2;
    imageops::overlay(canvas, &resized, x as i64, y as i64);
}

/// Compose the app icon: gradient background, brand artwork centered at
/// `content_scale` of the canvas, rounded-rect clip.
pub fn app_icon(
    size: u32,
    gradient: RgbaImage,
    artwork: &RgbaImage,
    content_scale: f32,
    corner_radius: u32,
) -> RgbaImage {
    let mut icon = gradient;
    paste_centered(&mut icon, artwork, (size as f32 * content_scale) as u32);

    let clip = mask::rounded_rect(size, corner_radius);
    mask::apply(&mut icon, &clip);

    icon
}

/// Compose the adaptive-icon foreground: transparent canvas with the brand
/// artwork scaled into the safe zone.
pub fn adaptive_foreground(size: u32, artwork: &RgbaImage, safe_zone: f32) -> RgbaImage {
    let mut foreground = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    paste_centered(&mut foreground, artwork, (size as f32 * safe_zone) as u32);
    foreground
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient;

    fn solid_artwork(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 40, 90, 255]))
    }

    fn test_gradient(size: u32) -> RgbaImage {
        gradient::diagonal(
            size,
            [
                Rgba([255, 179, 198, 255]),
                Rgba([179, 136, 235, 255]),
                Rgba([139, 211, 230, 255]),
            ],
        )
    }

    #[test]
    fn test_fit_dimensions_landscape() {
        // 2:1 source into a 100 box scales by height of the box
        assert_eq!(fit_dimensions(200, 100, 100), (100, 50));
    }

    #[test]
    fn test_fit_dimensions_portrait() {
        assert_eq!(fit_dimensions(100, 400, 100), (25, 100));
    }

    #[test]
    fn test_fit_dimensions_upscales_small_source() {
        assert_eq!(fit_dimensions(10, 20, 100), (50, 100));
    }

    #[test]
    fn test_fit_dimensions_never_exceeds_box() {
        for &(w, h) in &[(1u32, 999u32), (999, 1), (333, 333), (7, 5)] {
            let (nw, nh) = fit_dimensions(w, h, 100);
            assert!(nw <= 100 && nh <= 100, "{}x{} -> {}x{}", w, h, nw, nh);
        }
    }

    #[test]
    fn test_app_icon_dimensions_and_clip() {
        let size = 128;
        let icon = app_icon(size, test_gradient(size), &solid_artwork(64, 64), 0.68, 24);

        assert_eq!(icon.dimensions(), (size, size));
        // Clipped corners are transparent, center is opaque
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(size / 2, size / 2)[3], 255);
    }

    #[test]
    fn test_app_icon_artwork_over_gradient() {
        let size = 128;
        let icon = app_icon(size, test_gradient(size), &solid_artwork(64, 64), 0.68, 24);

        // Center pixel comes from the artwork, not the gradient
        assert_eq!(icon.get_pixel(size / 2, size / 2)[0], 200);
        // Top edge midpoint is still gradient (artwork covers only 68%)
        let edge = icon.get_pixel(size / 2, 0);
        assert_ne!(edge[0], 200);
        assert_eq!(edge[3], 255);
    }

    #[test]
    fn test_foreground_background_is_transparent() {
        let size = 128;
        let fg = adaptive_foreground(size, &solid_artwork(64, 64), 0.58);

        assert_eq!(fg.dimensions(), (size, size));
        assert_eq!(fg.get_pixel(0, 0)[3], 0);
        assert_eq!(fg.get_pixel(size - 1, size - 1)[3], 0);
        assert_eq!(fg.get_pixel(size / 2, size / 2)[3], 255);
    }

    #[test]
    fn test_foreground_content_stays_in_safe_zone() {
        let size = 128;
        let safe_zone = 0.58;
        let fg = adaptive_foreground(size, &solid_artwork(300, 300), safe_zone);

        let box_dim = (size as f32 * safe_zone) as u32;
        let margin = (size - box_dim) / 2;

        // Everything outside the centered safe-zone box is transparent
        for (x, y, pixel) in fg.enumerate_pixels() {
            let in_box = x >= margin && x < margin + box_dim && y >= margin && y < margin + box_dim;
            if !in_box {
                assert_eq!(pixel[3], 0, "opaque pixel outside safe zone at ({}, {})", x, y);
            }
        }
    }
}
