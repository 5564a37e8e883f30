use image::{GrayImage, Luma, RgbaImage};

/// Build a full-canvas rounded-rectangle mask: 255 inside, 0 outside.
///
/// A pixel in one of the four corner squares is inside only if it falls
/// within the corner circle of the given radius; everything else on the
/// canvas is inside.
pub fn rounded_rect(size: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let r = radius as f32;
    let max = (size - 1) as f32;

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32;
            let fy = y as f32;

            // Nearest corner-circle center, or None when outside every corner square
            let center = match (fx < r, fy < r, fx > max - r, fy > max - r) {
                (true, true, _, _) => Some((r, r)),
                (_, true, true, _) => Some((max - r, r)),
                (true, _, _, true) => Some((r, max - r)),
                (_, _, true, true) => Some((max - r, max - r)),
                _ => None,
            };

            let inside = match center {
                Some((cx, cy)) => {
                    let dx = fx - cx;
                    let dy = fy - cy;
                    dx * dx + dy * dy <= r * r
                }
                None => true,
            };

            mask.put_pixel(x, y, Luma([if inside { 255 } else { 0 }]));
        }
    }

    mask
}

/// Clip an RGBA image by a mask, scaling each pixel's alpha by mask/255.
/// With a hard-edged mask this selects between the image and transparency.
pub fn apply(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let m = mask.get_pixel(x, y)[0] as u16;
        pixel[3] = ((pixel[3] as u16 * m) / 255) as u8;
    }
}
