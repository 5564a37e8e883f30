use anyhow::{Result, bail};
use image::{Rgba, RgbaImage};

/// Parse a `#RRGGBB` hex string into an opaque RGBA color
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("invalid hex color '{}', expected #RRGGBB", hex);
    }

    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;

    Ok(Rgba([r, g, b, 255]))
}

// Per-channel linear interpolation, truncated to u8
fn lerp(from: Rgba<u8>, to: Rgba<u8>, t: f32) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for i in 0..3 {
        out[i] = (from[i] as f32 + (to[i] as f32 - from[i] as f32) * t) as u8;
    }
    out[3] = 255;
    Rgba(out)
}

/// Render a square diagonal gradient through three color stops.
///
/// Progress along the diagonal is `t = (x + y) / (2 * size)`. The first half
/// of the diagonal interpolates `stops[0] -> stops[1]`, the second half
/// `stops[1] -> stops[2]`, so the top-left corner is the first stop, the
/// center sits on the middle stop and the bottom-right approaches the last.
pub fn diagonal(size: u32, stops: [Rgba<u8>; 3]) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);

    for y in 0..size {
        for x in 0..size {
            let t = (x + y) as f32 / (2 * size) as f32;
            let color = if t < 0.5 {
                lerp(stops[0], stops[1], t * 2.0)
            } else {
                lerp(stops[1], stops[2], (t - 0.5) * 2.0)
            };
            img.put_pixel(x, y, color);
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFB3C6").unwrap(), Rgba([255, 179, 198, 255]));
        assert_eq!(parse_hex_color("8BD3E6").unwrap(), Rgba([139, 211, 230, 255]));
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("#FFB3C6A0").is_err());
    }

    #[test]
    fn test_gradient_corners_match_stops() {
        let pink = Rgba([255, 179, 198, 255]);
        let purple = Rgba([179, 136, 235, 255]);
        let blue = Rgba([139, 211, 230, 255]);
        let img = diagonal(256, [pink, purple, blue]);

        // Top-left is exactly the first stop (t = 0)
        assert_eq!(*img.get_pixel(0, 0), pink);

        // Bottom-right approaches the last stop (t just under 1)
        let corner = img.get_pixel(255, 255);
        for i in 0..3 {
            assert!((corner[i] as i32 - blue[i] as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_gradient_center_is_middle_stop() {
        let pink = Rgba([255, 179, 198, 255]);
        let purple = Rgba([179, 136, 235, 255]);
        let blue = Rgba([139, 211, 230, 255]);
        let img = diagonal(256, [pink, purple, blue]);

        // (x + y) = size puts the diagonal midpoint on the middle stop
        let center = img.get_pixel(128, 128);
        for i in 0..3 {
            assert!((center[i] as i32 - purple[i] as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_gradient_fully_opaque() {
        let img = diagonal(
            64,
            [
                Rgba([255, 179, 198, 255]),
                Rgba([179, 136, 235, 255]),
                Rgba([139, 211, 230, 255]),
            ],
        );
        assert!(img.pixels().all(|p| p[3] == 255));
    }
}
