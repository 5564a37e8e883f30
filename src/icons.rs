use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use crate::compose;
use crate::config::Config;
use crate::constants::icon;
use crate::gradient::{self, parse_hex_color};

fn gradient_stops(config: &Config) -> Result<[Rgba<u8>; 3]> {
    Ok([
        parse_hex_color(&config.brand.gradient[0])?,
        parse_hex_color(&config.brand.gradient[1])?,
        parse_hex_color(&config.brand.gradient[2])?,
    ])
}

fn load_artwork(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load brand artwork {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Generate both icon assets from the brand artwork:
/// `app_icon.png` (gradient + rounded clip) and
/// `app_icon_foreground.png` (transparent, safe-zone content).
pub fn generate(config: &Config, source: &Path) -> Result<()> {
    let artwork = load_artwork(source)?;

    fs::create_dir_all(&config.icon_dir)
        .with_context(|| format!("Failed to create {}", config.icon_dir.display()))?;

    let background = gradient::diagonal(icon::SIZE, gradient_stops(config)?);
    let app_icon = compose::app_icon(
        icon::SIZE,
        background,
        &artwork,
        config.brand.icon_content_scale,
        config.brand.corner_radius,
    );

    let icon_path = config.icon_dir.join("app_icon.png");
    app_icon
        .save(&icon_path)
        .with_context(|| format!("Failed to save {}", icon_path.display()))?;
    println!("✓ app_icon.png saved ({}x{})", icon::SIZE, icon::SIZE);

    let foreground =
        compose::adaptive_foreground(icon::SIZE, &artwork, config.brand.foreground_safe_zone);

    let foreground_path = config.icon_dir.join("app_icon_foreground.png");
    foreground
        .save(&foreground_path)
        .with_context(|| format!("Failed to save {}", foreground_path.display()))?;
    println!("✓ app_icon_foreground.png saved ({}x{})", icon::SIZE, icon::SIZE);

    Ok(())
}

/// Enhance the brand artwork in place: upscale, sharpen, boost contrast
/// and saturation. Better source pixels for the icon compositor.
pub fn upscale(source: &Path) -> Result<()> {
    let artwork = load_artwork(source)?;
    println!("Original: {}x{}", artwork.width(), artwork.height());

    let enhanced = crate::enhance::upscale_artwork(&artwork);
    enhanced
        .save(source)
        .with_context(|| format!("Failed to save {}", source.display()))?;

    println!(
        "✓ Upscaled: {}x{} -> {}",
        enhanced.width(),
        enhanced.height(),
        source.display()
    );

    Ok(())
}
