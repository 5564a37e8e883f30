use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{gradient, icon};
use crate::gradient::parse_hex_color;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_source_image")]
    pub source_image: PathBuf,
    #[serde(default = "default_icon_dir")]
    pub icon_dir: PathBuf,
    #[serde(default = "default_chime_path")]
    pub chime_path: PathBuf,
    #[serde(default)]
    pub brand: BrandConfig,
}

fn default_source_image() -> PathBuf {
    PathBuf::from("brand.png")
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("assets/icons")
}

fn default_chime_path() -> PathBuf {
    PathBuf::from("android/app/src/main/res/raw/cute_notification.wav")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BrandConfig {
    /// Gradient stops as `#RRGGBB` strings, top-left to bottom-right
    #[serde(default = "default_gradient")]
    pub gradient: [String; 3],
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u32,
    #[serde(default = "default_icon_content_scale")]
    pub icon_content_scale: f32,
    #[serde(default = "default_foreground_safe_zone")]
    pub foreground_safe_zone: f32,
}

fn default_gradient() -> [String; 3] {
    [
        gradient::PINK.to_string(),
        gradient::PURPLE.to_string(),
        gradient::BLUE.to_string(),
    ]
}

fn default_corner_radius() -> u32 {
    icon::CORNER_RADIUS
}

fn default_icon_content_scale() -> f32 {
    icon::CONTENT_SCALE
}

fn default_foreground_safe_zone() -> f32 {
    icon::SAFE_ZONE
}

impl Default for BrandConfig {
    fn default() -> Self {
        BrandConfig {
            gradient: default_gradient(),
            corner_radius: default_corner_radius(),
            icon_content_scale: default_icon_content_scale(),
            foreground_safe_zone: default_foreground_safe_zone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_image: default_source_image(),
            icon_dir: default_icon_dir(),
            chime_path: default_chime_path(),
            brand: BrandConfig::default(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        PathBuf::from("asset-forge.yaml")
    }

    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = serde_yaml::from_str(&contents)
                .context("Failed to parse config file")?;

            // Validate configuration after loading
            config.validate()?;

            Ok(config)
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            println!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate gradient stops parse as hex colors
        for stop in &self.brand.gradient {
            parse_hex_color(stop)?;
        }

        // Validate corner radius fits on the canvas
        if self.brand.corner_radius > icon::SIZE / 2 {
            bail!("corner_radius must be <= {} (half the icon size)", icon::SIZE / 2);
        }

        // Validate content scale
        if self.brand.icon_content_scale <= 0.0 || self.brand.icon_content_scale > 1.0 {
            bail!("icon_content_scale must be in (0.0, 1.0]");
        }

        // Validate safe zone stays within the adaptive-icon band
        if self.brand.foreground_safe_zone < 0.5 || self.brand.foreground_safe_zone > 0.66 {
            bail!("foreground_safe_zone must be between 0.50 and 0.66");
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(Self::config_path(), yaml)
            .context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_output_paths() {
        let config = Config::default();
        assert_eq!(config.icon_dir, PathBuf::from("assets/icons"));
        assert_eq!(
            config.chime_path,
            PathBuf::from("android/app/src/main/res/raw/cute_notification.wav")
        );
    }

    #[test]
    fn test_rejects_bad_gradient_color() {
        let mut config = Config::default();
        config.brand.gradient[1] = "#NOTHEX".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_corner_radius() {
        let mut config = Config::default();
        config.brand.corner_radius = 600;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_band_safe_zone() {
        let mut config = Config::default();
        config.brand.foreground_safe_zone = 0.9;
        assert!(config.validate().is_err());

        config.brand.foreground_safe_zone = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_content_scale() {
        let mut config = Config::default();
        config.brand.icon_content_scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.brand.gradient, config.brand.gradient);
        assert_eq!(parsed.brand.corner_radius, config.brand.corner_radius);
        assert_eq!(parsed.source_image, config.source_image);
    }
}
