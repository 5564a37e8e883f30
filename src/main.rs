mod chime;
mod compose;
mod config;
mod constants;
mod enhance;
mod gradient;
mod icons;
mod mask;
mod synth;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;

#[derive(Parser)]
#[command(name = "asset-forge")]
#[command(about = "Generate the app's static build assets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the app icon and the adaptive-icon foreground
    Icons {
        /// Brand artwork to composite. Defaults to source_image from asset-forge.yaml
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Synthesize the notification chime WAV
    Chime,
    /// Enhance the brand artwork in place (upscale, sharpen, boost color)
    Upscale {
        /// Image to enhance. Defaults to source_image from asset-forge.yaml
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Run the whole pipeline: upscale, then icons, then chime
    All {
        /// Brand artwork to use. Defaults to source_image from asset-forge.yaml
        #[arg(long)]
        source: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_create()?;

    match cli.command {
        Some(Commands::Icons { source }) => {
            let source = source.unwrap_or_else(|| config.source_image.clone());
            icons::generate(&config, &source)?;
        }
        Some(Commands::Chime) => {
            chime::generate(&config.chime_path)?;
        }
        Some(Commands::Upscale { source }) => {
            let source = source.unwrap_or_else(|| config.source_image.clone());
            icons::upscale(&source)?;
        }
        Some(Commands::All { source }) => {
            run_all(&config, source)?;
        }
        None => {
            run_all(&config, None)?;
        }
    }

    Ok(())
}

fn run_all(config: &Config, source: Option<PathBuf>) -> Result<()> {
    let source = source.unwrap_or_else(|| config.source_image.clone());

    icons::upscale(&source)?;
    icons::generate(config, &source)?;
    chime::generate(&config.chime_path)?;

    println!("\nDone! All assets are ready.");
    Ok(())
}
