//! Offline face overlay alignment demo.

use anyhow::Result;
use clap::Parser;
use face_overlay::app::{AppConfig, OverlayApp};
use face_overlay::config::Config;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a sequence of detection results
    #[arg(short, long)]
    result: PathBuf,

    /// Overlay image (RGBA, transparent background)
    #[arg(short, long)]
    overlay: Option<PathBuf>,

    /// Base image to composite the overlay onto
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Output path for the composited image
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// Destination surface width (ignored when a base image is given)
    #[arg(long, default_value = "1080")]
    width: u32,

    /// Destination surface height (ignored when a base image is given)
    #[arg(long, default_value = "1920")]
    height: u32,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Overlay Alignment Demo");

    let alignment = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let config = AppConfig {
        result_path: args.result,
        overlay_path: args.overlay,
        base_image_path: args.base,
        output_path: args.output,
        surface_width: args.width,
        surface_height: args.height,
        alignment,
    };

    let mut app = OverlayApp::new(config)?;
    app.run()?;

    Ok(())
}
