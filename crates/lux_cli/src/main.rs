//! Lux command line renderer.
//!
//! Builds the demo scene, renders it on the CPU path tracer, and writes
//! the result as PPM or PNG.

mod output;
mod scene;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use lux_math::Vec3;
use lux_renderer::{render, Camera, RenderConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Log levels accepted on the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "lux")]
#[command(about = "CPU Monte Carlo path tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "600")]
    width: u32,

    /// Image height in pixels (defaults to 16:9 for the given width)
    #[arg(long)]
    height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "10")]
    samples_per_pixel: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value = "50")]
    max_depth: u32,

    /// Number of render worker threads
    #[arg(long, short = 't', default_value = "16")]
    threads: usize,

    /// Base RNG seed; the same seed reproduces the same image
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Output file path (.ppm for text PPM, .png and friends via the
    /// image crate)
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let height = args
        .height
        .unwrap_or_else(|| (args.width as f32 / (16.0 / 9.0)) as u32);
    let aspect = args.width as f32 / height as f32;

    let camera = Camera::new(
        Vec3::new(-1.5, 0.6, 0.8),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        60.0,
        aspect,
        0.001,
        2.0,
    );

    let config = RenderConfig {
        width: args.width,
        height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        threads: args.threads,
        seed: args.seed,
        ambient_ior: 1.0,
    };

    let scene = Arc::new(scene::demo_scene());
    let image = render(&camera, scene, &config)?;

    output::write(&image, &args.output)?;
    info!("wrote {}", args.output.display());

    Ok(())
}
