//! Glitch Demo: command-line host for the bubble effects engine.
//!
//! Loads an image, renders one frame (around a cursor position or over the
//! whole image) or replays a recorded cursor trace, and writes the result.

mod config;
mod error;
mod image_loader;
mod replay;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glitch_core::{EffectKind, EngineConfig, FrameOutcome, GlitchEngine};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Apply a bubble-masked glitch effect to an image.
#[derive(Parser, Debug)]
#[command(name = "glitch-demo", version, about)]
struct Cli {
    /// Source image (any format the `image` crate decodes).
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output image. With --trace, frames are written as numbered siblings.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Effect name (`pixel-sort`, `SWIRL`, ...) or numeric id.
    #[arg(short, long, default_value = "invert")]
    effect: EffectKind,

    /// Cursor x; defaults to the image center.
    #[arg(short, long, allow_negative_numbers = true)]
    x: Option<i32>,

    /// Cursor y; defaults to the image center.
    #[arg(short, long, allow_negative_numbers = true)]
    y: Option<i32>,

    /// Bubble radius in pixels [env: GLITCH_RADIUS].
    #[arg(short, long)]
    radius: Option<i32>,

    /// Effect strength, nominally 0-100 [env: GLITCH_INTENSITY].
    #[arg(long, allow_negative_numbers = true)]
    intensity: Option<f32>,

    /// Apply the effect to the whole image instead of a bubble.
    #[arg(long, conflicts_with = "trace")]
    full: bool,

    /// Seed for jitter, scanline and noise [env: GLITCH_SEED].
    #[arg(long)]
    seed: Option<u64>,

    /// JSON array of frame requests to replay.
    #[arg(long, value_name = "JSON")]
    trace: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("GLITCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let config = DemoConfig::default()
        .with_overrides(cli.seed, cli.radius, cli.intensity);

    let image = image_loader::load_image(&cli.input)?;
    let (width, height) = (image.width, image.height);
    tracing::info!("loaded {} ({width}x{height})", cli.input.display());

    let mut engine = GlitchEngine::with_config(EngineConfig {
        seed: config.seed,
        ..EngineConfig::default()
    });
    engine.load_image(width, height, image.pixels)?;

    if let Some(trace) = &cli.trace {
        let requests = replay::load_trace(trace)?;
        let written = replay::replay(&mut engine, &requests, &cli.output)?;
        tracing::info!("replayed {written} frames from {}", trace.display());
        return Ok(());
    }

    let outcome = if cli.full {
        engine.render_full_frame(cli.effect.id(), config.intensity)
    } else {
        let x = cli.x.unwrap_or((width / 2) as i32);
        let y = cli.y.unwrap_or((height / 2) as i32);
        engine.render(x, y, config.radius, cli.effect, config.intensity)
    };
    if let FrameOutcome::Applied { region, .. } = outcome {
        if region.is_empty() {
            tracing::warn!("bubble lies outside the image; output is unchanged");
        }
    }

    image_loader::save_image(&cli.output, width, height, engine.display_bytes())?;
    tracing::info!("{} written to {}", cli.effect.label(), cli.output.display());
    Ok(())
}
