mod scenes;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rastrum_engine::logging::{LoggingConfig, init_logging};
use rastrum_engine::{DegenerateTriangles, RasterConfig, Rasterizer};

use scenes::SceneKind;

/// Renders a built-in scene on the CPU and writes it as a PPM image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Framebuffer width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Framebuffer height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    #[arg(long, value_enum, default_value_t = SceneKind::Triangle)]
    scene: SceneKind,

    /// Model rotation in radians (cube scene).
    #[arg(long, default_value_t = 0.6)]
    angle: f32,

    #[arg(long, short, default_value = "screen.ppm")]
    output: PathBuf,

    /// Log filter, e.g. `debug` or `rastrum_engine=trace`.
    #[arg(long)]
    log: Option<String>,

    /// Abort on degenerate triangles instead of skipping them.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let config = RasterConfig {
        degenerate: if args.strict {
            DegenerateTriangles::Reject
        } else {
            DegenerateTriangles::Skip
        },
        ..RasterConfig::with_size(args.width, args.height)
    };

    let mut raster = Rasterizer::new(config);
    let stats = scenes::render(args.scene, &mut raster, args.angle)?;
    log::info!(
        "{} triangles, {} fragments ({} depth-rejected, {} degenerate skipped)",
        stats.triangles,
        stats.fragments,
        stats.depth_rejected,
        stats.degenerate_skipped,
    );

    raster
        .framebuffer()
        .save_ppm(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());

    Ok(())
}
