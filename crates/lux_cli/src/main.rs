use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::{load_scene, Scene, SceneDescription};
use lux_renderer::{render, ImageBuffer, RenderConfig};

/// Render spheres and checkered planes with recursive ray tracing.
#[derive(Parser, Debug)]
#[command(name = "lux", version, about)]
struct Args {
    /// Scene description file (JSON); the built-in demo scene when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Render settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Maximum reflection/refraction depth
    #[arg(long)]
    depth: Option<u32>,

    /// Print the scene as JSON instead of rendering it
    #[arg(long)]
    dump_scene: bool,
}

/// Settings file first, then command line overrides.
fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read render config {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse render config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }

    anyhow::ensure!(
        config.width > 0 && config.height > 0,
        "Image size must be non-zero, got {}x{}",
        config.width,
        config.height
    );
    Ok(config)
}

fn resolve_scene(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))
        }
        None => {
            log::info!("No scene given, rendering the demo scene");
            Ok(Scene::demo())
        }
    }
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &image.to_rgba(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let scene = resolve_scene(&args)?;

    if args.dump_scene {
        println!("{}", SceneDescription::from(&scene).to_json_string()?);
        return Ok(());
    }

    let config = resolve_config(&args)?;
    log::info!(
        "Rendering {}x{} at depth {}",
        config.width,
        config.height,
        config.max_depth
    );

    let start = Instant::now();
    let image = render(&scene, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    save_png(&image, &args.output)?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
