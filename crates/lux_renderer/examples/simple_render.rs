//! Simple ray tracer example.
//!
//! Renders the demo scene and saves it in PPM format.

use lux_renderer::{render, ImageBuffer, RenderConfig, Scene};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let scene = Scene::demo();
    let config = RenderConfig {
        width: 300,
        height: 300,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} at depth {}...",
        config.width, config.height, config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let color = image.get(x, y);
            writeln!(writer, "{} {} {}", color.r, color.g, color.b)?;
        }
    }

    Ok(())
}
