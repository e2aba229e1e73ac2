// retroframe - Main Entry Point
//
// Demonstrates the decode pipeline: resolves the session pixel format from
// configuration, then presents a generated test pattern through it.

use retroframe::{run_pattern_window, FrontendConfig, PixelFormat, WindowConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("retroframe v0.1.0");
    println!("=================");
    println!();

    // Load or create frontend configuration
    let config = FrontendConfig::load_or_default();
    println!("Configuration loaded from 'retroframe_config.toml'");
    println!();

    // Resolve the session pixel format once, at setup. An unknown tag is a
    // setup failure, not something handled per frame.
    let format = match PixelFormat::from_tag(config.video.pixel_format) {
        Ok(format) => format,
        Err(err) => {
            eprintln!("Setup failed: {}", err);
            std::process::exit(1);
        }
    };

    let window_config = WindowConfig::new()
        .with_scale(config.video.scale)
        .with_fps(config.video.fps)
        .with_vsync(config.video.vsync);

    println!("Press the close button or Ctrl+C to exit.");
    println!();

    run_pattern_window(window_config, format)?;

    println!("Display window closed.");
    Ok(())
}
