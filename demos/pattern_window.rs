// Pattern window demo
//
// Opens a display window and runs a gradient test pattern through each
// decode path. Pass a pixel format tag (0, 1, or 2) as the first argument;
// defaults to RGB565.

use retroframe::{run_pattern_window, PixelFormat, WindowConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tag = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(2);

    let format = PixelFormat::from_tag(tag)?;
    println!("Presenting test pattern as {:?}", format);

    let config = WindowConfig::new().with_scale(3).with_fps(60);
    run_pattern_window(config, format)
}
