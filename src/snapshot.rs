// Snapshot functionality
//
// Captures a decoded destination image and saves it as a PNG file.

use crate::video::{DestinationImage, ImageFormat};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during snapshot operations
#[derive(Debug)]
pub enum SnapshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "I/O error: {}", e),
            SnapshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<png::EncodingError> for SnapshotError {
    fn from(e: png::EncodingError) -> Self {
        SnapshotError::PngEncoding(e)
    }
}

/// Save a decoded frame as a PNG file
///
/// # Arguments
///
/// * `image` - The decoded destination image
/// * `dir` - Optional output directory (defaults to `snapshots/`)
///
/// # Returns
///
/// Result containing the path to the saved snapshot or an error
pub fn save_snapshot(
    image: &DestinationImage,
    dir: Option<&Path>,
) -> Result<PathBuf, SnapshotError> {
    let snapshot_dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("snapshots"));
    fs::create_dir_all(&snapshot_dir)?;

    // Generate filename with timestamp
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("frame_{}.png", timestamp);
    let file_path = snapshot_dir.join(filename);

    let rgb_data = image_to_rgb(image);
    save_png(&file_path, &rgb_data, image.width(), image.height())?;

    Ok(file_path)
}

/// Convert an image's raw storage to RGB888 for encoding
///
/// RGBA8 storage drops the constant alpha; RGB565 storage is widened with
/// bit replication.
fn image_to_rgb(image: &DestinationImage) -> Vec<u8> {
    let pixel_count = image.width() as usize * image.height() as usize;
    let mut rgb_data = Vec::with_capacity(pixel_count * 3);

    match image.format() {
        ImageFormat::Rgba8 => {
            for pixel in image.data().chunks_exact(4) {
                rgb_data.extend_from_slice(&pixel[..3]);
            }
        }
        ImageFormat::Rgb565 => {
            for sample in image.data().chunks_exact(2) {
                let packed = u16::from_le_bytes([sample[0], sample[1]]);
                let r = ((packed >> 11) & 0x1F) as u8;
                let g = ((packed >> 5) & 0x3F) as u8;
                let b = (packed & 0x1F) as u8;
                rgb_data.push((r << 3) | (r >> 2));
                rgb_data.push((g << 2) | (g >> 4));
                rgb_data.push((b << 3) | (b >> 2));
            }
        }
    }

    rgb_data
}

/// Save RGB data as a PNG file
fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), SnapshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}
