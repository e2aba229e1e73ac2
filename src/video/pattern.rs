// Test pattern frames - Packed source frames for demos, tests, and benches
//
// The emulation core that normally produces frames is an external
// collaborator; these generators stand in for it by packing synthetic
// frames into each supported source format, with deliberate per-row
// padding so the pitch-handling paths get exercised.

use super::color::Color;
use super::frame::{PixelFormat, SourceFrame};

/// An owned, packed frame that can be lent out as a [`SourceFrame`]
#[derive(Debug)]
pub struct PatternFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
}

impl PatternFrame {
    /// Generate a horizontal red-to-blue gradient
    ///
    /// # Arguments
    /// * `width`, `height` - Logical frame dimensions
    /// * `row_padding` - Extra bytes appended to every row, so
    ///   `pitch = width * bytes_per_pixel + row_padding`
    /// * `format` - Packed format to encode into
    pub fn gradient(width: u32, height: u32, row_padding: usize, format: PixelFormat) -> Self {
        Self::from_fn(width, height, row_padding, format, |x, _y| {
            let t = x as f32 / (width.max(2) - 1) as f32;
            Color::new(1.0 - t, 0.0, t)
        })
    }

    /// Generate a frame filled with a single color
    pub fn solid(
        width: u32,
        height: u32,
        row_padding: usize,
        format: PixelFormat,
        color: Color,
    ) -> Self {
        Self::from_fn(width, height, row_padding, format, |_, _| color)
    }

    /// Generate a frame by evaluating `pixel` at every coordinate
    pub fn from_fn(
        width: u32,
        height: u32,
        row_padding: usize,
        format: PixelFormat,
        pixel: impl Fn(u32, u32) -> Color,
    ) -> Self {
        assert!(width > 0 && height > 0, "Pattern dimensions must be nonzero");

        let bpp = format.bytes_per_pixel();
        let pitch = width as usize * bpp + row_padding;
        let mut data = vec![0u8; pitch * height as usize];

        for y in 0..height {
            let row = y as usize * pitch;
            for x in 0..width {
                let offset = row + x as usize * bpp;
                pack_pixel(&mut data[offset..offset + bpp], pixel(x, y), format);
            }
        }

        Self {
            data,
            width,
            height,
            pitch,
            format,
        }
    }

    /// Lend this pattern out as a core-style frame view
    pub fn as_source_frame(&self) -> SourceFrame<'_> {
        SourceFrame::new(&self.data, self.width, self.height, self.pitch, self.format)
    }

    /// Bytes per row including padding
    pub fn pitch(&self) -> usize {
        self.pitch
    }
}

/// Pack a normalized color into `out` in the given format's byte layout
fn pack_pixel(out: &mut [u8], color: Color, format: PixelFormat) {
    let quant = |v: f32, max: f32| (v.clamp(0.0, 1.0) * max).round() as u32;
    match format {
        PixelFormat::Xrgb1555 => {
            let sample = (quant(color.r, 31.0) << 10)
                | (quant(color.g, 31.0) << 5)
                | quant(color.b, 31.0);
            out.copy_from_slice(&(sample as u16).to_le_bytes());
        }
        PixelFormat::Xrgb8888 => {
            let sample = (quant(color.r, 255.0) << 16)
                | (quant(color.g, 255.0) << 8)
                | quant(color.b, 255.0);
            out.copy_from_slice(&sample.to_le_bytes());
        }
        PixelFormat::Rgb565 => {
            let sample = (quant(color.r, 31.0) << 11)
                | (quant(color.g, 63.0) << 5)
                | quant(color.b, 31.0);
            out.copy_from_slice(&(sample as u16).to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_pitch_includes_padding() {
        let pattern = PatternFrame::gradient(4, 2, 6, PixelFormat::Rgb565);
        assert_eq!(pattern.pitch(), 4 * 2 + 6);

        let frame = pattern.as_source_frame();
        assert_eq!(frame.row_padding(), 6);
    }

    #[test]
    fn test_solid_1555_packs_expected_sample() {
        let pattern = PatternFrame::solid(1, 1, 0, PixelFormat::Xrgb1555, Color::new(1.0, 0.0, 1.0));
        let frame = pattern.as_source_frame();
        let sample = u16::from_le_bytes([frame.data[0], frame.data[1]]);
        assert_eq!(sample, (31 << 10) | 31);
    }

    #[test]
    fn test_gradient_endpoints() {
        let pattern = PatternFrame::gradient(8, 1, 0, PixelFormat::Xrgb8888);
        let frame = pattern.as_source_frame();
        let first = u32::from_le_bytes(frame.data[0..4].try_into().unwrap());
        let last = u32::from_le_bytes(frame.data[28..32].try_into().unwrap());
        assert_eq!(first, 0x00FF0000);
        assert_eq!(last, 0x000000FF);
    }

    #[test]
    fn test_solid_565_round_trips_through_layout() {
        let pattern = PatternFrame::solid(2, 1, 0, PixelFormat::Rgb565, Color::new(0.0, 1.0, 0.0));
        let frame = pattern.as_source_frame();
        let sample = u16::from_le_bytes([frame.data[0], frame.data[1]]);
        assert_eq!(sample, 63 << 5);
    }
}
