// Source frame types - Pixel formats and the borrowed frame view
//
// An external emulation core hands the frontend one video frame per
// retro_video_refresh call: a pointer into core-owned memory plus width,
// height, pitch (bytes per row, possibly padded) and a pixel format tag.
// This module models that hand-off as a non-owning view that is only valid
// for the duration of a single decode call.

/// Pixel format of a core-produced frame
///
/// The variants mirror the libretro `RETRO_PIXEL_FORMAT_*` tags. The format
/// is negotiated once per session; it does not change frame-to-frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 15-bit color packed into a 16-bit little-endian sample
    /// (`0RRRRRGG GGGBBBBB`, top bit unused). Tag 0.
    Xrgb1555,

    /// 24-bit color packed into a 32-bit little-endian word
    /// (`XXXXXXXX RRRRRRRR GGGGGGGG BBBBBBBB`, byte 3 unused). Tag 1.
    Xrgb8888,

    /// 16-bit color (`RRRRRGGG GGGBBBBB`), byte-identical to the
    /// destination's raw 16-bit storage layout. Tag 2.
    Rgb565,
}

impl PixelFormat {
    /// Resolve the raw format tag reported by the core at session setup
    ///
    /// # Arguments
    /// * `tag` - The core's pixel format tag (0, 1, or 2)
    ///
    /// # Returns
    /// The matching format, or [`VideoError::UnsupportedFormat`] when no
    /// decoder exists for the tag. This is a setup failure, never a
    /// per-frame error.
    pub fn from_tag(tag: u32) -> Result<Self, crate::video::VideoError> {
        match tag {
            0 => Ok(PixelFormat::Xrgb1555),
            1 => Ok(PixelFormat::Xrgb8888),
            2 => Ok(PixelFormat::Rgb565),
            other => Err(crate::video::VideoError::UnsupportedFormat(other)),
        }
    }

    /// Bytes occupied by one packed pixel in this format
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Xrgb1555 => 2,
            PixelFormat::Xrgb8888 => 4,
            PixelFormat::Rgb565 => 2,
        }
    }
}

/// One frame of core-owned video memory
///
/// Borrowed view over the core's frame buffer. Valid only for the duration
/// of the decode call it is passed to; never retained by the frontend.
///
/// Invariant (caller-guaranteed, asserted at construction):
/// `pitch >= width * bytes_per_pixel(format)` and
/// `data.len() >= pitch * height`.
#[derive(Debug, Clone, Copy)]
pub struct SourceFrame<'a> {
    /// Raw frame bytes, `pitch` bytes per row including any padding
    pub data: &'a [u8],
    /// Logical frame width in pixels
    pub width: u32,
    /// Logical frame height in pixels
    pub height: u32,
    /// Bytes per source row, may exceed `width * bytes_per_pixel`
    pub pitch: usize,
    /// Packed pixel format of `data`
    pub format: PixelFormat,
}

impl<'a> SourceFrame<'a> {
    /// Create a frame view over core memory
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero, if `pitch` is smaller than the
    /// logical row width, or if `data` does not cover `pitch * height`
    /// bytes. These are caller contract violations, not recoverable errors.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormat,
    ) -> Self {
        assert!(width > 0, "Frame width must be nonzero");
        assert!(height > 0, "Frame height must be nonzero");
        assert!(
            pitch >= width as usize * format.bytes_per_pixel(),
            "Pitch {} smaller than row width {} bytes",
            pitch,
            width as usize * format.bytes_per_pixel()
        );
        assert!(
            data.len() >= pitch * height as usize,
            "Frame buffer holds {} bytes, needs {}",
            data.len(),
            pitch * height as usize
        );

        Self {
            data,
            width,
            height,
            pitch,
            format,
        }
    }

    /// Bytes of one logical row, excluding pitch padding
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Trailing padding bytes per row (`pitch - row_bytes`)
    #[inline]
    pub fn row_padding(&self) -> usize {
        self.pitch - self.row_bytes()
    }
}
