// Frame decoders - Per-pixel unpacking, bulk reinterpretation, dispatch
//
// One decoder is bound per session, chosen from the pixel format the core
// reports at setup. Each decode call consumes the previous frame's image
// (if any), returns it resized when needed, and leaves it fully populated
// and applied. Scratch buffers live on the decoder and are reallocated only
// when the required byte count changes between frames.

use super::color::Color;
use super::frame::{PixelFormat, SourceFrame};
use super::image::{DestinationImage, FilterMode, ImageFormat};

/// Errors that can occur in the video pipeline
#[derive(Debug)]
pub enum VideoError {
    /// The core reported a pixel format tag no decoder exists for.
    /// Surfaced at session setup, never per frame.
    UnsupportedFormat(u32),

    /// Presentation surface error
    Surface(pixels::Error),
}

impl std::fmt::Display for VideoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoError::UnsupportedFormat(tag) => {
                write!(f, "Unsupported pixel format tag: {}", tag)
            }
            VideoError::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<pixels::Error> for VideoError {
    fn from(e: pixels::Error) -> Self {
        VideoError::Surface(e)
    }
}

/// Session decoder, dispatched by source pixel format
///
/// The variant is fixed for a session: formats do not change frame-to-frame
/// in normal operation, so selection happens once at setup rather than per
/// frame.
#[derive(Debug)]
pub enum FrameDecoder {
    /// Per-pixel bit-unpacking path (XRGB1555, XRGB8888)
    Scanline(ScanlineDecoder),

    /// Bulk memory-reinterpretation path (RGB565)
    Bulk(BulkCopyDecoder),
}

impl FrameDecoder {
    /// Select the decoder for a session's pixel format
    ///
    /// RGB565's native byte layout matches the destination's raw 16-bit
    /// storage, so it takes the bulk path; the packed 15/32-bit formats
    /// need per-pixel unpacking.
    pub fn for_format(format: PixelFormat) -> Self {
        match format {
            PixelFormat::Xrgb1555 | PixelFormat::Xrgb8888 => {
                FrameDecoder::Scanline(ScanlineDecoder::new(format))
            }
            PixelFormat::Rgb565 => FrameDecoder::Bulk(BulkCopyDecoder::new()),
        }
    }

    /// Decode one frame into the destination image
    ///
    /// Consumes the previous frame's image and returns it when its
    /// dimensions and storage format still match, or a freshly allocated
    /// replacement otherwise. On return the image is fully overwritten with
    /// the decoded frame, carries the requested smoothing filter, and has
    /// been applied exactly once.
    pub fn decode(
        &mut self,
        image: Option<DestinationImage>,
        frame: &SourceFrame<'_>,
    ) -> DestinationImage {
        match self {
            FrameDecoder::Scanline(decoder) => decoder.decode(image, frame),
            FrameDecoder::Bulk(decoder) => decoder.decode(image, frame),
        }
    }

    /// Set the smoothing filter requested on every decoded frame
    ///
    /// Defaults to [`FilterMode::Trilinear`]. The decoder re-stamps the
    /// filter each frame, so changing it here is how a surface owner
    /// changes it for the session.
    pub fn set_filter(&mut self, filter: FilterMode) {
        match self {
            FrameDecoder::Scanline(decoder) => decoder.set_filter(filter),
            FrameDecoder::Bulk(decoder) => decoder.set_filter(filter),
        }
    }
}

/// Per-pixel decoder for bit-packed formats
///
/// Walks every destination pixel, reads the fixed-width little-endian
/// sample at `y * pitch + x * bytes_per_pixel`, and unpacks it to a
/// normalized color. O(width × height) unpack operations per frame.
#[derive(Debug)]
pub struct ScanlineDecoder {
    format: PixelFormat,
    filter: FilterMode,
}

impl ScanlineDecoder {
    /// Create a scanline decoder for a packed per-pixel format
    ///
    /// # Panics
    /// Panics if `format` is RGB565, which takes the bulk path.
    pub fn new(format: PixelFormat) -> Self {
        assert_ne!(
            format,
            PixelFormat::Rgb565,
            "RGB565 is decoded by the bulk path"
        );
        Self {
            format,
            filter: FilterMode::Trilinear,
        }
    }

    /// Format this decoder unpacks
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Set the smoothing filter stamped on decoded frames
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// Decode one frame pixel-by-pixel into RGBA8 storage
    pub fn decode(
        &mut self,
        image: Option<DestinationImage>,
        frame: &SourceFrame<'_>,
    ) -> DestinationImage {
        assert_eq!(frame.format, self.format, "Frame format changed mid-session");

        let mut image =
            DestinationImage::prepare(image, frame.width, frame.height, ImageFormat::Rgba8);
        let bpp = self.format.bytes_per_pixel();

        for y in 0..frame.height {
            let row = y as usize * frame.pitch;
            for x in 0..frame.width {
                let offset = row + x as usize * bpp;
                let color = match self.format {
                    PixelFormat::Xrgb1555 => {
                        let sample =
                            u16::from_le_bytes([frame.data[offset], frame.data[offset + 1]]);
                        Color::from_xrgb1555(sample)
                    }
                    PixelFormat::Xrgb8888 => {
                        let sample = u32::from_le_bytes([
                            frame.data[offset],
                            frame.data[offset + 1],
                            frame.data[offset + 2],
                            frame.data[offset + 3],
                        ]);
                        Color::from_xrgb8888(sample)
                    }
                    PixelFormat::Rgb565 => unreachable!(),
                };
                image.set_pixel(x, y, color);
            }
        }

        // Commit once per frame, not per row
        image.set_filter(self.filter);
        image.apply();
        image
    }
}

/// Bulk decoder for formats whose byte layout matches the destination
///
/// Copies the full padded region into a source scratch buffer in one
/// transfer, strips the per-row pitch padding into a contiguous destination
/// scratch buffer, and loads that directly as the image's raw storage. No
/// per-pixel interpretation happens on this path.
#[derive(Debug)]
pub struct BulkCopyDecoder {
    src: Vec<u8>,
    dst: Vec<u8>,
    src_reallocs: u64,
    dst_reallocs: u64,
    filter: FilterMode,
}

impl Default for BulkCopyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkCopyDecoder {
    /// Create a bulk decoder with empty scratch buffers
    pub fn new() -> Self {
        Self {
            src: Vec::new(),
            dst: Vec::new(),
            src_reallocs: 0,
            dst_reallocs: 0,
            filter: FilterMode::Trilinear,
        }
    }

    /// Set the smoothing filter stamped on decoded frames
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// Times the source scratch buffer has been reallocated
    pub fn src_reallocs(&self) -> u64 {
        self.src_reallocs
    }

    /// Times the destination scratch buffer has been reallocated
    pub fn dst_reallocs(&self) -> u64 {
        self.dst_reallocs
    }

    /// Decode one RGB565 frame by re-striding its raw bytes
    pub fn decode(
        &mut self,
        image: Option<DestinationImage>,
        frame: &SourceFrame<'_>,
    ) -> DestinationImage {
        assert_eq!(
            frame.format,
            PixelFormat::Rgb565,
            "Bulk path requires a layout-compatible format"
        );

        let height = frame.height as usize;
        let row_bytes = frame.row_bytes();
        let src_size = frame.pitch * height;
        let dst_size = row_bytes * height;

        if self.src.len() != src_size {
            self.src = vec![0; src_size];
            self.src_reallocs += 1;
        }
        if self.dst.len() != dst_size {
            self.dst = vec![0; dst_size];
            self.dst_reallocs += 1;
        }

        // One bulk transfer of the padded region, then strip the trailing
        // padding row by row
        self.src.copy_from_slice(&frame.data[..src_size]);
        for y in 0..height {
            let src_row = y * frame.pitch;
            self.dst[y * row_bytes..(y + 1) * row_bytes]
                .copy_from_slice(&self.src[src_row..src_row + row_bytes]);
        }

        let mut image =
            DestinationImage::prepare(image, frame.width, frame.height, ImageFormat::Rgb565);
        image.load_raw(&self.dst);
        image.set_filter(self.filter);
        image.apply();
        image
    }
}
