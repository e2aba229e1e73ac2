// Destination image - The surface-owned pixel store decoders write into
//
// Decoders receive the previous frame's image (if any) and return an image
// of the current frame's dimensions: the same allocation when the size and
// storage format still match, a fresh one otherwise. The surface owner
// uploads the raw storage after each apply() and watches the version
// counter to know when a re-upload is due.

use super::color::Color;

/// Raw storage layout of a destination image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// 4 bytes per pixel, R-G-B-A byte order (scanline decode output)
    Rgba8,

    /// 2 bytes per pixel, RGB565 little-endian (bulk decode output,
    /// byte-identical to the source's native layout)
    Rgb565,
}

impl ImageFormat {
    /// Bytes per pixel in this storage layout
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ImageFormat::Rgba8 => 4,
            ImageFormat::Rgb565 => 2,
        }
    }
}

/// Smoothing filter the surface should sample the image with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
    Trilinear,
}

/// Mutable pixel store for one decoded frame
///
/// Persists across decode calls and is mutated in place; reallocated only
/// when the frame dimensions or storage format change (see
/// [`DestinationImage::prepare`]).
#[derive(Debug)]
pub struct DestinationImage {
    width: u32,
    height: u32,
    format: ImageFormat,
    data: Vec<u8>,
    filter: FilterMode,
    version: u64,
}

impl DestinationImage {
    /// Create a zeroed image of the given dimensions and storage layout
    pub fn new(width: u32, height: u32, format: ImageFormat) -> Self {
        let size = width as usize * height as usize * format.bytes_per_pixel();
        Self {
            width,
            height,
            format,
            data: vec![0; size],
            filter: FilterMode::default(),
            version: 0,
        }
    }

    /// Reuse `existing` when its dimensions and format match, otherwise
    /// allocate a fresh image
    ///
    /// This is the reallocation decision for the destination: an image is
    /// recreated if and only if `(width, height)` or the storage format
    /// differs from the previous frame's.
    pub fn prepare(
        existing: Option<DestinationImage>,
        width: u32,
        height: u32,
        format: ImageFormat,
    ) -> DestinationImage {
        match existing {
            Some(image)
                if image.width == width && image.height == height && image.format == format =>
            {
                image
            }
            _ => DestinationImage::new(width, height, format),
        }
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw storage layout
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Raw pixel storage, row-major, no padding
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current smoothing filter request
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Commit counter; bumped by [`apply`](Self::apply)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Write one pixel at `(x, y)`, column-major x, row-major y
    ///
    /// Only valid for [`ImageFormat::Rgba8`] storage.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds or the image stores raw
    /// non-RGBA8 data.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width, "X coordinate {} out of bounds", x);
        assert!(y < self.height, "Y coordinate {} out of bounds", y);
        assert_eq!(
            self.format,
            ImageFormat::Rgba8,
            "set_pixel requires RGBA8 storage"
        );

        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.data[offset..offset + 4].copy_from_slice(&color.to_rgba_bytes());
    }

    /// Replace the raw pixel storage wholesale, no per-pixel interpretation
    ///
    /// # Panics
    /// Panics if `bytes` does not match the image's exact raw byte size.
    pub fn load_raw(&mut self, bytes: &[u8]) {
        assert_eq!(
            bytes.len(),
            self.data.len(),
            "Raw data is {} bytes, image stores {}",
            bytes.len(),
            self.data.len()
        );
        self.data.copy_from_slice(bytes);
    }

    /// Request a smoothing filter from the surface owner
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// Commit pixel changes: marks the image as needing re-display
    pub fn apply(&mut self) {
        self.version += 1;
    }

    /// Address of the backing allocation; lets tests observe reuse
    pub fn storage_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let image = DestinationImage::new(4, 2, ImageFormat::Rgba8);
        assert_eq!(image.data().len(), 4 * 2 * 4);
        assert_eq!(image.version(), 0);

        let image = DestinationImage::new(4, 2, ImageFormat::Rgb565);
        assert_eq!(image.data().len(), 4 * 2 * 2);
    }

    #[test]
    fn test_set_pixel() {
        let mut image = DestinationImage::new(2, 2, ImageFormat::Rgba8);
        image.set_pixel(1, 0, Color::new(1.0, 0.0, 0.0));
        assert_eq!(&image.data()[4..8], &[255, 0, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_pixel_out_of_bounds() {
        let mut image = DestinationImage::new(2, 2, ImageFormat::Rgba8);
        image.set_pixel(2, 0, Color::BLACK);
    }

    #[test]
    #[should_panic(expected = "RGBA8 storage")]
    fn test_set_pixel_wrong_format() {
        let mut image = DestinationImage::new(2, 2, ImageFormat::Rgb565);
        image.set_pixel(0, 0, Color::BLACK);
    }

    #[test]
    fn test_prepare_reuses_matching_image() {
        let image = DestinationImage::new(4, 2, ImageFormat::Rgba8);
        let ptr = image.storage_ptr();
        let image = DestinationImage::prepare(Some(image), 4, 2, ImageFormat::Rgba8);
        assert_eq!(image.storage_ptr(), ptr);
    }

    #[test]
    fn test_prepare_recreates_on_resize() {
        let image = DestinationImage::new(4, 2, ImageFormat::Rgba8);
        let image = DestinationImage::prepare(Some(image), 8, 2, ImageFormat::Rgba8);
        assert_eq!(image.width(), 8);
        assert_eq!(image.data().len(), 8 * 2 * 4);
    }

    #[test]
    fn test_prepare_recreates_on_format_change() {
        let image = DestinationImage::new(4, 2, ImageFormat::Rgba8);
        let image = DestinationImage::prepare(Some(image), 4, 2, ImageFormat::Rgb565);
        assert_eq!(image.format(), ImageFormat::Rgb565);
    }

    #[test]
    fn test_load_raw_and_apply() {
        let mut image = DestinationImage::new(2, 1, ImageFormat::Rgb565);
        image.load_raw(&[0xAA, 0xBB, 0xCC, 0xDD]);
        image.apply();
        assert_eq!(image.data(), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(image.version(), 1);
    }

    #[test]
    #[should_panic(expected = "Raw data is")]
    fn test_load_raw_size_mismatch() {
        let mut image = DestinationImage::new(2, 1, ImageFormat::Rgb565);
        image.load_raw(&[0u8; 3]);
    }
}
