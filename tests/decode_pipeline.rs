// Integration tests for the frame decode pipeline
// These tests run pattern-generated source frames through the dispatcher
// the way a frontend session would, across every supported format.

use retroframe::*;

/// Decode a padded gradient in every format and check the output shape
#[test]
fn test_all_formats_decode_padded_gradient() {
    for tag in 0..3 {
        let format = PixelFormat::from_tag(tag).unwrap();
        let pattern = PatternFrame::gradient(32, 16, 10, format);
        let mut decoder = FrameDecoder::for_format(format);

        let image = decoder.decode(None, &pattern.as_source_frame());

        assert_eq!(image.width(), 32);
        assert_eq!(image.height(), 16);
        assert_eq!(
            image.data().len(),
            32 * 16 * image.format().bytes_per_pixel()
        );
        assert_eq!(image.version(), 1);
        assert_eq!(image.filter(), FilterMode::Trilinear);
    }
}

/// The gradient's endpoints must survive decoding: red on the left edge,
/// blue on the right, on every row
#[test]
fn test_scanline_gradient_orientation() {
    let pattern = PatternFrame::gradient(16, 4, 6, PixelFormat::Xrgb8888);
    let mut decoder = FrameDecoder::for_format(PixelFormat::Xrgb8888);
    let image = decoder.decode(None, &pattern.as_source_frame());

    let row_bytes = 16 * 4;
    for y in 0..4 {
        let row = &image.data()[y * row_bytes..(y + 1) * row_bytes];
        assert_eq!(&row[0..4], &[255, 0, 0, 255], "left edge of row {}", y);
        assert_eq!(
            &row[row_bytes - 4..],
            &[0, 0, 255, 255],
            "right edge of row {}",
            y
        );
    }
}

/// Bulk output must be byte-identical to the unpadded source rows
#[test]
fn test_bulk_output_matches_source_rows() {
    let pattern = PatternFrame::gradient(8, 8, 4, PixelFormat::Rgb565);
    let frame = pattern.as_source_frame();
    let mut decoder = FrameDecoder::for_format(PixelFormat::Rgb565);
    let image = decoder.decode(None, &frame);

    let row_bytes = frame.row_bytes();
    for y in 0..8 {
        let src_row = &frame.data[y * frame.pitch..y * frame.pitch + row_bytes];
        let dst_row = &image.data()[y * row_bytes..(y + 1) * row_bytes];
        assert_eq!(src_row, dst_row, "row {}", y);
    }
}

/// A session that changes frame dimensions gets a new image, matching
/// dimensions keep the old allocation
#[test]
fn test_session_resize_contract() {
    let mut decoder = FrameDecoder::for_format(PixelFormat::Xrgb1555);

    let small = PatternFrame::solid(8, 8, 0, PixelFormat::Xrgb1555, Color::new(1.0, 1.0, 1.0));
    let image = decoder.decode(None, &small.as_source_frame());
    let ptr = image.storage_ptr();

    let image = decoder.decode(Some(image), &small.as_source_frame());
    assert_eq!(image.storage_ptr(), ptr, "matching frames must reuse");

    let large = PatternFrame::solid(16, 8, 0, PixelFormat::Xrgb1555, Color::new(1.0, 1.0, 1.0));
    let image = decoder.decode(Some(image), &large.as_source_frame());
    assert_eq!(image.width(), 16);
    for pixel in image.data().chunks_exact(4) {
        assert_eq!(pixel, &[255, 255, 255, 255]);
    }
}

/// Decoding the same source twice yields bit-identical pixels
#[test]
fn test_pipeline_idempotence() {
    for tag in 0..3 {
        let format = PixelFormat::from_tag(tag).unwrap();
        let pattern = PatternFrame::gradient(12, 7, 3, format);
        let mut decoder = FrameDecoder::for_format(format);

        let image = decoder.decode(None, &pattern.as_source_frame());
        let first = image.data().to_vec();
        let image = decoder.decode(Some(image), &pattern.as_source_frame());
        assert_eq!(image.data(), first.as_slice(), "format tag {}", tag);
    }
}

/// Scanline and bulk surface uploads agree on a solid color that both
/// formats represent exactly
#[test]
fn test_paths_agree_on_shared_colors() {
    let color = Color::new(1.0, 0.0, 1.0);

    let packed = PatternFrame::solid(4, 4, 2, PixelFormat::Xrgb1555, color);
    let mut scanline = FrameDecoder::for_format(PixelFormat::Xrgb1555);
    let scanline_image = scanline.decode(None, &packed.as_source_frame());

    let raw = PatternFrame::solid(4, 4, 2, PixelFormat::Rgb565, color);
    let mut bulk = FrameDecoder::for_format(PixelFormat::Rgb565);
    let bulk_image = bulk.decode(None, &raw.as_source_frame());

    let mut scanline_surface = vec![0u8; 4 * 4 * 4];
    let mut bulk_surface = vec![0u8; 4 * 4 * 4];
    upload_image(&scanline_image, &mut scanline_surface);
    upload_image(&bulk_image, &mut bulk_surface);

    assert_eq!(scanline_surface, bulk_surface);
}

/// Unknown format tags fail at setup, before any frame is decoded
#[test]
fn test_unknown_tag_is_setup_failure() {
    let err = PixelFormat::from_tag(7).unwrap_err();
    assert!(matches!(err, VideoError::UnsupportedFormat(7)));
    assert_eq!(err.to_string(), "Unsupported pixel format tag: 7");
}
