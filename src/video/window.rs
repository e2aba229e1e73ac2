// Window module - Presents decoded frames through winit and pixels
//
// The surface owner side of the output contract: owns the window, the
// pixel surface, the session decoder, and the current destination image
// handle. Each redraw pulls one source frame, runs it through the decoder,
// uploads the image's raw storage (expanding RGB565 to the surface's RGBA
// on the way) and presents. Uploads are skipped while the image version is
// unchanged.

use super::decoder::FrameDecoder;
use super::frame::PixelFormat;
use super::image::{DestinationImage, ImageFormat};
use super::pattern::PatternFrame;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Scale factor (1x, 2x, 3x, 4x, etc.)
    pub scale: u32,
    /// Target frame rate in Hz
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a new window configuration with default values
    ///
    /// Default: 3x scale, 60 FPS, VSync enabled
    pub fn new() -> Self {
        Self {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Get the frame duration for the target FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Display window presenting decoded frames
pub struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    decoder: FrameDecoder,
    image: Option<DestinationImage>,
    uploaded_version: u64,
    source: PatternFrame,
    last_frame_time: Instant,
}

impl DisplayWindow {
    /// Create a display window for a session's pixel format
    ///
    /// The decoder is bound once here; the core's format does not change
    /// frame-to-frame.
    pub fn new(config: WindowConfig, format: PixelFormat, source: PatternFrame) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            decoder: FrameDecoder::for_format(format),
            image: None,
            uploaded_version: 0,
            source,
            last_frame_time: Instant::now(),
        }
    }

    /// Decode the current source frame and present it
    fn decode_and_render(&mut self) -> Result<(), pixels::Error> {
        let frame = self.source.as_source_frame();
        let image = self.decoder.decode(self.image.take(), &frame);

        if let Some(pixels) = &mut self.pixels {
            if image.version() != self.uploaded_version {
                upload_image(&image, pixels.frame_mut());
                self.uploaded_version = image.version();
            }
            pixels.render()?;
        }

        self.image = Some(image);
        Ok(())
    }

    /// Check if enough time has passed for the next frame
    fn should_render_frame(&mut self) -> bool {
        let elapsed = self.last_frame_time.elapsed();
        let frame_duration = self.config.frame_duration();

        if elapsed >= frame_duration {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let frame = self.source.as_source_frame();
        let (width, height) = (frame.width, frame.height);

        let window_attributes = Window::default_attributes()
            .with_title(format!(
                "retroframe - {}x{}",
                width * self.config.scale,
                height * self.config.scale
            ))
            .with_inner_size(LogicalSize::new(
                width * self.config.scale,
                height * self.config.scale,
            ))
            .with_resizable(false);

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");

        // Wrap window in Arc for shared ownership
        let window = Arc::new(window);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels =
            Pixels::new(width, height, surface_texture).expect("Failed to create pixel buffer");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                println!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if self.should_render_frame() {
                    if let Err(err) = self.decode_and_render() {
                        eprintln!("Render error: {}", err);
                        event_loop.exit();
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Expand an image's raw storage into the surface's RGBA8 buffer
///
/// RGBA8 storage uploads as-is; RGB565 raw storage is widened per sample
/// with the usual bit-replication so 5/6-bit channels span the full byte
/// range.
pub fn upload_image(image: &DestinationImage, surface: &mut [u8]) {
    match image.format() {
        ImageFormat::Rgba8 => {
            surface[..image.data().len()].copy_from_slice(image.data());
        }
        ImageFormat::Rgb565 => {
            for (sample, out) in image
                .data()
                .chunks_exact(2)
                .zip(surface.chunks_exact_mut(4))
            {
                let packed = u16::from_le_bytes([sample[0], sample[1]]);
                let r = ((packed >> 11) & 0x1F) as u8;
                let g = ((packed >> 5) & 0x3F) as u8;
                let b = (packed & 0x1F) as u8;
                out[0] = (r << 3) | (r >> 2);
                out[1] = (g << 2) | (g >> 4);
                out[2] = (b << 3) | (b >> 2);
                out[3] = 0xFF;
            }
        }
    }
}

/// Create and run the display window with a generated test pattern
///
/// # Arguments
/// * `config` - Window configuration
/// * `format` - Session pixel format, as negotiated with the core
///
/// # Returns
/// Result indicating success or error
pub fn run_pattern_window(
    config: WindowConfig,
    format: PixelFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    if config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    // 8 padding bytes per row so the demo exercises pitch stripping
    let source = PatternFrame::gradient(256, 240, 8, format);
    let mut display = DisplayWindow::new(config, format, source);

    println!("Starting display window...");
    println!("  Source format: {:?}", format);
    println!("  Resolution: 256x240");
    println!("  Scale: {}x", config.scale);
    println!("  Target FPS: {}", config.target_fps);
    println!("  VSync: {}", config.vsync);

    event_loop.run_app(&mut display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::color::Color;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new();
        assert_eq!(config.scale, 3);
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new()
            .with_scale(2)
            .with_fps(30)
            .with_vsync(false);

        assert_eq!(config.scale, 2);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
    }

    #[test]
    fn test_scale_clamping() {
        let config = WindowConfig::new().with_scale(100);
        assert_eq!(config.scale, 8);

        let config = WindowConfig::new().with_scale(0);
        assert_eq!(config.scale, 1);
    }

    #[test]
    fn test_frame_duration() {
        let config = WindowConfig::new().with_fps(60);
        assert_eq!(config.frame_duration().as_micros(), 16666);
    }

    #[test]
    fn test_upload_rgba8_is_verbatim() {
        let mut image = DestinationImage::new(2, 1, ImageFormat::Rgba8);
        image.set_pixel(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set_pixel(1, 0, Color::new(0.0, 0.0, 1.0));

        let mut surface = vec![0u8; 8];
        upload_image(&image, &mut surface);
        assert_eq!(surface, &[255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_upload_expands_rgb565() {
        let mut image = DestinationImage::new(2, 1, ImageFormat::Rgb565);
        // Pure red, pure green
        let red = (0x1Fu16 << 11).to_le_bytes();
        let green = (0x3Fu16 << 5).to_le_bytes();
        image.load_raw(&[red[0], red[1], green[0], green[1]]);

        let mut surface = vec![0u8; 8];
        upload_image(&image, &mut surface);
        assert_eq!(surface, &[255, 0, 0, 255, 0, 255, 0, 255]);
    }
}
