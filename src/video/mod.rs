// Video module - Decodes core-produced frames and presents them
//
// This module provides:
// - Source frame view and pixel format tags (libretro-style)
// - Color unpacking for the packed 15/32-bit formats
// - Destination image with reuse-or-recreate semantics
// - Frame decoders (per-pixel scanline path, bulk RGB565 path) and dispatch
// - Packed test pattern generation
// - Window presentation using winit + pixels

pub mod color;
pub mod decoder;
pub mod frame;
pub mod image;
pub mod pattern;
pub mod window;

pub use color::Color;
pub use decoder::{BulkCopyDecoder, FrameDecoder, ScanlineDecoder, VideoError};
pub use frame::{PixelFormat, SourceFrame};
pub use image::{DestinationImage, FilterMode, ImageFormat};
pub use pattern::PatternFrame;
pub use window::{run_pattern_window, upload_image, DisplayWindow, WindowConfig};
