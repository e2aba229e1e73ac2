// retroframe - Library for decoding and presenting libretro-style video frames
//
// An external core hands over one packed, pitched frame per video refresh;
// this library dispatches it to a format-specific decoder and presents the
// result through a winit + pixels window.

// Public modules
pub mod config;
pub mod snapshot;
pub mod video;

// Re-export main types for convenience
pub use config::{FrontendConfig, SnapshotConfig, VideoConfig};
pub use snapshot::{save_snapshot, SnapshotError};
pub use video::{
    run_pattern_window, upload_image, BulkCopyDecoder, Color, DestinationImage, DisplayWindow,
    FilterMode, FrameDecoder, ImageFormat, PatternFrame, PixelFormat, ScanlineDecoder, SourceFrame,
    VideoError, WindowConfig,
};
