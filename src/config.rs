// Configuration management
//
// Handles frontend configuration and settings persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default configuration file path
const CONFIG_FILE: &str = "retroframe_config.toml";

/// Frontend configuration
///
/// Stores all user-configurable settings for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Snapshot settings
    pub snapshot: SnapshotConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target FPS (usually 60)
    pub fps: u32,

    /// Pixel format tag reported by the core (0 = XRGB1555,
    /// 1 = XRGB8888, 2 = RGB565)
    pub pixel_format: u32,
}

/// Snapshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Snapshot directory
    pub snapshot_directory: PathBuf,

    /// Include timestamp in filename
    pub include_timestamp: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
                pixel_format: 2,
            },
            snapshot: SnapshotConfig {
                snapshot_directory: PathBuf::from("snapshots"),
                include_timestamp: true,
            },
        }
    }
}

impl FrontendConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration and saves it to the file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
