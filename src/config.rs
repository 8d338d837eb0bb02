// Configuration management
//
// Window flags (the compact bitmask form), the typed window configuration,
// geometry validation and TOML persistence.

use crate::error::{ConfigError, InvalidGeometryError};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file path used by the demo binary
pub const CONFIG_FILE: &str = "framewin.toml";

/// Largest scaled surface edge, in physical pixels
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

bitflags! {
    /// Bitmask selecting a scale and a frame rate when opening a window
    ///
    /// At most one scale bit and one frame rate bit are expected. If several
    /// scale bits are set the largest wins; `FPS60` wins over `FPS30`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct WindowFlags: u8 {
        const SCALE1 = 0x01;
        const SCALE2 = 0x02;
        const SCALE4 = 0x04;
        const SCALE8 = 0x08;
        const SCALE16 = 0x10;
        const FPS30 = 0x20;
        const FPS60 = 0x40;
    }
}

impl WindowFlags {
    /// Scale selected by the flags (1x when no scale bit is set)
    pub fn scale(self) -> ScaleFactor {
        if self.contains(Self::SCALE16) {
            ScaleFactor::X16
        } else if self.contains(Self::SCALE8) {
            ScaleFactor::X8
        } else if self.contains(Self::SCALE4) {
            ScaleFactor::X4
        } else if self.contains(Self::SCALE2) {
            ScaleFactor::X2
        } else {
            ScaleFactor::X1
        }
    }

    /// Frame rate selected by the flags (20 FPS when no rate bit is set)
    pub fn frame_rate(self) -> FrameRate {
        if self.contains(Self::FPS60) {
            FrameRate::Fps60
        } else if self.contains(Self::FPS30) {
            FrameRate::Fps30
        } else {
            FrameRate::Fps20
        }
    }
}

/// Integer pixel scale from logical to on-screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ScaleFactor {
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl ScaleFactor {
    /// Multiplier as an integer
    pub const fn get(self) -> u32 {
        match self {
            ScaleFactor::X1 => 1,
            ScaleFactor::X2 => 2,
            ScaleFactor::X4 => 4,
            ScaleFactor::X8 => 8,
            ScaleFactor::X16 => 16,
        }
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ScaleFactor::X1),
            2 => Ok(ScaleFactor::X2),
            4 => Ok(ScaleFactor::X4),
            8 => Ok(ScaleFactor::X8),
            16 => Ok(ScaleFactor::X16),
            other => Err(ConfigError::InvalidScale(other)),
        }
    }
}

impl From<ScaleFactor> for u32 {
    fn from(scale: ScaleFactor) -> Self {
        scale.get()
    }
}

/// Target frame rate class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FrameRate {
    Fps20,
    Fps30,
    Fps60,
}

impl FrameRate {
    /// Frames per second
    pub const fn fps(self) -> u32 {
        match self {
            FrameRate::Fps20 => 20,
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
        }
    }

    /// Frame interval in whole milliseconds (50, 33 or 16)
    pub const fn interval_millis(self) -> u64 {
        1000 / self.fps() as u64
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            20 => Ok(FrameRate::Fps20),
            30 => Ok(FrameRate::Fps30),
            60 => Ok(FrameRate::Fps60),
            other => Err(ConfigError::InvalidFrameRate(other)),
        }
    }
}

impl From<FrameRate> for u32 {
    fn from(rate: FrameRate) -> Self {
        rate.fps()
    }
}

/// Window configuration
///
/// Everything needed to open a session. Can be built from flags, with the
/// builder methods, or loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Logical width in pixels
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    /// Scale factor (1, 2, 4, 8 or 16)
    pub scale: ScaleFactor,
    /// Target frame rate (20, 30 or 60)
    pub fps: FrameRate,
}

impl WindowConfig {
    /// Create a configuration with 1x scale and the default 20 FPS
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            scale: ScaleFactor::X1,
            fps: FrameRate::Fps20,
        }
    }

    /// Create a configuration from the flag bitmask
    ///
    /// # Example
    /// ```
    /// use framewin::{WindowConfig, WindowFlags};
    ///
    /// let config = WindowConfig::from_flags("demo", 160, 120, WindowFlags::SCALE4 | WindowFlags::FPS60);
    /// assert_eq!(config.scaled_size(), Some((640, 480)));
    /// ```
    pub fn from_flags(title: impl Into<String>, width: u32, height: u32, flags: WindowFlags) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            scale: flags.scale(),
            fps: flags.frame_rate(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: ScaleFactor) -> Self {
        self.scale = scale;
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: FrameRate) -> Self {
        self.fps = fps;
        self
    }

    /// On-screen size, or `None` if it overflows
    pub fn scaled_size(&self) -> Option<(u32, u32)> {
        let scale = self.scale.get();
        Some((self.width.checked_mul(scale)?, self.height.checked_mul(scale)?))
    }

    /// Check the title and geometry
    ///
    /// Display size is not known here; the host checks it when the window
    /// is created.
    pub fn validate(&self) -> Result<(u32, u32), crate::error::OpenError> {
        if self.title.is_empty() {
            return Err(ConfigError::EmptyTitle.into());
        }

        if self.width == 0 || self.height == 0 {
            return Err(InvalidGeometryError::ZeroSize {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        let too_large = InvalidGeometryError::TooLarge {
            width: self.width,
            height: self.height,
            scale: self.scale.get(),
            max: MAX_SURFACE_DIMENSION,
        };

        match self.scaled_size() {
            Some((w, h)) if w <= MAX_SURFACE_DIMENSION && h <= MAX_SURFACE_DIMENSION => Ok((w, h)),
            _ => Err(too_large.into()),
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: WindowConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    ///
    /// # Arguments
    /// * `path` - Path where the TOML configuration file will be saved
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Try to load configuration from file, or create default if it doesn't exist
    ///
    /// The default is written back to `path` on a best-effort basis.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("Could not load config ({}), using defaults", e);
            let config = Self::default();
            if let Err(e) = config.save_to_file(&path) {
                log::warn!("Could not save default config: {}", e);
            } else {
                log::info!("Created default configuration file");
            }
            config
        })
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("framewin", 320, 240)
            .with_scale(ScaleFactor::X2)
            .with_fps(FrameRate::Fps60)
    }
}
