// Error types
//
// Everything that can go wrong while opening, running or tearing down a
// session. Opening fails fast: when any of these is returned from `open`,
// nothing created so far is kept.

use std::io;
use thiserror::Error;

/// Requested window geometry cannot be shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGeometryError {
    /// Width or height is zero
    #[error("window size must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    /// Scaled size overflows or exceeds the largest supported surface
    #[error("scaled size {width}x{height} at {scale}x exceeds the {max}px surface limit")]
    TooLarge {
        width: u32,
        height: u32,
        scale: u32,
        max: u32,
    },

    /// Scaled size does not fit on the display
    #[error("scaled size {width}x{height} does not fit the {display_width}x{display_height} display")]
    ExceedsDisplay {
        width: u32,
        height: u32,
        display_width: u32,
        display_height: u32,
    },
}

/// Host window or presentation surface could not be created
#[derive(Debug, Error)]
pub enum SessionCreationError {
    /// Another windowed session is still open in this process
    #[error("a window session is already open")]
    AlreadyOpen,

    /// The host event loop could not be created
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// The presentation surface could not be created
    #[error("failed to create presentation surface: {0}")]
    Surface(#[from] pixels::Error),

    /// The host never delivered the resume callback that creates the window
    #[error("window was not created by the host")]
    WindowNotCreated,
}

/// Configuration could not be loaded, saved or validated
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Window title is empty
    #[error("window title must not be empty")]
    EmptyTitle,

    /// Unsupported scale value
    #[error("unsupported scale {0} (expected 1, 2, 4, 8 or 16)")]
    InvalidScale(u32),

    /// Unsupported frame rate value
    #[error("unsupported frame rate {0} (expected 20, 30 or 60)")]
    InvalidFrameRate(u32),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse error
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Any error returned when opening a session
#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidGeometry(#[from] InvalidGeometryError),

    #[error(transparent)]
    Creation(#[from] SessionCreationError),
}

/// Host failure while the session is running
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Presenting the surface to the window failed
    #[error("present failed: {0}")]
    Present(String),

    /// Presented surface size does not match what the host was opened with
    #[error("surface is {actual:?}, host expects {expected:?}")]
    SurfaceMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Errors that can occur during screenshot operations
#[derive(Debug, Error)]
pub enum ScreenshotError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_messages() {
        let err = InvalidGeometryError::ZeroSize {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "window size must be non-zero, got 0x10");
    }

    #[test]
    fn test_open_error_is_transparent() {
        let err: OpenError = ConfigError::EmptyTitle.into();
        assert_eq!(err.to_string(), "window title must not be empty");

        let err: OpenError = SessionCreationError::AlreadyOpen.into();
        assert!(matches!(
            err,
            OpenError::Creation(SessionCreationError::AlreadyOpen)
        ));
    }
}
