// framewin - Open a window and set pixels
//
// A small framebuffer window: write 32-bit pixels into a buffer, call
// `update` once per frame, read keys and the quit flag.

// Public modules
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod session;
pub mod timing;

// Re-export main types for convenience
pub use config::{FrameRate, ScaleFactor, WindowConfig, WindowFlags, CONFIG_FILE};
pub use display::color::rgb;
pub use display::{HeadlessHost, Host, HostEvent, PixelBuffer, PresentationSurface, WinitHost};
pub use error::{
    ConfigError, HostError, InvalidGeometryError, OpenError, ScreenshotError,
    SessionCreationError,
};
pub use input::{vk, InputState, KEY_COUNT};
pub use session::Session;
pub use timing::{Clock, FrameClock, FrameTiming, ManualClock, SystemClock};
