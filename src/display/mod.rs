// Display module - Pixel storage, scaling and presentation
//
// This module provides:
// - Pixel buffer (caller-written, width×height 32-bit pixels)
// - Presentation surface with integer nearest-neighbor scaling
// - Host seam plus the winit/pixels window host and a headless host
// - PNG screenshots of the on-screen image

pub mod color;
pub mod framebuffer;
pub mod headless;
pub mod host;
pub mod screenshot;
pub mod surface;
pub mod window;

pub use framebuffer::PixelBuffer;
pub use headless::HeadlessHost;
pub use host::{Host, HostEvent};
pub use screenshot::save_screenshot;
pub use surface::PresentationSurface;
pub use window::WinitHost;
