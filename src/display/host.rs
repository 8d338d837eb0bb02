// Host seam - What a session needs from a windowing system
//
// A host shows a presentation surface and hands back the window and keyboard
// events it has queued. Events are returned as plain values; the session
// translates them after the host returns, so no host callback ever runs
// caller code.

use super::surface::PresentationSurface;
use crate::error::HostError;

/// A window or input event, reduced to what a session acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The user asked to close the window
    CloseRequested,
    /// The host is shutting down
    Quit,
    /// The window contents must be drawn again
    Paint,
    /// A key changed state
    Key {
        /// Host key code; only the low 8 bits index the key table
        code: u32,
        /// true on key-down, false on key-up
        pressed: bool,
    },
    /// Anything else; no state change
    Other,
}

impl HostEvent {
    /// Key-down event
    pub fn key_down(code: u32) -> Self {
        HostEvent::Key {
            code,
            pressed: true,
        }
    }

    /// Key-up event
    pub fn key_up(code: u32) -> Self {
        HostEvent::Key {
            code,
            pressed: false,
        }
    }
}

/// Windowing host driven by a session
pub trait Host {
    /// Show the surface on screen, returning once it has been submitted
    fn present(&mut self, surface: &PresentationSurface) -> Result<(), HostError>;

    /// Append every queued event to `events` without blocking
    fn drain_events(&mut self, events: &mut Vec<HostEvent>);

    /// Release the window and surface
    ///
    /// Called once; the host is not used afterwards.
    fn close(&mut self);
}
