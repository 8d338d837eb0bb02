// Headless host - A host without a window
//
// Keeps a copy of the last presented surface and a queue of events that the
// owner pushes by hand. Used for tests and for rendering without a display.

use super::host::{Host, HostEvent};
use super::surface::PresentationSurface;
use crate::error::HostError;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// In-memory host
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pending: VecDeque<HostEvent>,
    frame: Vec<u32>,
    frame_size: (u32, u32),
    presents: u64,
    fail_next_present: Option<String>,
    closed: Rc<Cell<bool>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next drain
    pub fn push_event(&mut self, event: HostEvent) {
        self.pending.push_back(event);
    }

    /// Queue a key transition
    pub fn push_key(&mut self, code: u32, pressed: bool) {
        self.push_event(HostEvent::Key { code, pressed });
    }

    /// Queue a window close request
    pub fn push_close(&mut self) {
        self.push_event(HostEvent::CloseRequested);
    }

    /// Number of events not yet drained
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Make the next present fail with `message`
    pub fn fail_next_present(&mut self, message: impl Into<String>) {
        self.fail_next_present = Some(message.into());
    }

    /// Last presented image, row-major
    pub fn last_frame(&self) -> &[u32] {
        &self.frame
    }

    /// Size of the last presented image
    pub fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }

    /// Pixel of the last presented image
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn frame_pixel(&self, x: u32, y: u32) -> u32 {
        let (width, height) = self.frame_size;
        assert!(x < width && y < height, "({}, {}) off frame", x, y);
        self.frame[y as usize * width as usize + x as usize]
    }

    /// Number of successful presents
    pub fn present_count(&self) -> u64 {
        self.presents
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Shared view of the closed state that outlives the host
    ///
    /// Lets a test observe teardown after the owning session is gone.
    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl Host for HeadlessHost {
    fn present(&mut self, surface: &PresentationSurface) -> Result<(), HostError> {
        if let Some(message) = self.fail_next_present.take() {
            return Err(HostError::Present(message));
        }

        self.frame.clear();
        self.frame.extend_from_slice(surface.as_slice());
        self.frame_size = surface.size();
        self.presents += 1;
        Ok(())
    }

    fn drain_events(&mut self, events: &mut Vec<HostEvent>) {
        events.extend(self.pending.drain(..));
    }

    fn close(&mut self) {
        self.pending.clear();
        self.closed.set(true);
    }
}
