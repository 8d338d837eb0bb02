// Session - One open window and its frame loop
//
// A session owns the host window, the pixel buffer the caller draws into,
// the scaled presentation surface, the input state and the frame clock.
//
// Each `update` runs three steps in a fixed order:
// 1. blit the pixel buffer to the surface and present it
// 2. sleep until the next frame boundary
// 3. drain queued host events into the input state
//
// Pixels written before `update` are therefore on screen when it returns,
// and input read after it reflects every event queued before the drain.

use crate::config::{FrameRate, ScaleFactor, WindowConfig, WindowFlags};
use crate::display::{
    save_screenshot, Host, HostEvent, PixelBuffer, PresentationSurface, WinitHost,
};
use crate::error::{OpenError, ScreenshotError};
use crate::input::{InputState, KEY_COUNT};
use crate::timing::{Clock, FrameClock, FrameTiming, SystemClock};
use std::path::{Path, PathBuf};

/// An open window with a caller-writable pixel buffer
///
/// # Example
/// ```no_run
/// use framewin::{Session, WindowFlags};
///
/// let mut session = Session::open("demo", 160, 120, WindowFlags::SCALE4 | WindowFlags::FPS60)?;
/// while !session.quit() {
///     session.set_pixel(10, 10, 0xFF0000);
///     session.update();
/// }
/// session.close();
/// # Ok::<(), framewin::OpenError>(())
/// ```
pub struct Session<H: Host = WinitHost, C: Clock = SystemClock> {
    host: H,
    config: WindowConfig,
    buffer: PixelBuffer,
    surface: PresentationSurface,
    input: InputState,
    frames: FrameClock<C>,
    /// Reused between drains
    events: Vec<HostEvent>,
    frame_count: u64,
    last_timing: FrameTiming,
    closed: bool,
}

impl Session<WinitHost, SystemClock> {
    /// Open a window
    ///
    /// # Arguments
    /// * `title` - Window title (non-empty)
    /// * `width` - Logical width in pixels (non-zero)
    /// * `height` - Logical height in pixels (non-zero)
    /// * `flags` - One scale flag and one frame rate flag
    pub fn open(
        title: &str,
        width: u32,
        height: u32,
        flags: WindowFlags,
    ) -> Result<Self, OpenError> {
        Self::from_config(WindowConfig::from_flags(title, width, height, flags))
    }

    /// Open a window from a configuration
    pub fn from_config(config: WindowConfig) -> Result<Self, OpenError> {
        let surface_size = config.validate()?;
        let host = WinitHost::open(&config, surface_size)?;
        Self::with_host_and_clock(config, host, SystemClock::new())
    }
}

impl<H: Host> Session<H, SystemClock> {
    /// Open a session on a custom host, paced by the wall clock
    pub fn with_host(config: WindowConfig, host: H) -> Result<Self, OpenError> {
        Self::with_host_and_clock(config, host, SystemClock::new())
    }
}

impl<H: Host, C: Clock> Session<H, C> {
    /// Open a session on a custom host and clock
    ///
    /// The configuration is validated before the session is assembled; on
    /// error the host is dropped.
    pub fn with_host_and_clock(
        config: WindowConfig,
        host: H,
        clock: C,
    ) -> Result<Self, OpenError> {
        let (surface_width, surface_height) = config.validate()?;

        log::info!(
            "Opened \"{}\": {}x{} at {}x ({}x{} on screen), {} FPS",
            config.title,
            config.width,
            config.height,
            config.scale.get(),
            surface_width,
            surface_height,
            config.fps.fps()
        );

        Ok(Self {
            host,
            buffer: PixelBuffer::new(config.width, config.height),
            surface: PresentationSurface::new(config.width, config.height, config.scale),
            input: InputState::new(),
            frames: FrameClock::new(clock, config.fps),
            config,
            events: Vec::new(),
            frame_count: 0,
            last_timing: FrameTiming::default(),
            closed: false,
        })
    }

    /// Logical width in pixels
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// On-screen size in pixels
    pub fn scaled_size(&self) -> (u32, u32) {
        self.surface.size()
    }

    pub fn scale(&self) -> ScaleFactor {
        self.config.scale
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.config.fps
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Pixel buffer, row-major
    pub fn pixels(&self) -> &[u32] {
        self.buffer.as_slice()
    }

    /// Mutable pixel buffer, row-major; index with `y * width + x`
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        self.buffer.as_mut_slice()
    }

    /// The pixel buffer itself
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Read a pixel
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.buffer.get_pixel(x, y)
    }

    /// Write a pixel
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        self.buffer.set_pixel(x, y, color);
    }

    /// Fill the pixel buffer with one color
    pub fn clear(&mut self, color: u32) {
        self.buffer.clear(color);
    }

    /// The on-screen surface as of the last paint
    pub fn surface(&self) -> &PresentationSurface {
        &self.surface
    }

    /// Whether the window was asked to close
    pub fn quit(&self) -> bool {
        self.input.quit()
    }

    /// Key table indexed by 8-bit key code
    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        self.input.keys()
    }

    /// Whether a key is held down
    pub fn key(&self, code: u8) -> bool {
        self.input.is_pressed(code)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Number of completed updates
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Pacing result of the last update
    pub fn last_timing(&self) -> FrameTiming {
        self.last_timing
    }

    pub fn frame_clock(&self) -> &FrameClock<C> {
        &self.frames
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Present the buffer, wait for the next frame, then take in input
    ///
    /// If presenting fails the error is logged and `quit` is set.
    pub fn update(&mut self) -> FrameTiming {
        self.paint();
        let timing = self.frames.sync();
        self.drain();

        self.frame_count += 1;
        self.last_timing = timing;
        timing
    }

    /// Save the on-screen image as a PNG in `dir`
    pub fn save_screenshot(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(&self.surface, dir.as_ref())
    }

    /// Close the window and release everything
    pub fn close(mut self) {
        self.teardown();
    }

    /// Close the window and end the process
    pub fn exit(self) -> ! {
        self.close();
        std::process::exit(0)
    }

    fn paint(&mut self) {
        self.surface.blit(&self.buffer);
        if let Err(err) = self.host.present(&self.surface) {
            log::error!("Render error: {}", err);
            self.input.request_quit();
        }
    }

    fn drain(&mut self) {
        let mut events = std::mem::take(&mut self.events);
        self.host.drain_events(&mut events);

        if !events.is_empty() {
            log::trace!("Draining {} host events", events.len());
        }
        for event in events.drain(..) {
            self.handle_event(event);
        }
        self.events = events;
    }

    fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::CloseRequested | HostEvent::Quit => {
                if !self.input.quit() {
                    log::info!("Close requested");
                }
                self.input.request_quit();
            }
            HostEvent::Paint => self.paint(),
            HostEvent::Key { code, pressed } => self.input.set_key(code, pressed),
            HostEvent::Other => {}
        }
    }

    fn teardown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.host.close();
        log::info!(
            "Closed \"{}\" after {} frames",
            self.config.title,
            self.frame_count
        );
    }
}

impl<H: Host, C: Clock> Drop for Session<H, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::{BLACK, RED, WHITE};
    use crate::display::HeadlessHost;
    use crate::error::{ConfigError, InvalidGeometryError};
    use crate::input::vk;
    use crate::timing::ManualClock;
    use std::time::Duration;

    fn headless(config: WindowConfig) -> (Session<HeadlessHost, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let session = Session::with_host_and_clock(config, HeadlessHost::new(), clock.clone())
            .expect("headless session");
        (session, clock)
    }

    #[test]
    fn test_open_allocates_buffer_and_surface() {
        let (session, _) = headless(WindowConfig::from_flags("t", 5, 3, WindowFlags::SCALE8));
        assert_eq!(session.pixels().len(), 15);
        assert_eq!(session.scaled_size(), (40, 24));
        assert!(session.pixels().iter().all(|&p| p == BLACK));
        assert!(!session.quit());
        assert_eq!(session.input().pressed_count(), 0);
    }

    #[test]
    fn test_open_rejects_bad_config() {
        let result = Session::with_host(WindowConfig::new("t", 0, 3), HeadlessHost::new());
        assert!(matches!(
            result,
            Err(OpenError::InvalidGeometry(InvalidGeometryError::ZeroSize { .. }))
        ));

        let result = Session::with_host(WindowConfig::new("", 3, 3), HeadlessHost::new());
        assert!(matches!(result, Err(OpenError::Config(ConfigError::EmptyTitle))));
    }

    #[test]
    fn test_update_presents_scaled_frame() {
        let (mut session, _) = headless(WindowConfig::from_flags("t", 2, 2, WindowFlags::SCALE2));
        session.set_pixel(1, 0, WHITE);
        session.update();

        let host = session.host();
        assert_eq!(host.present_count(), 1);
        assert_eq!(host.frame_pixel(2, 0), WHITE);
        assert_eq!(host.frame_pixel(3, 1), WHITE);
        assert_eq!(host.frame_pixel(1, 1), BLACK);
    }

    #[test]
    fn test_update_paces_and_counts() {
        let (mut session, clock) = headless(WindowConfig::from_flags("t", 1, 1, WindowFlags::FPS30));
        let timing = session.update();
        assert_eq!(timing.slept, Duration::from_millis(33));
        assert_eq!(clock.now(), Duration::from_millis(33));
        assert_eq!(session.frame_count(), 1);
        assert_eq!(session.last_timing(), timing);
    }

    #[test]
    fn test_paint_event_repaints() {
        let (mut session, _) = headless(WindowConfig::new("t", 1, 1));
        session.host_mut().push_event(HostEvent::Paint);
        session.update();
        assert_eq!(session.host().present_count(), 2);
    }

    #[test]
    fn test_keys_and_other_events() {
        let (mut session, _) = headless(WindowConfig::new("t", 1, 1));
        session.host_mut().push_key(vk::ESCAPE as u32, true);
        session.host_mut().push_event(HostEvent::Other);
        session.update();
        assert!(session.key(vk::ESCAPE));
        assert!(session.keys()[0x1B]);
        assert!(!session.quit());
    }

    #[test]
    fn test_present_failure_sets_quit() {
        let (mut session, _) = headless(WindowConfig::new("t", 1, 1));
        session.host_mut().fail_next_present("gone");
        session.update();
        assert!(session.quit());
    }

    #[test]
    fn test_close_releases_host() {
        let (mut session, _) = headless(WindowConfig::new("t", 2, 2));
        session.clear(RED);
        session.update();
        session.teardown();
        assert!(session.host().is_closed());
        // teardown runs once even though drop follows
        session.teardown();
    }
}
