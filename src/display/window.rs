// Window module - Desktop host built on winit and pixels
//
// The window is created non-resizable with a physical inner size equal to
// the scaled surface, so one surface pixel is one screen pixel. Events are
// pumped on demand (never blocking) instead of handing control to winit's
// run loop, which lets the caller own the frame loop.

use super::host::{Host, HostEvent};
use super::surface::PresentationSurface;
use crate::config::WindowConfig;
use crate::error::{HostError, InvalidGeometryError, OpenError, SessionCreationError};
use crate::input::vk_from_physical;
use pixels::{Pixels, SurfaceTexture};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowButtons, WindowId};

/// How long `open` waits for the host to deliver the window
const CREATE_TIMEOUT: Duration = Duration::from_millis(100);

static WINDOW_OPEN: AtomicBool = AtomicBool::new(false);

/// Claim on the process-wide window slot; released on drop
#[derive(Debug)]
struct WindowLease;

impl WindowLease {
    fn acquire() -> Result<Self, SessionCreationError> {
        if WINDOW_OPEN.swap(true, Ordering::AcqRel) {
            return Err(SessionCreationError::AlreadyOpen);
        }
        Ok(WindowLease)
    }
}

impl Drop for WindowLease {
    fn drop(&mut self) {
        WINDOW_OPEN.store(false, Ordering::Release);
    }
}

/// Receives winit callbacks and queues them as host events
///
/// Field order matters: the surface must drop before its window.
struct EventQueue {
    pixels: Option<Pixels<'static>>,
    window: Option<Arc<Window>>,
    attributes: Option<WindowAttributes>,
    surface_size: (u32, u32),
    error: Option<OpenError>,
    events: Vec<HostEvent>,
}

impl EventQueue {
    fn new(attributes: WindowAttributes, surface_size: (u32, u32)) -> Self {
        Self {
            pixels: None,
            window: None,
            attributes: Some(attributes),
            surface_size,
            error: None,
            events: Vec::new(),
        }
    }

    fn create(
        &mut self,
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
    ) -> Result<(), OpenError> {
        let (width, height) = self.surface_size;

        if let Some(monitor) = event_loop.primary_monitor() {
            let display = monitor.size();
            if width > display.width || height > display.height {
                return Err(InvalidGeometryError::ExceedsDisplay {
                    width,
                    height,
                    display_width: display.width,
                    display_height: display.height,
                }
                .into());
            }
        }

        let window = event_loop
            .create_window(attributes)
            .map_err(SessionCreationError::from)?;

        // Wrap window in Arc for shared ownership
        let window = Arc::new(window);
        let window_size = window.inner_size();

        // Create surface texture using Arc<Window> for safe 'static lifetime
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels =
            Pixels::new(width, height, surface_texture).map_err(SessionCreationError::from)?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }
}

/// Map a winit window event to the host event it produces
fn translate(event: &WindowEvent) -> HostEvent {
    match event {
        WindowEvent::CloseRequested => HostEvent::CloseRequested,
        WindowEvent::Destroyed => HostEvent::Quit,
        WindowEvent::RedrawRequested | WindowEvent::Resized(_) => HostEvent::Paint,
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key,
                    state,
                    ..
                },
            ..
        } => match vk_from_physical(*physical_key) {
            Some(code) => HostEvent::Key {
                code: code as u32,
                pressed: *state == ElementState::Pressed,
            },
            None => HostEvent::Other,
        },
        _ => HostEvent::Other,
    }
}

/// The window surface only accepts images of the size it was opened with
fn check_surface_size(
    expected: (u32, u32),
    surface: &PresentationSurface,
) -> Result<(), HostError> {
    if surface.size() == expected {
        Ok(())
    } else {
        Err(HostError::SurfaceMismatch {
            expected,
            actual: surface.size(),
        })
    }
}

impl ApplicationHandler for EventQueue {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };

        if let Err(err) = self.create(event_loop, attributes) {
            self.error = Some(err);
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(size) = event {
            if let Some(pixels) = &mut self.pixels {
                if let Err(err) = pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                    log::warn!("Could not resize surface: {}", err);
                }
            }
        }
        self.events.push(translate(&event));
    }
}

/// Host window backed by winit + pixels
///
/// Only one can be open per process.
pub struct WinitHost {
    queue: EventQueue,
    event_loop: EventLoop<()>,
    exited: bool,
    lease: Option<WindowLease>,
}

impl WinitHost {
    /// Create and show the window
    ///
    /// # Arguments
    /// * `config` - Window configuration (title is used as-is)
    /// * `surface_size` - Scaled surface size, already validated
    pub fn open(config: &WindowConfig, surface_size: (u32, u32)) -> Result<Self, OpenError> {
        let lease = WindowLease::acquire()?;
        let mut event_loop = EventLoop::new().map_err(SessionCreationError::from)?;

        let size = PhysicalSize::new(surface_size.0, surface_size.1);
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(size)
            .with_resizable(false)
            .with_enabled_buttons(WindowButtons::CLOSE | WindowButtons::MINIMIZE);

        let mut queue = EventQueue::new(attributes, surface_size);

        // Windows are created inside `resumed`, which the first pump delivers.
        let status = event_loop.pump_app_events(Some(CREATE_TIMEOUT), &mut queue);
        if let Some(err) = queue.error.take() {
            return Err(err);
        }
        if queue.window.is_none() || matches!(status, PumpStatus::Exit(_)) {
            return Err(SessionCreationError::WindowNotCreated.into());
        }

        log::debug!(
            "Window created: {}x{} physical, {} startup events",
            surface_size.0,
            surface_size.1,
            queue.events.len()
        );

        Ok(Self {
            queue,
            event_loop,
            exited: false,
            lease: Some(lease),
        })
    }

}

impl Host for WinitHost {
    fn present(&mut self, surface: &PresentationSurface) -> Result<(), HostError> {
        check_surface_size(self.queue.surface_size, surface)?;

        let Some(pixels) = &mut self.queue.pixels else {
            return Err(HostError::Present("surface released".to_string()));
        };

        surface.write_rgba(pixels.frame_mut());
        pixels
            .render()
            .map_err(|err| HostError::Present(err.to_string()))
    }

    fn drain_events(&mut self, events: &mut Vec<HostEvent>) {
        if !self.exited {
            let status = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.queue);
            if let PumpStatus::Exit(code) = status {
                log::debug!("Event loop exited with code {}", code);
                self.exited = true;
                self.queue.events.push(HostEvent::Quit);
            }
        }
        events.append(&mut self.queue.events);
    }

    fn close(&mut self) {
        self.queue.pixels = None;
        self.queue.window = None;

        // Let the host process the window destruction.
        if !self.exited {
            let _ = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.queue);
        }
        self.queue.events.clear();
        self.lease = None;
    }
}
