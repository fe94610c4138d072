//! Standalone viewer window backed by winit.
//!
//! The window translates platform events into [`InputEvent`]s and runs one
//! composer frame per redraw. Drawing goes to a [`TraceBackend`]; a GPU
//! backend plugs in through the same [`RenderBackend`] seam.
//!
//! ```no_run
//! # use diorama::{Viewer, SceneComposer, options::Options, scene::Scene, camera::PresetTable};
//! let composer = SceneComposer::new(Options::default(), Scene::new(), PresetTable::defaults());
//! Viewer::builder(composer)
//!     .with_title("Knight Model Viewer")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{FrameHost, FrameLoop, SceneComposer},
    error::DioramaError,
    input::{InputEvent, MouseButton},
    render::{RenderBackend, TraceBackend},
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    composer: SceneComposer,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Override the window title (defaults to the display options title).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let title = self
            .title
            .unwrap_or_else(|| self.composer.options().display.title.clone());
        Viewer {
            composer: self.composer,
            title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a composed scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    composer: SceneComposer,
    title: String,
}

impl Viewer {
    /// Start a new builder around a ready composer.
    #[must_use]
    pub fn builder(composer: SceneComposer) -> ViewerBuilder {
        ViewerBuilder {
            composer,
            title: None,
        }
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or a quit command arrives.
    pub fn run(self) -> Result<(), DioramaError> {
        let event_loop =
            EventLoop::new().map_err(|e| DioramaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            host: None,
            frame_loop: FrameLoop::new(self.composer),
            backend: TraceBackend::new(),
            title: self.title,
            last_title_update: Instant::now(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DioramaError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Window host ──────────────────────────────────────────────────────────

/// Queues translated window events until the next frame polls them.
struct WindowHost {
    window: Arc<Window>,
    pending: Vec<InputEvent>,
}

impl FrameHost for WindowHost {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        events.append(&mut self.pending);
    }

    fn present(&mut self) -> Result<(), DioramaError> {
        self.window.pre_present_notify();
        Ok(())
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    host: Option<WindowHost>,
    frame_loop: FrameLoop,
    backend: TraceBackend,
    title: String,
    last_title_update: Instant,
    /// First fatal error, returned from [`Viewer::run`].
    error: Option<DioramaError>,
}

impl ViewerApp {
    /// Title refresh interval.
    const TITLE_INTERVAL: Duration = Duration::from_millis(250);

    fn push_event(&mut self, event: InputEvent) {
        if let Some(host) = &mut self.host {
            host.pending.push(event);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(host) = &mut self.host else {
            return;
        };
        let backend: &mut dyn RenderBackend = &mut self.backend;
        if let Err(e) = self.frame_loop.next_frame(host, backend) {
            log::error!("frame failed: {e}");
            self.error = Some(e);
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_title_update) >= Self::TITLE_INTERVAL {
            let composer = self.frame_loop.composer();
            let preset = composer
                .camera_rig()
                .active_preset()
                .map_or("Free", |p| p.label.as_str());
            host.window.set_title(&format!(
                "{} - {preset} ({:.0} fps)",
                self.title,
                self.frame_loop.timing().fps()
            ));
            self.last_title_update = now;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        let display = &self.frame_loop.composer().options().display;
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                display.width,
                display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.error = Some(DioramaError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.frame_loop
            .composer_mut()
            .resize(inner.width, inner.height);
        window.request_redraw();
        self.host = Some(WindowHost {
            window,
            pending: Vec::new(),
        });
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.composer().quit_requested() {
            event_loop.exit();
            return;
        }
        let timing = self.frame_loop.timing();
        if timing.should_render() {
            event_loop.set_control_flow(ControlFlow::Poll);
            if let Some(host) = &self.host {
                host.window.request_redraw();
            }
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + timing.time_until_next_frame(),
            ));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.push_event(InputEvent::Quit),

            WindowEvent::Resized(size) => {
                self.frame_loop
                    .composer_mut()
                    .resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::MouseInput { button, state, .. } => {
                self.push_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.push_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.push_event(InputEvent::Scroll { delta });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.push_event(InputEvent::KeyDown {
                    key: format!("{code:?}"),
                });
            }

            _ => (),
        }
    }
}
