//! Windowed host for the particle field.
//!
//! Owns the winit window, the CPU raster surface that fills it, and the
//! field. Translates window events into the plain-data notifications the
//! field expects (resize, pointer move/leave, theme change) and drives the
//! self-rescheduling redraw loop: tick, paint, present, request the next
//! frame. Presentation is vsync-paced by the surface, never self-throttled.
//!
//! Keys: `T` toggles the theme, `Escape` closes the window.

use std::sync::Arc;

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::FieldConfig;
use crate::error::HostError;
use crate::field::ParticleField;
use crate::render;
use crate::time::Time;
use crate::visuals::Theme;

const WINDOW_TITLE: &str = "plexus";
const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 720;
/// Frames between FPS readouts in the window title.
const TITLE_REFRESH_FRAMES: u64 = 30;

impl From<winit::window::Theme> for Theme {
    fn from(theme: winit::window::Theme) -> Self {
        match theme {
            winit::window::Theme::Light => Theme::Light,
            winit::window::Theme::Dark => Theme::Dark,
        }
    }
}

/// Open a window and run `config`'s field in it until the window closes.
pub fn run(config: FieldConfig) -> Result<(), HostError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// The windowed application: window, surface, field, clock.
pub struct App {
    window: Option<Arc<Window>>,
    surface: Option<Pixels<'static>>,
    frame_size: (u32, u32),
    field: ParticleField,
    time: Time,
    failure: Option<HostError>,
}

impl App {
    /// Create an app that will build its window on resume.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            window: None,
            surface: None,
            frame_size: (0, 0),
            field: ParticleField::new(config),
            time: Time::new(),
            failure: None,
        }
    }

    /// Tear the host down: drop the surface and window and stop the field.
    ///
    /// Idempotent; the redraw loop stops re-arming once the window is gone.
    pub fn shutdown(&mut self) {
        self.surface = None;
        self.window = None;
        self.field.halt();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: HostError) {
        self.failure = Some(error);
        self.shutdown();
        event_loop.exit();
    }

    fn redraw(&mut self) {
        self.time.update();
        self.field.tick();

        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };

        let (width, height) = self.frame_size;
        render::draw_field(&self.field, surface.frame_mut(), width, height);
        if let Err(e) = surface.render() {
            eprintln!("Present error: {}", e);
        }

        if self.time.frame() % TITLE_REFRESH_FRAMES == 0 {
            window.set_title(&format!("{} - {:.0} fps", WINDOW_TITLE, self.time.fps()));
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window.clone());
        let surface = match Pixels::new(width, height, surface_texture) {
            Ok(surface) => surface,
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.frame_size = (width, height);

        let theme = window.theme().map(Theme::from).unwrap_or_default();
        self.field.reset(size.width as f32, size.height as f32, theme);

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(surface) = &mut self.surface {
                        if let Err(e) = surface
                            .resize_surface(size.width, size.height)
                            .and_then(|_| surface.resize_buffer(size.width, size.height))
                        {
                            eprintln!("Resize error: {}", e);
                            return;
                        }
                        self.frame_size = (size.width, size.height);
                    }
                }
                self.field.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.field
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.field.pointer_left();
            }
            WindowEvent::ThemeChanged(theme) => {
                self.field.set_theme(theme.into());
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::KeyT => {
                    let next = self.field.theme().toggled();
                    self.field.set_theme(next);
                }
                KeyCode::Escape => {
                    self.shutdown();
                    event_loop.exit();
                }
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}
