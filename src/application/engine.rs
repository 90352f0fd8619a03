use std::time::Duration;

use crate::errors::*;
use crate::input::{InputEvent, InputState, Key};
use crate::math::prelude::Vector2;
use crate::video::{Device, RenderState};

use super::event::{ApplicationEvent, Event, WindowEvent};
use super::settings::{EngineParams, Settings};
use super::time::FrameTimer;
use super::window::Window;
use super::Application;

/// Everything an `Application` can reach during a frame.
pub struct FrameContext {
    pub device: Device,
    pub input: InputState,
    dimensions: Vector2<u32>,
    timestep: Duration,
    frames: u64,
    shutdown: bool,
}

impl FrameContext {
    /// Seconds elapsed during the last frame.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    /// Gets the duration of the last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }

    /// The number of frames updated so far, the current one included.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The size of the drawable area in pixels.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Width divided by height, 1 for a degenerated window.
    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.dimensions.y == 0 {
            1.0
        } else {
            self.dimensions.x as f32 / self.dimensions.y as f32
        }
    }

    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

/// `Engine` owns the window, the device and the frame loop, and drives an
/// `Application` through it.
pub struct Engine {
    window: Window,
    context: FrameContext,
    timer: FrameTimer,
    params: EngineParams,
}

impl Engine {
    /// Constructs a new engine with default settings.
    pub fn new() -> Result<Self> {
        Engine::new_with(&Settings::default())
    }

    /// Setup engine with specified settings.
    pub fn new_with(settings: &Settings) -> Result<Self> {
        let window = if settings.headless {
            let size = settings.window.size;
            Window::headless(Vector2::new(size[0], size[1]))
        } else {
            Window::new(settings.window.clone())?
        };

        let device = window.create_device()?;
        Engine::from_parts(window, device, settings)
    }

    /// Setup engine on top of an existing window and device.
    pub fn from_parts(window: Window, device: Device, settings: &Settings) -> Result<Self> {
        let params = settings.engine;
        let dimensions = window.dimensions();

        device.set_viewport(dimensions)?;
        device.set_render_state(RenderState {
            depth_test: params.depth_test,
            ..Default::default()
        })?;

        info!(
            "Engine started with {}x{} drawable, {} to {} fps.",
            dimensions.x, dimensions.y, params.min_fps, params.max_fps
        );

        Ok(Engine {
            window,
            context: FrameContext {
                device,
                input: InputState::new(),
                dimensions,
                timestep: Duration::from_secs(0),
                frames: 0,
                shutdown: false,
            },
            timer: FrameTimer::new(&params),
            params,
        })
    }

    #[inline]
    pub fn context(&mut self) -> &mut FrameContext {
        &mut self.context
    }

    #[inline]
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Run the main loop of `Engine`, this will block the working thread
    /// until the window is closed, Escape is pressed or the application
    /// asks for a shutdown.
    pub fn run<T: Application>(mut self, mut application: T) -> Result<()> {
        let mut events = Vec::new();

        loop {
            let mut alive = true;

            events.clear();
            self.window.poll_events(&mut events)?;

            for v in &events {
                match *v {
                    Event::Application(ApplicationEvent::Closed) => alive = false,
                    Event::Window(WindowEvent::Resized(w, h)) => {
                        self.context.dimensions = Vector2::new(w, h);
                        self.context.device.set_viewport(self.context.dimensions)?;
                    }
                    Event::InputDevice(input) => {
                        if let InputEvent::KeyboardPressed { key: Key::Escape } = input {
                            alive = false;
                        }

                        self.context.input.on_event(input);
                    }
                    _ => {}
                }

                application.on_event(&mut self.context, v)?;
            }

            if !alive || self.context.shutdown {
                application.on_exit(&mut self.context)?;
                break;
            }

            self.context.timestep = self.timer.advance();
            self.context.frames = self.timer.frames();
            application.on_update(&mut self.context)?;

            let depth = if self.params.depth_test {
                Some(1.0)
            } else {
                None
            };

            self.context
                .device
                .clear(Some(self.params.clear_color), depth)?;

            application.on_render(&mut self.context)?;
            self.window.swap_buffers()?;
            self.context.input.advance();
        }

        info!("Engine stopped after {} frames.", self.context.frames);
        Ok(())
    }
}
