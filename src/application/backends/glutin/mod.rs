//! A window with an OpenGL 3.3 core context, hosted by `winit` and `glutin`.
//!
//! The event loop is never handed over to `winit`; it is pumped once per
//! frame, which keeps the engine in charge of the frame loop.

mod types;

use std::ffi::CString;
use std::num::NonZeroU32;
use std::ptr;
use std::time::Duration;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent as WinitWindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::Device;

use super::super::event::{ApplicationEvent, Event};
use super::super::settings::WindowParams;
use super::Visitor;

// How many times the loop is pumped while waiting for the first `resumed`.
const MAX_STARTUP_PUMPS: usize = 100;

// Fields drop in order, the surface and context must go before the window.
struct GlutinState {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    display: Display,
    window: winit::window::Window,
}

struct Handler {
    params: WindowParams,
    state: Option<GlutinState>,
    error: Option<Error>,
    events: Vec<Event>,
}

impl ApplicationHandler for Handler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() && self.error.is_none() {
            match create(event_loop, &self.params) {
                Ok(state) => self.state = Some(state),
                Err(err) => self.error = Some(err),
            }
        }

        self.events
            .push(Event::Application(ApplicationEvent::Resumed));
    }

    fn suspended(&mut self, _: &ActiveEventLoop) {
        self.events
            .push(Event::Application(ApplicationEvent::Suspended));
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WinitWindowEvent) {
        if let WinitWindowEvent::Resized(size) = event {
            if let Some(state) = self.state.as_ref() {
                state
                    .surface
                    .resize(&state.context, non_zero(size.width), non_zero(size.height));
            }
        }

        if let Some(v) = types::from_window_event(&event) {
            self.events.push(v);
        }
    }
}

pub struct GlutinVisitor {
    event_loop: EventLoop<()>,
    handler: Handler,
}

impl GlutinVisitor {
    pub fn new(params: WindowParams) -> Result<Self> {
        let mut event_loop = EventLoop::new().map_err(|err| Error::Window(format!("{}", err)))?;

        let mut handler = Handler {
            params,
            state: None,
            error: None,
            events: Vec::new(),
        };

        // The window can only be created inside `resumed`.
        for _ in 0..MAX_STARTUP_PUMPS {
            if handler.state.is_some() || handler.error.is_some() {
                break;
            }

            let status = event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut handler);
            if let PumpStatus::Exit(code) = status {
                return Err(Error::Window(format!(
                    "Event loop exited with {} before the window was created.",
                    code
                )));
            }
        }

        if let Some(err) = handler.error.take() {
            return Err(err);
        }

        if handler.state.is_none() {
            return Err(Error::Window("The window was never resumed.".into()));
        }

        Ok(GlutinVisitor {
            event_loop,
            handler,
        })
    }

    fn state(&self) -> Result<&GlutinState> {
        self.handler
            .state
            .as_ref()
            .ok_or_else(|| Error::Window("The window is gone.".into()))
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        match self.handler.state.as_ref() {
            Some(state) => {
                let size = state.window.inner_size();
                Vector2::new(size.width, size.height)
            }
            None => Vector2::new(0, 0),
        }
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) -> Result<()> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);

        events.append(&mut self.handler.events);

        if let PumpStatus::Exit(_) = status {
            events.push(Event::Application(ApplicationEvent::Closed));
        }

        Ok(())
    }

    fn swap_buffers(&self) -> Result<()> {
        let state = self.state()?;
        state
            .surface
            .swap_buffers(&state.context)
            .map_err(|err| Error::Window(format!("{}", err)))
    }

    fn create_device(&self) -> Result<Device> {
        let state = self.state()?;
        let display = &state.display;

        unsafe {
            Device::gl(|symbol| match CString::new(symbol) {
                Ok(symbol) => display.get_proc_address(&symbol),
                Err(_) => ptr::null(),
            })
        }
    }
}

fn create(event_loop: &ActiveEventLoop, params: &WindowParams) -> Result<GlutinState> {
    let attributes = winit::window::Window::default_attributes()
        .with_title(params.title.clone())
        .with_inner_size(LogicalSize::new(params.size[0], params.size[1]));

    let mut template = ConfigTemplateBuilder::new();
    if params.multisample > 0 {
        template = template.with_multisampling(params.multisample);
    }

    let (window, config) = DisplayBuilder::new()
        .with_window_attributes(Some(attributes))
        .build(event_loop, template, |configs| {
            // glutin hands over at least one config, or fails before calling us.
            configs
                .reduce(|accum, config| {
                    if config.num_samples() > accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("no GL config to pick from")
        })
        .map_err(|err| Error::Window(format!("{}", err)))?;

    let window = window.ok_or_else(|| Error::Window("No window was created.".into()))?;
    let raw_window_handle = window
        .window_handle()
        .map_err(|err| Error::Window(format!("{}", err)))?
        .as_raw();

    let display = config.display();
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_window_handle));

    let context = unsafe { display.create_context(&config, &context_attributes) }
        .map_err(|err| Error::Window(format!("Failed to create context: {}", err)))?;

    let size = window.inner_size();
    let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        non_zero(size.width),
        non_zero(size.height),
    );

    let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
        .map_err(|err| Error::Window(format!("Failed to create surface: {}", err)))?;

    let context = context
        .make_current(&surface)
        .map_err(|err| Error::Window(format!("Failed to make context current: {}", err)))?;

    let interval = if params.vsync {
        SwapInterval::Wait(NonZeroU32::MIN)
    } else {
        SwapInterval::DontWait
    };

    if let Err(err) = surface.set_swap_interval(&context, interval) {
        warn!("Failed to set swap interval: {}", err);
    }

    info!(
        "Created window {:?} of {}x{} with {} samples.",
        params.title,
        size.width,
        size.height,
        config.num_samples()
    );

    Ok(GlutinState {
        surface,
        context,
        display,
        window,
    })
}

#[inline]
fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}
