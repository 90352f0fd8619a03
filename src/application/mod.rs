//! A minimal application model to host the demos.
//!
//! # Application
//!
//! The `Application` trait defines a simple application-state-model. The
//! associated per-frame methods are called in a pre-determined order.
//!
//! # Engine
//!
//! `Engine` is where we actully running the main loop and fire the
//! `Application` instance. Each frame it:
//!
//! 1. polls window events, feeds them to the `InputState` and forwards them
//!    to `on_event`;
//! 2. stops (calling `on_exit`) if the window was closed, Escape was pressed
//!    or a shutdown was requested;
//! 3. measures the frame and calls `on_update`;
//! 4. clears the framebuffer, calls `on_render` and swaps buffers;
//! 5. resets the per-frame input deltas.

pub mod backends;
pub mod event;
pub mod settings;
pub mod time;
pub mod window;

mod engine;

pub use self::engine::{Engine, FrameContext};
pub use self::event::{ApplicationEvent, Event, WindowEvent};
pub use self::settings::{EngineParams, Settings, WindowParams};
pub use self::window::Window;

use crate::errors::*;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// Called for every event received from the window, after the input
    /// state has seen it.
    fn on_event(&mut self, _: &mut FrameContext, _: &Event) -> Result<()> {
        Ok(())
    }

    /// `Application::on_update` is called every frame. Its the main workhorse
    /// function for frame updates.
    fn on_update(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called after the framebuffer was cleared.
    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called when the engine is about to stop.
    fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }
}
