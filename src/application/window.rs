use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::Device;

use super::backends::{self, Visitor};
use super::event::Event;
use super::settings::WindowParams;

/// Represents an OpenGL context and the window or environment around it.
pub struct Window {
    visitor: Box<dyn Visitor>,
    pending: Vec<Event>,
}

impl Window {
    /// Creates a new `Window` and initalize OpenGL context.
    pub fn new(params: WindowParams) -> Result<Self> {
        Ok(Window {
            visitor: backends::new(params)?,
            pending: Vec::new(),
        })
    }

    /// Creates a new `Window` with headless context.
    pub fn headless(dimensions: Vector2<u32>) -> Self {
        Window {
            visitor: backends::new_headless(dimensions),
            pending: Vec::new(),
        }
    }

    /// Queues an event, it will be delivered before the events of the
    /// platform on the next poll.
    pub fn push_event(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Returns the size of the drawable area in pixels.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Creates a video device bound to this window's context.
    #[inline]
    pub fn create_device(&self) -> Result<Device> {
        self.visitor.create_device()
    }

    /// Moves every received event into `events`.
    pub fn poll_events(&mut self, events: &mut Vec<Event>) -> Result<()> {
        events.append(&mut self.pending);
        self.visitor.poll_events(events)
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the
    /// next time the screen is refreshed. However drivers can choose to
    /// override your vsync settings, which means that you can't know in advance
    /// whether `swap_buffers` will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }
}
