pub mod headless;

#[cfg(feature = "window")]
pub mod glutin;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::Device;

use super::event::Event;
use super::settings::WindowParams;

/// The seam between the engine and whatever hosts the GL context.
pub trait Visitor {
    /// The size of the drawable area in pixels.
    fn dimensions(&self) -> Vector2<u32>;
    /// Appends every event received since the last call.
    fn poll_events(&mut self, events: &mut Vec<Event>) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
    /// Creates a video device bound to this window's context.
    fn create_device(&self) -> Result<Device>;
}

#[cfg(feature = "window")]
pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::new(params)?;
    Ok(Box::new(visitor))
}

#[cfg(not(feature = "window"))]
pub fn new(_: WindowParams) -> Result<Box<dyn Visitor>> {
    Err(Error::Window(
        "learngl was built without the `window` feature.".into(),
    ))
}

pub fn new_headless(dimensions: Vector2<u32>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(dimensions))
}
