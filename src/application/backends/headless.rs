use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::Device;

use super::super::event::Event;
use super::Visitor;

pub struct HeadlessVisitor {
    dimensions: Vector2<u32>,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>) -> Self {
        HeadlessVisitor { dimensions }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    fn poll_events(&mut self, _: &mut Vec<Event>) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn create_device(&self) -> Result<Device> {
        Ok(Device::headless())
    }
}
