use std::cell::RefCell;
use std::os::raw::c_void;
use std::rc::Rc;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::backends::headless::{HeadlessVisitor, History};
use super::backends::{self, Visitor};
use super::mesh::{Primitive, VertexLayout};
use super::shader::ShaderStage;
use super::state::RenderState;
use super::texture::TextureParams;
use super::uniform::{UniformLocation, UniformVariable};
use super::{ProgramId, ShaderId, TextureHandle, VertexArrayId};

/// A shared handle to the video backend.
///
/// Every method forwards to the underlying `Visitor`. The unsafety of the
/// visitor (its context must be current on this thread) is discharged once,
/// when the device is created: `Device` is neither `Send` nor `Sync`, so it
/// can not leave the thread that owns the context.
#[derive(Clone)]
pub struct Device {
    visitor: Rc<RefCell<Box<dyn Visitor>>>,
}

impl Device {
    /// Wraps a backend. The caller must make sure the backend's context
    /// stays current on this thread for as long as the device lives.
    pub fn new(visitor: Box<dyn Visitor>) -> Self {
        Device {
            visitor: Rc::new(RefCell::new(visitor)),
        }
    }
    /// Creates a device that validates calls without a GPU, keeping no log.
    /// Creates a device that records commands instead of talking to a GPU.
    pub fn headless() -> Self {
        Device::new(backends::new_headless())
    }

    /// Like `headless`, but also returns the history of the commands the
    /// device receives. Mostly useful in tests.
    pub fn recording() -> (Self, History) {
        let (visitor, history) = HeadlessVisitor::recording();
        (Device::new(Box::new(visitor)), history)
    }

    /// Loads the OpenGL function pointers with `loader` and creates a device
    /// on top of the current context.
    ///
    /// # Safety
    ///
    /// The context that `loader` resolves symbols for must be current on
    /// the calling thread, and stay current while the device is alive.
    pub unsafe fn gl<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        Ok(Device::new(backends::new_gl(loader)?))
    }

    fn with<T, F>(&self, func: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Visitor) -> Result<T>,
    {
        let mut visitor = self
            .visitor
            .try_borrow_mut()
            .map_err(|_| Error::Backend("The device is already in use.".into()))?;

        func(&mut **visitor)
    }

    /// Clears the color and/or depth of the default framebuffer.
    pub fn clear(&self, color: Option<[f32; 4]>, depth: Option<f32>) -> Result<()> {
        self.with(|v| unsafe { v.clear(color, depth) })
    }

    pub fn set_viewport(&self, dimensions: Vector2<u32>) -> Result<()> {
        self.with(|v| unsafe { v.set_viewport(dimensions) })
    }

    pub fn set_render_state(&self, state: RenderState) -> Result<()> {
        self.with(|v| unsafe { v.set_render_state(state) })
    }

    /// Binds a texture, possibly owned elsewhere, to texture unit `unit`.
    pub fn bind_texture(&self, unit: u32, texture: TextureHandle) -> Result<()> {
        self.with(|v| unsafe { v.bind_texture(unit, texture) })
    }

    pub fn flush(&self) -> Result<()> {
        self.with(|v| unsafe { v.flush() })
    }

    pub(crate) fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<ShaderId> {
        self.with(|v| unsafe { v.compile_shader(stage, source) })
    }

    pub(crate) fn delete_shader(&self, id: ShaderId) -> Result<()> {
        self.with(|v| unsafe { v.delete_shader(id) })
    }

    pub(crate) fn link_program(&self, shaders: &[ShaderId]) -> Result<ProgramId> {
        self.with(|v| unsafe { v.link_program(shaders) })
    }

    pub(crate) fn delete_program(&self, id: ProgramId) -> Result<()> {
        self.with(|v| unsafe { v.delete_program(id) })
    }

    pub(crate) fn use_program(&self, id: ProgramId) -> Result<()> {
        self.with(|v| unsafe { v.use_program(id) })
    }

    pub(crate) fn uniform_location(
        &self,
        id: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>> {
        self.with(|v| unsafe { v.uniform_location(id, name) })
    }

    pub(crate) fn set_uniform(
        &self,
        id: ProgramId,
        location: UniformLocation,
        variable: UniformVariable,
    ) -> Result<()> {
        self.with(|v| unsafe { v.set_uniform(id, location, variable) })
    }

    pub(crate) fn create_vertex_array(
        &self,
        layout: &VertexLayout,
        vertices: &[f32],
    ) -> Result<VertexArrayId> {
        self.with(|v| unsafe { v.create_vertex_array(layout, vertices) })
    }

    pub(crate) fn delete_vertex_array(&self, id: VertexArrayId) -> Result<()> {
        self.with(|v| unsafe { v.delete_vertex_array(id) })
    }

    pub(crate) fn draw(
        &self,
        id: VertexArrayId,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<()> {
        self.with(|v| unsafe { v.draw(id, primitive, first, count) })
    }

    pub(crate) fn create_texture(
        &self,
        params: TextureParams,
        dimensions: Vector2<u32>,
        bytes: &[u8],
    ) -> Result<TextureHandle> {
        self.with(|v| unsafe { v.create_texture(params, dimensions, bytes) })
    }

    pub(crate) fn delete_texture(&self, handle: TextureHandle) -> Result<()> {
        self.with(|v| unsafe { v.delete_texture(handle) })
    }
}
