//! The backend of the video module, which should be responsible for only one
//! thing: turning calls into low-level OpenGL objects and commands.

pub mod gl;
pub mod glsl;
pub mod headless;

use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::mesh::{Primitive, VertexLayout};
use super::shader::ShaderStage;
use super::state::RenderState;
use super::texture::TextureParams;
use super::uniform::{UniformLocation, UniformVariable};
use super::{ProgramId, ShaderId, TextureHandle, VertexArrayId};

/// Every method is `unsafe` because implementations may assume that their
/// graphics context is current on the calling thread.
pub trait Visitor {
    /// Compiles one stage. Failures carry the stage and the compiler log.
    unsafe fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId>;

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()>;

    /// Attaches `shaders` to a fresh program and links it. The stage
    /// objects stay alive; deleting them is up to the caller.
    unsafe fn link_program(&mut self, shaders: &[ShaderId]) -> Result<ProgramId>;

    unsafe fn delete_program(&mut self, id: ProgramId) -> Result<()>;

    unsafe fn use_program(&mut self, id: ProgramId) -> Result<()>;

    /// Returns `None` if `name` is not an active uniform of the program.
    unsafe fn uniform_location(
        &mut self,
        id: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>>;

    /// Uploads to a location of program `id`, which must be the current
    /// program.
    unsafe fn set_uniform(
        &mut self,
        id: ProgramId,
        location: UniformLocation,
        variable: UniformVariable,
    ) -> Result<()>;

    unsafe fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertices: &[f32],
    ) -> Result<VertexArrayId>;

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()>;

    unsafe fn create_texture(
        &mut self,
        params: TextureParams,
        dimensions: Vector2<u32>,
        bytes: &[u8],
    ) -> Result<TextureHandle>;

    unsafe fn delete_texture(&mut self, handle: TextureHandle) -> Result<()>;

    unsafe fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> Result<()>;

    /// Draws `count` vertices starting at `first` with the current program.
    unsafe fn draw(
        &mut self,
        id: VertexArrayId,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<()>;

    unsafe fn set_render_state(&mut self, state: RenderState) -> Result<()>;

    unsafe fn set_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()>;

    unsafe fn clear(&mut self, color: Option<[f32; 4]>, depth: Option<f32>) -> Result<()>;

    /// Blocks until all execution is complete.
    unsafe fn flush(&mut self) -> Result<()>;
}

/// Loads the OpenGL entry points and creates the `gl` visitor.
pub unsafe fn new_gl<F>(loader: F) -> Result<Box<dyn Visitor>>
where
    F: FnMut(&'static str) -> *const c_void,
{
    let visitor = self::gl::visitor::GLVisitor::load_with(loader)?;
    Ok(Box::new(visitor))
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
