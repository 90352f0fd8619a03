use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;

use gl::types::*;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::utils::FastHashMap;

use super::super::super::mesh::{Primitive, VertexLayout};
use super::super::super::shader::ShaderStage;
use super::super::super::state::RenderState;
use super::super::super::texture::TextureParams;
use super::super::super::uniform::{UniformLocation, UniformVariable};
use super::super::super::{ProgramId, ShaderId, TextureHandle, VertexArrayId};
use super::super::Visitor;
use super::capabilities::Capabilities;
use super::types;

struct GLMutableState {
    render_state: RenderState,
    viewport: Option<Vector2<u32>>,
    binded_program: Option<ProgramId>,
    binded_vao: Option<VertexArrayId>,
    binded_texture_unit: u32,
    binded_textures: Vec<Option<TextureHandle>>,
}

pub struct GLVisitor {
    state: GLMutableState,
    capabilities: Capabilities,
    buffers: FastHashMap<VertexArrayId, GLuint>,
}

impl GLVisitor {
    /// Loads the function pointers with `loader` and checks that the current
    /// context is good enough.
    pub unsafe fn load_with<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self::new()
    }

    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!("GLVisitor {:#?}", capabilities);
        capabilities.check()?;

        let state = GLMutableState {
            render_state: RenderState::default(),
            viewport: None,
            binded_program: None,
            binded_vao: None,
            binded_texture_unit: 0,
            binded_textures: Vec::new(),
        };

        let mut visitor = GLVisitor {
            state,
            capabilities,
            buffers: FastHashMap::default(),
        };

        Self::reset_render_state(&mut visitor.state)?;
        Ok(visitor)
    }

    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl Visitor for GLVisitor {
    unsafe fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId> {
        if stage == ShaderStage::Geometry && !self.capabilities.has_geometry_shader() {
            return Err(Error::Requirement(format!(
                "geometry shaders with {:?}",
                self.capabilities.version
            )));
        }

        let src = CString::new(source.as_bytes()).map_err(|_| Error::Compile {
            stage,
            log: "ERROR: 0:0: source contains a NUL byte".into(),
        })?;

        let shader = gl::CreateShader(stage.into());
        gl::ShaderSource(shader, 1, &src.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let log = info_log(len, |len, written, buf| {
                gl::GetShaderInfoLog(shader, len, written, buf)
            });

            gl::DeleteShader(shader);
            return Err(Error::Compile { stage, log });
        }

        check()?;
        Ok(ShaderId::new(shader))
    }

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()> {
        gl::DeleteShader(id.raw());
        check()
    }

    unsafe fn link_program(&mut self, shaders: &[ShaderId]) -> Result<ProgramId> {
        let program = gl::CreateProgram();
        for shader in shaders {
            gl::AttachShader(program, shader.raw());
        }

        gl::LinkProgram(program);

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        for shader in shaders {
            gl::DetachShader(program, shader.raw());
        }

        if status != GLint::from(gl::TRUE) {
            let mut len = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let log = info_log(len, |len, written, buf| {
                gl::GetProgramInfoLog(program, len, written, buf)
            });

            gl::DeleteProgram(program);
            return Err(Error::Link(log));
        }

        check()?;
        Ok(ProgramId::new(program))
    }

    unsafe fn delete_program(&mut self, id: ProgramId) -> Result<()> {
        if self.state.binded_program == Some(id) {
            gl::UseProgram(0);
            self.state.binded_program = None;
        }

        gl::DeleteProgram(id.raw());
        check()
    }

    unsafe fn use_program(&mut self, id: ProgramId) -> Result<()> {
        if self.state.binded_program == Some(id) {
            return Ok(());
        }

        gl::UseProgram(id.raw());
        check()?;

        self.state.binded_program = Some(id);
        Ok(())
    }

    unsafe fn uniform_location(
        &mut self,
        id: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>> {
        let c_name = match CString::new(name.as_bytes()) {
            Ok(v) => v,
            Err(_) => return Ok(None),
        };

        let location = gl::GetUniformLocation(id.raw(), c_name.as_ptr());
        check()?;

        if location == -1 {
            Ok(None)
        } else {
            Ok(Some(UniformLocation::new(location)))
        }
    }

    unsafe fn set_uniform(
        &mut self,
        id: ProgramId,
        location: UniformLocation,
        variable: UniformVariable,
    ) -> Result<()> {
        if self.state.binded_program != Some(id) {
            return Err(Error::Backend(format!(
                "GL_INVALID_OPERATION: {} is not the program in use.",
                id
            )));
        }

        let location = location.raw();
        match variable {
            UniformVariable::I32(v) => gl::Uniform1i(location, v),
            UniformVariable::F32(v) => gl::Uniform1f(location, v),
            UniformVariable::Vector2f(v) => gl::Uniform2f(location, v[0], v[1]),
            UniformVariable::Vector3f(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
            UniformVariable::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Matrix2f(v) => {
                gl::UniformMatrix2fv(location, 1, gl::FALSE, v[0].as_ptr())
            }
            UniformVariable::Matrix3f(v) => {
                gl::UniformMatrix3fv(location, 1, gl::FALSE, v[0].as_ptr())
            }
            UniformVariable::Matrix4f(v) => {
                gl::UniformMatrix4fv(location, 1, gl::FALSE, v[0].as_ptr())
            }
        }

        check()
    }

    unsafe fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertices: &[f32],
    ) -> Result<VertexArrayId> {
        layout.validate(vertices)?;

        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        let mut vbo = 0;
        gl::GenBuffers(1, &mut vbo);

        if vao == 0 || vbo == 0 {
            return Err(Error::Backend("Failed to generate vertex array.".into()));
        }

        gl::BindVertexArray(vao);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

        let data = if vertices.is_empty() {
            ptr::null()
        } else {
            vertices.as_ptr() as *const c_void
        };

        let size = (vertices.len() * std::mem::size_of::<f32>()) as GLsizeiptr;
        gl::BufferData(gl::ARRAY_BUFFER, size, data, gl::STATIC_DRAW);

        let stride = (layout.stride() * std::mem::size_of::<f32>()) as GLsizei;
        for (i, attribute) in layout.attributes().iter().enumerate() {
            let offset = layout.offset(i) * std::mem::size_of::<f32>();
            gl::EnableVertexAttribArray(attribute.location);
            gl::VertexAttribPointer(
                attribute.location,
                GLint::from(attribute.size),
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset as *const c_void,
            );
        }

        let id = VertexArrayId::new(vao);
        self.state.binded_vao = Some(id);
        self.buffers.insert(id, vbo);

        check()?;
        Ok(id)
    }

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()> {
        if self.state.binded_vao == Some(id) {
            gl::BindVertexArray(0);
            self.state.binded_vao = None;
        }

        let vao = id.raw();
        gl::DeleteVertexArrays(1, &vao);

        if let Some(vbo) = self.buffers.remove(&id) {
            gl::DeleteBuffers(1, &vbo);
        }

        check()
    }

    unsafe fn create_texture(
        &mut self,
        params: TextureParams,
        dimensions: Vector2<u32>,
        bytes: &[u8],
    ) -> Result<TextureHandle> {
        let mut id = 0;
        gl::GenTextures(1, &mut id);
        if id == 0 {
            return Err(Error::Backend("Failed to generate texture.".into()));
        }

        let handle = TextureHandle::new(id);
        self.bind_texture(0, handle)?;

        let wrap: GLenum = params.wrap.into();
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap as GLint);

        let (min, mag) = types::filters(params.filter, params.mipmap);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag as GLint);

        let (internal_format, format, pixel_type) = types::texture_format(params.format);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            internal_format as GLint,
            dimensions.x as GLsizei,
            dimensions.y as GLsizei,
            0,
            format,
            pixel_type,
            bytes.as_ptr() as *const c_void,
        );

        if params.mipmap {
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        check()?;
        Ok(handle)
    }

    unsafe fn delete_texture(&mut self, handle: TextureHandle) -> Result<()> {
        for v in &mut self.state.binded_textures {
            if *v == Some(handle) {
                *v = None;
            }
        }

        let id = handle.raw();
        gl::DeleteTextures(1, &id);
        check()
    }

    unsafe fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> Result<()> {
        if unit >= self.capabilities.max_combined_texture_image_units {
            return Err(Error::Backend(format!(
                "Texture unit {} is out of [0, {}).",
                unit, self.capabilities.max_combined_texture_image_units
            )));
        }

        let state = &mut self.state;
        if state.binded_texture_unit != unit {
            state.binded_texture_unit = unit;
            gl::ActiveTexture(gl::TEXTURE0 + unit);
        }

        let index = unit as usize;
        if state.binded_textures.len() <= index {
            state.binded_textures.resize(index + 1, None);
        }

        if state.binded_textures[index] != Some(handle) {
            state.binded_textures[index] = Some(handle);
            gl::BindTexture(gl::TEXTURE_2D, handle.raw());
        }

        check()
    }

    unsafe fn draw(
        &mut self,
        id: VertexArrayId,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<()> {
        if self.state.binded_program.is_none() {
            return Err(Error::Backend(
                "Can not draw without a program in use.".into(),
            ));
        }

        if self.state.binded_vao != Some(id) {
            gl::BindVertexArray(id.raw());
            self.state.binded_vao = Some(id);
        }

        gl::DrawArrays(primitive.into(), first as GLint, count as GLsizei);
        check()
    }

    unsafe fn set_render_state(&mut self, state: RenderState) -> Result<()> {
        let current = self.state.render_state;

        if current.depth_test != state.depth_test {
            toggle(gl::DEPTH_TEST, state.depth_test);
        }

        if current.blend != state.blend {
            toggle(gl::BLEND, state.blend);
        }

        if current.cull_face != state.cull_face {
            toggle(gl::CULL_FACE, state.cull_face);
        }

        self.state.render_state = state;
        check()
    }

    unsafe fn set_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        if self.state.viewport != Some(dimensions) {
            gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
            self.state.viewport = Some(dimensions);
            check()?;
        }

        Ok(())
    }

    unsafe fn clear(&mut self, color: Option<[f32; 4]>, depth: Option<f32>) -> Result<()> {
        let mut bits = 0;
        if let Some(v) = color {
            bits |= gl::COLOR_BUFFER_BIT;
            gl::ClearColor(v[0], v[1], v[2], v[3]);
        }

        if let Some(v) = depth {
            bits |= gl::DEPTH_BUFFER_BIT;
            gl::ClearDepth(f64::from(v));
        }

        if bits != 0 {
            gl::Clear(bits);
            check()
        } else {
            Ok(())
        }
    }

    unsafe fn flush(&mut self) -> Result<()> {
        gl::Finish();
        check()
    }
}

impl GLVisitor {
    unsafe fn reset_render_state(state: &mut GLMutableState) -> Result<()> {
        gl::Disable(gl::CULL_FACE);
        gl::CullFace(gl::BACK);
        gl::FrontFace(gl::CCW);

        gl::Disable(gl::DEPTH_TEST);
        gl::DepthFunc(gl::LESS);

        gl::Disable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);

        state.render_state = RenderState::default();
        check()
    }
}

unsafe fn toggle(cap: GLenum, enable: bool) {
    if enable {
        gl::Enable(cap);
    } else {
        gl::Disable(cap);
    }
}

/// Reads an info log of `len` bytes, including the trailing NUL.
unsafe fn info_log<F>(len: GLint, func: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    if len <= 1 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    func(len, &mut written, buf.as_mut_ptr() as *mut GLchar);

    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn check() -> Result<()> {
    let message = match gl::GetError() {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => "An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "A numeric argument is out of range.",
        gl::INVALID_OPERATION => "The specified operation is not allowed in the current state.",
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "There is not enough memory left to execute the command.",
        _ => "Oops, Unknown OpenGL error.",
    };

    Err(Error::Backend(message.into()))
}
