//! A backend without a GPU. It keeps just enough object state to reject the
//! calls a real driver would reject, and can record every call it accepts.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::utils::FastHashMap;

use super::super::mesh::{Primitive, VertexLayout};
use super::super::shader::ShaderStage;
use super::super::state::RenderState;
use super::super::texture::TextureParams;
use super::super::uniform::{UniformLocation, UniformVariable};
use super::super::{ProgramId, ShaderId, TextureHandle, VertexArrayId};
use super::glsl::{self, GlslType, UniformDecl};
use super::Visitor;

/// A call accepted by the headless backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CompileShader(ShaderId, ShaderStage),
    DeleteShader(ShaderId),
    LinkProgram(ProgramId, Vec<ShaderId>),
    DeleteProgram(ProgramId),
    UseProgram(ProgramId),
    UniformLocation(ProgramId, String),
    SetUniform {
        program: ProgramId,
        name: String,
        variable: UniformVariable,
    },
    CreateVertexArray(VertexArrayId, u32),
    DeleteVertexArray(VertexArrayId),
    CreateTexture(TextureHandle, Vector2<u32>),
    DeleteTexture(TextureHandle),
    BindTexture(u32, TextureHandle),
    Draw {
        program: ProgramId,
        vao: VertexArrayId,
        primitive: Primitive,
        first: u32,
        count: u32,
    },
    Clear(Option<[f32; 4]>, Option<f32>),
    SetRenderState(RenderState),
    SetViewport(Vector2<u32>),
    Flush,
}

/// A shared view of the commands recorded by a `HeadlessVisitor`.
#[derive(Debug, Clone, Default)]
pub struct History {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl History {
    /// Returns a snapshot of the commands recorded so far.
    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    /// Counts the recorded commands that match `filter`.
    pub fn count<F>(&self, filter: F) -> usize
    where
        F: Fn(&Command) -> bool,
    {
        self.commands.borrow().iter().filter(|v| filter(v)).count()
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    fn push(&self, cmd: Command) {
        self.commands.borrow_mut().push(cmd);
    }
}

struct ShaderObject {
    stage: ShaderStage,
    uniforms: Vec<UniformDecl>,
}

struct ProgramObject {
    uniforms: Vec<UniformDecl>,
}

impl ProgramObject {
    fn location(&self, name: &str) -> Option<usize> {
        if let Some(index) = self.uniforms.iter().position(|v| v.name == name) {
            return Some(index);
        }

        // The bare name of an array refers to its first element.
        let first = format!("{}[0]", name);
        self.uniforms.iter().position(|v| v.name == first)
    }
}

pub struct HeadlessVisitor {
    history: Option<History>,
    counter: u32,
    shaders: FastHashMap<ShaderId, ShaderObject>,
    programs: FastHashMap<ProgramId, ProgramObject>,
    vaos: FastHashMap<VertexArrayId, u32>,
    textures: FastHashMap<TextureHandle, Vector2<u32>>,
    current: Option<ProgramId>,
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl HeadlessVisitor {
    /// Creates a visitor that keeps no log of the commands it accepts.
    pub fn new() -> Self {
        HeadlessVisitor {
            history: None,
            counter: 0,
            shaders: FastHashMap::default(),
            programs: FastHashMap::default(),
            vaos: FastHashMap::default(),
            textures: FastHashMap::default(),
            current: None,
        }
    }

    /// Creates a visitor that records every accepted command, and the
    /// handle to read them back. The handle stays valid after the visitor
    /// has been moved into a `Device`.
    pub fn recording() -> (Self, History) {
        let history = History::default();
        let visitor = HeadlessVisitor {
            history: Some(history.clone()),
            ..HeadlessVisitor::new()
        };

        (visitor, history)
    }

    /// Returns the command log, `None` unless created with `recording`.
    pub fn history(&self) -> Option<History> {
        self.history.clone()
    }

    fn record(&self, cmd: Command) {
        if let Some(ref history) = self.history {
            history.push(cmd);
        }
    }

    // Object names start at 1, 0 is reserved by OpenGL.
    fn next(&mut self) -> u32 {
        self.counter += 1;
        self.counter
    }

    fn current(&self) -> Result<(ProgramId, &ProgramObject)> {
        let id = self
            .current
            .ok_or_else(|| Error::Backend("GL_INVALID_OPERATION: no program in use.".into()))?;

        let program = self
            .programs
            .get(&id)
            .ok_or_else(|| Error::Backend(format!("GL_INVALID_OPERATION: {} is gone.", id)))?;

        Ok((id, program))
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId> {
        glsl::validate(source).map_err(|log| Error::Compile { stage, log })?;

        let id = ShaderId::new(self.next());
        let uniforms = glsl::uniforms(source);
        self.shaders.insert(id, ShaderObject { stage, uniforms });
        self.record(Command::CompileShader(id, stage));
        Ok(id)
    }

    unsafe fn delete_shader(&mut self, id: ShaderId) -> Result<()> {
        if self.shaders.remove(&id).is_none() {
            return Err(Error::Backend(format!("GL_INVALID_VALUE: {} is unknown.", id)));
        }

        self.record(Command::DeleteShader(id));
        Ok(())
    }

    unsafe fn link_program(&mut self, shaders: &[ShaderId]) -> Result<ProgramId> {
        let mut uniforms: Vec<UniformDecl> = Vec::new();
        let mut stages = Vec::new();

        for id in shaders {
            let shader = self
                .shaders
                .get(id)
                .ok_or_else(|| Error::Link(format!("ERROR: {} is not a shader object.", id)))?;

            if stages.contains(&shader.stage) {
                return Err(Error::Link(format!(
                    "ERROR: more than one {} shader attached.",
                    shader.stage
                )));
            }

            stages.push(shader.stage);
            for decl in &shader.uniforms {
                match uniforms.iter().find(|v| v.name == decl.name) {
                    Some(v) if v.ty != decl.ty => {
                        return Err(Error::Link(format!(
                            "ERROR: uniform '{}' declared as {:?} and {:?}.",
                            decl.name, v.ty, decl.ty
                        )));
                    }
                    Some(_) => {}
                    None => uniforms.push(decl.clone()),
                }
            }
        }

        for required in &[ShaderStage::Vertex, ShaderStage::Fragment] {
            if !stages.contains(required) {
                return Err(Error::Link(format!(
                    "ERROR: no {} shader attached.",
                    required
                )));
            }
        }

        let id = ProgramId::new(self.next());
        self.programs.insert(id, ProgramObject { uniforms });
        self.record(Command::LinkProgram(id, shaders.to_vec()));
        Ok(id)
    }

    unsafe fn delete_program(&mut self, id: ProgramId) -> Result<()> {
        if self.programs.remove(&id).is_none() {
            return Err(Error::Backend(format!("GL_INVALID_VALUE: {} is unknown.", id)));
        }

        if self.current == Some(id) {
            self.current = None;
        }

        self.record(Command::DeleteProgram(id));
        Ok(())
    }

    unsafe fn use_program(&mut self, id: ProgramId) -> Result<()> {
        if !self.programs.contains_key(&id) {
            return Err(Error::Backend(format!("GL_INVALID_VALUE: {} is unknown.", id)));
        }

        self.current = Some(id);
        self.record(Command::UseProgram(id));
        Ok(())
    }

    unsafe fn uniform_location(
        &mut self,
        id: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>> {
        let program = self
            .programs
            .get(&id)
            .ok_or_else(|| Error::Backend(format!("GL_INVALID_VALUE: {} is unknown.", id)))?;

        let location = program
            .location(name)
            .map(|v| UniformLocation::new(v as i32));

        self.record(Command::UniformLocation(id, name.to_owned()));
        Ok(location)
    }

    unsafe fn set_uniform(
        &mut self,
        id: ProgramId,
        location: UniformLocation,
        variable: UniformVariable,
    ) -> Result<()> {
        let (current, program) = self.current()?;
        if current != id {
            return Err(Error::Backend(format!(
                "GL_INVALID_OPERATION: {} is not the program in use, {} is.",
                id, current
            )));
        }

        let decl = program
            .uniforms
            .get(location.raw() as usize)
            .filter(|_| location.raw() >= 0)
            .ok_or_else(|| {
                Error::Backend(format!(
                    "GL_INVALID_OPERATION: location {} is not valid for {}.",
                    location.raw(),
                    id
                ))
            })?;

        if !decl.ty.accepts(variable.variable_type()) {
            let ty = match decl.ty {
                GlslType::Other(ref v) => v.clone(),
                ref v => format!("{:?}", v),
            };

            return Err(Error::Backend(format!(
                "GL_INVALID_OPERATION: can not upload {:?} to '{}' of type {}.",
                variable.variable_type(),
                decl.name,
                ty
            )));
        }

        let name = decl.name.clone();
        self.record(Command::SetUniform {
            program: id,
            name,
            variable,
        });
        Ok(())
    }

    unsafe fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertices: &[f32],
    ) -> Result<VertexArrayId> {
        let len = layout.validate(vertices)? as u32;
        let id = VertexArrayId::new(self.next());
        self.vaos.insert(id, len);
        self.record(Command::CreateVertexArray(id, len));
        Ok(id)
    }

    unsafe fn delete_vertex_array(&mut self, id: VertexArrayId) -> Result<()> {
        if self.vaos.remove(&id).is_none() {
            return Err(Error::Backend(format!("GL_INVALID_VALUE: {} is unknown.", id)));
        }

        self.record(Command::DeleteVertexArray(id));
        Ok(())
    }

    unsafe fn create_texture(
        &mut self,
        params: TextureParams,
        dimensions: Vector2<u32>,
        bytes: &[u8],
    ) -> Result<TextureHandle> {
        let expected = (dimensions.x * dimensions.y) as usize * params.format.size();
        if bytes.len() != expected {
            return Err(Error::Backend(format!(
                "GL_INVALID_VALUE: expected {} bytes of pixels, got {}.",
                expected,
                bytes.len()
            )));
        }

        let handle = TextureHandle::new(self.next());
        self.textures.insert(handle, dimensions);
        self.record(Command::CreateTexture(handle, dimensions));
        Ok(handle)
    }

    unsafe fn delete_texture(&mut self, handle: TextureHandle) -> Result<()> {
        if self.textures.remove(&handle).is_none() {
            return Err(Error::Backend(format!(
                "GL_INVALID_VALUE: {} is unknown.",
                handle
            )));
        }

        self.record(Command::DeleteTexture(handle));
        Ok(())
    }

    unsafe fn bind_texture(&mut self, unit: u32, handle: TextureHandle) -> Result<()> {
        if !self.textures.contains_key(&handle) {
            return Err(Error::Backend(format!(
                "GL_INVALID_VALUE: {} is unknown.",
                handle
            )));
        }

        self.record(Command::BindTexture(unit, handle));
        Ok(())
    }

    unsafe fn draw(
        &mut self,
        id: VertexArrayId,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<()> {
        let (program, _) = self.current()?;

        let len = *self
            .vaos
            .get(&id)
            .ok_or_else(|| Error::Backend(format!("GL_INVALID_OPERATION: {} is unknown.", id)))?;

        if first.checked_add(count).map(|v| v > len).unwrap_or(true) {
            return Err(Error::Backend(format!(
                "GL_INVALID_OPERATION: vertices [{}, {}+{}) out of {} in {}.",
                first, first, count, len, id
            )));
        }

        self.record(Command::Draw {
            program,
            vao: id,
            primitive,
            first,
            count,
        });
        Ok(())
    }

    unsafe fn set_render_state(&mut self, state: RenderState) -> Result<()> {
        self.record(Command::SetRenderState(state));
        Ok(())
    }

    unsafe fn set_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        self.record(Command::SetViewport(dimensions));
        Ok(())
    }

    unsafe fn clear(&mut self, color: Option<[f32; 4]>, depth: Option<f32>) -> Result<()> {
        self.record(Command::Clear(color, depth));
        Ok(())
    }

    unsafe fn flush(&mut self) -> Result<()> {
        self.record(Command::Flush);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "uniform mat4 model;\nvoid main() { gl_Position = model * vec4(0.0); }";
    const FS: &str = "out vec4 color;\nvoid main() { color = vec4(1.0); }";

    unsafe fn draw_frame(visitor: &mut HeadlessVisitor) {
        let vs = visitor.compile_shader(ShaderStage::Vertex, VS).unwrap();
        let fs = visitor.compile_shader(ShaderStage::Fragment, FS).unwrap();
        let program = visitor.link_program(&[vs, fs]).unwrap();
        visitor.use_program(program).unwrap();

        let location = visitor.uniform_location(program, "model").unwrap().unwrap();
        visitor
            .set_uniform(program, location, UniformVariable::Matrix4f([[0.0; 4]; 4]))
            .unwrap();
        visitor.clear(Some([0.0; 4]), None).unwrap();
    }

    #[test]
    fn plain_visitor_keeps_no_log() {
        let mut visitor = HeadlessVisitor::new();
        assert!(visitor.history().is_none());

        unsafe {
            for _ in 0..100 {
                draw_frame(&mut visitor);
            }
        }

        assert!(visitor.history().is_none());
    }

    #[test]
    fn recording_visitor_logs_commands() {
        let (mut visitor, history) = HeadlessVisitor::recording();
        unsafe { draw_frame(&mut visitor) };

        // compile x2, link, use, location, set, clear
        assert_eq!(history.commands().len(), 7);
        assert!(visitor.history().is_some());
    }
}
