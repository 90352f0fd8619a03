use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::*;
use crate::math::prelude::{Matrix3, Matrix4, Vector2, Vector3, Vector4};
use crate::utils::{FastHashMap, HashValue};

use super::uniform::{UniformLocation, UniformVariable};
use super::{Device, ProgramId, ShaderId};

/// One programmable stage of the pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderStage {
    /// The upper-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
            ShaderStage::Geometry => "GEOMETRY",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully compiled stage. The stage object is deleted when this
/// value is dropped, which `ShaderProgram::link` does right after linking.
pub struct CompiledStage {
    device: Device,
    id: ShaderId,
    stage: ShaderStage,
}

impl CompiledStage {
    #[inline]
    pub fn id(&self) -> ShaderId {
        self.id
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for CompiledStage {
    fn drop(&mut self) {
        if let Err(err) = self.device.delete_shader(self.id) {
            warn!("Failed to delete {} shader {}: {}", self.stage, self.id, err);
        }
    }
}

/// A linked program. It can not be recompiled or relinked; build a new one
/// instead.
pub struct ShaderProgram {
    device: Device,
    id: ProgramId,
    uniforms: RefCell<FastHashMap<HashValue<str>, Option<UniformLocation>>>,
}

impl ShaderProgram {
    /// Compiles the source of a single stage.
    pub fn compile(device: &Device, stage: ShaderStage, source: &str) -> Result<CompiledStage> {
        let id = device.compile_shader(stage, source)?;
        Ok(CompiledStage {
            device: device.clone(),
            id,
            stage,
        })
    }

    /// Links compiled stages into a program. The stage objects are released
    /// once the link attempt is over, whether it succeeded or not.
    pub fn link<T>(device: &Device, stages: T) -> Result<Self>
    where
        T: IntoIterator<Item = CompiledStage>,
    {
        let stages: Vec<CompiledStage> = stages.into_iter().collect();
        let ids: Vec<ShaderId> = stages.iter().map(|v| v.id).collect();
        let id = device.link_program(&ids)?;
        drop(stages);

        debug!("Linked {} from {} stages.", id, ids.len());
        Ok(ShaderProgram {
            device: device.clone(),
            id,
            uniforms: RefCell::new(FastHashMap::default()),
        })
    }

    /// Builds a program from vertex and fragment sources.
    pub fn new(device: &Device, vs: &str, fs: &str) -> Result<Self> {
        let vs = Self::compile(device, ShaderStage::Vertex, vs)?;
        let fs = Self::compile(device, ShaderStage::Fragment, fs)?;
        Self::link(device, vec![vs, fs])
    }

    /// Builds a program from vertex, fragment and geometry sources.
    pub fn with_geometry(device: &Device, vs: &str, fs: &str, gs: &str) -> Result<Self> {
        let vs = Self::compile(device, ShaderStage::Vertex, vs)?;
        let fs = Self::compile(device, ShaderStage::Fragment, fs)?;
        let gs = Self::compile(device, ShaderStage::Geometry, gs)?;
        Self::link(device, vec![vs, fs, gs])
    }

    /// Reads the stage sources from disk and builds a program. Every file is
    /// read before anything is handed to the backend.
    pub fn from_files<P1, P2>(device: &Device, vs: P1, fs: P2, gs: Option<&Path>) -> Result<Self>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
    {
        let vs = read_source(vs.as_ref())?;
        let fs = read_source(fs.as_ref())?;

        match gs {
            Some(path) => {
                let gs = read_source(path)?;
                Self::with_geometry(device, &vs, &fs, &gs)
            }
            None => Self::new(device, &vs, &fs),
        }
    }

    #[inline]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Makes this the current program. Uniform uploads only reach the
    /// current program, so call this before any `set_*`.
    pub fn bind(&self) -> Result<()> {
        self.device.use_program(self.id)
    }

    /// Resolves `name` to a location, consulting the backend only the first
    /// time a name is seen. `None` means the uniform is not active.
    pub fn uniform_location(&self, name: &str) -> Result<Option<UniformLocation>> {
        let hash = HashValue::from(name);
        if let Some(location) = self.uniforms.borrow().get(&hash) {
            return Ok(*location);
        }

        let location = self.device.uniform_location(self.id, name)?;
        if location.is_none() {
            trace!("Uniform {:?} is not active in {}.", name, self.id);
        }

        self.uniforms.borrow_mut().insert(hash, location);
        Ok(location)
    }

    /// Uploads `variable` to the uniform `name`. Unknown names are ignored.
    pub fn set_uniform<T>(&self, name: &str, variable: T) -> Result<()>
    where
        T: Into<UniformVariable>,
    {
        match self.uniform_location(name)? {
            Some(location) => self.device.set_uniform(self.id, location, variable.into()),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn set_bool(&self, name: &str, v: bool) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_int(&self, name: &str, v: i32) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_float(&self, name: &str, v: f32) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_vec2(&self, name: &str, v: Vector2<f32>) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_vec3(&self, name: &str, v: Vector3<f32>) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_vec4(&self, name: &str, v: Vector4<f32>) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_mat3(&self, name: &str, v: Matrix3<f32>) -> Result<()> {
        self.set_uniform(name, v)
    }

    #[inline]
    pub fn set_mat4(&self, name: &str, v: Matrix4<f32>) -> Result<()> {
        self.set_uniform(name, v)
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        if let Err(err) = self.device.delete_program(self.id) {
            warn!("Failed to delete {}: {}", self.id, err);
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| Error::Io {
        path: path.display().to_string(),
        err,
    })
}
