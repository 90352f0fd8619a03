//! A thin, safe-ish layer over the OpenGL objects every demo touches.
//!
//! # Device
//!
//! All GPU work goes through a `Device`, a cheap-to-clone handle to the
//! active backend `Visitor`. The device is intentionally `!Send`: an OpenGL
//! context belongs to the thread that made it current, and so does every
//! object created from it.
//!
//! # Shader Program
//!
//! `ShaderProgram` compiles two or three stages, links them and frees the
//! stage objects right away. Uniforms are set by name; each name is resolved
//! once and cached for the lifetime of the program. Names that do not resolve
//! to an active uniform are silently ignored, exactly like uploading to
//! location `-1` in plain OpenGL.
//!
//! ```rust,ignore
//! let shader = ShaderProgram::new(&device, VS, FS)?;
//! shader.bind()?;
//! shader.set_mat4("projection", projection)?;
//! shader.set_vec3("lightColor", Vector3::new(1.0, 1.0, 1.0))?;
//! ```
//!
//! # Vertex Arrays and Textures
//!
//! `VertexArray` uploads interleaved `f32` vertices with a `VertexLayout`,
//! `Texture` uploads already decoded pixels. Both release their GPU objects
//! when dropped.

macro_rules! impl_object_id {
    ($name:ident, $desc:expr) => {
        #[doc = $desc]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw object name issued by the backend.
            #[inline]
            pub fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw object name.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

impl_object_id!(ShaderId, "The name of a compiled shader stage object.");
impl_object_id!(ProgramId, "The name of a linked program object.");
impl_object_id!(VertexArrayId, "The name of a vertex array object.");
impl_object_id!(
    TextureHandle,
    "The name of a 2D texture object. It is `Copy`, so sprites can refer to a texture owned elsewhere."
);

pub mod backends;
pub mod device;
pub mod mesh;
pub mod shader;
pub mod state;
pub mod texture;
pub mod uniform;

pub use self::device::Device;
pub use self::mesh::{Primitive, VertexArray, VertexAttribute, VertexLayout};
pub use self::shader::{CompiledStage, ShaderProgram, ShaderStage};
pub use self::state::RenderState;
pub use self::texture::{Texture, TextureFilter, TextureFormat, TextureParams, TextureWrap};
pub use self::uniform::{UniformLocation, UniformVariable, UniformVariableType};

pub mod prelude {
    pub use super::{
        Device, Primitive, ProgramId, RenderState, ShaderProgram, ShaderStage, Texture,
        TextureHandle, TextureParams, UniformVariable, VertexArray, VertexLayout,
    };
}
