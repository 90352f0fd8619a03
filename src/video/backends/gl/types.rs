use gl::types::*;

use super::super::super::mesh::Primitive;
use super::super::super::shader::ShaderStage;
use super::super::super::texture::{TextureFilter, TextureFormat, TextureWrap};

impl From<ShaderStage> for GLenum {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
        }
    }
}

impl From<Primitive> for GLenum {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Points => gl::POINTS,
            Primitive::Lines => gl::LINES,
            Primitive::LineStrip => gl::LINE_STRIP,
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

impl From<TextureWrap> for GLenum {
    fn from(wrap: TextureWrap) -> Self {
        match wrap {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT,
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Returns the `(min, mag)` filters.
pub fn filters(filter: TextureFilter, mipmap: bool) -> (GLenum, GLenum) {
    match (filter, mipmap) {
        (TextureFilter::Nearest, false) => (gl::NEAREST, gl::NEAREST),
        (TextureFilter::Nearest, true) => (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST),
        (TextureFilter::Linear, false) => (gl::LINEAR, gl::LINEAR),
        (TextureFilter::Linear, true) => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
    }
}

/// Returns the `(internal_format, format, pixel_type)` triple of `glTexImage2D`.
pub fn texture_format(format: TextureFormat) -> (GLenum, GLenum, GLenum) {
    match format {
        TextureFormat::R8 => (gl::R8, gl::RED, gl::UNSIGNED_BYTE),
        TextureFormat::RGB8 => (gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE),
        TextureFormat::RGBA8 => (gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE),
    }
}
