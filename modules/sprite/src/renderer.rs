use learngl::errors::*;
use learngl::math;
use learngl::math::prelude::*;
use learngl::video::{Device, Primitive, ShaderProgram, TextureHandle, VertexArray, VertexLayout};

use super::object::model_matrix;

pub const SPRITE_VS: &str = r#"
#version 330 core
layout (location = 0) in vec4 vertex; // <vec2 position, vec2 texCoords>

out vec2 TexCoords;

uniform mat4 model;
uniform mat4 projection;

void main()
{
    TexCoords = vertex.zw;
    gl_Position = projection * model * vec4(vertex.xy, 0.0, 1.0);
}
"#;

pub const SPRITE_FS: &str = r#"
#version 330 core
in vec2 TexCoords;
out vec4 color;

uniform sampler2D image;
uniform vec3 spriteColor;

void main()
{
    color = vec4(spriteColor, 1.0) * texture(image, TexCoords);
}
"#;

/// Two triangles over `[0, 1]^2`, each vertex `(x, y, u, v)`.
pub const QUAD: [f32; 24] = [
    0.0, 1.0, 0.0, 1.0, //
    1.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 1.0, //
    1.0, 1.0, 1.0, 1.0, //
    1.0, 0.0, 1.0, 0.0, //
];

/// Draws textured, tinted quads.
///
/// The shader is expected to take a `vec4` position/uv attribute at location
/// 0 and the `model`, `projection`, `spriteColor` and `image` uniforms.
pub struct SpriteRenderer {
    device: Device,
    shader: ShaderProgram,
    quad: VertexArray,
}

impl SpriteRenderer {
    pub fn new(device: &Device, shader: ShaderProgram) -> Result<Self> {
        let layout = VertexLayout::build().with(0, 4).finish();
        let quad = VertexArray::new(device, &layout, &QUAD)?;

        Ok(SpriteRenderer {
            device: device.clone(),
            shader,
            quad,
        })
    }

    /// Creates a renderer with the built-in sprite shader.
    pub fn with_default_shader(device: &Device) -> Result<Self> {
        let shader = ShaderProgram::new(device, SPRITE_VS, SPRITE_FS)?;
        Self::new(device, shader)
    }

    #[inline]
    pub fn shader(&self) -> &ShaderProgram {
        &self.shader
    }

    /// Maps pixels of a `width x height` screen to clip space, and points
    /// the `image` sampler at texture unit 0.
    pub fn set_projection(&self, width: f32, height: f32) -> Result<()> {
        self.shader.bind()?;
        self.shader.set_int("image", 0)?;
        self.shader
            .set_mat4("projection", math::screen_ortho(width, height))
    }

    /// Draws `texture` as a `size` large quad with its top-left corner at
    /// `position`, rotated by `rotation` degrees around its center and
    /// tinted with `color`.
    pub fn draw_sprite(
        &self,
        texture: TextureHandle,
        position: Vector2<f32>,
        size: Vector2<f32>,
        rotation: f32,
        color: Vector3<f32>,
    ) -> Result<()> {
        self.shader.bind()?;
        self.shader
            .set_mat4("model", model_matrix(position, size, rotation))?;
        self.shader.set_vec3("spriteColor", color)?;

        self.device.bind_texture(0, texture)?;
        self.quad.draw(Primitive::Triangles)
    }
}
