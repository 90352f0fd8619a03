//! Ten textured cubes and a fly camera: `WASD` moves, the cursor looks
//! around and the wheel zooms. Escape quits.

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate learngl;

use learngl::prelude::*;

const VS: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;

out vec2 TexCoord;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main()
{
    gl_Position = projection * view * model * vec4(aPos, 1.0);
    TexCoord = aTexCoord;
}
"#;

const FS: &str = r#"
#version 330 core
out vec4 FragColor;

in vec2 TexCoord;

uniform sampler2D texture1;
uniform float mixValue;

void main()
{
    vec4 checker = texture(texture1, TexCoord);
    FragColor = mix(checker, vec4(TexCoord, 0.5, 1.0), mixValue);
}
"#;

#[rustfmt::skip]
const CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

const POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// An 8x8 black and white checker board.
fn checker() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 * 8 * 3);
    for y in 0..8 {
        for x in 0..8 {
            let v = if (x + y) % 2 == 0 { 230 } else { 40 };
            bytes.extend_from_slice(&[v, v, v]);
        }
    }

    bytes
}

struct Window {
    shader: ShaderProgram,
    cube: VertexArray,
    texture: Texture,
    camera: Camera,
    time: f32,
}

impl Window {
    fn build(ctx: &FrameContext) -> Result<Self> {
        let shader = ShaderProgram::new(&ctx.device, VS, FS)?;
        let layout = VertexLayout::build().with(0, 3).with(1, 2).finish();
        let cube = VertexArray::new(&ctx.device, &layout, &CUBE)?;

        let mut params = TextureParams::default();
        params.format = learngl::video::TextureFormat::RGB8;
        params.filter = learngl::video::TextureFilter::Nearest;
        let texture = Texture::new(&ctx.device, params, Vector2::new(8, 8), &checker())?;

        shader.bind()?;
        shader.set_int("texture1", 0)?;

        Ok(Window {
            shader,
            cube,
            texture,
            camera: Camera::new(
                Point3::new(0.0, 0.0, 3.0),
                Vector3::unit_y(),
                learngl::scene::camera::YAW,
                learngl::scene::camera::PITCH,
            ),
            time: 0.0,
        })
    }
}

impl Application for Window {
    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.time += ctx.dt();
        self.camera.process_input(&ctx.input, ctx.dt());

        if ctx.input.is_key_press(Key::F1) {
            info!(
                "Camera at {:?}, yaw {} pitch {} zoom {}.",
                self.camera.position(),
                self.camera.yaw(),
                self.camera.pitch(),
                self.camera.zoom()
            );
        }

        Ok(())
    }

    fn on_render(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.shader.bind()?;
        self.texture.bind(0)?;

        let projection = self.camera.projection_matrix(ctx.aspect(), 0.1, 100.0);
        self.shader.set_mat4("projection", projection)?;
        self.shader.set_mat4("view", self.camera.view_matrix())?;
        self.shader.set_float("mixValue", (self.time.sin() + 1.0) * 0.25)?;

        for (i, p) in POSITIONS.iter().enumerate() {
            let angle = Deg(20.0 * i as f32);
            let axis = Vector3::new(1.0, 0.3, 0.5).normalize();
            let model = Matrix4::from_translation((*p).into()) * Matrix4::from_axis_angle(axis, angle);

            self.shader.set_mat4("model", model)?;
            self.cube.draw(Primitive::Triangles)?;
        }

        Ok(())
    }
}

fn run() -> Result<()> {
    let mut settings = Settings::default();
    settings.window.title = "Camera".into();

    let mut engine = Engine::new_with(&settings)?;
    let window = Window::build(engine.context())?;
    engine.run(window)
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
