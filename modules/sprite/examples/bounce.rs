extern crate env_logger;
#[macro_use]
extern crate log;
extern crate learngl;
extern crate learngl_sprite;

use learngl::prelude::*;
use learngl::video::TextureFormat;
use learngl_sprite::prelude::*;

const BALL_RADIUS: f32 = 12.5;
const BALL_VELOCITY: [f32; 2] = [100.0, -350.0];

struct Bounce {
    renderer: SpriteRenderer,
    face: Texture,
    background: Texture,
    ball: BallObject,
}

/// A round white disc on a transparent background.
fn disc(size: u32) -> Vec<u8> {
    let r = size as f32 * 0.5;
    let mut bytes = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            let alpha = if dx * dx + dy * dy <= r * r { 255 } else { 0 };
            bytes.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }

    bytes
}

impl Bounce {
    fn build(ctx: &FrameContext) -> Result<Self> {
        let renderer = SpriteRenderer::with_default_shader(&ctx.device)?;
        let dimensions = ctx.dimensions();
        renderer.set_projection(dimensions.x as f32, dimensions.y as f32)?;

        let face = Texture::new(
            &ctx.device,
            TextureParams::default(),
            Vector2::new(32, 32),
            &disc(32),
        )?;

        let mut params = TextureParams::default();
        params.format = TextureFormat::RGB8;
        let background = Texture::new(&ctx.device, params, Vector2::new(1, 1), &[40, 44, 52])?;

        let ball = BallObject::new(
            Self::spawn(dimensions),
            BALL_RADIUS,
            BALL_VELOCITY.into(),
            face.handle(),
        );

        Ok(Bounce {
            renderer,
            face,
            background,
            ball,
        })
    }

    fn spawn(dimensions: Vector2<u32>) -> Vector2<f32> {
        Vector2::new(
            dimensions.x as f32 * 0.5 - BALL_RADIUS,
            dimensions.y as f32 - BALL_RADIUS * 4.0,
        )
    }
}

impl Application for Bounce {
    fn on_event(&mut self, _: &mut FrameContext, event: &Event) -> Result<()> {
        if let Event::Window(WindowEvent::Resized(w, h)) = *event {
            self.renderer.set_projection(w as f32, h as f32)?;
        }

        if let Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Space }) = *event {
            self.ball.stuck = false;
        }

        Ok(())
    }

    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        let dimensions = ctx.dimensions();
        let position = self.ball.move_by(ctx.dt(), dimensions.x as f32);

        if position.y > dimensions.y as f32 {
            self.ball.reset(Self::spawn(dimensions), BALL_VELOCITY.into());
        }

        self.ball.rotation = (self.ball.rotation + 90.0 * ctx.dt()) % 360.0;
        Ok(())
    }

    fn on_render(&mut self, ctx: &mut FrameContext) -> Result<()> {
        ctx.device.set_render_state(RenderState::blended_2d())?;

        let dimensions = ctx.dimensions();
        self.renderer.draw_sprite(
            self.background.handle(),
            Vector2::new(0.0, 0.0),
            Vector2::new(dimensions.x as f32, dimensions.y as f32),
            0.0,
            Vector3::new(1.0, 1.0, 1.0),
        )?;

        self.ball.draw(&self.renderer)
    }

    fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
        info!("Bye, the ball was drawn with {}.", self.face.handle());
        Ok(())
    }
}

fn run() -> Result<()> {
    let mut settings = Settings::default();
    settings.window.title = "Bounce".into();
    settings.engine.depth_test = false;

    let mut engine = Engine::new_with(&settings)?;
    let window = Bounce::build(engine.context())?;
    engine.run(window)
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
