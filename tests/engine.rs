extern crate learngl;

use learngl::application::{ApplicationEvent, Window};
use learngl::prelude::*;
use learngl::video::backends::headless::Command;

struct Counter {
    frames: u64,
    limit: u64,
    updates: u64,
    renders: u64,
    exited: bool,
    dts: Vec<f32>,
    dimensions: Vec<Vector2<u32>>,
    events: usize,
}

impl Counter {
    fn new(limit: u64) -> Self {
        Counter {
            frames: 0,
            limit,
            updates: 0,
            renders: 0,
            exited: false,
            dts: Vec::new(),
            dimensions: Vec::new(),
            events: 0,
        }
    }
}

impl<'a> Application for &'a mut Counter {
    fn on_event(&mut self, _: &mut FrameContext, _: &Event) -> Result<()> {
        self.events += 1;
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.updates += 1;
        self.frames = ctx.frames();
        self.dts.push(ctx.dt());
        self.dimensions.push(ctx.dimensions());

        if self.updates >= self.limit {
            ctx.shutdown();
        }

        Ok(())
    }

    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
        self.exited = true;
        Ok(())
    }
}

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.headless = true;
    settings
}

#[test]
fn runs_until_shutdown() {
    let engine = Engine::new_with(&settings()).unwrap();
    let mut app = Counter::new(3);
    engine.run(&mut app).unwrap();

    assert_eq!(app.updates, 3);
    assert_eq!(app.renders, 3);
    assert_eq!(app.frames, 3);
    assert!(app.exited);
    assert!(app.dts.iter().all(|&dt| dt > 0.0));
    assert!(app.dimensions.iter().all(|&v| v == Vector2::new(800, 600)));
}

#[test]
fn every_frame_is_cleared() {
    let (device, history) = Device::recording();
    let window = Window::headless(Vector2::new(640, 480));
    let engine = Engine::from_parts(window, device, &settings()).unwrap();

    let mut app = Counter::new(2);
    engine.run(&mut app).unwrap();

    let commands = history.commands();
    assert_eq!(commands[0], Command::SetViewport(Vector2::new(640, 480)));
    assert_eq!(
        commands[1],
        Command::SetRenderState(RenderState::opaque_3d())
    );

    let clears = history.count(|v| match *v {
        Command::Clear(Some(_), Some(depth)) => depth == 1.0,
        _ => false,
    });
    assert_eq!(clears, 2);
}

#[test]
fn escape_stops_the_engine() {
    let mut engine = Engine::new_with(&settings()).unwrap();
    engine
        .window_mut()
        .push_event(Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Escape }));

    let mut app = Counter::new(100);
    engine.run(&mut app).unwrap();

    assert_eq!(app.updates, 0);
    assert_eq!(app.events, 1);
    assert!(app.exited);
}

#[test]
fn closing_stops_the_engine() {
    let mut engine = Engine::new_with(&settings()).unwrap();
    engine
        .window_mut()
        .push_event(Event::Application(ApplicationEvent::Closed));

    let mut app = Counter::new(100);
    engine.run(&mut app).unwrap();

    assert_eq!(app.updates, 0);
    assert!(app.exited);
}

#[test]
fn resizing_moves_the_viewport() {
    let (device, history) = Device::recording();
    let window = Window::headless(Vector2::new(800, 600));
    let mut engine = Engine::from_parts(window, device, &settings()).unwrap();
    engine
        .window_mut()
        .push_event(Event::Window(WindowEvent::Resized(1024, 768)));

    let mut app = Counter::new(1);
    engine.run(&mut app).unwrap();

    assert_eq!(app.dimensions, vec![Vector2::new(1024, 768)]);
    assert!(history
        .commands()
        .contains(&Command::SetViewport(Vector2::new(1024, 768))));
}

#[test]
fn input_reaches_the_frame() {
    struct Keys(Vec<bool>);

    impl Application for Keys {
        fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
            self.0.push(ctx.input.is_key_press(Key::W));
            if self.0.len() == 2 {
                ctx.shutdown();
            }
            Ok(())
        }

        fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
            assert_eq!(self.0, vec![true, false]);
            Ok(())
        }
    }

    let mut engine = Engine::new_with(&settings()).unwrap();
    engine
        .window_mut()
        .push_event(Event::InputDevice(InputEvent::KeyboardPressed { key: Key::W }));

    engine.run(Keys(Vec::new())).unwrap();
}
