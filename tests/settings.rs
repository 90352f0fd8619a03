extern crate learngl;

use std::env;
use std::fs;

use learngl::application::{EngineParams, Settings, WindowParams};
use learngl::errors::Error;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.window.size, [800, 600]);
    assert_eq!(settings.engine.max_fps, 60);
    assert!(settings.engine.depth_test);
    assert!(!settings.headless);
}

#[test]
fn partial_json() {
    let settings = Settings::from_json(
        r#"{ "window": { "title": "Camera", "size": [1280, 720] }, "engine": { "max_fps": 30 } }"#,
    )
    .unwrap();

    assert_eq!(settings.window.title, "Camera");
    assert_eq!(settings.window.size, [1280, 720]);
    assert_eq!(settings.window.vsync, WindowParams::default().vsync);
    assert_eq!(settings.engine.max_fps, 30);
    assert_eq!(settings.engine.min_fps, EngineParams::default().min_fps);

    assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
}

#[test]
fn malformed_json() {
    match Settings::from_json(r#"{ "window": { "size": "big" } }"#) {
        Err(Error::Settings(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn load() {
    let path = env::temp_dir().join(format!("learngl-settings-{}.json", std::process::id()));
    fs::write(&path, r#"{ "headless": true }"#).unwrap();
    assert!(Settings::load(&path).unwrap().headless);
    fs::remove_file(&path).unwrap();

    match Settings::load(&path) {
        Err(Error::Io { path: ref p, .. }) => assert!(p.contains("learngl-settings")),
        other => panic!("unexpected {:?}", other),
    }
}
