extern crate learngl;

use std::env;
use std::fs;
use std::path::PathBuf;

use learngl::prelude::*;
use learngl::video::backends::headless::Command;

const VS: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main()
{
    gl_Position = projection * view * model * vec4(aPos, 1.0);
}
"#;

const FS: &str = r#"
#version 330 core
out vec4 FragColor;

uniform vec3 objectColor;
uniform bool enabled;
uniform float strength;

void main()
{
    FragColor = vec4(objectColor * strength, 1.0);
}
"#;

const GS: &str = r#"
#version 330 core
layout (points) in;
layout (triangle_strip, max_vertices = 5) out;

uniform float size;

void main()
{
    gl_Position = gl_in[0].gl_Position + vec4(-size, -size, 0.0, 0.0);
    EmitVertex();
    EndPrimitive();
}
"#;

fn scratch(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("learngl-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn compile_error_names_the_stage() {
    let device = Device::headless();

    let err = ShaderProgram::new(&device, "void main() {", FS).err().unwrap();
    match err {
        Error::Compile { stage, .. } => assert_eq!(stage, ShaderStage::Vertex),
        _ => panic!("unexpected {:?}", err),
    }
    assert!(format!("{}", err).contains("VERTEX"));

    let err = ShaderProgram::new(&device, VS, "uniform float x;").err().unwrap();
    assert!(format!("{}", err).contains("FRAGMENT"));
}

#[test]
fn link_error_mentions_program() {
    let (device, history) = Device::recording();

    let vs = ShaderProgram::compile(&device, ShaderStage::Vertex, VS).unwrap();
    let err = ShaderProgram::link(&device, vec![vs]).err().unwrap();
    assert!(format!("{}", err).contains("PROGRAM"));

    // The stage is released even though linking failed.
    assert_eq!(
        history.count(|v| match *v {
            Command::DeleteShader(_) => true,
            _ => false,
        }),
        1
    );
}

#[test]
fn stages_are_deleted_after_link() {
    let (device, history) = Device::recording();
    let shader = ShaderProgram::new(&device, VS, FS).unwrap();

    let commands = history.commands();
    let link = commands
        .iter()
        .position(|v| match *v {
            Command::LinkProgram(id, _) => id == shader.id(),
            _ => false,
        })
        .unwrap();

    let deletes: Vec<_> = commands
        .iter()
        .enumerate()
        .filter(|&(_, v)| match *v {
            Command::DeleteShader(_) => true,
            _ => false,
        })
        .map(|(i, _)| i)
        .collect();

    assert_eq!(deletes.len(), 2);
    assert!(deletes.iter().all(|&i| i > link));

    drop(shader);
    assert_eq!(
        history.commands().last(),
        Some(&Command::DeleteProgram(ProgramId::new(3)))
    );
}

#[test]
fn geometry_stage() {
    let (device, history) = Device::recording();
    let shader = ShaderProgram::with_geometry(&device, VS, FS, GS).unwrap();
    shader.bind().unwrap();
    shader.set_float("size", 0.1).unwrap();

    assert!(history.commands().iter().any(|v| match *v {
        Command::CompileShader(_, ShaderStage::Geometry) => true,
        _ => false,
    }));

    assert_eq!(
        history.count(|v| match *v {
            Command::DeleteShader(_) => true,
            _ => false,
        }),
        3
    );
}

#[test]
fn locations_are_cached() {
    let (device, history) = Device::recording();
    let shader = ShaderProgram::new(&device, VS, FS).unwrap();
    shader.bind().unwrap();

    for i in 0..4 {
        shader.set_float("strength", i as f32).unwrap();
        shader.set_float("missing", i as f32).unwrap();
    }

    let lookups = |name: &'static str| {
        history.count(move |v| match *v {
            Command::UniformLocation(_, ref n) => n == name,
            _ => false,
        })
    };

    assert_eq!(lookups("strength"), 1);
    assert_eq!(lookups("missing"), 1);
    assert_eq!(
        history.count(|v| match *v {
            Command::SetUniform { .. } => true,
            _ => false,
        }),
        4
    );
}

#[test]
fn unknown_uniforms_are_ignored() {
    let (device, history) = Device::recording();
    let shader = ShaderProgram::new(&device, VS, FS).unwrap();
    shader.bind().unwrap();
    history.clear();

    shader.set_vec3("objectColour", Vector3::new(1.0, 0.0, 0.0)).unwrap();
    shader.set_mat4("modle", Matrix4::from_scale(2.0)).unwrap();

    assert_eq!(
        history.count(|v| match *v {
            Command::SetUniform { .. } => true,
            _ => false,
        }),
        0
    );
}

#[test]
fn setters_upload_to_the_current_program() {
    let (device, history) = Device::recording();
    let shader = ShaderProgram::new(&device, VS, FS).unwrap();

    // Nothing is in use yet.
    assert!(shader.set_float("strength", 1.0).is_err());

    shader.bind().unwrap();
    shader.set_bool("enabled", true).unwrap();
    shader.set_vec3("objectColor", Vector3::new(1.0, 0.5, 0.31)).unwrap();
    shader.set_mat4("model", Matrix4::from_scale(2.0)).unwrap();

    let uploads: Vec<_> = history
        .commands()
        .into_iter()
        .filter_map(|v| match v {
            Command::SetUniform { name, variable, .. } => Some((name, variable)),
            _ => None,
        })
        .collect();

    assert_eq!(uploads[0], ("enabled".to_owned(), UniformVariable::I32(1)));
    assert_eq!(
        uploads[1],
        ("objectColor".to_owned(), UniformVariable::Vector3f([1.0, 0.5, 0.31]))
    );

    match uploads[2].1 {
        UniformVariable::Matrix4f(m) => {
            assert_eq!(m[0][0], 2.0);
            assert_eq!(m[3][3], 1.0);
        }
        ref v => panic!("unexpected {:?}", v),
    }

    // Mismatched types are rejected like a driver would.
    assert!(shader.set_int("model", 1).is_err());
}

#[test]
fn setters_reject_a_program_that_is_not_in_use() {
    let (device, history) = Device::recording();
    let lit = ShaderProgram::new(&device, VS, FS).unwrap();

    let sky_vs = r#"
#version 330 core
layout (location = 0) in vec3 aPos;
uniform mat4 projection;
void main() { gl_Position = projection * vec4(aPos, 1.0); }
"#;
    let sky = ShaderProgram::new(&device, sky_vs, FS).unwrap();

    sky.bind().unwrap();
    history.clear();

    // `model` of the first program must not land in the current one.
    match lit.set_mat4("model", Matrix4::from_scale(2.0)) {
        Err(Error::Backend(ref msg)) => assert!(msg.contains("GL_INVALID_OPERATION"), "{}", msg),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }

    assert_eq!(
        history.count(|v| match *v {
            Command::SetUniform { .. } => true,
            _ => false,
        }),
        0
    );

    lit.bind().unwrap();
    lit.set_mat4("model", Matrix4::from_scale(2.0)).unwrap();
    assert!(history.commands().iter().any(|v| match *v {
        Command::SetUniform {
            program, ref name, ..
        } => program == lit.id() && name == "model",
        _ => false,
    }));
}

#[test]
fn from_files() {
    let device = Device::headless();
    let vs = scratch("shader.vs", VS);
    let fs = scratch("shader.fs", FS);

    let shader = ShaderProgram::from_files(&device, &vs, &fs, None).unwrap();
    shader.bind().unwrap();

    let missing = env::temp_dir().join("learngl-does-not-exist.fs");
    let err = ShaderProgram::from_files(&device, &vs, &missing, None).err().unwrap();
    match err {
        Error::Io { ref path, .. } => assert!(path.contains("learngl-does-not-exist.fs")),
        _ => panic!("unexpected {:?}", err),
    }

    fs::remove_file(vs).unwrap();
    fs::remove_file(fs).unwrap();
}
