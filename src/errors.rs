use std::io;

use crate::video::shader::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to compile {} shader: \n{}", stage, log)]
    Compile { stage: ShaderStage, log: String },
    #[fail(display = "Failed to link PROGRAM: \n{}", _0)]
    Link(String),
    #[fail(display = "Failed to read {}: {}", path, err)]
    Io {
        path: String,
        #[fail(cause)]
        err: io::Error,
    },
    #[fail(display = "[GL] {}", _0)]
    Backend(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Invalid data: {}", _0)]
    InvalidData(String),
    #[fail(display = "Window: {}", _0)]
    Window(String),
    #[fail(display = "Malformed settings: {}", _0)]
    Settings(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
