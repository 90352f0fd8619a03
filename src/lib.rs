//! # What is This?
//!
//! `learngl` collects the small pieces every OpenGL tutorial program ends up
//! rewriting: a shader program with typed uniform setters, a first-person fly
//! camera, and a minimal windowed render loop to drive them.
//!
//! The GPU is reached through a `Visitor` seam. The `gl` visitor issues real
//! OpenGL calls, while the headless visitor records every command so that the
//! whole pipeline can be exercised in tests without a context.
//!
//! ```rust,ignore
//! use learngl::prelude::*;
//!
//! let device = Device::headless();
//! let shader = ShaderProgram::new(&device, VS, FS)?;
//! let mut camera = Camera::default();
//!
//! camera.process_keyboard(Movement::Forward, 0.016);
//! shader.bind()?;
//! shader.set_mat4("view", camera.view_matrix())?;
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod errors;
pub mod math;
pub mod utils;

pub mod video;
pub mod scene;
pub mod input;
pub mod application;

pub mod prelude;
