pub use crate::application::{Application, Engine, Event, FrameContext, Settings, WindowEvent};
pub use crate::errors::{Error, Result};
pub use crate::input::prelude::*;
pub use crate::math::prelude::*;
pub use crate::scene::prelude::*;
pub use crate::video::prelude::*;
