mod axis;
mod backend;
mod controller;
mod error;
mod joystick;
mod manager;
pub mod memory;
mod registry;
#[cfg(feature = "sdl2-backend")]
mod sdl;
mod startup;
mod types;

pub use crate::axis::AxisConfig;
pub use crate::backend::{GamepadBackend, GamepadDevice};
pub use crate::controller::GamepadController;
pub use crate::error::{Error, Result};
pub use crate::joystick::{JoystickCollection, JoystickConfig};
pub use crate::manager::GamepadManager;
pub use crate::registry::{InputBackend, JoystickRegistry};
#[cfg(feature = "sdl2-backend")]
pub use crate::sdl::{SdlBackend, SdlDevice};
#[cfg(feature = "sdl2-backend")]
pub use crate::startup::startup_sdl_gamepad;
pub use crate::startup::{shutdown_gamepad, startup_gamepad, StartupOptions};
pub use crate::types::{
    Axis, AxisBuffer, DeviceIndex, GameAxis, NUM_AXES, NUM_GAME_AXES,
};
