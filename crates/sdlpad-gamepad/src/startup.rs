use log::{debug, info, warn};

use crate::backend::GamepadBackend;
use crate::error::Result;
use crate::joystick::JoystickCollection;
use crate::manager::GamepadManager;
use crate::registry::{InputBackend, JoystickRegistry};

/// Switches that decide whether the controller backend runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupOptions {
    /// Persistent user setting.
    pub use_joystick: bool,
    /// Command-line override (`-nojoy`).
    pub no_joy: bool,
}

impl StartupOptions {
    pub fn enabled(&self) -> bool {
        self.use_joystick && !self.no_joy
    }
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            use_joystick: true,
            no_joy: false,
        }
    }
}

/// Brings the controller backend in line with `options`.
///
/// When joysticks are disabled an installed collection is torn down and
/// `on_menu_update` is invoked so menus drop its devices. When enabled and
/// nothing is installed yet, a manager is built from `init` and installed only
/// if its subsystem came up. Returns whether a collection is installed
/// afterwards.
pub fn startup_gamepad<B, F, N>(
    registry: &mut JoystickRegistry,
    options: StartupOptions,
    init: F,
    on_menu_update: N,
) -> bool
where
    B: GamepadBackend + 'static,
    F: FnOnce() -> Result<B>,
    N: FnOnce(),
{
    if !options.enabled() {
        if registry.remove(InputBackend::Sdl).is_some() {
            info!("game controllers disabled");
            on_menu_update();
        }
        return false;
    }

    if registry.is_installed(InputBackend::Sdl) {
        return true;
    }

    let manager = GamepadManager::init_with(init);
    if !manager.is_initialized() {
        warn!("game controller backend not installed");
        return false;
    }

    debug!("installing game controller backend with {} slots", manager.len());
    registry.install(InputBackend::Sdl, Box::new(manager));
    true
}

/// [`startup_gamepad`] backed by SDL2.
#[cfg(feature = "sdl2-backend")]
pub fn startup_sdl_gamepad<N>(
    registry: &mut JoystickRegistry,
    options: StartupOptions,
    on_menu_update: N,
) -> bool
where
    N: FnOnce(),
{
    startup_gamepad(registry, options, crate::sdl::SdlBackend::init, on_menu_update)
}

/// Removes the controller backend, closing every device it owns.
pub fn shutdown_gamepad(registry: &mut JoystickRegistry) {
    if registry.remove(InputBackend::Sdl).is_some() {
        debug!("game controller backend removed");
    }
}
