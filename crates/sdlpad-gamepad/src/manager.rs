use log::{debug, warn};

use crate::backend::GamepadBackend;
use crate::controller::GamepadController;
use crate::error::Result;
use crate::joystick::{JoystickCollection, JoystickConfig};
use crate::types::{AxisBuffer, DeviceIndex};

/// Owns one adapter per game-controller slot present at construction.
///
/// The slot table is sized once and never grows. Devices attached later are
/// only picked up by building a new manager.
pub struct GamepadManager<B: GamepadBackend> {
    // Slots are declared first so controllers close before the backend drops.
    slots: Box<[Option<GamepadController<B>>]>,
    backend: Option<B>,
}

impl<B: GamepadBackend> GamepadManager<B> {
    /// Enumerates the backend's slots and opens every game controller.
    pub fn new(backend: B) -> Self {
        let count = backend.num_devices();
        let slots = (0..count)
            .map(|index| {
                if backend.is_game_controller(index) {
                    Some(GamepadController::new(backend.clone(), index))
                } else {
                    debug!("slot {index} is not a game controller");
                    None
                }
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            backend: Some(backend),
        }
    }

    /// Builds a manager from a backend initializer. A failed init is logged
    /// and yields a manager with no devices.
    pub fn init_with<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<B>,
    {
        match init() {
            Ok(backend) => Self::new(backend),
            Err(e) => {
                warn!("controller subsystem unavailable: {e}");
                Self {
                    slots: Box::default(),
                    backend: None,
                }
            }
        }
    }

    /// Number of slots, including those without a controller.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn controller(&self, index: DeviceIndex) -> Option<&GamepadController<B>> {
        self.slots.get(index as usize).and_then(Option::as_ref)
    }

    pub fn controller_mut(
        &mut self,
        index: DeviceIndex,
    ) -> Option<&mut GamepadController<B>> {
        self.slots.get_mut(index as usize).and_then(Option::as_mut)
    }

    fn connected(&self) -> impl Iterator<Item = &GamepadController<B>> {
        self.slots.iter().flatten().filter(|c| c.is_connected())
    }

    fn connected_mut(&mut self) -> impl Iterator<Item = &mut GamepadController<B>> {
        self.slots.iter_mut().flatten().filter(|c| c.is_connected())
    }
}

impl<B: GamepadBackend + 'static> JoystickCollection for GamepadManager<B> {
    fn is_initialized(&self) -> bool {
        self.backend.is_some()
    }

    fn poll(&mut self) {
        if let Some(backend) = &self.backend {
            backend.update();
        }
        for controller in self.connected_mut() {
            controller.poll();
        }
    }

    fn accumulate_axes(&self, axes: &mut AxisBuffer) {
        for controller in self.connected() {
            controller.accumulate_axes(axes);
        }
    }

    fn enumerate_active<'a>(&'a mut self, sink: &mut Vec<&'a mut dyn JoystickConfig>) {
        for controller in self.connected_mut() {
            sink.push(controller);
        }
    }

    fn rescan(&mut self) -> Option<&mut dyn JoystickConfig> {
        None
    }
}
