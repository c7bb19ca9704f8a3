use crate::joystick::{JoystickCollection, JoystickConfig};
use crate::types::AxisBuffer;

/// Kinds of joystick backends the engine can host at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBackend {
    DirectInput,
    XInput,
    RawPs2,
    Sdl,
}

impl InputBackend {
    pub const COUNT: usize = 4;

    fn slot(self) -> usize {
        self as usize
    }
}

/// Installed joystick collections, at most one per backend kind.
#[derive(Default)]
pub struct JoystickRegistry {
    collections: [Option<Box<dyn JoystickCollection>>; InputBackend::COUNT],
}

impl JoystickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `collection` for `kind`, returning whatever was there before.
    pub fn install(
        &mut self,
        kind: InputBackend,
        collection: Box<dyn JoystickCollection>,
    ) -> Option<Box<dyn JoystickCollection>> {
        self.collections[kind.slot()].replace(collection)
    }

    pub fn remove(&mut self, kind: InputBackend) -> Option<Box<dyn JoystickCollection>> {
        self.collections[kind.slot()].take()
    }

    pub fn is_installed(&self, kind: InputBackend) -> bool {
        self.collections[kind.slot()].is_some()
    }

    pub fn get(&self, kind: InputBackend) -> Option<&dyn JoystickCollection> {
        self.collections[kind.slot()].as_deref()
    }

    pub fn poll_all(&mut self) {
        for collection in self.collections.iter_mut().flatten() {
            collection.poll();
        }
    }

    pub fn accumulate_all(&self, axes: &mut AxisBuffer) {
        for collection in self.collections.iter().flatten() {
            collection.accumulate_axes(axes);
        }
    }

    /// Every active device across all installed backends, in backend order.
    pub fn enumerate_all(&mut self) -> Vec<&mut dyn JoystickConfig> {
        let mut sink = Vec::new();
        for collection in self.collections.iter_mut().flatten() {
            collection.enumerate_active(&mut sink);
        }
        sink
    }
}
