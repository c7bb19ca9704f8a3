//! In-memory backend for driving controllers without hardware.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{GamepadBackend, GamepadDevice};
use crate::error::{Error, Result};
use crate::types::{Axis, DeviceIndex, NUM_AXES};

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    is_controller: bool,
    attached: bool,
    axes: [i16; NUM_AXES],
    open_handles: usize,
}

/// Backend whose devices and axis readings are set by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot with a full controller mapping.
    pub fn add_controller(&self, name: &str) -> DeviceIndex {
        self.push(name, true)
    }

    /// Adds a slot for a plain joystick without a controller mapping.
    pub fn add_joystick(&self, name: &str) -> DeviceIndex {
        self.push(name, false)
    }

    /// Detached slots keep their index but refuse to open.
    pub fn set_attached(&self, index: DeviceIndex, attached: bool) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(index as usize) {
            slot.attached = attached;
        }
    }

    pub fn set_axis(&self, index: DeviceIndex, axis: Axis, raw: i16) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(index as usize) {
            slot.axes[axis.index()] = raw;
        }
    }

    /// Number of handles currently open on the slot.
    pub fn open_handles(&self, index: DeviceIndex) -> usize {
        self.slots
            .borrow()
            .get(index as usize)
            .map(|slot| slot.open_handles)
            .unwrap_or(0)
    }

    fn push(&self, name: &str, is_controller: bool) -> DeviceIndex {
        let mut slots = self.slots.borrow_mut();
        slots.push(Slot {
            name: name.to_string(),
            is_controller,
            attached: true,
            axes: [0; NUM_AXES],
            open_handles: 0,
        });
        (slots.len() - 1) as DeviceIndex
    }
}

impl GamepadBackend for MemoryBackend {
    type Device = MemoryDevice;

    fn num_devices(&self) -> DeviceIndex {
        self.slots.borrow().len() as DeviceIndex
    }

    fn is_game_controller(&self, index: DeviceIndex) -> bool {
        self.slots
            .borrow()
            .get(index as usize)
            .is_some_and(|slot| slot.is_controller)
    }

    fn open(&self, index: DeviceIndex) -> Result<MemoryDevice> {
        let mut slots = self.slots.borrow_mut();
        let Some(slot) = slots.get_mut(index as usize) else {
            return Err(Error::Open {
                index,
                reason: "no such slot".to_string(),
            });
        };
        if !slot.attached || !slot.is_controller {
            return Err(Error::Open {
                index,
                reason: "device is not available".to_string(),
            });
        }
        slot.open_handles += 1;
        Ok(MemoryDevice {
            index,
            slots: Rc::clone(&self.slots),
        })
    }
}

/// Open handle on a [`MemoryBackend`] slot.
#[derive(Debug)]
pub struct MemoryDevice {
    index: DeviceIndex,
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl GamepadDevice for MemoryDevice {
    fn name(&self) -> String {
        self.slots
            .borrow()
            .get(self.index as usize)
            .map(|slot| slot.name.clone())
            .unwrap_or_default()
    }

    fn axis(&self, axis: Axis) -> i16 {
        self.slots
            .borrow()
            .get(self.index as usize)
            .filter(|slot| slot.attached)
            .map(|slot| slot.axes[axis.index()])
            .unwrap_or(0)
    }
}

impl Drop for MemoryDevice {
    fn drop(&mut self) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(self.index as usize) {
            slot.open_handles = slot.open_handles.saturating_sub(1);
        }
    }
}
