use crate::error::Result;
use crate::types::{Axis, DeviceIndex};

/// Native controller API the adapters are built on.
///
/// The backend is cloned into every controller so a disabled controller can
/// reopen its device later. Implementations are expected to be cheap handles
/// to shared subsystem state.
pub trait GamepadBackend: Clone {
    type Device: GamepadDevice;

    /// Number of joystick slots currently known to the backend.
    fn num_devices(&self) -> DeviceIndex;

    /// Whether the slot is backed by a device with a full controller mapping.
    fn is_game_controller(&self, index: DeviceIndex) -> bool;

    /// Opens the controller in the given slot. Dropping the returned device
    /// closes it.
    fn open(&self, index: DeviceIndex) -> Result<Self::Device>;

    /// Refreshes cached device state before a poll.
    fn update(&self) {}

    /// Display string for a physical axis.
    fn axis_name(&self, axis: Axis) -> String {
        axis.name().to_string()
    }
}

/// An open native controller handle.
pub trait GamepadDevice {
    fn name(&self) -> String;

    /// Raw signed 16-bit reading of the axis.
    fn axis(&self, axis: Axis) -> i16;
}
