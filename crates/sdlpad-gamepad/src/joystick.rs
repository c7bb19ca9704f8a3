use crate::types::{AxisBuffer, GameAxis};

/// Per-device configuration surface consumed by the engine's joystick menus
/// and settings persistence.
///
/// Axis accessors never fail: an out-of-range axis reads as a default value and
/// writes to it are ignored.
pub trait JoystickConfig {
    fn name(&self) -> String;

    fn sensitivity(&self) -> f32;
    fn set_sensitivity(&mut self, scale: f32);
    fn is_sensitivity_default(&self) -> bool;

    fn num_axes(&self) -> usize;
    fn axis_name(&self, axis: usize) -> String;

    fn axis_dead_zone(&self, axis: usize) -> f32;
    fn set_axis_dead_zone(&mut self, axis: usize, dead_zone: f32);
    fn is_axis_dead_zone_default(&self, axis: usize) -> bool;

    fn axis_map(&self, axis: usize) -> Option<GameAxis>;
    fn set_axis_map(&mut self, axis: usize, game_axis: Option<GameAxis>);
    fn is_axis_map_default(&self, axis: usize) -> bool;

    fn axis_scale(&self, axis: usize) -> f32;
    fn set_axis_scale(&mut self, axis: usize, scale: f32);
    fn is_axis_scale_default(&self, axis: usize) -> bool;

    fn enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn set_default_config(&mut self);

    /// Stable key used to persist this device's settings between sessions.
    fn identifier(&self) -> String;

    fn is_connected(&self) -> bool;
}

/// A backend's set of devices as seen by the engine.
pub trait JoystickCollection {
    /// Whether the native subsystem behind this collection came up.
    fn is_initialized(&self) -> bool;

    /// Samples every connected device.
    fn poll(&mut self);

    /// Adds every connected device's weighted axis readings into `axes`.
    fn accumulate_axes(&self, axes: &mut AxisBuffer);

    /// Appends every connected device to `sink`, in slot order.
    fn enumerate_active<'a>(&'a mut self, sink: &mut Vec<&'a mut dyn JoystickConfig>);

    /// Looks for devices attached after construction.
    fn rescan(&mut self) -> Option<&mut dyn JoystickConfig>;
}
