use log::{debug, warn};

use crate::axis::AxisConfig;
use crate::backend::{GamepadBackend, GamepadDevice};
use crate::joystick::JoystickConfig;
use crate::types::{Axis, AxisBuffer, DeviceIndex, GameAxis, NUM_AXES};

const DEFAULT_SENSITIVITY: f32 = 1.0;
const RAW_AXIS_RANGE: f32 = 32768.0;
const INVALID_AXIS_NAME: &str = "Invalid";

/// Adapter exposing one native game controller as a [`JoystickConfig`].
///
/// The axis configuration outlives the native handle: disabling the controller
/// closes the device but keeps every setting.
pub struct GamepadController<B: GamepadBackend> {
    index: DeviceIndex,
    device: Option<B::Device>,
    backend: B,
    name: Option<String>,
    axes: [AxisConfig; NUM_AXES],
    multiplier: f32,
}

impl<B: GamepadBackend> GamepadController<B> {
    /// Opens the controller in slot `index`. A failed open leaves an inert
    /// adapter that reports itself as disconnected.
    pub fn new(backend: B, index: DeviceIndex) -> Self {
        let mut controller = Self {
            index,
            device: None,
            backend,
            name: None,
            axes: [AxisConfig::default(); NUM_AXES],
            multiplier: DEFAULT_SENSITIVITY,
        };
        controller.open();
        controller.set_default_config();
        controller
    }

    pub fn index(&self) -> DeviceIndex {
        self.index
    }

    /// Current configuration and last reading of every physical axis.
    pub fn axes(&self) -> &[AxisConfig; NUM_AXES] {
        &self.axes
    }

    /// Samples every physical axis, normalized to `[-1, 1]`.
    pub fn poll(&mut self) {
        let Some(device) = &self.device else {
            return;
        };
        for axis in Axis::ALL {
            let raw = device.axis(axis);
            self.axes[axis.index()].value = f32::from(raw) / RAW_AXIS_RANGE;
        }
    }

    /// Adds the weighted readings of every mapped axis into `out`. The result
    /// is not clamped.
    pub fn accumulate_axes(&self, out: &mut AxisBuffer) {
        if self.device.is_none() {
            return;
        }
        for config in &self.axes {
            if let Some((game_axis, value)) = config.contribution(self.multiplier) {
                out[game_axis.index()] += value;
            }
        }
    }

    fn open(&mut self) {
        match self.backend.open(self.index) {
            Ok(device) => {
                let name = device.name();
                debug!("opened controller {} ({name})", self.index);
                self.name = Some(name);
                self.device = Some(device);
            }
            Err(e) => {
                warn!("controller {} unavailable: {e}", self.index);
            }
        }
    }

    fn close(&mut self) {
        if self.device.take().is_some() {
            debug!("closed controller {}", self.index);
        }
    }

    fn axis(&self, axis: usize) -> Option<&AxisConfig> {
        self.axes.get(axis)
    }

    fn axis_mut(&mut self, axis: usize) -> Option<&mut AxisConfig> {
        self.axes.get_mut(axis)
    }
}

impl<B: GamepadBackend> JoystickConfig for GamepadController<B> {
    fn name(&self) -> String {
        match (&self.device, &self.name) {
            (Some(device), _) => device.name(),
            (None, Some(name)) => name.clone(),
            (None, None) => format!("Controller {}", self.index),
        }
    }

    fn sensitivity(&self) -> f32 {
        self.multiplier
    }

    fn set_sensitivity(&mut self, scale: f32) {
        self.multiplier = scale;
    }

    fn is_sensitivity_default(&self) -> bool {
        self.multiplier == DEFAULT_SENSITIVITY
    }

    fn num_axes(&self) -> usize {
        NUM_AXES
    }

    fn axis_name(&self, axis: usize) -> String {
        match Axis::from_index(axis) {
            Some(axis) => self.backend.axis_name(axis),
            None => INVALID_AXIS_NAME.to_string(),
        }
    }

    fn axis_dead_zone(&self, axis: usize) -> f32 {
        self.axis(axis).map(AxisConfig::dead_zone).unwrap_or(0.0)
    }

    fn set_axis_dead_zone(&mut self, axis: usize, dead_zone: f32) {
        if let Some(config) = self.axis_mut(axis) {
            config.set_dead_zone(dead_zone);
        }
    }

    fn is_axis_dead_zone_default(&self, axis: usize) -> bool {
        self.axis(axis)
            .map(|c| c.dead_zone() == AxisConfig::DEFAULT_DEAD_ZONE)
            .unwrap_or(true)
    }

    fn axis_map(&self, axis: usize) -> Option<GameAxis> {
        self.axis(axis).and_then(|c| c.game_axis)
    }

    fn set_axis_map(&mut self, axis: usize, game_axis: Option<GameAxis>) {
        if let Some(config) = self.axis_mut(axis) {
            config.game_axis = game_axis;
        }
    }

    fn is_axis_map_default(&self, axis: usize) -> bool {
        self.axis(axis).map(|c| c.game_axis.is_none()).unwrap_or(true)
    }

    fn axis_scale(&self, axis: usize) -> f32 {
        self.axis(axis).map(|c| c.multiplier).unwrap_or(0.0)
    }

    fn set_axis_scale(&mut self, axis: usize, scale: f32) {
        if let Some(config) = self.axis_mut(axis) {
            config.multiplier = scale;
        }
    }

    fn is_axis_scale_default(&self, axis: usize) -> bool {
        self.axis(axis)
            .map(|c| c.multiplier == AxisConfig::DEFAULT_MULTIPLIER)
            .unwrap_or(true)
    }

    fn enabled(&self) -> bool {
        self.device.is_some()
    }

    fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.device.is_some()) {
            (true, false) => self.open(),
            (false, true) => self.close(),
            _ => {}
        }
    }

    fn set_default_config(&mut self) {
        self.multiplier = DEFAULT_SENSITIVITY;
        for config in &mut self.axes {
            config.reset();
        }
    }

    fn identifier(&self) -> String {
        format!("SDL:{}", self.index)
    }

    fn is_connected(&self) -> bool {
        self.device.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn controller() -> (MemoryBackend, GamepadController<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let index = backend.add_controller("Test Pad");
        let controller = GamepadController::new(backend.clone(), index);
        (backend, controller)
    }

    #[test]
    fn new_opens_device_with_defaults() {
        let (backend, c) = controller();
        assert!(c.is_connected());
        assert_eq!(backend.open_handles(0), 1);
        assert_eq!(c.name(), "Test Pad");
        assert_eq!(c.num_axes(), NUM_AXES);
        assert_eq!(c.sensitivity(), 1.0);
        for axis in 0..NUM_AXES {
            assert_eq!(c.axis_dead_zone(axis), 0.0);
            assert_eq!(c.axis_map(axis), None);
            assert_eq!(c.axis_scale(axis), 1.0);
        }
    }

    #[test]
    fn failed_open_leaves_inert_adapter() {
        let backend = MemoryBackend::new();
        let index = backend.add_controller("Unplugged");
        backend.set_attached(index, false);
        let mut c = GamepadController::new(backend.clone(), index);

        assert!(!c.is_connected());
        assert!(!c.enabled());
        backend.set_axis(index, Axis::LeftX, 16384);
        c.set_axis_map(0, Some(GameAxis::Yaw));
        c.poll();
        let mut out = AxisBuffer::default();
        c.accumulate_axes(&mut out);
        assert_eq!(out, AxisBuffer::default());
        assert_eq!(c.axes()[0].value, 0.0);
    }

    #[test]
    fn out_of_range_axis_reads_defaults_and_ignores_writes() {
        let (_backend, mut c) = controller();
        let bad = NUM_AXES;

        c.set_axis_dead_zone(bad, 0.5);
        c.set_axis_map(bad, Some(GameAxis::Pitch));
        c.set_axis_scale(bad, 3.0);

        assert_eq!(c.axis_dead_zone(bad), 0.0);
        assert_eq!(c.axis_map(bad), None);
        assert_eq!(c.axis_scale(bad), 0.0);
        assert_eq!(c.axis_name(bad), "Invalid");
        assert!(c.is_axis_dead_zone_default(bad));
        assert!(c.is_axis_map_default(bad));
        assert!(c.is_axis_scale_default(bad));
        for axis in 0..NUM_AXES {
            assert!(c.is_axis_map_default(axis));
            assert!(c.is_axis_scale_default(axis));
        }
    }

    #[test]
    fn dead_zone_is_clamped_on_set() {
        let (_backend, mut c) = controller();
        c.set_axis_dead_zone(0, -0.5);
        assert_eq!(c.axis_dead_zone(0), 0.0);
        c.set_axis_dead_zone(1, 1.7);
        assert_eq!(c.axis_dead_zone(1), 1.0);
        c.set_axis_dead_zone(2, f32::NAN);
        assert!((0.0..=1.0).contains(&c.axis_dead_zone(2)));
        assert!(c.is_axis_dead_zone_default(2));
    }

    #[test]
    fn default_config_resets_every_predicate() {
        let (_backend, mut c) = controller();
        c.set_sensitivity(2.5);
        for axis in 0..NUM_AXES {
            c.set_axis_dead_zone(axis, 0.2);
            c.set_axis_map(axis, Some(GameAxis::Forward));
            c.set_axis_scale(axis, -1.0);
        }
        assert!(!c.is_sensitivity_default());

        c.set_default_config();

        assert!(c.is_sensitivity_default());
        for axis in 0..NUM_AXES {
            assert!(c.is_axis_dead_zone_default(axis));
            assert!(c.is_axis_map_default(axis));
            assert!(c.is_axis_scale_default(axis));
        }
    }

    #[test]
    fn disable_then_enable_keeps_configuration() {
        let (backend, mut c) = controller();
        c.set_axis_dead_zone(2, 0.15);
        c.set_axis_map(2, Some(GameAxis::Side));
        c.set_axis_scale(2, 0.75);

        c.set_enabled(false);
        assert!(!c.is_connected());
        assert_eq!(backend.open_handles(0), 0);
        assert_eq!(c.name(), "Test Pad");

        c.set_enabled(true);
        assert!(c.is_connected());
        assert_eq!(backend.open_handles(0), 1);
        assert_eq!(c.axis_dead_zone(2), 0.15);
        assert_eq!(c.axis_map(2), Some(GameAxis::Side));
        assert_eq!(c.axis_scale(2), 0.75);
    }

    #[test]
    fn enabling_twice_keeps_a_single_handle() {
        let (backend, mut c) = controller();
        c.set_enabled(true);
        c.set_enabled(true);
        assert_eq!(backend.open_handles(0), 1);
    }

    #[test]
    fn poll_normalizes_raw_values() {
        let (backend, mut c) = controller();
        backend.set_axis(0, Axis::LeftX, 16384);
        backend.set_axis(0, Axis::LeftY, i16::MIN);
        backend.set_axis(0, Axis::TriggerRight, i16::MAX);
        c.poll();

        assert_eq!(c.axes()[Axis::LeftX.index()].value, 0.5);
        assert_eq!(c.axes()[Axis::LeftY.index()].value, -1.0);
        assert_eq!(
            c.axes()[Axis::TriggerRight.index()].value,
            32767.0 / 32768.0
        );
    }

    #[test]
    fn unmapped_axes_leave_buffer_unchanged() {
        let (backend, mut c) = controller();
        for axis in Axis::ALL {
            backend.set_axis(0, axis, 12000);
        }
        c.poll();
        let mut out: AxisBuffer = [0.25, -0.5, 0.0, 1.0, 0.125];
        c.accumulate_axes(&mut out);
        assert_eq!(out, [0.25, -0.5, 0.0, 1.0, 0.125]);
    }

    #[test]
    fn mapped_axis_is_weighted_by_both_multipliers() {
        let (backend, mut c) = controller();
        backend.set_axis(0, Axis::RightX, 16384);
        c.set_sensitivity(2.0);
        c.set_axis_map(Axis::RightX.index(), Some(GameAxis::Yaw));
        c.set_axis_scale(Axis::RightX.index(), 0.5);
        c.poll();

        let mut out = AxisBuffer::default();
        c.accumulate_axes(&mut out);
        assert_eq!(out[GameAxis::Yaw.index()], 0.5);
        assert_eq!(out.iter().sum::<f32>(), 0.5);
    }

    #[test]
    fn axes_sharing_a_game_axis_add_up() {
        let (backend, mut c) = controller();
        backend.set_axis(0, Axis::LeftY, 16384);
        backend.set_axis(0, Axis::RightY, 8192);
        c.set_axis_map(Axis::LeftY.index(), Some(GameAxis::Forward));
        c.set_axis_map(Axis::RightY.index(), Some(GameAxis::Forward));
        c.poll();

        let mut out = [0.0, 0.0, 1.0, 0.0, 0.0];
        c.accumulate_axes(&mut out);
        assert_eq!(out[GameAxis::Forward.index()], 1.75);
    }

    #[test]
    fn identifier_is_derived_from_slot() {
        let backend = MemoryBackend::new();
        backend.add_joystick("Stick");
        let index = backend.add_controller("Pad");
        let c = GamepadController::new(backend, index);
        assert_eq!(c.identifier(), "SDL:1");
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn axis_names_come_from_backend() {
        let (_backend, c) = controller();
        assert_eq!(c.axis_name(0), "leftx");
        assert_eq!(c.axis_name(5), "righttrigger");
    }
}
