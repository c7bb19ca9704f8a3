use ahash::AHashMap;
use log::debug;
use sdlpad_gamepad::{GameAxis, JoystickConfig};

use crate::v1::SettingsV1;
use crate::{DeviceId, SettingsError};

/// Saved configuration of one physical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSettings {
    pub dead_zone: f32,
    pub map: Option<GameAxis>,
    pub scale: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            dead_zone: 0.0,
            map: None,
            scale: 1.0,
        }
    }
}

/// Saved configuration of one device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSettings {
    pub enabled: bool,
    pub sensitivity: f32,
    pub axes: Vec<AxisSettings>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity: 1.0,
            axes: Vec::new(),
        }
    }
}

impl DeviceSettings {
    /// Snapshot of a device's current configuration.
    pub fn capture(device: &dyn JoystickConfig) -> Self {
        let axes = (0..device.num_axes())
            .map(|axis| AxisSettings {
                dead_zone: device.axis_dead_zone(axis),
                map: device.axis_map(axis),
                scale: device.axis_scale(axis),
            })
            .collect();

        Self {
            enabled: device.enabled(),
            sensitivity: device.sensitivity(),
            axes,
        }
    }

    /// Resets the device, then applies these settings on top. Axes the
    /// device does not have are skipped.
    pub fn apply(&self, device: &mut dyn JoystickConfig) {
        device.set_default_config();
        device.set_sensitivity(self.sensitivity);
        for (axis, settings) in self.axes.iter().enumerate().take(device.num_axes()) {
            device.set_axis_dead_zone(axis, settings.dead_zone);
            device.set_axis_map(axis, settings.map);
            device.set_axis_scale(axis, settings.scale);
        }
        device.set_enabled(self.enabled);
    }
}

/// Contents of the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub use_joystick: bool,
    pub devices: AHashMap<DeviceId, DeviceSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_joystick: true,
            devices: AHashMap::new(),
        }
    }
}

impl Settings {
    pub fn device(&self, id: &str) -> Option<&DeviceSettings> {
        self.devices.get(id)
    }

    /// Applies the saved settings for `device`, or its defaults when none are
    /// stored under its identifier.
    pub fn apply(&self, device: &mut dyn JoystickConfig) {
        let id = device.identifier();
        match self.devices.get(id.as_str()) {
            Some(settings) => {
                debug!("applying saved settings to {id}");
                settings.apply(device);
            }
            None => device.set_default_config(),
        }
    }

    /// Stores the current configuration of `device`, replacing any earlier
    /// entry for the same identifier.
    pub fn record(&mut self, device: &dyn JoystickConfig) {
        self.devices
            .insert(device.identifier().into(), DeviceSettings::capture(device));
    }

    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(&SettingsV1::from_settings(self))?)
    }
}

#[cfg(test)]
mod tests {
    use sdlpad_gamepad::memory::MemoryBackend;
    use sdlpad_gamepad::{GamepadController, NUM_AXES};

    use super::*;
    use crate::parse_settings;

    fn pad() -> GamepadController<MemoryBackend> {
        let backend = MemoryBackend::new();
        let index = backend.add_controller("Pad");
        GamepadController::new(backend, index)
    }

    #[test]
    fn apply_restores_saved_configuration() {
        let mut settings = Settings::default();
        settings.devices.insert(
            "SDL:0".into(),
            DeviceSettings {
                enabled: true,
                sensitivity: 2.0,
                axes: vec![
                    AxisSettings {
                        dead_zone: 0.2,
                        map: Some(GameAxis::Side),
                        scale: 0.5,
                    },
                    AxisSettings::default(),
                ],
            },
        );

        let mut device = pad();
        settings.apply(&mut device);

        assert_eq!(device.sensitivity(), 2.0);
        assert_eq!(device.axis_dead_zone(0), 0.2);
        assert_eq!(device.axis_map(0), Some(GameAxis::Side));
        assert_eq!(device.axis_scale(0), 0.5);
        assert!(device.is_axis_map_default(1));
        assert!(device.is_connected());
    }

    #[test]
    fn apply_without_entry_resets_device() {
        let mut device = pad();
        device.set_sensitivity(4.0);
        device.set_axis_map(3, Some(GameAxis::Up));

        Settings::default().apply(&mut device);

        assert!(device.is_sensitivity_default());
        assert!(device.is_axis_map_default(3));
    }

    #[test]
    fn apply_ignores_extra_axes_and_disables() {
        let mut device = pad();
        let settings = DeviceSettings {
            enabled: false,
            sensitivity: 1.0,
            axes: vec![AxisSettings::default(); NUM_AXES + 2],
        };
        settings.apply(&mut device);
        assert!(!device.enabled());
    }

    #[test]
    fn record_captures_every_axis() {
        let mut device = pad();
        device.set_axis_map(4, Some(GameAxis::Up));
        device.set_axis_dead_zone(4, 0.3);

        let mut settings = Settings::default();
        settings.record(&device);

        let saved = settings.device("SDL:0").expect("device recorded");
        assert_eq!(saved.axes.len(), NUM_AXES);
        assert_eq!(saved.axes[4].map, Some(GameAxis::Up));
        assert_eq!(saved.axes[4].dead_zone, 0.3);
    }

    #[test]
    fn apply_keeps_nan_dead_zone_in_range() {
        let yaml = r#"
version: 1
devices:
  "SDL:0":
    axes:
      - { dead_zone: .nan, map: yaw }
"#;
        let settings = parse_settings(yaml).expect("should parse");
        let mut device = pad();
        settings.apply(&mut device);

        assert!((0.0..=1.0).contains(&device.axis_dead_zone(0)));
        assert!(device.is_axis_dead_zone_default(0));
        assert_eq!(device.axis_map(0), Some(GameAxis::Yaw));
    }

    #[test]
    fn yaml_output_parses_back() {
        let mut device = pad();
        device.set_sensitivity(1.25);
        device.set_axis_map(0, Some(GameAxis::Yaw));

        let mut settings = Settings {
            use_joystick: false,
            ..Settings::default()
        };
        settings.record(&device);

        let yaml = settings.to_yaml().expect("should serialize");
        let parsed = parse_settings(&yaml).expect("should parse");
        assert_eq!(parsed, settings);
    }
}
