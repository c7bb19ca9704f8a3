use ahash::AHashMap;
use sdlpad_gamepad::GameAxis;

use crate::parse::CURRENT_VERSION;
use crate::settings::{AxisSettings, DeviceSettings, Settings};
use crate::DeviceId;

use super::settings::{SettingsV1, SettingsV1Axis, SettingsV1Device};
use super::Error;

const NO_AXIS: &str = "none";

impl SettingsV1 {
    pub fn to_settings(&self) -> Result<Settings, Error> {
        let mut devices: AHashMap<DeviceId, DeviceSettings> = AHashMap::new();
        for (id, raw) in &self.devices {
            devices.insert(id.as_str().into(), parse_device(id, raw)?);
        }

        Ok(Settings {
            use_joystick: self.use_joystick,
            devices,
        })
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let devices = settings
            .devices
            .iter()
            .map(|(id, device)| (id.to_string(), device_to_raw(device)))
            .collect();

        Self {
            version: CURRENT_VERSION,
            use_joystick: settings.use_joystick,
            devices,
        }
    }
}

fn parse_device(id: &str, raw: &SettingsV1Device) -> Result<DeviceSettings, Error> {
    let axes = raw
        .axes
        .iter()
        .map(|axis| {
            Ok(AxisSettings {
                dead_zone: axis.dead_zone,
                map: parse_game_axis(id, axis.map.as_deref())?,
                scale: axis.scale,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(DeviceSettings {
        enabled: raw.enabled,
        sensitivity: raw.sensitivity,
        axes,
    })
}

/// Parse a game axis name. Absent and `none` both mean "unmapped".
fn parse_game_axis(id: &str, name: Option<&str>) -> Result<Option<GameAxis>, Error> {
    match name {
        None | Some(NO_AXIS) => Ok(None),
        Some(name) => name
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidGameAxis(id.to_string(), name.to_string())),
    }
}

fn device_to_raw(device: &DeviceSettings) -> SettingsV1Device {
    SettingsV1Device {
        enabled: device.enabled,
        sensitivity: device.sensitivity,
        axes: device
            .axes
            .iter()
            .map(|axis| SettingsV1Axis {
                dead_zone: axis.dead_zone,
                map: axis.map.map(|m| m.name().to_string()),
                scale: axis.scale,
            })
            .collect(),
    }
}
