use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1 {
    pub version: u8,
    #[serde(default = "default_true")]
    pub use_joystick: bool,
    #[serde(default)]
    pub devices: BTreeMap<String, SettingsV1Device>, // identifier -> settings
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1Device {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_scale")]
    pub sensitivity: f32,
    #[serde(default)]
    pub axes: Vec<SettingsV1Axis>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsV1Axis {
    #[serde(default)]
    pub dead_zone: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>, // yaw | pitch | forward | side | up | none
    #[serde(default = "default_scale")]
    pub scale: f32,
}
