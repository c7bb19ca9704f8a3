mod parse;
mod settings;
mod v1;
mod workspace;

use thiserror::Error;

pub use parse::parse_settings;
pub use settings::{AxisSettings, DeviceSettings, Settings};
pub use workspace::Workspace;

/// Identity string of a device, as reported by `JoystickConfig::identifier`.
pub type DeviceId = Box<str>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("v1 settings error: {0}")]
    V1SettingsError(#[from] v1::Error),
}

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
    #[error("path is not a directory: {0}")]
    PathIsNotDirectory(String),
    #[error("settings error: {0}")]
    SettingsError(#[from] SettingsError),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
