use serde::Deserialize;

use crate::{v1::SettingsV1, Settings, SettingsError};

/// Current settings file version.
pub(crate) const CURRENT_VERSION: u8 = 1;

/// Parse yaml settings.
pub fn parse_settings(input: &str) -> Result<Settings, SettingsError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let raw: SettingsV1 = serde_yaml::from_str(input)?;
            let settings = raw.to_settings()?;
            Ok(settings)
        }
        _ => Err(SettingsError::UnsupportedVersion(version)),
    }
}

/// Settings with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedSettings {
    version: u8,
}

/// Parse the version of yaml settings.
fn parse_version(input: &str) -> Result<u8, SettingsError> {
    let raw: VersionedSettings = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
