use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{parse_settings, Settings, WorkspaceError};

const DEFAULT_WORKSPACE_PATH: &str = ".config/sdlpad";
const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// Directory holding the settings file.
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new(path: Option<&Path>) -> Result<Self, WorkspaceError> {
        let path = {
            if let Some(path) = path {
                path.to_owned()
            } else {
                Self::default_path()?
            }
        };

        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        } else if !path.is_dir() {
            return Err(WorkspaceError::PathIsNotDirectory(
                path.display().to_string(),
            ));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.path.join(SETTINGS_FILE_NAME)
    }

    /// Reads the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, WorkspaceError> {
        let path = self.settings_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(parse_settings(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(Settings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), WorkspaceError> {
        let yaml = settings.to_yaml()?;
        std::fs::write(self.settings_path(), yaml)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf, WorkspaceError> {
        let path = std::env::var("HOME")
            .map(PathBuf::from)
            .map(|p| p.join(DEFAULT_WORKSPACE_PATH))
            .map_err(|_| WorkspaceError::EnvVarNotSet("HOME".to_string()))?;

        Ok(path)
    }
}
