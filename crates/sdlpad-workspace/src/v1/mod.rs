mod convert;
mod settings;

use thiserror::Error;

pub(crate) use settings::SettingsV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid game axis for {0}: {1}")]
    InvalidGameAxis(String, String),
}
