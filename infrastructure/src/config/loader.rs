//! Roster file loader with environment overrides

use super::file_config::RosterConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::Path;
use thiserror::Error;

/// Errors from roster loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load roster: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Loads roster files, merging environment overrides on top
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a TOML file.
    ///
    /// Values under the `CHORUS_` environment prefix override file values,
    /// with `__` separating nested keys (e.g.
    /// `CHORUS_COMPOSITE__MODEL=gpt-5-mini`).
    pub fn load(path: impl AsRef<Path>) -> Result<RosterConfig, ConfigError> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CHORUS_").split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }
}
