use std::{env, path::PathBuf};

use log::debug;

use super::schema::Settings;

/// Errors produced while loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, lets environment variables
/// (prefix `TRACKSTUDIO__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            debug!("reading config from {}", path.display());
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKSTUDIO")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.display.separator.contains('\n') {
            return Err(SettingsError::Invalid(
                "display.separator must not contain a newline".to_string(),
            ));
        }
        if let Some(i) = self.simulation.plays.iter().position(|p| p.title.is_empty()) {
            return Err(SettingsError::Invalid(format!(
                "simulation.plays[{i}].title must not be empty"
            )));
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKSTUDIO_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKSTUDIO_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/trackstudio/config.toml`
/// or `~/.config/trackstudio/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("trackstudio").join("config.toml"))
}
