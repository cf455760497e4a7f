use crate::config::{self, SettingsError};

/// Load and validate settings, falling back to defaults on any problem.
///
/// The error (if any) is handed back so it can be logged once the logger
/// is up; settings decide the log level, so they are read first.
pub fn load_settings() -> (config::Settings, Option<SettingsError>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        // Config is optional; failures should not prevent the report from running.
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
