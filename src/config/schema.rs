use serde::Deserialize;

use crate::library::TrackEntry;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackstudio/config.toml` or `~/.config/trackstudio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKSTUDIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub display: DisplaySettings,
    pub catalog: CatalogSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `env_logger` filter, e.g. `"info"` or `"trackstudio=debug"`.
    /// `RUST_LOG` wins when set.
    pub level: String,
    /// Prefix each log line with a timestamp.
    pub timestamps: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Heading printed above each catalog listing.
    pub header_text: String,

    /// Which track fields to show per line, and in what order.
    ///
    /// Example: ["title", "duration", "genre"]
    pub fields: Vec<TrackField>,

    /// Separator used to join `fields`.
    pub separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            header_text: "Catalog".to_string(),
            fields: vec![
                TrackField::Title,
                TrackField::Duration,
                TrackField::Genre,
                TrackField::Plays,
                TrackField::Popular,
            ],
            separator: " | ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    /// Duration as `M:SS`.
    Duration,
    /// Raw duration in seconds.
    #[serde(alias = "secs")]
    Seconds,
    Genre,
    #[serde(alias = "play-count", alias = "play_count")]
    Plays,
    /// Marker shown only for popular tracks.
    Popular,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Tracks to load. When empty the built-in greatest hits are used.
    pub tracks: Vec<TrackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Play adjustments applied after the initial listing, in order.
    /// Set to `[]` to skip the second listing.
    pub plays: Vec<PlaySetting>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            plays: vec![
                PlaySetting::set_count("Bella", 1_500_000),
                PlaySetting::times("Est-ce que tu m'aimes", 50_000),
                PlaySetting::times("J'me tire", 25_000),
                PlaySetting::times("Tout donner", 75_000),
            ],
        }
    }
}

/// One simulated adjustment for the track titled `title`.
///
/// Applied as: reset (if set), then `set_count` (if set), then `times` plays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaySetting {
    pub title: String,
    pub reset: bool,
    pub set_count: Option<i64>,
    pub times: u64,
}

impl PlaySetting {
    pub fn times(title: &str, times: u64) -> Self {
        Self {
            title: title.to_string(),
            times,
            ..Self::default()
        }
    }

    pub fn set_count(title: &str, count: i64) -> Self {
        Self {
            title: title.to_string(),
            set_count: Some(count),
            ..Self::default()
        }
    }
}
