use super::load::{SettingsError, default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

pub(crate) struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

pub(crate) fn write_config(contents: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, contents).unwrap();
    let path = cfg_path.to_str().unwrap().to_string();
    (dir, path)
}

#[test]
fn resolve_config_path_prefers_trackstudio_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TRACKSTUDIO_CONFIG_PATH", "/tmp/trackstudio-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/trackstudio-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("trackstudio")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("trackstudio")
            .join("config.toml")
    );
}

#[test]
fn settings_defaults_when_config_file_missing() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let _g1 = EnvGuard::set("TRACKSTUDIO_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKSTUDIO__LOG__LEVEL");

    let s = Settings::load().unwrap();
    assert_eq!(s.log.level, "warn");
    assert_eq!(s.display.separator, " | ");
    assert_eq!(s.display.fields.len(), 5);
    assert!(s.catalog.tracks.is_empty());
    assert_eq!(s.simulation.plays.len(), 4);
    assert_eq!(s.simulation.plays[0].set_count, Some(1_500_000));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let (_dir, path) = write_config(
        r#"
[log]
level = "debug"

[display]
header_text = "Greatest hits"
fields = ["title", "secs", "play-count", "popular"]
separator = " • "

[[catalog.tracks]]
title = "Bella"
duration = 206
genre = "Hip-Hop"
plays = 1500000

[[catalog.tracks]]
title = ""
duration = -50
genre = ""

[[simulation.plays]]
title = "Bella"
times = 3

[[simulation.plays]]
title = "Untitled Track"
reset = true
set_count = -4
"#,
    );

    let _g1 = EnvGuard::set("TRACKSTUDIO_CONFIG_PATH", &path);
    let _g2 = EnvGuard::remove("TRACKSTUDIO__LOG__LEVEL");

    let s = Settings::load().unwrap();
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.display.header_text, "Greatest hits");
    assert_eq!(
        s.display.fields,
        vec![
            TrackField::Title,
            TrackField::Seconds,
            TrackField::Plays,
            TrackField::Popular
        ]
    );
    assert_eq!(s.display.separator, " • ");

    assert_eq!(s.catalog.tracks.len(), 2);
    assert_eq!(s.catalog.tracks[0].title, "Bella");
    assert_eq!(s.catalog.tracks[0].plays, 1_500_000);
    assert_eq!(s.catalog.tracks[1].title, "");
    assert_eq!(s.catalog.tracks[1].duration, -50);
    assert_eq!(s.catalog.tracks[1].plays, 0);

    assert_eq!(s.simulation.plays.len(), 2);
    assert_eq!(s.simulation.plays[0].times, 3);
    assert!(!s.simulation.plays[0].reset);
    assert_eq!(s.simulation.plays[0].set_count, None);
    assert!(s.simulation.plays[1].reset);
    assert_eq!(s.simulation.plays[1].set_count, Some(-4));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let (_dir, path) = write_config(
        r#"
[log]
level = "info"
"#,
    );

    let _g1 = EnvGuard::set("TRACKSTUDIO_CONFIG_PATH", &path);
    let _g2 = EnvGuard::set("TRACKSTUDIO__LOG__LEVEL", "trace");

    let s = Settings::load().unwrap();
    assert_eq!(s.log.level, "trace");
}

#[test]
fn settings_load_rejects_unknown_field_name() {
    let _lock = env_lock();

    let (_dir, path) = write_config(
        r#"
[display]
fields = ["title", "bpm"]
"#,
    );

    let _g1 = EnvGuard::set("TRACKSTUDIO_CONFIG_PATH", &path);
    let _g2 = EnvGuard::remove("TRACKSTUDIO__LOG__LEVEL");

    assert!(matches!(Settings::load(), Err(SettingsError::Load(_))));
}

#[test]
fn validate_rejects_newline_separator_and_untitled_plays() {
    let mut s = Settings::default();
    s.display.separator = "\n".to_string();
    assert!(matches!(s.validate(), Err(SettingsError::Invalid(_))));

    let mut s = Settings::default();
    s.simulation.plays.clear();
    s.simulation.plays.push(PlaySetting {
        title: "Bella".to_string(),
        times: 1,
        ..PlaySetting::default()
    });
    s.simulation.plays.push(PlaySetting::default());
    match s.validate() {
        Err(SettingsError::Invalid(msg)) => assert!(msg.contains("plays[1]")),
        other => panic!("unexpected: {other:?}"),
    }
}
