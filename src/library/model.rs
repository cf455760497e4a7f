//! The `Track` record and its per-field normalization rules.
//!
//! A `Track` never holds an invalid value: every write (constructor or
//! setter) runs the field's rule and stores a corrected value instead of
//! failing.

/// Title stored when an empty title is supplied.
pub const UNTITLED: &str = "Untitled Track";
/// Genre stored when an empty genre is supplied.
pub const UNKNOWN_GENRE: &str = "Unknown";
/// Duration (seconds) stored when a non-positive duration is supplied.
pub const FALLBACK_DURATION_SECS: u64 = 180;
/// A track is popular once its play count is strictly above this.
pub const POPULARITY_THRESHOLD: u64 = 1_000_000;

/// Empty text becomes `"Untitled Track"`; anything else is kept verbatim.
pub fn normalize_title(text: String) -> String {
    if text.is_empty() {
        UNTITLED.to_string()
    } else {
        text
    }
}

/// Empty text becomes `"Unknown"`; anything else is kept verbatim.
pub fn normalize_genre(text: String) -> String {
    if text.is_empty() {
        UNKNOWN_GENRE.to_string()
    } else {
        text
    }
}

/// Non-positive durations become 180 seconds.
pub fn normalize_duration(secs: i64) -> u64 {
    u64::try_from(secs)
        .ok()
        .filter(|&s| s > 0)
        .unwrap_or(FALLBACK_DURATION_SECS)
}

/// Negative play counts clamp to zero.
pub fn normalize_play_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// One playable audio item.
///
/// Inputs are `i64` so callers can hand over out-of-range values and have
/// them normalized; stored counters are `u64`. `play` saturates at
/// `u64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    title: String,
    duration: u64,
    genre: String,
    play_count: u64,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            title: "Bella".to_string(),
            duration: 206,
            genre: "Hip-Hop".to_string(),
            play_count: 0,
        }
    }
}

impl Track {
    /// Create a track; each field goes through its setter's rule and the
    /// play count starts at zero.
    pub fn new(title: impl Into<String>, duration: i64, genre: impl Into<String>) -> Self {
        Self {
            title: normalize_title(title.into()),
            duration: normalize_duration(duration),
            genre: normalize_genre(genre.into()),
            play_count: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in seconds (always >= 1).
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn play_count(&self) -> u64 {
        self.play_count
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = normalize_title(title.into());
    }

    pub fn set_duration(&mut self, secs: i64) {
        self.duration = normalize_duration(secs);
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = normalize_genre(genre.into());
    }

    pub fn set_play_count(&mut self, count: i64) {
        self.play_count = normalize_play_count(count);
    }

    /// Register one play.
    pub fn play(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    /// Register `times` plays at once; same result as calling `play` that
    /// many times.
    pub fn play_many(&mut self, times: u64) {
        self.play_count = self.play_count.saturating_add(times);
    }

    pub fn reset_play_count(&mut self) {
        self.play_count = 0;
    }

    /// Format the duration as `M:SS`.
    ///
    /// Minutes are not padded or capped (36000s renders as `600:00`); seconds
    /// are always two digits.
    pub fn formatted_duration(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }

    pub fn is_popular(&self) -> bool {
        self.play_count > POPULARITY_THRESHOLD
    }
}
