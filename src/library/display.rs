use crate::config::TrackField;

use super::model::Track;

/// Build a display line for a track according to the provided `fields` and separator.
///
/// Fields are rendered in the configured order; fields that produce nothing
/// (e.g. `popular` on a track that isn't) are skipped. Falls back to the title
/// when no parts were produced.
pub fn display_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Title => parts.push(track.title().to_string()),
            TrackField::Duration => parts.push(track.formatted_duration()),
            TrackField::Seconds => parts.push(format!("{}s", track.duration())),
            TrackField::Genre => parts.push(track.genre().to_string()),
            TrackField::Plays => parts.push(format!("{} plays", track.play_count())),
            TrackField::Popular => {
                if track.is_popular() {
                    parts.push("popular".to_string());
                }
            }
        }
    }

    if parts.is_empty() {
        track.title().to_string()
    } else {
        parts.join(sep)
    }
}
