//! An ordered collection of tracks built from configured entries.

use log::{debug, warn};
use serde::Deserialize;

use super::model::Track;

/// A catalog entry as written in `config.toml`.
///
/// Values are taken as given; the `Track` normalizes them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackEntry {
    pub title: String,
    pub duration: i64,
    pub genre: String,
    pub plays: i64,
}

impl TrackEntry {
    pub fn new(title: &str, duration: i64, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            duration,
            genre: genre.to_string(),
            plays: 0,
        }
    }
}

/// The built-in greatest-hits catalog used when none is configured.
pub fn greatest_hits_entries() -> Vec<TrackEntry> {
    vec![
        TrackEntry::new("Bella", 206, "Hip-Hop"),
        TrackEntry::new("Est-ce que tu m'aimes", 234, "Pop"),
        TrackEntry::new("Tout donner", 198, "Hip-Hop"),
        TrackEntry::new("Où aller", 267, "R&B"),
        TrackEntry::new("Zombie", 223, "Hip-Hop"),
        TrackEntry::new("J'me tire", 205, "Hip-Hop"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from `entries`, keeping their order.
    ///
    /// Any value the track had to normalize is reported with `warn!`.
    pub fn from_entries(entries: &[TrackEntry]) -> Self {
        let tracks = entries
            .iter()
            .map(|e| {
                let mut track = Track::new(e.title.as_str(), e.duration, e.genre.as_str());
                track.set_play_count(e.plays);
                report_normalized(e, &track);
                track
            })
            .collect::<Vec<_>>();

        debug!("built catalog with {} tracks", tracks.len());
        Self { tracks }
    }

    pub fn greatest_hits() -> Self {
        Self::from_entries(&greatest_hits_entries())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// First track whose title matches exactly.
    pub fn find(&self, title: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.title() == title)
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.title() == title)
    }

    /// Play the first track titled `title` `times` times.
    ///
    /// Returns `false` when no track has that title.
    pub fn play_times(&mut self, title: &str, times: u64) -> bool {
        match self.find_mut(title) {
            Some(track) => {
                track.play_many(times);
                true
            }
            None => false,
        }
    }

    pub fn popular(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_popular())
    }

    pub fn total_plays(&self) -> u64 {
        self.tracks
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.play_count()))
    }
}

/// An entry field whose stored value differs from what was supplied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum NormalizedField {
    Title,
    Duration,
    Genre,
    Plays,
}

pub(crate) fn normalized_fields(entry: &TrackEntry, track: &Track) -> Vec<NormalizedField> {
    let mut changed = Vec::new();
    if track.title() != entry.title {
        changed.push(NormalizedField::Title);
    }
    if i64::try_from(track.duration()).ok() != Some(entry.duration) {
        changed.push(NormalizedField::Duration);
    }
    if track.genre() != entry.genre {
        changed.push(NormalizedField::Genre);
    }
    if i64::try_from(track.play_count()).ok() != Some(entry.plays) {
        changed.push(NormalizedField::Plays);
    }
    changed
}

fn report_normalized(entry: &TrackEntry, track: &Track) {
    for field in normalized_fields(entry, track) {
        match field {
            NormalizedField::Title => {
                warn!("catalog entry has an empty title, stored as {:?}", track.title())
            }
            NormalizedField::Duration => warn!(
                "track {:?}: duration {} replaced by {}",
                track.title(),
                entry.duration,
                track.duration()
            ),
            NormalizedField::Genre => warn!(
                "track {:?}: empty genre stored as {:?}",
                track.title(),
                track.genre()
            ),
            NormalizedField::Plays => warn!(
                "track {:?}: play count {} clamped to {}",
                track.title(),
                entry.plays,
                track.play_count()
            ),
        }
    }
}
