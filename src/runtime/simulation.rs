use log::{debug, warn};

use crate::config::PlaySetting;
use crate::library::Catalog;

/// Apply simulated play adjustments to `catalog` in order.
///
/// Returns the titles that matched no track.
pub fn apply_plays(catalog: &mut Catalog, plays: &[PlaySetting]) -> Vec<String> {
    let mut missing = Vec::new();

    for p in plays {
        let Some(track) = catalog.find_mut(&p.title) else {
            warn!("simulation: no track titled {:?}", p.title);
            missing.push(p.title.clone());
            continue;
        };

        if p.reset {
            track.reset_play_count();
        }
        if let Some(count) = p.set_count {
            track.set_play_count(count);
        }
        track.play_many(p.times);

        debug!(
            "simulation: {:?} now at {} plays",
            track.title(),
            track.play_count()
        );
    }

    missing
}
