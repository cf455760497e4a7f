use std::io::{self, Write};

use log::{debug, info, warn};

use crate::config::Settings;
use crate::library::Catalog;

mod logging;
mod report;
mod settings;
mod simulation;

pub use logging::filter_spec;
pub use report::{write_catalog, write_summary};
pub use simulation::apply_plays;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, problem) = settings::load_settings();
    if let Err(e) = logging::init(&settings.log) {
        debug!("keeping the existing logger: {e}");
    }
    if let Some(e) = problem {
        warn!("{e}; using defaults");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let catalog = studio(&settings, &mut out)?;
    out.flush()?;

    info!(
        "report done: {} tracks, {} plays",
        catalog.len(),
        catalog.total_plays()
    );
    Ok(())
}

/// Build the catalog, print it, apply simulated plays, print it again and
/// finish with a summary. Returns the final catalog.
pub fn studio<W: Write>(settings: &Settings, out: &mut W) -> io::Result<Catalog> {
    let mut catalog = if settings.catalog.tracks.is_empty() {
        info!("no catalog configured, using the built-in greatest hits");
        Catalog::greatest_hits()
    } else {
        Catalog::from_entries(&settings.catalog.tracks)
    };

    write_catalog(out, &catalog, &settings.display, "initial")?;

    if !settings.simulation.plays.is_empty() {
        let missing = apply_plays(&mut catalog, &settings.simulation.plays);
        if !missing.is_empty() {
            warn!("{} simulated plays matched no track", missing.len());
        }
        write_catalog(out, &catalog, &settings.display, "after simulated plays")?;
    }

    write_summary(out, &catalog)?;
    Ok(catalog)
}
