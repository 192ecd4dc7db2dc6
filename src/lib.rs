//! Playtop - Simulated viewership charts for a small movie and series catalog
//!
//! This library models a catalog of movies and episodic series, fakes
//! viewership by handing out random play counts, and ranks the most played
//! titles of the day.

mod catalog;
mod ranking;
mod report;
mod sample_catalog;
mod view_simulator;

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

// Re-export error types
pub use view_simulator::ViewSimulationError;

// Re-export catalog types and operations
pub use catalog::{
    Season, Title, TitleKind, filter_episodic_titles, filter_plain_titles, search,
};
pub use ranking::{ContentFilter, TOP_TITLES_LIMIT, top_titles};
pub use report::{DATE_FORMAT, Report, ReportEntry, format_date};
pub use sample_catalog::sample_catalog;
pub use view_simulator::{
    PLAY_COUNT_RANGE, simulate_events, simulate_events_with, simulate_play_event,
};

/// Number of play events simulated when nothing else is requested
pub const DEFAULT_EVENT_COUNT: usize = 10;

/// Progress event emitted while compiling a report
///
/// These events allow library users to follow the simulation and ranking
/// steps without the library printing anything itself.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Report compilation started
    Started {
        catalog_size: usize,
        event_count: usize,
    },

    /// A simulated play event assigned a new play count to a title
    ///
    /// `index` counts events from 1 to `total`.
    PlayEventSimulated {
        index: usize,
        total: usize,
        title: String,
        play_count: u32,
    },

    /// All play events have been simulated
    SimulationComplete { event_count: usize },

    /// The catalog has been ranked
    Ranked {
        filter: ContentFilter,
        entry_count: usize,
    },
}

/// Top-level error type for Playtop operations
#[derive(Debug, Error)]
pub enum PlaytopError {
    /// Error during view simulation
    #[error("View simulation error: {0}")]
    ViewSimulation(#[from] ViewSimulationError),

    /// Error while serializing the report
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Settings for a single report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of play events to simulate before ranking
    pub event_count: usize,
    /// Content type restriction for the ranking
    pub filter: ContentFilter,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            event_count: DEFAULT_EVENT_COUNT,
            filter: ContentFilter::All,
        }
    }
}

/// Simulates viewership on the catalog and compiles the report for `date`
///
/// The catalog's play counts are mutated by `options.event_count` simulated
/// play events drawn from `rng`, then the catalog is ranked with
/// `options.filter`. Progress events are emitted through the provided
/// callback, allowing library users to display them or remain silent.
///
/// # Errors
///
/// Returns [`PlaytopError::ViewSimulation`] if play events are requested for
/// an empty catalog.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use playtop::{compile_report, sample_catalog, ReportOptions};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut catalog = sample_catalog();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let report = compile_report(
///     &mut catalog,
///     ReportOptions::default(),
///     date,
///     &mut rng,
///     |_| {} // Ignore all progress events
/// ).unwrap();
///
/// assert!(report.entries.len() <= 3);
/// ```
pub fn compile_report<R, F>(
    catalog: &mut [Title],
    options: ReportOptions,
    date: NaiveDate,
    rng: &mut R,
    mut progress_callback: F,
) -> Result<Report, PlaytopError>
where
    R: Rng,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Started {
        catalog_size: catalog.len(),
        event_count: options.event_count,
    });

    let mut simulated = 0;
    simulate_events_with(catalog, options.event_count, rng, |_, title| {
        simulated += 1;
        progress_callback(ProgressEvent::PlayEventSimulated {
            index: simulated,
            total: options.event_count,
            title: title.to_string(),
            play_count: title.play_count,
        });
    })?;

    progress_callback(ProgressEvent::SimulationComplete {
        event_count: options.event_count,
    });

    let ranked = top_titles(catalog, options.filter);
    progress_callback(ProgressEvent::Ranked {
        filter: options.filter,
        entry_count: ranked.len(),
    });

    Ok(Report::new(date, &ranked))
}
