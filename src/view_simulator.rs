//! View simulation module
//!
//! This module fakes viewership by assigning random play counts to randomly
//! chosen catalog entries. The random source is passed in by the caller so
//! that runs can be reproduced with a seeded generator.

use crate::catalog::Title;
use rand::Rng;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Range of play counts a simulated event can assign
pub const PLAY_COUNT_RANGE: RangeInclusive<u32> = 1..=100;

/// Errors that can occur during view simulation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewSimulationError {
    /// A random title was requested from a catalog without titles
    #[error("Cannot simulate plays on an empty catalog")]
    EmptyCatalog,
}

/// Simulates a single play event
///
/// Picks one title uniformly at random and sets its play count to a random
/// value from [`PLAY_COUNT_RANGE`]. The previous play count is overwritten,
/// not added to.
///
/// # Returns
///
/// The index of the title that received the new play count
///
/// # Errors
///
/// Returns [`ViewSimulationError::EmptyCatalog`] if the catalog has no titles.
pub fn simulate_play_event<R>(
    catalog: &mut [Title],
    rng: &mut R,
) -> Result<usize, ViewSimulationError>
where
    R: Rng,
{
    if catalog.is_empty() {
        return Err(ViewSimulationError::EmptyCatalog);
    }

    let index = rng.gen_range(0..catalog.len());
    catalog[index].play_count = rng.gen_range(PLAY_COUNT_RANGE);

    Ok(index)
}

/// Simulates `count` play events in sequence
///
/// A count of zero leaves the catalog untouched, even if it is empty.
///
/// # Errors
///
/// Returns [`ViewSimulationError::EmptyCatalog`] before any event is simulated
/// if the catalog is empty and `count` is non-zero.
pub fn simulate_events<R>(
    catalog: &mut [Title],
    count: usize,
    rng: &mut R,
) -> Result<(), ViewSimulationError>
where
    R: Rng,
{
    simulate_events_with(catalog, count, rng, |_, _| {})
}

/// Simulates `count` play events, reporting each one to `on_event`
///
/// The callback receives the index of the updated title and the title itself
/// after its play count was set.
pub fn simulate_events_with<R, F>(
    catalog: &mut [Title],
    count: usize,
    rng: &mut R,
    mut on_event: F,
) -> Result<(), ViewSimulationError>
where
    R: Rng,
    F: FnMut(usize, &Title),
{
    if count > 0 && catalog.is_empty() {
        return Err(ViewSimulationError::EmptyCatalog);
    }

    for _ in 0..count {
        let index = simulate_play_event(catalog, rng)?;
        on_event(index, &catalog[index]);
    }

    Ok(())
}
