//! Ranking module
//!
//! This module selects the most played titles of a catalog, optionally
//! restricted to movies or to series.

use crate::catalog::{Title, filter_episodic_titles, filter_plain_titles};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Maximum number of titles returned by [`top_titles`]
pub const TOP_TITLES_LIMIT: usize = 3;

/// Content type restriction applied before ranking
///
/// Parsing never fails: `"movies"` and `"series"` select the respective
/// restriction and every other value falls back to [`ContentFilter::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFilter {
    /// Rank the whole catalog
    #[default]
    All,
    /// Rank only non-episodic titles
    Movies,
    /// Rank only episodic titles
    Series,
}

impl ContentFilter {
    /// Maps an optional filter value to a content filter
    ///
    /// `None` and unrecognized values both mean no filtering.
    pub fn from_option(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<&str> for ContentFilter {
    fn from(value: &str) -> Self {
        match value {
            "movies" => ContentFilter::Movies,
            "series" => ContentFilter::Series,
            _ => ContentFilter::All,
        }
    }
}

impl FromStr for ContentFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentFilter::All => write!(f, "all"),
            ContentFilter::Movies => write!(f, "movies"),
            ContentFilter::Series => write!(f, "series"),
        }
    }
}

/// Returns the most played titles of the catalog
///
/// The catalog is first restricted according to `filter`, then sorted by play
/// count in descending order. The sort is stable, so titles with the same play
/// count keep their catalog order. At most [`TOP_TITLES_LIMIT`] titles are
/// returned.
///
/// # Examples
///
/// ```
/// use playtop::{top_titles, ContentFilter, Title};
///
/// let mut catalog = vec![
///     Title::movie("Terminator", 1984, "Action"),
///     Title::movie("Rambo", 1982, "Action"),
/// ];
/// catalog[1].play_count = 42;
///
/// let top = top_titles(&catalog, ContentFilter::All);
/// assert_eq!(top[0].name, "Rambo");
/// assert_eq!(top[1].name, "Terminator");
/// ```
pub fn top_titles(catalog: &[Title], filter: ContentFilter) -> Vec<&Title> {
    let mut titles = match filter {
        ContentFilter::All => catalog.iter().collect(),
        ContentFilter::Movies => filter_plain_titles(catalog),
        ContentFilter::Series => filter_episodic_titles(catalog),
    };

    // sort_by is stable, ties keep their relative order
    titles.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    titles.truncate(TOP_TITLES_LIMIT);

    titles
}
