//! Data structures for the movie and series catalog.
//!
//! This module provides the `Title` entity, which is either a plain movie or an
//! episodic series organized into seasons, together with the pure lookup
//! functions that operate on a catalog (an ordered slice of titles).
mod lookup;

pub use lookup::{filter_episodic_titles, filter_plain_titles, search};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A season of an episodic title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// The season number
    pub season_number: u32,
    /// Episode numbers in the order they were recorded
    pub episodes: Vec<u32>,
}

impl Season {
    /// Creates a season from its number and its episode numbers
    pub fn new(season_number: u32, episodes: Vec<u32>) -> Self {
        Self {
            season_number,
            episodes,
        }
    }
}

/// Distinguishes plain movies from episodic series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleKind {
    /// A single, non-episodic title
    Movie,
    /// A title organized into seasons and episodes
    Series {
        /// Seasons in insertion order
        seasons: Vec<Season>,
    },
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Human readable name, not guaranteed to be unique
    pub name: String,
    /// Year of the release
    pub release_year: i32,
    /// Free-form genre description
    pub genre: String,
    /// Number of plays, used as the popularity ranking key
    pub play_count: u32,
    /// Whether this is a movie or a series
    pub kind: TitleKind,
}

impl Title {
    /// Creates a plain movie with a play count of zero
    pub fn movie(name: impl Into<String>, release_year: i32, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release_year,
            genre: genre.into(),
            play_count: 0,
            kind: TitleKind::Movie,
        }
    }

    /// Creates an episodic series with a play count of zero
    pub fn series(
        name: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
        seasons: Vec<Season>,
    ) -> Self {
        Self {
            name: name.into(),
            release_year,
            genre: genre.into(),
            play_count: 0,
            kind: TitleKind::Series { seasons },
        }
    }

    /// Returns true if this title is organized into seasons
    pub fn is_episodic(&self) -> bool {
        matches!(self.kind, TitleKind::Series { .. })
    }

    /// Returns the seasons of a series, or `None` for a movie
    pub fn seasons(&self) -> Option<&[Season]> {
        match &self.kind {
            TitleKind::Movie => None,
            TitleKind::Series { seasons } => Some(seasons),
        }
    }

    /// Registers a single play of this title
    pub fn record_play(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    /// Lists all episodes of a series as `SxxEyy` labels
    ///
    /// Seasons are visited in their stored order and, within each season,
    /// episodes in the order they were recorded. Both numbers are zero-padded
    /// to two digits. Returns `None` for a movie and an empty list for a
    /// series without seasons.
    ///
    /// # Examples
    ///
    /// ```
    /// use playtop::{Season, Title};
    ///
    /// let series = Title::series(
    ///     "The Office",
    ///     2005,
    ///     "Sitcom/Comedy",
    ///     vec![Season::new(1, vec![1, 2]), Season::new(2, vec![1])],
    /// );
    /// assert_eq!(
    ///     series.episode_labels().unwrap(),
    ///     vec!["S01E01", "S01E02", "S02E01"]
    /// );
    /// ```
    pub fn episode_labels(&self) -> Option<Vec<String>> {
        let seasons = self.seasons()?;

        Some(
            seasons
                .iter()
                .flat_map(|season| {
                    season
                        .episodes
                        .iter()
                        .map(move |episode| format!("S{:02}E{:02}", season.season_number, episode))
                })
                .collect(),
        )
    }

    /// Total number of episodes across all seasons (zero for a movie)
    pub fn episode_count(&self) -> usize {
        self.seasons()
            .map(|seasons| seasons.iter().map(|s| s.episodes.len()).sum())
            .unwrap_or(0)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.release_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailer_park_boys() -> Title {
        Title::series(
            "Trailer park boys",
            2001,
            "Sitcom/Comedy",
            vec![
                Season::new(1, vec![1, 2]),
                Season::new(2, vec![1, 2]),
                Season::new(3, vec![1, 2]),
            ],
        )
    }

    #[test]
    fn test_display_is_name_and_year() {
        assert_eq!(Title::movie("Rambo", 1982, "Action").to_string(), "Rambo (1982)");
        assert_eq!(trailer_park_boys().to_string(), "Trailer park boys (2001)");
    }

    #[test]
    fn test_new_titles_start_unplayed() {
        assert_eq!(Title::movie("Rambo", 1982, "Action").play_count, 0);
        assert_eq!(trailer_park_boys().play_count, 0);
    }

    #[test]
    fn test_record_play_increments() {
        let mut title = Title::movie("Rambo", 1982, "Action");
        title.record_play();
        title.record_play();
        assert_eq!(title.play_count, 2);

        title.play_count = u32::MAX;
        title.record_play();
        assert_eq!(title.play_count, u32::MAX);
    }

    #[test]
    fn test_episode_labels() {
        let series = Title::series(
            "Short",
            2020,
            "Drama",
            vec![Season::new(1, vec![1, 2]), Season::new(2, vec![1])],
        );
        assert_eq!(
            series.episode_labels(),
            Some(vec![
                "S01E01".to_string(),
                "S01E02".to_string(),
                "S02E01".to_string()
            ])
        );

        // Calling twice yields the same sequence
        assert_eq!(series.episode_labels(), series.episode_labels());
    }

    #[test]
    fn test_episode_labels_keep_recorded_order() {
        let series = Title::series(
            "Unordered",
            2020,
            "Drama",
            vec![Season::new(3, vec![12, 4]), Season::new(1, vec![7])],
        );
        assert_eq!(
            series.episode_labels().unwrap(),
            vec!["S03E12", "S03E04", "S01E07"]
        );
    }

    #[test]
    fn test_episode_labels_edge_cases() {
        let empty = Title::series("Pilotless", 2020, "Drama", Vec::new());
        assert_eq!(empty.episode_labels(), Some(Vec::new()));

        let movie = Title::movie("Terminator", 1984, "Action");
        assert_eq!(movie.episode_labels(), None);
    }

    #[test]
    fn test_variant_helpers() {
        let movie = Title::movie("Terminator", 1984, "Action");
        assert!(!movie.is_episodic());
        assert!(movie.seasons().is_none());
        assert_eq!(movie.episode_count(), 0);

        let series = trailer_park_boys();
        assert!(series.is_episodic());
        assert_eq!(series.seasons().map(|s| s.len()), Some(3));
        assert_eq!(series.episode_count(), 6);
    }
}
