//! Report formatting module
//!
//! Turns a ranked list of titles into the "most popular today" report, either
//! as console text or as JSON.

use crate::catalog::Title;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Date format used in the report header (`DD.MM.YYYY`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single ranked line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The title name
    pub name: String,
    /// Year of the release
    pub release_year: i32,
    /// Free-form genre description
    pub genre: String,
    /// Play count at the time the report was compiled
    pub play_count: u32,
    /// Whether the title is a series
    pub episodic: bool,
}

impl From<&Title> for ReportEntry {
    fn from(title: &Title) -> Self {
        Self {
            name: title.name.clone(),
            release_year: title.release_year,
            genre: title.genre.clone(),
            play_count: title.play_count,
            episodic: title.is_episodic(),
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t  *  {} ({}) - {} plays",
            self.name, self.release_year, self.play_count
        )
    }
}

/// The most played titles for a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The day the report covers
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    /// Ranked titles, most played first
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Creates a report from already ranked titles
    pub fn new(date: NaiveDate, ranked: &[&Title]) -> Self {
        Self {
            date,
            entries: ranked.iter().map(|title| ReportEntry::from(*title)).collect(),
        }
    }
}

/// Renders the header line followed by a blank line and one line per entry
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most popular movies and series on {} are:",
            format_date(self.date)
        )?;
        writeln!(f)?;

        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }

        Ok(())
    }
}

/// Formats a date as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_date(*date))
}
