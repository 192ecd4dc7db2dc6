//! Built-in demo catalog

use crate::catalog::{Season, Title};

/// Builds the fixed demo catalog of four movies followed by three series
pub fn sample_catalog() -> Vec<Title> {
    vec![
        Title::movie("Terminator", 1984, "Action"),
        Title::movie("Rambo", 1982, "Action"),
        Title::movie("Nie lubię poniedziałku", 1971, "Comedy"),
        Title::movie("Brunet wieczorową porą", 1976, "Comedy"),
        Title::series(
            "Alternatywy 4",
            1986,
            "Comedy",
            vec![Season::new(1, vec![1, 2, 3, 4])],
        ),
        Title::series(
            "Trailer park boys",
            2001,
            "Sitcom/Comedy",
            vec![
                Season::new(1, vec![1, 2]),
                Season::new(2, vec![1, 2]),
                Season::new(3, vec![1, 2]),
            ],
        ),
        Title::series(
            "The Office",
            2005,
            "Sitcom/Comedy",
            vec![Season::new(1, vec![1, 2, 3]), Season::new(2, vec![1, 2, 3])],
        ),
    ]
}
