//! Catalog lookups
//!
//! Pure functions over an ordered catalog: splitting it into movies and series,
//! and finding a title by name. None of these mutate the catalog and all of
//! them preserve catalog order.

use super::Title;

/// Returns all non-episodic titles in catalog order
pub fn filter_plain_titles(catalog: &[Title]) -> Vec<&Title> {
    catalog.iter().filter(|title| !title.is_episodic()).collect()
}

/// Returns all episodic titles in catalog order
pub fn filter_episodic_titles(catalog: &[Title]) -> Vec<&Title> {
    catalog.iter().filter(|title| title.is_episodic()).collect()
}

/// Finds the first title whose name contains `query`
///
/// Matching is a case-sensitive substring check without any normalization.
/// An empty query matches every title, so the first catalog entry is returned.
/// Returns `None` if nothing matches or the catalog is empty.
///
/// # Examples
///
/// ```
/// use playtop::{search, Title};
///
/// let catalog = vec![
///     Title::movie("Rambo", 1982, "Action"),
///     Title::movie("Terminator", 1984, "Action"),
/// ];
/// assert_eq!(search(&catalog, "Rambo").map(|t| t.name.as_str()), Some("Rambo"));
/// assert!(search(&catalog, "Robocop").is_none());
/// ```
pub fn search<'a>(catalog: &'a [Title], query: &str) -> Option<&'a Title> {
    catalog.iter().find(|title| title.name.contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Season;

    fn mixed_catalog() -> Vec<Title> {
        vec![
            Title::movie("Terminator", 1984, "Action"),
            Title::series("Alternatywy 4", 1986, "Comedy", vec![Season::new(1, vec![1, 2])]),
            Title::movie("Rambo", 1982, "Action"),
            Title::series("The Office", 2005, "Sitcom/Comedy", vec![Season::new(1, vec![1])]),
            Title::movie("Rambo II", 1985, "Action"),
        ]
    }

    fn names<'a>(titles: &[&'a Title]) -> Vec<&'a str> {
        titles.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_filters_partition_catalog() {
        let catalog = mixed_catalog();
        let movies = filter_plain_titles(&catalog);
        let series = filter_episodic_titles(&catalog);

        assert_eq!(names(&movies), vec!["Terminator", "Rambo", "Rambo II"]);
        assert_eq!(names(&series), vec!["Alternatywy 4", "The Office"]);
        assert_eq!(movies.len() + series.len(), catalog.len());

        for title in &catalog {
            let in_movies = movies.iter().any(|t| std::ptr::eq(*t, title));
            let in_series = series.iter().any(|t| std::ptr::eq(*t, title));
            assert!(in_movies ^ in_series, "{} must be in exactly one group", title);
        }
    }

    #[test]
    fn test_filters_on_empty_catalog() {
        assert!(filter_plain_titles(&[]).is_empty());
        assert!(filter_episodic_titles(&[]).is_empty());
    }

    #[test]
    fn test_search_finds_first_match() {
        let catalog = mixed_catalog();
        let found = search(&catalog, "Rambo").unwrap();
        assert_eq!(found.name, "Rambo");
        assert!(std::ptr::eq(found, &catalog[2]));
    }

    #[test]
    fn test_search_not_found() {
        let catalog = vec![
            Title::movie("Rambo", 1982, "Action"),
            Title::movie("Terminator", 1984, "Action"),
        ];
        assert!(search(&catalog, "Robocop").is_none());
        assert!(search(&[], "Rambo").is_none());
        assert!(search(&[], "").is_none());
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let catalog = mixed_catalog();
        assert_eq!(search(&catalog, "Office").unwrap().name, "The Office");
        assert_eq!(search(&catalog, "ernat").unwrap().name, "Alternatywy 4");
        assert!(search(&catalog, "rambo").is_none());
    }

    #[test]
    fn test_empty_query_returns_first_entry() {
        let catalog = mixed_catalog();
        assert!(std::ptr::eq(search(&catalog, "").unwrap(), &catalog[0]));
    }
}
