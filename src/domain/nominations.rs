//! The bounded, insertion-ordered nomination shortlist.

use super::movie::Movie;
use serde::{Deserialize, Serialize};

/// Maximum number of nominations a user may hold.
pub const MAX_NOMINATIONS: usize = 5;

/// Movies the user has nominated, in the order they were added.
///
/// Holds at most [`MAX_NOMINATIONS`] entries and never two movies with the same
/// identifier. Serialized as a plain JSON array of [`Movie`]; a stored array that
/// breaks either invariant is repaired on deserialization (later duplicates are
/// dropped, then the list is truncated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Movie>", into = "Vec<Movie>")]
pub struct NominationList {
    movies: Vec<Movie>,
}

impl NominationList {
    #[must_use]
    pub const fn new() -> Self {
        Self { movies: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Whether the cap has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.movies.len() >= MAX_NOMINATIONS
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    /// Whether the nominate control for `movie` is enabled.
    #[must_use]
    pub fn can_nominate(&self, movie: &Movie) -> bool {
        !self.is_full() && !self.contains(&movie.id)
    }

    /// Appends `movie` if the control for it is enabled.
    ///
    /// Returns `false` and leaves the list untouched when the list is full or
    /// the movie is already nominated.
    pub fn nominate(&mut self, movie: Movie) -> bool {
        if !self.can_nominate(&movie) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Removes the movie with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|movie| movie.id != id);
        self.movies.len() != before
    }

    pub fn clear(&mut self) {
        self.movies.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl From<Vec<Movie>> for NominationList {
    fn from(movies: Vec<Movie>) -> Self {
        let stored = movies.len();
        let mut list = Self::new();
        for movie in movies {
            list.nominate(movie);
        }
        if list.len() != stored {
            tracing::warn!(
                stored = stored,
                kept = list.len(),
                "repaired stored nominations (duplicates or over limit)"
            );
        }
        list
    }
}

impl From<NominationList> for Vec<Movie> {
    fn from(list: NominationList) -> Self {
        list.movies
    }
}

impl<'a> IntoIterator for &'a NominationList {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::Poster;

    fn movie(n: usize) -> Movie {
        Movie::new(format!("tt{n:07}"), format!("Movie {n}"), "2000", Poster::Missing)
    }

    #[test]
    fn sixth_nomination_is_rejected() {
        let mut list = NominationList::new();
        for n in 0..MAX_NOMINATIONS {
            assert!(list.nominate(movie(n)));
        }

        assert!(list.is_full());
        assert!(!list.can_nominate(&movie(99)));
        assert!(!list.nominate(movie(99)));
        assert_eq!(list.len(), MAX_NOMINATIONS);
    }

    #[test]
    fn duplicate_nomination_is_rejected() {
        let mut list = NominationList::new();
        assert!(list.nominate(movie(1)));
        assert!(!list.nominate(movie(1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = NominationList::new();
        list.nominate(movie(1));
        list.nominate(movie(2));

        assert!(!list.remove("tt-absent"));
        assert_eq!(list.len(), 2);

        assert!(list.remove(&movie(1).id));
        assert_eq!(list.len(), 1);
        assert!(!list.remove(&movie(1).id));
        assert_eq!(list.get(0), Some(&movie(2)));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = NominationList::new();
        list.nominate(movie(1));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn stored_list_is_repaired_on_load() {
        let stored = vec![movie(1), movie(1), movie(2), movie(3), movie(4), movie(5), movie(6)];
        let json = serde_json::to_string(&stored).unwrap();

        let list: NominationList = serde_json::from_str(&json).unwrap();

        let ids: Vec<&str> = list.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["tt0000001", "tt0000002", "tt0000003", "tt0000004", "tt0000005"]
        );
    }

    #[test]
    fn keeps_insertion_order_through_serde() {
        let mut list = NominationList::new();
        list.nominate(movie(3));
        list.nominate(movie(1));
        list.nominate(movie(2));

        let json = serde_json::to_string(&list).unwrap();
        let reloaded: NominationList = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, list);
    }
}
