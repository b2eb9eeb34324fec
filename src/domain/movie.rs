//! Movie and search result models.
//!
//! A [`Movie`] keeps the upstream field names when serialized (`Title`, `Year`,
//! `imdbID`, `Poster`), so nominations persisted to storage look exactly like
//! the objects the search API returns.

use serde::{Deserialize, Serialize};

/// Upstream sentinel meaning "this title has no poster".
pub const NO_POSTER: &str = "N/A";

/// Poster image reference for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Poster {
    /// Absolute URL of the poster image.
    Url(String),
    /// The upstream reported no poster.
    Missing,
}

impl Poster {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<String> for Poster {
    fn from(value: String) -> Self {
        if value == NO_POSTER || value.is_empty() {
            Self::Missing
        } else {
            Self::Url(value)
        }
    }
}

impl From<Poster> for String {
    fn from(poster: Poster) -> Self {
        match poster {
            Poster::Url(url) => url,
            Poster::Missing => NO_POSTER.to_string(),
        }
    }
}

/// A single title returned by the movie database.
///
/// Immutable once received. Two movies are the same nomination when their
/// `id` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Opaque upstream identifier (IMDb id, e.g. `tt0372784`).
    #[serde(rename = "imdbID")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// Release year as sent upstream; may be a range such as `2005–2008`.
    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "Poster")]
    pub poster: Poster,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster: Poster,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster,
        }
    }

    /// IMDb page for this title.
    #[must_use]
    pub fn imdb_url(&self) -> String {
        format!("https://www.imdb.com/title/{}/", self.id)
    }
}

/// Outcome of one completed search.
///
/// Replaced wholesale whenever a new search completes; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The query these results answer.
    pub query: String,
    /// Movies in upstream order.
    pub movies: Vec<Movie>,
    /// Total number of matches the upstream reports (may exceed `movies.len()`).
    pub total: u64,
}

impl SearchResult {
    /// An empty result for `query`, used for the idle and failed states.
    #[must_use]
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            movies: Vec::new(),
            total: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_upstream_field_names() {
        let movie = Movie::new("tt0372784", "Batman Begins", "2005", Poster::Missing);
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(json["imdbID"], "tt0372784");
        assert_eq!(json["Title"], "Batman Begins");
        assert_eq!(json["Year"], "2005");
        assert_eq!(json["Poster"], "N/A");
    }

    #[test]
    fn poster_sentinel_becomes_missing() {
        let movie: Movie = serde_json::from_str(
            r#"{"Title":"Batman","Year":"1989","imdbID":"tt0096895","Poster":"N/A"}"#,
        )
        .unwrap();
        assert!(movie.poster.is_missing());

        let movie: Movie = serde_json::from_str(
            r#"{"Title":"Batman","Year":"1989","imdbID":"tt0096895","Poster":"https://img/p.jpg"}"#,
        )
        .unwrap();
        assert_eq!(movie.poster, Poster::Url("https://img/p.jpg".to_string()));
    }

    #[test]
    fn imdb_url_uses_identifier() {
        let movie = Movie::new("tt0096895", "Batman", "1989", Poster::Missing);
        assert_eq!(movie.imdb_url(), "https://www.imdb.com/title/tt0096895/");
    }
}
