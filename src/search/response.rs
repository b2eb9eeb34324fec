//! Schema boundary for the upstream search API.
//!
//! The upstream body is untrusted: every field is optional here and
//! [`SearchResponse::into_result`] decides what a well-formed answer is.

use crate::domain::{Movie, SearchError, SearchResult};
use serde::Deserialize;

/// Raw JSON body returned by the search endpoint.
///
/// ```json
/// {"Response": "True", "Search": [{"Title": "...", "Year": "...", "imdbID": "...", "Poster": "..."}], "totalResults": "2"}
/// {"Response": "False", "Error": "Movie not found!"}
/// ```
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Response")]
    pub response: Option<String>,

    #[serde(rename = "Error")]
    pub error: Option<String>,

    #[serde(rename = "Search")]
    pub search: Option<Vec<Movie>>,

    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
}

impl SearchResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] if the body is not JSON or a movie
    /// entry is missing a field.
    pub fn from_slice(body: &[u8]) -> Result<Self, SearchError> {
        serde_json::from_slice(body).map_err(|e| SearchError::Validation(e.to_string()))
    }

    /// Converts the raw body into a typed result for `query`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Query`] when the upstream answered `Response: "False"`
    /// - [`SearchError::Validation`] when the body is missing required parts
    pub fn into_result(self, query: &str) -> Result<SearchResult, SearchError> {
        match self.response.as_deref() {
            Some("False") => Err(SearchError::Query(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
            Some("True") => {
                let movies = self
                    .search
                    .ok_or_else(|| SearchError::Validation("missing Search list".to_string()))?;

                let total = match self.total_results {
                    Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                        SearchError::Validation(format!("totalResults is not a number: {raw:?}"))
                    })?,
                    None => movies.len() as u64,
                };

                Ok(SearchResult {
                    query: query.to_string(),
                    movies,
                    total,
                })
            }
            Some(other) => Err(SearchError::Validation(format!(
                "unexpected Response value: {other:?}"
            ))),
            None => Err(SearchError::Validation("missing Response field".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<SearchResult, SearchError> {
        SearchResponse::from_slice(body.as_bytes())?.into_result("batman")
    }

    #[test]
    fn missing_total_falls_back_to_list_length() {
        let result = parse(
            r#"{"Response":"True","Search":[{"Title":"Batman","Year":"1989","imdbID":"tt0096895","Poster":"N/A"}]}"#,
        )
        .unwrap();
        assert_eq!(result.total, 1);
    }

    #[test]
    fn non_numeric_total_is_a_validation_error() {
        let err = parse(r#"{"Response":"True","Search":[],"totalResults":"lots"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }

    #[test]
    fn success_without_list_is_a_validation_error() {
        let err = parse(r#"{"Response":"True","totalResults":"3"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }

    #[test]
    fn false_without_message_uses_generic_text() {
        let err = parse(r#"{"Response":"False"}"#).unwrap_err();
        assert_eq!(err, SearchError::Query("Unknown error".to_string()));
    }

    #[test]
    fn movie_missing_a_field_is_rejected() {
        let err = parse(r#"{"Response":"True","Search":[{"Title":"Batman"}],"totalResults":"1"}"#)
            .unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }
}
