//! Search gateway: request construction and response classification.
//!
//! The plugin host performs the actual HTTP call, so the gateway is split into
//! the two pure halves around it: [`SearchGateway::request`] builds the GET
//! request for a query, and [`SearchGateway::parse_response`] turns the
//! returned status and body into a [`SearchResult`] or a [`SearchError`].

use super::response::SearchResponse;
use crate::domain::{SearchError, SearchResult};

/// Default search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// One outgoing search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic sequence number used to recognise stale responses.
    pub sequence: u64,
    /// The query being searched.
    pub query: String,
    /// Fully encoded GET URL.
    pub url: String,
}

/// Builds requests against a fixed search endpoint.
#[derive(Debug, Clone)]
pub struct SearchGateway {
    base_url: String,
    api_key: Option<String>,
}

impl SearchGateway {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Builds the GET request for `query`.
    ///
    /// # Parameters
    ///
    /// * `query` - Search text, percent-encoded into the `s` parameter
    /// * `sequence` - Number echoed back with the response
    ///
    /// # Returns
    ///
    /// `None` for an empty query: empty queries never go to the network.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoppies::search::SearchGateway;
    ///
    /// let gateway = SearchGateway::new("https://www.omdbapi.com/", Some("k".to_string()));
    /// let request = gateway.request("star wars", 7).unwrap();
    /// assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k&s=star%20wars");
    /// assert!(gateway.request("", 8).is_none());
    /// ```
    #[must_use]
    pub fn request(&self, query: &str, sequence: u64) -> Option<SearchRequest> {
        if query.is_empty() {
            return None;
        }

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let api_key = self.api_key.as_deref().unwrap_or_default();
        let url = format!(
            "{}{separator}apikey={}&s={}",
            self.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(query),
        );

        Some(SearchRequest {
            sequence,
            query: query.to_string(),
            url,
        })
    }

    /// Classifies a completed HTTP exchange for `query`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Network`] for any status outside `200..300`
    /// - [`SearchError::Query`] when the upstream answered `Response: "False"`
    /// - [`SearchError::Validation`] when the body does not match the schema
    pub fn parse_response(query: &str, status: u16, body: &[u8]) -> Result<SearchResult, SearchError> {
        if !(200..300).contains(&status) {
            return Err(SearchError::Network(status_text(status)));
        }

        SearchResponse::from_slice(body)?.into_result(query)
    }
}

/// Canonical reason phrase for an HTTP status code.
///
/// Status `0` is what the shim reports when no HTTP exchange took place.
fn status_text(status: u16) -> String {
    let reason = match status {
        0 => "Network request failed",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return format!("HTTP {status}"),
    };
    reason.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATMAN: &str = r#"{
        "Search": [
            {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Poster": "https://m.media-amazon.com/images/bb.jpg"},
            {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    #[test]
    fn request_encodes_query_and_key() {
        let gateway = SearchGateway::new(DEFAULT_BASE_URL, Some("k3y".to_string()));
        let request = gateway.request("star wars & co", 7).unwrap();

        assert_eq!(request.sequence, 7);
        assert_eq!(request.query, "star wars & co");
        assert_eq!(
            request.url,
            "https://www.omdbapi.com/?apikey=k3y&s=star%20wars%20%26%20co"
        );
    }

    #[test]
    fn request_appends_to_existing_query_string() {
        let gateway = SearchGateway::new("http://localhost/api?type=movie", None);
        let request = gateway.request("up", 1).unwrap();
        assert_eq!(request.url, "http://localhost/api?type=movie&apikey=&s=up");
    }

    #[test]
    fn empty_query_builds_no_request() {
        let gateway = SearchGateway::new(DEFAULT_BASE_URL, None);
        assert!(gateway.request("", 1).is_none());
    }

    #[test]
    fn success_maps_to_result() {
        let result = SearchGateway::parse_response("batman", 200, BATMAN.as_bytes()).unwrap();

        assert_eq!(result.query, "batman");
        assert_eq!(result.total, 2);
        assert_eq!(result.movies.len(), 2);
        assert_eq!(result.movies[0].id, "tt0372784");
        assert!(result.movies[1].poster.is_missing());
    }

    #[test]
    fn upstream_not_found_is_a_query_error() {
        let body = br#"{"Response":"False","Error":"Movie not found!"}"#;
        let err = SearchGateway::parse_response("zzzznotfound", 200, body).unwrap_err();

        assert_eq!(err, SearchError::Query("Movie not found!".to_string()));
        assert_eq!(format!("Error: {err}"), "Error: Movie not found!");
    }

    #[test]
    fn http_failure_is_a_network_error_even_with_a_json_body() {
        let body = br#"{"Response":"False","Error":"Invalid API key!"}"#;
        let err = SearchGateway::parse_response("batman", 401, body).unwrap_err();
        assert_eq!(err, SearchError::Network("Unauthorized".to_string()));

        let err = SearchGateway::parse_response("batman", 599, b"").unwrap_err();
        assert_eq!(err, SearchError::Network("HTTP 599".to_string()));

        let err = SearchGateway::parse_response("batman", 0, b"").unwrap_err();
        assert_eq!(err, SearchError::Network("Network request failed".to_string()));
    }

    #[test]
    fn garbage_body_is_a_validation_error() {
        let err = SearchGateway::parse_response("batman", 200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }
}
