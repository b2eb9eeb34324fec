//! Domain layer for the Shoppies plugin.
//!
//! Core types independent of Zellij APIs, storage, and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie, poster and search result models
//! - [`nominations`]: The capped nomination shortlist
//!
//! # Examples
//!
//! ```
//! use shoppies::domain::{Movie, NominationList, Poster};
//!
//! let mut nominations = NominationList::new();
//! let movie = Movie::new("tt0372784", "Batman Begins", "2005", Poster::Missing);
//! assert!(nominations.nominate(movie.clone()));
//! assert!(!nominations.nominate(movie));
//! ```

pub mod error;
pub mod movie;
pub mod nominations;

pub use error::{Result, SearchError, ShoppiesError};
pub use movie::{Movie, Poster, SearchResult, NO_POSTER};
pub use nominations::{NominationList, MAX_NOMINATIONS};
