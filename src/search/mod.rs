//! Movie search: request building, response validation, and debouncing.
//!
//! # Modules
//!
//! - `gateway`: GET request construction and HTTP outcome classification
//! - `response`: Schema boundary for the upstream JSON body
//! - `debounce`: Timer-driven debouncer for query submission

pub mod debounce;
pub mod gateway;
pub mod response;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use gateway::{SearchGateway, SearchRequest, DEFAULT_BASE_URL};
pub use response::SearchResponse;
