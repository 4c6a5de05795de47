//! Core library for mvn-query
//!
//! This crate is the **Functional Core** of the mvn-query application: the
//! request and response model of the Maven Central search API, with no I/O.
//!
//! - **`mvn_query_core`** (this crate): URL construction, response parsing and
//!   the projection of a response into display lines
//! - **`mvn-query`**: the HTTP round trip, result output and the CLI
//!
//! # Module Organization
//!
//! - [`request`]: typed query parameters and the select URL builder
//! - [`response`]: the response model, its parser and display-line mapping
//! - [`error`]: the failure kinds of a search query
//!
//! # Example Usage
//!
//! ```rust
//! use mvn_query_core::request::SearchRequest;
//! use mvn_query_core::response::{matching_lines, parse};
//!
//! let request = SearchRequest::artifact_query("https://x.test", "guice", 20).unwrap();
//! assert_eq!(
//!     request.select_url(),
//!     "https://x.test/solrsearch/select?q=guice&rows=20&wt=json"
//! );
//!
//! let body = br#"{"response":{"numFound":1,"docs":[{"id":"com.g:guice","latestVersion":"5.1.0"}]}}"#;
//! let response = parse(body).unwrap();
//! assert_eq!(matching_lines(&response).unwrap(), vec!["com.g:guice:5.1.0"]);
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::QueryError;
