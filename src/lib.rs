//! Symbolic names for HTTP protocol literals.
//!
//! Header field names, status codes and reason phrases, request methods,
//! media types, authentication schemes, cache directives, content and transfer
//! codings, range units, link relations, `Forwarded` parameters and `Prefer`
//! tokens, each annotated with the specification that defines it.
//!
//! ```
//! use httpconst::http::{headers, media_types, HttpStatus};
//!
//! let status = HttpStatus::Ok;
//! let line = format!("{}: {}", headers::CONTENT_TYPE, media_types::APPLICATION_JSON);
//! assert_eq!(status.code(), 200);
//! assert_eq!(line, "Content-Type: application/json");
//! ```

#[macro_use]
pub mod registry;

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use error::{CatalogError, Result};
pub use registry::{Case, Entry, Table};
