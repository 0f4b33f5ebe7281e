//! The constant tables, one module per registry.
//!
//! Each module exposes its literals as `pub const` items plus one
//! [`Table`](crate::registry::Table) static listing them, except
//! [`status`], whose codes are integers and live in [`status::STATUS_CODES`].

pub mod auth_schemes;
pub mod cache_directives;
pub mod content_codings;
pub mod forwarded;
pub mod headers;
pub mod link_relations;
pub mod media_types;
pub mod methods;
pub mod preferences;
pub mod range_units;
pub mod status;
pub mod transfer_codings;

pub use methods::{HttpMethod, http_method_from_str};
pub use status::{HttpStatus, StatusClass};
