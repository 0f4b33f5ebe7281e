//! Error type shared by the catalog and the `httpconst` binary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown request method: {0}")]
    UnknownMethod(String),

    #[error("unregistered status code: {0}")]
    UnknownStatus(u16),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("no entry matching {query:?} in {table}")]
    NotFound { table: String, query: String },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
