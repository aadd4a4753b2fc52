//! Error types for principal and claim operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The decoded claim is missing a required member or has the wrong shape
    #[error("Malformed claim: {0}")]
    MalformedClaim(String),

    /// A decorator was built around a principal that cannot be used
    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
