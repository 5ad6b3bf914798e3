//! Error types shared by every route crate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    /// Input rejected before any optimization work starts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A distance, weight or pheromone value stopped being finite.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    /// Malformed JSON for a catalog, request or parameter set.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl RouteError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        RouteError::InvalidInput(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        RouteError::NumericOverflow(msg.into())
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
