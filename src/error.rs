/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use std::fmt;

/// Result alias used across the crate
pub type BuiltWithResult<T> = Result<T, AppError>;

/// Errors returned by the BuiltWith clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Invalid arguments detected locally, before any request is sent
    Validation(String),
    /// The API reported an error, or the request itself failed
    RemoteApi(String),
}

impl AppError {
    /// Returns true for errors raised before reaching the network
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Returns true for errors coming from the API or the transport
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, AppError::RemoteApi(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::RemoteApi(msg) => write!(f, "remote api error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::RemoteApi(format!("request failed: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::RemoteApi(format!("invalid response body: {e}"))
    }
}
