//! Error types for the statistics-service client.

use thiserror::Error;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single statistics-service request.
///
/// Transport problems, non-2xx statuses and undecodable bodies all collapse
/// into this one shape. Callers treat them uniformly: log the error, then
/// fall back to the owning slot's empty default.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout, or response-body decode failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: u16,
    },
}

/// A string that is not one of the twelve English month names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized month: {0:?}")]
pub struct ParseMonthError(pub(crate) String);
