//! Errors surfaced by the collections access layer.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::Table;

/// Failure of a single HTTP exchange with the backend.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport failure, timeout, or body decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// The status the backend returned.
        status: StatusCode,
        /// Response body, kept for diagnostics.
        body: String,
    },
}

/// Errors from the collections API.
///
/// Every variant names the collection (and record id, for single-record
/// writes) so callers can report failures without extra bookkeeping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A read failed. Reads are never retried by this layer.
    #[error("fetch from {table} failed: {source}")]
    Fetch { table: Table, source: HttpError },

    /// A bulk save failed after exhausting its retry budget.
    #[error("save to {table} failed after {attempts} attempts: {source}")]
    Save {
        table: Table,
        attempts: u32,
        source: HttpError,
    },

    /// A replace-by-id failed. No retry.
    #[error("update of {table}/{id} failed: {source}")]
    Update {
        table: Table,
        id: String,
        source: HttpError,
    },

    /// A delete-by-id failed. No retry.
    #[error("delete of {table}/{id} failed: {source}")]
    Delete {
        table: Table,
        id: String,
        source: HttpError,
    },
}
