//! Error types for jadle-store
//!
//! Uses `thiserror` so callers can match on the failure class.
//! Binary crates (jadle-cli) wrap these in `anyhow` for reporting.

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database could not be reached or the pool is unusable
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// An insert or update was rejected by a table constraint
    #[error("constraint violated: {message}")]
    Constraint {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// A referenced row does not exist
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Input rejected before reaching the database
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Bad configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Any other driver error (decode failures, malformed SQL, ...)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// True for errors that mean the database itself is unavailable.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::Constraint {
                    message: db.message().to_owned(),
                    source: err,
                },
                _ => Self::Database(err),
            },
            _ => Self::Database(err),
        }
    }
}
