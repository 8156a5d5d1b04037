use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::error::ErrorKind;

/// Errors from the persistence layer.
///
/// Constraint violations reported by the database are classified on
/// conversion from [`sqlx::Error`], so `?` on a query already yields the
/// right variant.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Referenced record does not exist")]
    NotExists,
    #[error("Record already exists")]
    AlreadyExists,
    #[error("Invalid parameters: {0}")]
    BadParams(String),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                ErrorKind::UniqueViolation => return Self::AlreadyExists,
                ErrorKind::ForeignKeyViolation => return Self::NotExists,
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return Self::BadParams(db.message().to_string());
                }
                _ => {}
            }
        }
        tracing::warn!(error = %err, "Database operation failed");
        Self::Database(err)
    }
}

impl PersistenceError {
    pub fn code(&self) -> ReturnCode {
        match self {
            Self::NotExists => ReturnCode::NotExists,
            Self::AlreadyExists => ReturnCode::AlreadyExists,
            Self::BadParams(_) => ReturnCode::BadParams,
            Self::Io(_) | Self::Database(_) | Self::Migration(_) => ReturnCode::Error,
        }
    }
}

/// Flat outcome of a data-layer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnCode {
    Ok,
    NotExists,
    AlreadyExists,
    BadParams,
    Error,
}

impl ReturnCode {
    pub fn of<T>(result: &Result<T, PersistenceError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.code(),
        }
    }
}

impl<T> From<&Result<T, PersistenceError>> for ReturnCode {
    fn from(result: &Result<T, PersistenceError>) -> Self {
        Self::of(result)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::NotExists => "NOT_EXISTS",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::BadParams => "BAD_PARAMS",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}
