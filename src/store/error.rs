#![allow(clippy::module_name_repetitions)]

use diesel::migration::RunMigrationsError;
use diesel::result::DatabaseErrorKind;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Connection(diesel::ConnectionError),
    Database(diesel::result::Error),
    Pool(r2d2::Error),
    Migration(RunMigrationsError),
    Blob(serde_json::Error),
}

impl StoreError {
    /// True for unique and foreign key violations, the failures a create can
    /// hit with well-formed input.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation,
                _
            ))
        )
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(error) => write!(f, "connection error: {}", error),
            Self::Database(error) => write!(f, "database error: {}", error),
            Self::Pool(error) => write!(f, "connection pool error: {}", error),
            Self::Migration(error) => write!(f, "migration error: {}", error),
            Self::Blob(error) => write!(f, "malformed container data: {}", error),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(error) => Some(error),
            Self::Database(error) => Some(error),
            Self::Pool(error) => Some(error),
            Self::Migration(error) => Some(error),
            Self::Blob(error) => Some(error),
        }
    }
}

impl From<diesel::ConnectionError> for StoreError {
    fn from(error: diesel::ConnectionError) -> Self {
        Self::Connection(error)
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Database(error)
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        Self::Pool(error)
    }
}

impl From<RunMigrationsError> for StoreError {
    fn from(error: RunMigrationsError) -> Self {
        Self::Migration(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Blob(error)
    }
}
