//! Error types for the portfolio core

use thiserror::Error;

use crate::validate::Field;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// No project record exists for the requested id
    #[error("Project not found: {0}")]
    ProjectNotFound(u32),

    /// A project id attribute could not be parsed
    #[error("Invalid project id: {0:?}")]
    InvalidProjectId(String),

    /// The contact form failed validation at submit time
    #[error("Form invalid: {} field(s) failed validation", fields.len())]
    InvalidForm {
        /// Fields whose predicate failed, in form order
        fields: Vec<Field>,
    },

    /// A submission was attempted while a previous one is still sending
    #[error("Submission already in progress")]
    SubmissionInProgress,

    /// Error while reading or writing a preference value
    #[error("Preference error: {0}")]
    Preference(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Site configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::ProjectNotFound(7);
        assert_eq!(format!("{}", err), "Project not found: 7");
    }

    #[test]
    fn test_invalid_form_display_counts_fields() {
        let err = PortfolioError::InvalidForm {
            fields: vec![Field::Name, Field::Email],
        };
        assert_eq!(err.to_string(), "Form invalid: 2 field(s) failed validation");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
