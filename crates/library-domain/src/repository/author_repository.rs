//! Author Repository - Abstract read access to the author catalogue
//!
//! How authors are stored (document store, memory, file) is not
//! our concern here.

use core::future::Future;

use crate::model::author::AuthorRecord;
use crate::model::sort::SortSpec;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Author not found
    NotFound { id: String },
    /// Storage failed while reading or writing
    PersistenceError { message: String },
    /// Backing store could not be reached
    Unavailable { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Author not found: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
            RepositoryError::Unavailable { message } => {
                write!(f, "Store unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Author Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
pub trait AuthorRepository {
    /// Fetch every author, ordered by `sort`, formatted for display.
    ///
    /// An empty catalogue is `Ok(vec![])`, not an error.
    fn get_all_authors(
        &self,
        sort: SortSpec,
    ) -> impl Future<Output = Result<Vec<AuthorRecord>, RepositoryError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepositoryError::Unavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Store unavailable: connection refused");

        let err = RepositoryError::NotFound {
            id: "a-404".to_string(),
        };
        assert_eq!(err.to_string(), "Author not found: a-404");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RepositoryError::PersistenceError {
            message: "disk full".to_string(),
        });
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }
}
