//! In-Memory Repository Implementation
//!
//! Keeps the catalogue in process. Clones share the same store.

use std::sync::{Arc, RwLock};

use library_domain::model::author::{Author, AuthorRecord};
use library_domain::model::sort::SortSpec;
use library_domain::repository::author_repository::{AuthorRepository, RepositoryError};

/// In-memory Author Repository
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthorRepository {
    authors: Arc<RwLock<Vec<Author>>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-filled with `authors`
    pub fn with_authors(
        authors: impl IntoIterator<Item = Author>,
    ) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        for author in authors {
            repo.insert(author)?;
        }
        Ok(repo)
    }

    /// Add an author, replacing any existing one with the same id
    pub fn insert(&self, author: Author) -> Result<(), RepositoryError> {
        let mut authors = self.authors.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        match authors.iter_mut().find(|a| a.id() == author.id()) {
            Some(existing) => *existing = author,
            None => authors.push(author),
        }
        Ok(())
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        let authors = self.authors.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(authors.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn snapshot(&self) -> Result<Vec<Author>, RepositoryError> {
        let authors = self.authors.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(authors.clone())
    }
}

#[cfg(test)]
impl InMemoryAuthorRepository {
    /// Panic while holding the write lock so every later access sees it poisoned
    pub(crate) fn poison(&self) {
        let authors = Arc::clone(&self.authors);
        let _ = std::thread::spawn(move || {
            let _guard = authors.write().unwrap();
            panic!("writer panicked while holding the catalogue lock");
        })
        .join();
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_all_authors(&self, sort: SortSpec) -> Result<Vec<AuthorRecord>, RepositoryError> {
        let mut authors = self.snapshot()?;
        sort.sort(&mut authors);
        Ok(authors.iter().map(Author::to_record).collect())
    }
}
