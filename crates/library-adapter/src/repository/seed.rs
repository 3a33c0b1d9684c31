//! Seed loader - Fill a repository from a JSON export of author documents
//!
//! Documents follow the catalogue's store layout:
//!
//! ```json
//! [{ "_id": "...", "first_name": "Jane", "family_name": "Smith",
//!    "date_of_birth": "1985-04-02", "date_of_death": null }]
//! ```

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use library_domain::model::author::{Author, AuthorId, Lifespan};

use super::in_memory::InMemoryAuthorRepository;

/// Longest name the catalogue accepts
pub const MAX_NAME_LEN: usize = 100;

/// Errors raised while loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid author document at index {index}: {reason}")]
    InvalidDocument { index: usize, reason: String },

    #[error("Repository error: {0}")]
    Repository(#[from] library_domain::RepositoryError),
}

/// Author as stored in the document export
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDocument {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub first_name: String,
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorDocument {
    /// Validate and convert into a domain Author. Only years are kept.
    pub fn into_author(self, index: usize) -> Result<Author, SeedError> {
        let first_name = validate_name(index, "first_name", &self.first_name)?;
        let family_name = validate_name(index, "family_name", &self.family_name)?;

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let lifespan = Lifespan::new(
            self.date_of_birth.map(|d| d.year()),
            self.date_of_death.map(|d| d.year()),
        );

        Ok(Author::new(AuthorId::new(id), first_name, family_name).with_lifespan(lifespan))
    }
}

fn validate_name(index: usize, field: &str, value: &str) -> Result<String, SeedError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SeedError::InvalidDocument {
            index,
            reason: format!("{} is required", field),
        });
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(SeedError::InvalidDocument {
            index,
            reason: format!("{} exceeds {} characters", field, MAX_NAME_LEN),
        });
    }
    Ok(value.to_string())
}

/// Parse a JSON array of author documents
pub fn parse_authors(json: &str) -> Result<Vec<Author>, SeedError> {
    let documents: Vec<AuthorDocument> = serde_json::from_str(json)?;
    documents
        .into_iter()
        .enumerate()
        .map(|(index, doc)| doc.into_author(index))
        .collect()
}

/// Load author documents from a JSON file
pub fn load_authors(path: &Path) -> Result<Vec<Author>, SeedError> {
    let content = std::fs::read_to_string(path)?;
    parse_authors(&content)
}

/// Load `path` into `repo`, returning how many authors were inserted
pub fn seed_repository(repo: &InMemoryAuthorRepository, path: &Path) -> Result<usize, SeedError> {
    let authors = load_authors(path)?;
    let count = authors.len();
    for author in authors {
        repo.insert(author)?;
    }
    tracing::debug!(path = %path.display(), count, "seeded author repository");
    Ok(count)
}
