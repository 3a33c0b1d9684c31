//! # Local Library Domain Layer
//!
//! Pure catalogue logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Swapping the in-memory store for a document database changes the
//! adapter crate only.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    author::{Author, AuthorId, AuthorRecord, Lifespan},
    sort::{AuthorSortField, SortOrder, SortSpec},
};

pub use repository::author_repository::{AuthorRepository, RepositoryError};
