//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from library-domain.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryAuthorRepository;
pub use seed::{load_authors, parse_authors, seed_repository, AuthorDocument, SeedError};
