//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from storage,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait AuthorRepository│  InMemoryAuthorRepository
//!   fn get_all_authors()│  (document store, ...)
//! ```

pub mod author_repository;
