//! # Local Library Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters.

pub use library_domain;

pub mod list_authors;

pub use list_authors::ListAuthors;
