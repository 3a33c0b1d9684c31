//! Inbound Adapters - HTTP controller
//!
//! ```text
//! GET /authors  -> authors::list_authors
//! GET /health   -> health::health_handler
//! ```

pub mod authors;
pub mod health;
pub mod logger;

use std::sync::Arc;

use axum::Router;
use library_domain::repository::author_repository::AuthorRepository;
use library_usecase::ListAuthors;

pub use authors::{AuthorsState, FAILURE_PREFIX, NO_AUTHORS_FOUND};
pub use logger::{Logger, NullLogger, TracingLogger};

/// Full application router
pub fn router<R>(list_authors: ListAuthors<R>, logger: Arc<dyn Logger>) -> Router
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    authors::router(AuthorsState::new(list_authors, logger)).merge(health::router())
}
