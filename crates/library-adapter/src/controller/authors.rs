//! Author listing route

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use library_domain::model::author::AuthorRecord;
use library_domain::repository::author_repository::AuthorRepository;
use library_usecase::ListAuthors;

use super::logger::Logger;

/// Body sent when there is nothing to list, whether the catalogue is empty
/// or the repository failed.
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Message logged ahead of a repository failure
pub const FAILURE_PREFIX: &str = "Error processing request:";

/// Shared state for the authors route
pub struct AuthorsState<R> {
    list_authors: ListAuthors<R>,
    logger: Arc<dyn Logger>,
}

impl<R> AuthorsState<R> {
    pub fn new(list_authors: ListAuthors<R>, logger: Arc<dyn Logger>) -> Self {
        Self {
            list_authors,
            logger,
        }
    }
}

impl<R: Clone> Clone for AuthorsState<R> {
    fn clone(&self) -> Self {
        Self {
            list_authors: self.list_authors.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

/// `GET /authors`
///
/// - non-empty: JSON array of display lines, 200
/// - empty: `No authors found`, 200
/// - repository error: logged, `No authors found`, 500
pub async fn list_authors<R>(State(state): State<AuthorsState<R>>) -> Response
where
    R: AuthorRepository + Send + Sync + 'static,
{
    match state.list_authors.execute().await {
        Ok(records) if !records.is_empty() => {
            let lines: Vec<String> = records.into_iter().map(AuthorRecord::into_string).collect();
            Json(lines).into_response()
        }
        Ok(_) => NO_AUTHORS_FOUND.into_response(),
        Err(err) => {
            state.logger.error(FAILURE_PREFIX, &err);
            (StatusCode::INTERNAL_SERVER_ERROR, NO_AUTHORS_FOUND).into_response()
        }
    }
}

pub fn router<R>(state: AuthorsState<R>) -> Router
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/authors", get(list_authors::<R>))
        .with_state(state)
}
