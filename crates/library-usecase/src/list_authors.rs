//! ListAuthors - Every author, by family name

use library_domain::model::author::AuthorRecord;
use library_domain::model::sort::SortSpec;
use library_domain::repository::author_repository::{AuthorRepository, RepositoryError};

/// Lists the whole catalogue ordered `{family_name: 1}`.
///
/// Holds no state between calls; each `execute` is one repository round-trip.
#[derive(Debug, Clone)]
pub struct ListAuthors<R> {
    repository: R,
}

impl<R> ListAuthors<R>
where
    R: AuthorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The sort every listing uses
    pub fn sort_spec() -> SortSpec {
        SortSpec::by_family_name()
    }

    pub async fn execute(&self) -> Result<Vec<AuthorRecord>, RepositoryError> {
        self.repository.get_all_authors(Self::sort_spec()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Returns a canned result and remembers each sort it was asked for
    struct StubRepo {
        result: Result<Vec<AuthorRecord>, RepositoryError>,
        calls: Mutex<Vec<SortSpec>>,
    }

    impl StubRepo {
        fn new(result: Result<Vec<AuthorRecord>, RepositoryError>) -> Self {
            Self {
                result,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl AuthorRepository for StubRepo {
        async fn get_all_authors(
            &self,
            sort: SortSpec,
        ) -> Result<Vec<AuthorRecord>, RepositoryError> {
            self.calls.lock().unwrap().push(sort);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_requests_family_name_ascending() {
        let use_case = ListAuthors::new(StubRepo::new(Ok(vec![])));

        use_case.execute().await.unwrap();

        let calls = use_case.repository().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![SortSpec::by_family_name()]);
        assert_eq!(calls[0].to_string(), "{family_name: 1}");
    }

    #[tokio::test]
    async fn test_passes_records_through_untouched() {
        let records = vec![
            AuthorRecord::from("Doe, John : 1990 - 2020"),
            AuthorRecord::from("Smith, Jane : 1985 - "),
        ];
        let use_case = ListAuthors::new(StubRepo::new(Ok(records.clone())));

        assert_eq!(use_case.execute().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_propagates_repository_error() {
        let err = RepositoryError::Unavailable {
            message: "Database error".to_string(),
        };
        let use_case = ListAuthors::new(StubRepo::new(Err(err.clone())));

        assert_eq!(use_case.execute().await, Err(err));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_independent() {
        let use_case = ListAuthors::new(StubRepo::new(Ok(vec![AuthorRecord::from(
            "Doe, John : 1990 - 2020",
        )])));

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(use_case.repository().calls.lock().unwrap().len(), 2);
    }
}
