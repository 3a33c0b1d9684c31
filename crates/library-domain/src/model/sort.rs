//! SortSpec - How a listing should be ordered
//!
//! A SortSpec is a Value Object mirroring document-store sort maps:
//! `{family_name: 1}` is ascending, `{family_name: -1}` descending.

use core::cmp::Ordering;

use super::author::Author;

/// Fields an author listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorSortField {
    FamilyName,
}

impl AuthorSortField {
    /// Key name used by the store
    pub fn key(&self) -> &'static str {
        match self {
            AuthorSortField::FamilyName => "family_name",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// `1` for ascending, `-1` for descending
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Sort specification passed verbatim to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    field: AuthorSortField,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(field: AuthorSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// `{family_name: 1}`
    pub fn by_family_name() -> Self {
        Self::new(AuthorSortField::FamilyName, SortOrder::Ascending)
    }

    pub fn field(&self) -> AuthorSortField {
        self.field
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Compare two authors under this spec.
    ///
    /// Family names compare byte-wise. Ties fall back to given name, then
    /// id, always ascending, so the output order is total.
    pub fn compare(&self, a: &Author, b: &Author) -> Ordering {
        let primary = match self.field {
            AuthorSortField::FamilyName => a.family_name().cmp(b.family_name()),
        };
        let primary = match self.order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };

        primary
            .then_with(|| a.given_name().cmp(b.given_name()))
            .then_with(|| a.id().cmp(b.id()))
    }

    /// Sort a slice of authors in place
    pub fn sort(&self, authors: &mut [Author]) {
        authors.sort_by(|a, b| self.compare(a, b));
    }
}

impl core::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{{}: {}}}", self.field.key(), self.order.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::author::AuthorId;

    fn author(id: &str, given: &str, family: &str) -> Author {
        Author::new(AuthorId::new(id), given, family)
    }

    fn families(authors: &[Author]) -> Vec<String> {
        authors.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn test_display_matches_store_syntax() {
        assert_eq!(SortSpec::by_family_name().to_string(), "{family_name: 1}");
        assert_eq!(
            SortSpec::new(AuthorSortField::FamilyName, SortOrder::Descending).to_string(),
            "{family_name: -1}"
        );
    }

    #[test]
    fn test_sort_ascending_by_family_name() {
        let mut authors = vec![
            author("1", "Jane", "Smith"),
            author("2", "John", "Doe"),
            author("3", "Ben", "Bova"),
        ];

        SortSpec::by_family_name().sort(&mut authors);

        assert_eq!(families(&authors), vec!["Bova, Ben", "Doe, John", "Smith, Jane"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut authors = vec![author("1", "Ben", "Bova"), author("2", "Jane", "Smith")];

        SortSpec::new(AuthorSortField::FamilyName, SortOrder::Descending).sort(&mut authors);

        assert_eq!(families(&authors), vec!["Smith, Jane", "Bova, Ben"]);
    }

    #[test]
    fn test_ties_break_on_given_name() {
        let mut authors = vec![
            author("1", "Mary", "Shelley"),
            author("2", "Jim", "Jones"),
            author("3", "Anne", "Jones"),
        ];

        SortSpec::by_family_name().sort(&mut authors);

        assert_eq!(families(&authors), vec!["Jones, Anne", "Jones, Jim", "Shelley, Mary"]);
    }
}
