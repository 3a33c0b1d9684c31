//! Author - A person whose books the library holds
//!
//! Author is an Entity (has identity). Two records with the same
//! AuthorId are the same author even if a name was corrected.

/// Unique identifier for an Author
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Birth and death years. Either may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifespan {
    pub born: Option<i32>,
    pub died: Option<i32>,
}

impl Lifespan {
    pub fn new(born: Option<i32>, died: Option<i32>) -> Self {
        Self { born, died }
    }

    /// Still living, or death not recorded
    pub fn is_open(&self) -> bool {
        self.died.is_none()
    }
}

impl core::fmt::Display for Lifespan {
    /// Renders `<born> - <died>`, leaving unknown years blank.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(born) = self.born {
            write!(f, "{}", born)?;
        }
        f.write_str(" - ")?;
        if let Some(died) = self.died {
            write!(f, "{}", died)?;
        }
        Ok(())
    }
}

/// Author entity
#[derive(Debug, Clone)]
pub struct Author {
    /// Unique identifier (Entity identity)
    id: AuthorId,
    given_name: String,
    family_name: String,
    lifespan: Lifespan,
}

impl Author {
    /// Create a new Author with an unknown lifespan
    pub fn new(
        id: AuthorId,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            given_name: given_name.into(),
            family_name: family_name.into(),
            lifespan: Lifespan::default(),
        }
    }

    /// Builder: set lifespan
    pub fn with_lifespan(mut self, lifespan: Lifespan) -> Self {
        self.lifespan = lifespan;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn lifespan(&self) -> Lifespan {
        self.lifespan
    }

    /// `"<family>, <given>"`
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.given_name)
    }

    /// Format this author the way listings display it
    pub fn to_record(&self) -> AuthorRecord {
        AuthorRecord::new(format!("{} : {}", self.name(), self.lifespan))
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Author {}

/// A formatted author line, e.g. `"Doe, John : 1990 - 2020"`.
///
/// Opaque to everything above the repository: callers pass it through
/// without inspecting its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorRecord(String);

impl AuthorRecord {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for AuthorRecord {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl core::fmt::Display for AuthorRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_full_lifespan() {
        let author = Author::new(AuthorId::new("a-001"), "John", "Doe")
            .with_lifespan(Lifespan::new(Some(1990), Some(2020)));

        assert_eq!(author.name(), "Doe, John");
        assert_eq!(author.to_record().as_str(), "Doe, John : 1990 - 2020");
    }

    #[test]
    fn test_record_leaves_unknown_years_blank() {
        let living = Author::new(AuthorId::new("a-002"), "Jane", "Smith")
            .with_lifespan(Lifespan::new(Some(1985), None));
        assert_eq!(living.to_record().as_str(), "Smith, Jane : 1985 - ");
        assert!(living.lifespan().is_open());

        let unknown = Author::new(AuthorId::new("a-003"), "Ann", "Onymous");
        assert_eq!(unknown.to_record().as_str(), "Onymous, Ann :  - ");
    }

    #[test]
    fn test_entity_equality() {
        let a = Author::new(AuthorId::new("a-001"), "John", "Doe");
        let b = Author::new(AuthorId::new("a-001"), "Johnny", "Doe");

        assert_eq!(a, b);
    }
}
