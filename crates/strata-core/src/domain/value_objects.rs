//! Value objects: validated names and the closed set of artifact kinds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, naming};

// ============================================================================
// Identifier
// ============================================================================

/// A feature or artifact name, case-folded and validated.
///
/// Invariant: non-empty, lowercase ASCII, starts with a letter, contains only
/// letters, digits, `_` and `-`. Safe to use as a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Trim, lowercase and validate raw user input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim().to_lowercase();

        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let first = name.chars().next().ok_or_else(|| invalid("name cannot be empty"))?;
        if !first.is_ascii_alphabetic() {
            return Err(invalid("name must start with a letter"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name))
    }

    /// Build from a name known at compile time to be valid.
    pub(crate) fn literal(name: &'static str) -> Self {
        debug_assert!(Self::parse(name).is_ok(), "invalid identifier: {name}");
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `my_page` → `MyPage`.
    pub fn pascal(&self) -> String {
        naming::pascal_case(&self.0)
    }

    /// `my_page` → `myPage`.
    pub fn camel(&self) -> String {
        naming::camel_case(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ArtifactKind
// ============================================================================

/// What a `new <kind>` command creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Entity,
    Usecase,
    Repository,
    Datasource,
    Provider,
    Page,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        Self::Entity,
        Self::Usecase,
        Self::Repository,
        Self::Datasource,
        Self::Provider,
        Self::Page,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Usecase => "usecase",
            Self::Repository => "repository",
            Self::Datasource => "datasource",
            Self::Provider => "provider",
            Self::Page => "page",
        }
    }

    /// Templates rendered for one artifact of this kind, excluding its test stub.
    pub const fn templates(self) -> &'static [TemplateKind] {
        match self {
            Self::Entity => &[TemplateKind::Entity],
            Self::Usecase => &[TemplateKind::Usecase],
            Self::Repository => &[TemplateKind::Repository, TemplateKind::RepositoryImpl],
            Self::Datasource => &[TemplateKind::Datasource],
            Self::Provider => &[TemplateKind::Provider],
            Self::Page => &[TemplateKind::Page],
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| DomainError::InvalidIdentifier {
                name: s.to_string(),
                reason: "expected one of entity, usecase, repository, datasource, provider, page"
                    .into(),
            })
    }
}

// ============================================================================
// TemplateKind
// ============================================================================

/// Every body the renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Entity,
    Usecase,
    /// Abstract repository in the domain layer.
    Repository,
    /// Repository implementation in the data layer.
    RepositoryImpl,
    Datasource,
    Provider,
    Page,
    /// Placeholder test file for an artifact.
    Test(ArtifactKind),
}
