//! Where every generated file lives, relative to the project root.
//!
//! ```text
//! lib/
//! ├── core/{error,usecases,utils}/
//! ├── core/router.dart            ← route registry
//! ├── core/page_names.dart        ← page-name registry
//! ├── injection_container.dart    ← dependency-registration scaffold
//! └── features/<feature>/
//!     ├── data/{datasources,models,repositories}/
//!     ├── domain/{entities,repositories,usecases}/
//!     └── presentation/{providers,pages,widgets}/
//! test/features/<feature>/
//! ```

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ArtifactKind, Identifier, TemplateKind},
};

/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "dart";

const SHARED_DIRECTORIES: [&str; 3] = ["core/error", "core/usecases", "core/utils"];

const FEATURE_DIRECTORIES: [&str; 9] = [
    "data/datasources",
    "data/models",
    "data/repositories",
    "domain/entities",
    "domain/repositories",
    "domain/usecases",
    "presentation/providers",
    "presentation/pages",
    "presentation/widgets",
];

/// Project layout rooted at a source directory and a test directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    source_dir: RelativePath,
    test_dir: RelativePath,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            source_dir: RelativePath::literal("lib"),
            test_dir: RelativePath::literal("test"),
        }
    }
}

impl ProjectLayout {
    pub fn new(
        source_dir: impl Into<std::path::PathBuf>,
        test_dir: impl Into<std::path::PathBuf>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            source_dir: RelativePath::try_new(source_dir)?,
            test_dir: RelativePath::try_new(test_dir)?,
        })
    }

    pub fn source_dir(&self) -> &RelativePath {
        &self.source_dir
    }

    pub fn test_dir(&self) -> &RelativePath {
        &self.test_dir
    }

    /// The fixed skeleton ensured by `new feature`, in creation order.
    pub fn skeleton(&self, feature: &Identifier) -> Vec<RelativePath> {
        let feature_root = self.feature_root(feature);

        SHARED_DIRECTORIES
            .iter()
            .map(|dir| self.source_dir.child(dir))
            .chain(FEATURE_DIRECTORIES.iter().map(|dir| feature_root.child(dir)))
            .chain(std::iter::once(self.feature_tests(feature)))
            .collect()
    }

    /// `lib/features/<feature>`.
    pub fn feature_root(&self, feature: &Identifier) -> RelativePath {
        self.source_dir.child("features").child(feature.as_str())
    }

    /// `test/features/<feature>`.
    pub fn feature_tests(&self, feature: &Identifier) -> RelativePath {
        self.test_dir.child("features").child(feature.as_str())
    }

    /// Path of a rendered template for `name` inside `feature`.
    pub fn template_path(
        &self,
        kind: TemplateKind,
        feature: &Identifier,
        name: &Identifier,
    ) -> RelativePath {
        let root = self.feature_root(feature);
        let (dir, suffix) = match kind {
            TemplateKind::Entity => ("domain/entities", ""),
            TemplateKind::Usecase => ("domain/usecases", ""),
            TemplateKind::Repository => ("domain/repositories", "_repository"),
            TemplateKind::RepositoryImpl => ("data/repositories", "_repository_impl"),
            TemplateKind::Datasource => ("data/datasources", "_datasource"),
            TemplateKind::Provider => ("presentation/providers", "_provider"),
            TemplateKind::Page => ("presentation/pages", "_page"),
            TemplateKind::Test(artifact) => return self.test_path(artifact, feature, name),
        };
        root.child(dir)
            .child(format!("{name}{suffix}.{SOURCE_EXTENSION}"))
    }

    /// `test/features/<feature>/<name>_<kind>_test.dart`.
    pub fn test_path(
        &self,
        kind: ArtifactKind,
        feature: &Identifier,
        name: &Identifier,
    ) -> RelativePath {
        self.feature_tests(feature)
            .child(format!("{name}_{kind}_test.{SOURCE_EXTENSION}"))
    }

    pub fn provider_path(&self, feature: &Identifier, name: &Identifier) -> RelativePath {
        self.template_path(TemplateKind::Provider, feature, name)
    }

    pub fn router(&self) -> RelativePath {
        self.source_dir
            .child("core")
            .child(format!("router.{SOURCE_EXTENSION}"))
    }

    pub fn page_names(&self) -> RelativePath {
        self.source_dir
            .child("core")
            .child(format!("page_names.{SOURCE_EXTENSION}"))
    }

    pub fn injection_container(&self) -> RelativePath {
        self.source_dir
            .child(format!("injection_container.{SOURCE_EXTENSION}"))
    }
}
