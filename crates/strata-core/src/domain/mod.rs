// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! Pure logic only: naming rules, the project layout, artifact definitions
//! and the text-merge engine for registry files. All I/O and template bodies
//! are reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: registry merges work on strings, paths are computed, not touched
//! - **No external crates**: only std, thiserror and serde derives
//! - **Immutable values**: all domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;
pub mod registry;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Artifact, ArtifactFile, RenderContext, common::RelativePath};

pub use error::{DomainError, ErrorCategory};

pub use layout::ProjectLayout;

pub use registry::{
    DedupKey, InsertionRequest, MergeOutcome, Placement, RegistryFile, RegistryPatch, Wrapper,
};

pub use value_objects::{ArtifactKind, Identifier, TemplateKind};

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn identifier_is_case_folded() {
        assert_eq!(id("  Billing ").as_str(), "billing");
        assert_eq!(id("User_Profile").pascal(), "UserProfile");
    }

    #[test]
    fn identifier_rejects_bad_input() {
        for raw in ["", "   ", "1st", "_x", "a/b", "../etc", "a b", "é"] {
            assert!(Identifier::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn artifact_kind_parses_correctly() {
        assert_eq!(ArtifactKind::from_str("Page").unwrap(), ArtifactKind::Page);
        assert_eq!(
            ArtifactKind::from_str("datasource").unwrap(),
            ArtifactKind::Datasource
        );
        assert!(ArtifactKind::from_str("widget").is_err());
    }

    #[test]
    fn repository_renders_two_templates() {
        assert_eq!(
            ArtifactKind::Repository.templates(),
            &[TemplateKind::Repository, TemplateKind::RepositoryImpl]
        );
        assert_eq!(ArtifactKind::Page.templates(), &[TemplateKind::Page]);
    }

    // ========================================================================
    // Layout Tests
    // ========================================================================

    #[test]
    fn skeleton_lists_thirteen_directories() {
        let layout = ProjectLayout::default();
        let dirs: Vec<String> = layout
            .skeleton(&id("auth"))
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(dirs.len(), 13);
        assert_eq!(dirs[0], "lib/core/error");
        assert!(dirs.contains(&"lib/features/auth/data/models".to_string()));
        assert!(dirs.contains(&"lib/features/auth/presentation/widgets".to_string()));
        assert_eq!(dirs[12], "test/features/auth");
    }

    #[test]
    fn layout_rejects_absolute_dirs() {
        assert!(ProjectLayout::new("/lib", "test").is_err());
        assert!(ProjectLayout::new("lib", "/test").is_err());
    }

    #[test]
    fn artifact_files_include_test_stub() {
        let layout = ProjectLayout::default();
        let artifact = Artifact::new(ArtifactKind::Repository, id("auth"), id("session"));
        let paths: Vec<String> = artifact
            .files(&layout)
            .iter()
            .map(|f| f.path.to_string())
            .collect();

        assert_eq!(
            paths,
            vec![
                "lib/features/auth/domain/repositories/session_repository.dart",
                "lib/features/auth/data/repositories/session_repository_impl.dart",
                "test/features/auth/session_repository_test.dart",
            ]
        );
    }

    #[test]
    fn file_names_per_kind() {
        let layout = ProjectLayout::default();
        let (f, n) = (id("shop"), id("cart"));
        let path = |kind| layout.template_path(kind, &f, &n).to_string();

        assert_eq!(path(TemplateKind::Entity), "lib/features/shop/domain/entities/cart.dart");
        assert_eq!(path(TemplateKind::Usecase), "lib/features/shop/domain/usecases/cart.dart");
        assert_eq!(
            path(TemplateKind::Datasource),
            "lib/features/shop/data/datasources/cart_datasource.dart"
        );
        assert_eq!(
            path(TemplateKind::Provider),
            "lib/features/shop/presentation/providers/cart_provider.dart"
        );
        assert_eq!(
            path(TemplateKind::Page),
            "lib/features/shop/presentation/pages/cart_page.dart"
        );
        assert_eq!(
            path(TemplateKind::Test(ArtifactKind::Page)),
            "test/features/shop/cart_page_test.dart"
        );
    }

    #[test]
    fn shared_files() {
        let layout = ProjectLayout::default();
        assert_eq!(layout.router().as_path(), Path::new("lib/core/router.dart"));
        assert_eq!(
            layout.page_names().as_path(),
            Path::new("lib/core/page_names.dart")
        );
        assert_eq!(
            layout.injection_container().as_path(),
            Path::new("lib/injection_container.dart")
        );
    }
}
