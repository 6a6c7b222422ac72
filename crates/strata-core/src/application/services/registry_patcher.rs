//! Applies registry patches to files on disk.
//!
//! The file is re-read before every request and written back only when the
//! request changed it. A request that fails is reported and the next one is
//! still attempted.
//!
//! Each changed request costs one write, so a page touches `router.dart`
//! twice. Writing per request keeps an earlier request on disk when a later
//! one fails.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    application::{
        ports::Filesystem,
        report::{Action, ScaffoldReport},
        services::{ArtifactWriter, WriteOutcome},
    },
    domain::{InsertionRequest, MergeOutcome, RegistryPatch},
    error::StrataResult,
};

pub struct RegistryPatcher<'a> {
    fs: &'a dyn Filesystem,
    writer: ArtifactWriter<'a>,
}

impl<'a> RegistryPatcher<'a> {
    pub fn new(fs: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self {
            fs,
            writer: ArtifactWriter::new(fs, root),
        }
    }

    pub fn apply(&self, patch: &RegistryPatch) -> ScaffoldReport {
        let mut report = ScaffoldReport::new();
        let path = patch.file.path.as_path();

        match self.writer.write_if_absent(&patch.file.path, &patch.file.bootstrap) {
            Ok(outcome) => {
                if outcome == WriteOutcome::Created {
                    info!(path = %patch.file.path, "Created registry file");
                    report.push(path, Action::RegistryCreated);
                }
            }
            Err(e) => {
                warn!(path = %patch.file.path, error = %e, "Cannot create registry file");
                report.push(path, Action::Failed {
                    reason: e.to_string(),
                });
                return report;
            }
        }

        let full = self.writer.resolve(&patch.file.path);
        for request in &patch.requests {
            let action = match self.merge(&full, request) {
                Ok(action) => action,
                Err(e) => {
                    warn!(
                        path = %patch.file.path,
                        label = request.label(),
                        error = %e,
                        "Registry update failed"
                    );
                    Action::Failed {
                        reason: format!("{}: {}", request.label(), e),
                    }
                }
            };
            report.push(path, action);
        }

        report
    }

    fn merge(&self, full: &Path, request: &InsertionRequest) -> StrataResult<Action> {
        let content = self.fs.read_to_string(full)?;

        match request.merge_into(&content)? {
            MergeOutcome::AlreadyPresent => {
                debug!(label = request.label(), "Already registered");
                Ok(Action::FragmentPresent {
                    label: request.label().to_string(),
                })
            }
            MergeOutcome::Merged { content, placement } => {
                self.fs.write_file(full, &content)?;
                info!(label = request.label(), placement, "Registered");
                Ok(Action::FragmentInserted {
                    label: request.label().to_string(),
                    placement,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockFilesystem},
        domain::{Identifier, ProjectLayout, registry::catalog},
    };

    fn patch() -> RegistryPatch {
        let id = |s| Identifier::parse(s).unwrap();
        catalog::route_registration(&ProjectLayout::default(), &id("auth"), &id("login"))
    }

    fn denied(path: &Path) -> crate::error::StrataError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn bootstraps_missing_file_then_merges() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_new().times(1).returning(|_, _| Ok(true));
        fs.expect_read_to_string()
            .returning(|_| Ok(catalog::ROUTER_BOOTSTRAP.to_string()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let report = RegistryPatcher::new(&fs, Path::new("/p")).apply(&patch());

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[0].action, Action::RegistryCreated);
        assert_eq!(report.entries[2].action, Action::FragmentInserted {
            label: "route".into(),
            placement: "before-marker",
        });
    }

    #[test]
    fn unchanged_file_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_new().returning(|_, _| Ok(false));
        fs.expect_read_to_string().returning(|_| {
            Ok("import '../features/auth/presentation/pages/login_page.dart';\n\
                routes: [ GoRoute(path: '/auth/login', builder: x), ]\n"
                .to_string())
        });
        fs.expect_write_file().never();

        let report = RegistryPatcher::new(&fs, Path::new("/p")).apply(&patch());

        assert!(
            report
                .entries
                .iter()
                .all(|e| matches!(e.action, Action::FragmentPresent { .. }))
        );
    }

    #[test]
    fn failed_request_does_not_stop_the_next() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_new().returning(|_, _| Ok(false));
        fs.expect_read_to_string()
            .returning(|_| Ok(catalog::ROUTER_BOOTSTRAP.to_string()));
        let mut calls = 0;
        fs.expect_write_file().times(2).returning(move |path, _| {
            calls += 1;
            if calls == 1 { Err(denied(path)) } else { Ok(()) }
        });

        let report = RegistryPatcher::new(&fs, Path::new("/p")).apply(&patch());

        assert_eq!(report.failures().count(), 1);
        assert!(matches!(
            report.entries[1].action,
            Action::FragmentInserted { .. }
        ));
    }

    #[test]
    fn uncreatable_registry_aborts_the_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_new().returning(|path, _| Err(denied(path)));
        fs.expect_read_to_string().never();

        let report = RegistryPatcher::new(&fs, Path::new("/p")).apply(&patch());

        assert_eq!(report.entries.len(), 1);
        assert!(report.has_failures());
    }
}
