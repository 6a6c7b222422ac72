//! Scaffold Service - main application orchestrator.
//!
//! This service maps each `new` command to an ordered sequence of steps:
//! 1. Ensure directories
//! 2. Render and write artifacts (write-once)
//! 3. Patch registry files (pages only)
//!
//! Every step reports into a [`ScaffoldReport`]. A failed step is recorded
//! and the sequence continues.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        report::{Action, ScaffoldReport},
        services::{ArtifactWriter, RegistryPatcher, WriteOutcome},
    },
    domain::{
        Artifact, ArtifactKind, Identifier, ProjectLayout, RelativePath, RenderContext,
        registry::catalog,
    },
    error::StrataResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
    root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::{application::ScaffoldService, domain::ProjectLayout};
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     ProjectLayout::default(),
    ///     ".",
    /// );
    /// ```
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        layout: ProjectLayout,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            layout,
            root: root.into(),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `new feature <name>`: skeleton, default artifacts and the
    /// dependency-registration scaffold.
    #[instrument(skip_all, fields(feature = %feature))]
    pub fn create_feature(&self, feature: &Identifier) -> ScaffoldReport {
        info!("Scaffolding feature");

        let writer = self.writer();
        let mut report = ScaffoldReport::new();

        for dir in self.layout.skeleton(feature) {
            let action = match writer.ensure_dir(&dir) {
                Ok(()) => Action::DirectoryEnsured,
                Err(e) => {
                    warn!(path = %dir, error = %e, "Cannot create directory");
                    Action::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.push(dir.as_path(), action);
        }

        let defaults = [
            (ArtifactKind::Entity, feature.clone()),
            (ArtifactKind::Usecase, Identifier::literal("example")),
            (ArtifactKind::Repository, feature.clone()),
            (ArtifactKind::Datasource, Identifier::literal("remote")),
            (ArtifactKind::Provider, feature.clone()),
            (ArtifactKind::Page, feature.clone()),
        ];
        for (kind, name) in defaults {
            report.extend(self.create_artifact(kind, feature, &name));
        }

        let container = self.layout.injection_container();
        let result = writer.write_if_absent(&container, catalog::INJECTION_CONTAINER);
        record_write(&mut report, &container, result);

        info!(
            created = report.created().count(),
            skipped = report.skipped().count(),
            failed = report.failures().count(),
            "Feature scaffolded"
        );
        report
    }

    /// `new <kind> <feature> <name>`: one artifact and its test stub.
    ///
    /// Pages are also registered in the page-name constants and the router.
    #[instrument(skip_all, fields(kind = %kind, feature = %feature, name = %name))]
    pub fn create_artifact(
        &self,
        kind: ArtifactKind,
        feature: &Identifier,
        name: &Identifier,
    ) -> ScaffoldReport {
        let writer = self.writer();
        let mut report = ScaffoldReport::new();

        let mut context = RenderContext::new(feature, name);
        if kind == ArtifactKind::Page {
            context = context.with_provider(&self.page_provider(feature, name));
        }

        let artifact = Artifact::new(kind, feature.clone(), name.clone());
        for file in artifact.files(&self.layout) {
            let body = self.renderer.render(file.template, &context);
            let result = writer.write_if_absent(&file.path, &body);
            record_write(&mut report, &file.path, result);
        }

        if kind == ArtifactKind::Page {
            let patcher = RegistryPatcher::new(self.filesystem.as_ref(), &self.root);
            report.extend(patcher.apply(&catalog::page_name_registration(&self.layout, name)));
            report.extend(patcher.apply(&catalog::route_registration(
                &self.layout,
                feature,
                name,
            )));
        }

        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn writer(&self) -> ArtifactWriter<'_> {
        ArtifactWriter::new(self.filesystem.as_ref(), &self.root)
    }

    /// The page's own provider if one exists, else the feature's.
    fn page_provider(&self, feature: &Identifier, page: &Identifier) -> Identifier {
        let own = self.root.join(self.layout.provider_path(feature, page));
        if self.filesystem.exists(&own) {
            debug!(provider = %page, "Page has its own provider");
            page.clone()
        } else {
            debug!(provider = %feature, "Falling back to feature provider");
            feature.clone()
        }
    }
}

fn record_write(
    report: &mut ScaffoldReport,
    path: &RelativePath,
    result: StrataResult<WriteOutcome>,
) {
    let action = match result {
        Ok(WriteOutcome::Created) => {
            info!(path = %path, "Created");
            Action::Created
        }
        Ok(WriteOutcome::Skipped) => {
            info!(path = %path, "Exists, skipped");
            Action::Skipped
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Write failed");
            Action::Failed {
                reason: e.to_string(),
            }
        }
    };
    report.push(path.as_path(), action);
}
