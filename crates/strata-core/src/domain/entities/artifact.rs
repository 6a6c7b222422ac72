use crate::domain::{
    entities::common::RelativePath,
    layout::ProjectLayout,
    value_objects::{ArtifactKind, Identifier, TemplateKind},
};

/// One generated unit, identified by `(feature, kind, name)`.
///
/// Artifacts are write-once: files that already exist are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub feature: Identifier,
    pub name: Identifier,
}

/// A file to render and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub template: TemplateKind,
    pub path: RelativePath,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, feature: Identifier, name: Identifier) -> Self {
        Self {
            kind,
            feature,
            name,
        }
    }

    /// Source files followed by the test stub.
    pub fn files(&self, layout: &ProjectLayout) -> Vec<ArtifactFile> {
        self.kind
            .templates()
            .iter()
            .copied()
            .chain(std::iter::once(TemplateKind::Test(self.kind)))
            .map(|template| ArtifactFile {
                template,
                path: layout.template_path(template, &self.feature, &self.name),
            })
            .collect()
    }
}
