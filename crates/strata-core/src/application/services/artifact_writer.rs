//! Write-once file creation under the project root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{application::ports::Filesystem, domain::RelativePath, error::StrataResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// Something already existed at the path; it was not touched.
    Skipped,
}

/// Creates directories and files relative to a project root.
pub struct ArtifactWriter<'a> {
    fs: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(fs: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { fs, root }
    }

    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path)
    }

    pub fn ensure_dir(&self, path: &RelativePath) -> StrataResult<()> {
        self.fs.create_dir_all(&self.resolve(path))
    }

    /// Write `content` unless the file exists. Parent directories are created.
    pub fn write_if_absent(&self, path: &RelativePath, content: &str) -> StrataResult<WriteOutcome> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            self.fs.create_dir_all(parent)?;
        }

        if self.fs.create_new(&full, content)? {
            debug!(path = %path, "Created file");
            Ok(WriteOutcome::Created)
        } else {
            debug!(path = %path, "File exists, skipping");
            Ok(WriteOutcome::Skipped)
        }
    }
}
