//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateKind};
use crate::error::StrataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are whatever the caller passes; the services always join them onto
/// the project root first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Create a file only if nothing exists at `path`.
    ///
    /// Returns `Ok(false)` when the file was already there. The check and
    /// the create are a single step, so two racing writers cannot both win.
    fn create_new(&self, path: &Path, content: &str) -> StrataResult<bool>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StrataResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for artifact bodies.
///
/// Implemented by:
/// - `strata_adapters::renderer::SimpleRenderer` (built-in Dart templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Produce the full text of one file. Rendering cannot fail.
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> String;
}
