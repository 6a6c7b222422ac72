//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, RegistryPatcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: What a run did, file by file
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{ArtifactWriter, RegistryPatcher, ScaffoldService, WriteOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
pub use report::{Action, ReportEntry, ScaffoldReport};
