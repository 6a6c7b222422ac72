//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a feature" or "register a page".

pub mod artifact_writer;
pub mod registry_patcher;
pub mod scaffold_service;

pub use artifact_writer::{ArtifactWriter, WriteOutcome};
pub use registry_patcher::RegistryPatcher;
pub use scaffold_service::ScaffoldService;
