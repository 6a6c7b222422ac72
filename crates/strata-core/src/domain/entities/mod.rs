pub mod artifact;
pub mod common;
pub mod render_context;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactFile};
pub use render_context::RenderContext;
