//! Filesystem adapters.
//!
//! [`LocalFilesystem`] backs the CLI; [`MemoryFilesystem`] backs tests that
//! need to inspect every byte a scaffold run wrote.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
