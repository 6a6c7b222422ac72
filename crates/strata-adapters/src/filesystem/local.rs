//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StrataError, StrataResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_new(&self, path: &Path, content: &str) -> StrataResult<bool> {
        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!(path = %path.display(), "create_new: already exists");
                return Ok(false);
            }
            Err(e) => return Err(map_io_error(path, e, "create file")),
        };

        write_or_discard(path, file, content)?;
        Ok(true)
    }

    fn read_to_string(&self, path: &Path) -> StrataResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Writes `content` into a freshly created file, removing the file if the
/// write fails so a later run can create it again.
fn write_or_discard<W: Write>(path: &Path, mut file: W, content: &str) -> StrataResult<()> {
    if let Err(e) = file.write_all(content.as_bytes()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(map_io_error(path, e, "write file"));
    }
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StrataError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_new_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.dart");
        let fs = LocalFilesystem::new();

        assert!(fs.create_new(&path, "first").unwrap());
        assert!(!fs.create_new(&path, "second").unwrap());
        assert_eq!(fs.read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/a.dart");

        let err = LocalFilesystem::new().create_new(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to create file"));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_removes_the_file_so_a_rerun_can_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("billing.dart");
        std::fs::write(&path, "").unwrap();

        let err = write_or_discard(&path, FullDisk, "class Billing {}\n").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
        assert!(!path.exists());

        let fs = LocalFilesystem::new();
        assert!(fs.create_new(&path, "class Billing {}\n").unwrap());
        assert_eq!(fs.read_to_string(&path).unwrap(), "class Billing {}\n");
    }
}
