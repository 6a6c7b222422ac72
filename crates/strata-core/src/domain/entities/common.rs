use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative to the project root.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Build from a relative literal known at compile time.
    pub(crate) fn literal(path: &'static str) -> Self {
        debug_assert!(!Path::new(path).has_root(), "not relative: {path}");
        Self(PathBuf::from(path))
    }

    /// Join a segment, maintaining relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        if segment.is_absolute() || segment.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: segment.display().to_string(),
            });
        }
        Ok(Self(self.0.join(segment)))
    }

    /// Join segments that are known to be relative (identifiers, constants).
    pub(crate) fn child(&self, segment: impl AsRef<Path>) -> Self {
        Self(self.0.join(segment))
    }

    pub fn parent(&self) -> Option<Self> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute() {
        assert!(RelativePath::try_new("/etc").is_err());
        assert!(RelativePath::try_new("lib").unwrap().join("/abs").is_err());
    }

    #[test]
    fn parent_of_single_segment_is_none() {
        assert_eq!(RelativePath::try_new("lib").unwrap().parent(), None);
        let nested = RelativePath::try_new("lib/core/router.dart").unwrap();
        assert_eq!(nested.parent().unwrap().as_path(), Path::new("lib/core"));
    }
}
