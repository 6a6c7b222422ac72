//! Idempotent text merging into shared registry files.
//!
//! A registry file (the router, the page-name constants) is edited by every
//! scaffold run, and by hand in between. Each edit is an [`InsertionRequest`]:
//! a fragment, a key that tells whether the fragment is already there, and an
//! ordered list of [`Placement`]s to try. Merging never removes text.

pub mod catalog;
mod placement;

pub use placement::{Placement, Wrapper};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// What counts as "already present".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupKey {
    /// The trimmed fragment itself appears somewhere in the file.
    Fragment,
    /// An explicit substring appears somewhere in the file.
    Key(String),
}

/// One fragment to merge into a registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionRequest {
    label: String,
    fragment: String,
    dedup: DedupKey,
    placements: Vec<Placement>,
}

/// Result of a single merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The dedup key was found; the document is unchanged.
    AlreadyPresent,
    /// The fragment was inserted by the named placement.
    Merged {
        content: String,
        placement: &'static str,
    },
}

impl InsertionRequest {
    /// `label` names the request in logs and reports (e.g. `"route import"`).
    pub fn new(label: impl Into<String>, fragment: impl Into<String>) -> Self {
        let mut fragment = fragment.into();
        if !fragment.ends_with('\n') {
            fragment.push('\n');
        }

        Self {
            label: label.into(),
            fragment,
            dedup: DedupKey::Fragment,
            placements: Vec::new(),
        }
    }

    pub fn dedup_on(mut self, key: impl Into<String>) -> Self {
        self.dedup = DedupKey::Key(key.into());
        self
    }

    /// Add a placement after the ones already registered.
    pub fn then(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    fn dedup_key(&self) -> &str {
        match &self.dedup {
            DedupKey::Fragment => self.fragment.trim(),
            DedupKey::Key(key) => key,
        }
    }

    pub fn is_present_in(&self, content: &str) -> bool {
        content.contains(self.dedup_key())
    }

    /// Merge into `content` using the first placement that accepts it.
    pub fn merge_into(&self, content: &str) -> Result<MergeOutcome, DomainError> {
        if self.is_present_in(content) {
            return Ok(MergeOutcome::AlreadyPresent);
        }

        self.placements
            .iter()
            .find_map(|placement| {
                placement
                    .apply(content, &self.fragment)
                    .map(|merged| MergeOutcome::Merged {
                        content: merged,
                        placement: placement.name(),
                    })
            })
            .ok_or_else(|| DomainError::NoInsertionPoint {
                label: self.label.clone(),
            })
    }
}

/// A shared file plus the text it starts with when first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFile {
    pub path: RelativePath,
    pub bootstrap: String,
}

/// Requests to apply, in order, to one registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPatch {
    pub file: RegistryFile,
    pub requests: Vec<InsertionRequest>,
}
