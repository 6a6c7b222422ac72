//! What a scaffold run did, entry by entry, in execution order.

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    DirectoryEnsured,
    Created,
    /// The file existed and was left untouched.
    Skipped,
    /// A registry file was missing and has been written from its bootstrap text.
    RegistryCreated,
    FragmentInserted {
        label: String,
        placement: &'static str,
    },
    FragmentPresent {
        label: String,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub entries: Vec<ReportEntry>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, action: Action) {
        self.entries.push(ReportEntry {
            path: path.into(),
            action,
        });
    }

    pub fn extend(&mut self, other: ScaffoldReport) {
        self.entries.extend(other.entries);
    }

    pub fn created(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, Action::Created | Action::RegistryCreated))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, Action::Skipped))
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, Action::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
