//! Actions and per-repository outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A batch action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create missing repositories and update existing ones.
    Create,
    /// Delete the repositories listed in the main manifest.
    Delete,
    /// Delete the repositories listed in a decommission list.
    Decommission,
}

impl Action {
    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Decommission => "decommission",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of processing a single repository.
///
/// # Examples
///
/// ```
/// use ghrm_protocol::OperationOutcome;
///
/// let outcome = OperationOutcome::failed("permission denied");
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.to_string(), "failed: permission denied");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum OperationOutcome {
    /// The repository did not exist and was created.
    Created,
    /// The repository existed and was edited.
    Updated,
    /// The repository existed and was deleted.
    Deleted,
    /// Nothing was done (absent on delete, conflict on create).
    Skipped,
    /// The operation failed.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

impl OperationOutcome {
    /// Creates a [`Failed`](Self::Failed) outcome.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Failed`](Self::Failed).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the outcome's short label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Skipped => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            other => f.write_str(other.label()),
        }
    }
}

/// Tally of outcomes over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Repositories created.
    pub created: usize,
    /// Repositories updated.
    pub updated: usize,
    /// Repositories deleted.
    pub deleted: usize,
    /// Repositories skipped.
    pub skipped: usize,
    /// Repositories that failed.
    pub failed: usize,
}

impl BatchSummary {
    /// Records one outcome.
    pub fn record(&mut self, outcome: &OperationOutcome) {
        match outcome {
            OperationOutcome::Created => self.created += 1,
            OperationOutcome::Updated => self.updated += 1,
            OperationOutcome::Deleted => self.deleted += 1,
            OperationOutcome::Skipped => self.skipped += 1,
            OperationOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns the number of recorded outcomes.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.created + self.updated + self.deleted + self.skipped + self.failed
    }

    /// Returns `true` if no recorded outcome is a failure.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Returns the non-zero counts as `(label, count)` pairs, in a fixed order.
    #[must_use]
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        [
            ("created", self.created),
            ("updated", self.updated),
            ("deleted", self.deleted),
            ("skipped", self.skipped),
            ("failed", self.failed),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

impl<'a> FromIterator<&'a OperationOutcome> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a OperationOutcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}
