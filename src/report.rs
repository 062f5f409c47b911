//! Console and notification rendering of batch results.

use ghrm_notify::{MessageBody, Severity};
use ghrm_protocol::{Action, BatchSummary, OperationOutcome};

/// Returns the severity a per-repository outcome is reported with.
#[must_use]
pub fn outcome_severity(outcome: &OperationOutcome) -> Severity {
    match outcome {
        OperationOutcome::Created | OperationOutcome::Updated | OperationOutcome::Deleted => {
            Severity::Success
        }
        OperationOutcome::Skipped => Severity::Info,
        OperationOutcome::Failed { .. } => Severity::Error,
    }
}

/// Returns the severity of the aggregate notification.
///
/// Success when nothing failed, error when everything failed (or the run was
/// aborted), warning otherwise.
#[must_use]
pub fn summary_severity(summary: &BatchSummary, aborted: bool) -> Severity {
    if aborted || (summary.failed > 0 && summary.failed == summary.total()) {
        Severity::Error
    } else if summary.failed > 0 {
        Severity::Warning
    } else {
        Severity::Success
    }
}

/// Console line for a per-repository outcome.
///
/// ```
/// use ghrm::report::outcome_line;
/// use ghrm_protocol::OperationOutcome;
///
/// assert_eq!(
///     outcome_line("repo-a", &OperationOutcome::Created),
///     "GitHub repository created: repo-a"
/// );
/// ```
#[must_use]
pub fn outcome_line(name: &str, outcome: &OperationOutcome) -> String {
    match outcome {
        OperationOutcome::Failed { reason } => format!("Error: {name}: {reason}"),
        OperationOutcome::Skipped => format!("GitHub repository skipped (no change): {name}"),
        other => format!("GitHub repository {}: {name}", other.label()),
    }
}

/// Notification title for a per-repository outcome.
#[must_use]
pub fn outcome_title(outcome: &OperationOutcome) -> String {
    match outcome {
        OperationOutcome::Failed { .. } => "Repository operation failed".to_string(),
        other => format!("Repository {}", other.label()),
    }
}

/// Notification body for a per-repository outcome.
#[must_use]
pub fn outcome_body(
    action: Action,
    organization: &str,
    name: &str,
    outcome: &OperationOutcome,
) -> MessageBody {
    let mut fields = vec![
        ("Repository", name.to_string()),
        ("Organization", organization.to_string()),
        ("Action", action.to_string()),
    ];
    if let OperationOutcome::Failed { reason } = outcome {
        fields.push(("Error", reason.clone()));
    }
    MessageBody::fields(fields)
}

/// One-line console summary of a batch.
///
/// ```
/// use ghrm::report::summary_line;
/// use ghrm_protocol::{Action, BatchSummary};
///
/// let summary = BatchSummary { created: 2, failed: 1, ..Default::default() };
/// assert_eq!(summary_line(Action::Create, &summary), "create: 3 repositories (2 created, 1 failed)");
/// ```
#[must_use]
pub fn summary_line(action: Action, summary: &BatchSummary) -> String {
    let counts = summary
        .counts()
        .into_iter()
        .map(|(label, count)| format!("{count} {label}"))
        .collect::<Vec<_>>();
    let noun = if summary.total() == 1 {
        "repository"
    } else {
        "repositories"
    };

    if counts.is_empty() {
        format!("{action}: 0 {noun}")
    } else {
        format!("{action}: {} {noun} ({})", summary.total(), counts.join(", "))
    }
}

/// Notification body for the batch summary.
#[must_use]
pub fn summary_body(
    organization: &str,
    summary: &BatchSummary,
    fatal: Option<&str>,
) -> MessageBody {
    let mut fields: Vec<(String, String)> =
        vec![("Organization".to_string(), organization.to_string())];
    fields.extend(
        summary
            .counts()
            .into_iter()
            .map(|(label, count)| (capitalize(label), count.to_string())),
    );
    if let Some(reason) = fatal {
        fields.push(("Aborted".to_string(), reason.to_string()));
    }
    MessageBody::Fields(fields)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
