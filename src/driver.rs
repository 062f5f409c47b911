//! The batch driver.
//!
//! Repositories are processed one at a time, in manifest order. A failure is
//! reported (console and notification) and the batch moves on to the next
//! repository, unless the error is fatal to the whole run (see
//! [`ghrm_github::Error::is_fatal`]), in which case the remaining
//! repositories are left untouched.

use std::process::ExitCode;

use ghrm_github::{Error, RepositoryPlatform, create_or_update, delete};
use ghrm_notify::Notifier;
use ghrm_protocol::{Action, BatchSummary, OperationOutcome, RepositoryConfig};
use tracing::{error, info};

use crate::report;

/// The outcome of one repository in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Repository name.
    pub name: String,
    /// What happened to it.
    pub outcome: OperationOutcome,
}

/// The result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// The action that ran.
    pub action: Action,
    /// Per-repository outcomes for every repository processed, in order.
    pub items: Vec<BatchItem>,
    /// The run-fatal error that stopped the batch early, if any.
    pub fatal: Option<String>,
}

impl BatchReport {
    /// Returns the outcome tally.
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        self.items.iter().map(|item| &item.outcome).collect()
    }

    /// Returns `true` if every repository was processed without failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.fatal.is_none() && self.summary().is_success()
    }

    /// Returns the process exit code for this report.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Accumulates outcomes and sends the matching notifications.
struct Batch<'a, N> {
    notifier: &'a N,
    organization: &'a str,
    report: BatchReport,
}

impl<'a, N: Notifier> Batch<'a, N> {
    fn new(action: Action, organization: &'a str, notifier: &'a N) -> Self {
        Self {
            notifier,
            organization,
            report: BatchReport {
                action,
                items: Vec::new(),
                fatal: None,
            },
        }
    }

    async fn record(&mut self, name: &str, outcome: OperationOutcome) {
        let line = report::outcome_line(name, &outcome);
        if outcome.is_failure() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        let body = report::outcome_body(self.report.action, self.organization, name, &outcome);
        self.notifier
            .send(
                &report::outcome_title(&outcome),
                &body,
                report::outcome_severity(&outcome),
            )
            .await;

        self.report.items.push(BatchItem {
            name: name.to_string(),
            outcome,
        });
    }

    /// Records a failure. Returns `true` if the batch must stop.
    async fn fail(&mut self, name: &str, err: &Error) -> bool {
        error!(repository = %name, error = %err, "repository operation failed");
        self.record(name, OperationOutcome::failed(err.to_string()))
            .await;

        if err.is_fatal() {
            eprintln!("Aborting: {err}");
            self.report.fatal = Some(err.to_string());
            return true;
        }
        false
    }

    async fn finish(self) -> BatchReport {
        let summary = self.report.summary();
        let aborted = self.report.fatal.is_some();
        println!("{}", report::summary_line(self.report.action, &summary));

        let title = if aborted {
            format!("Batch {} aborted", self.report.action)
        } else {
            format!("Batch {} finished", self.report.action)
        };
        let body = report::summary_body(self.organization, &summary, self.report.fatal.as_deref());
        self.notifier
            .send(&title, &body, report::summary_severity(&summary, aborted))
            .await;

        info!(
            action = %self.report.action,
            total = summary.total(),
            failed = summary.failed,
            "batch finished"
        );
        self.report
    }
}

/// Creates or updates every repository in `configs`.
pub async fn run_create<P, N>(
    platform: &P,
    notifier: &N,
    configs: &[RepositoryConfig],
) -> BatchReport
where
    P: RepositoryPlatform,
    N: Notifier,
{
    let mut batch = Batch::new(Action::Create, platform.organization(), notifier);

    for config in configs {
        match create_or_update(platform, config).await {
            Ok(outcome) => batch.record(&config.name, outcome).await,
            Err(e) => {
                if batch.fail(&config.name, &e).await {
                    break;
                }
            }
        }
    }

    batch.finish().await
}

/// Deletes every repository in `names`.
///
/// `action` is [`Action::Delete`] for the main manifest and
/// [`Action::Decommission`] for a decommission list; both behave the same.
pub async fn run_delete<P, N>(
    platform: &P,
    notifier: &N,
    action: Action,
    names: &[String],
) -> BatchReport
where
    P: RepositoryPlatform,
    N: Notifier,
{
    let mut batch = Batch::new(action, platform.organization(), notifier);

    for name in names {
        match delete(platform, name).await {
            Ok(true) => batch.record(name, OperationOutcome::Deleted).await,
            Ok(false) => batch.record(name, OperationOutcome::Skipped).await,
            Err(e) => {
                if batch.fail(name, &e).await {
                    break;
                }
            }
        }
    }

    batch.finish().await
}
