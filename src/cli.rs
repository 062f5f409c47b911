//! CLI argument parsing and command dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ghrm_config::{Credentials, DecommissionList, RepositoryManifest, WebhookSettings};
use ghrm_github::Session;
use ghrm_notify::{Dispatcher, MessageBody, Notifier, Severity};
use ghrm_protocol::Action;
use tracing::debug;

/// Provision, update and decommission GitHub organization repositories
#[derive(Parser, Debug)]
#[command(name = "ghrm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum)]
    action: ActionArg,

    /// Repositories manifest (or decommission list for `decommission`)
    #[arg(short, long, value_name = "PATH")]
    config: PathBuf,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ActionArg {
    /// Create missing repositories and update existing ones
    Create,
    /// Delete the repositories listed in the manifest
    Delete,
    /// Delete the repositories listed in a decommission list
    Decommission,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Create => Action::Create,
            ActionArg::Delete => Action::Delete,
            ActionArg::Decommission => Action::Decommission,
        }
    }
}

/// What a run has to do, loaded before any network call.
enum Work {
    Create(Vec<ghrm_protocol::RepositoryConfig>),
    Delete(Vec<String>),
}

impl Work {
    fn load(action: Action, path: &std::path::Path) -> Result<Self> {
        Ok(match action {
            Action::Create => Self::Create(RepositoryManifest::load(path)?.repository_configs()),
            Action::Delete => Self::Delete(
                RepositoryManifest::load(path)?
                    .repositories
                    .names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            Action::Decommission => Self::Delete(DecommissionList::load(path)?.repositories),
        })
    }

    fn len(&self) -> usize {
        match self {
            Self::Create(configs) => configs.len(),
            Self::Delete(names) => names.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cli {
    /// Returns the log level requested on the command line.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Execute the requested action.
    pub async fn execute(self) -> Result<ExitCode> {
        let action = Action::from(self.action);
        let work = Work::load(action, &self.config)?;

        if work.is_empty() {
            println!("No repositories to {action} in {}", self.config.display());
            return Ok(ExitCode::SUCCESS);
        }
        debug!(%action, count = work.len(), "loaded work");

        let credentials = Credentials::from_env()?;
        let notifier = Dispatcher::from_settings(&WebhookSettings::from_env());

        let session = match Session::connect(&credentials).await {
            Ok(session) => session,
            Err(e) => {
                let body = MessageBody::fields([
                    ("Organization", credentials.organization().to_string()),
                    ("Error", e.to_string()),
                ]);
                notifier
                    .send("GitHub session failed", &body, Severity::Error)
                    .await;
                return Err(e).context("failed to connect to GitHub");
            }
        };

        let report = match &work {
            Work::Create(configs) => ghrm::run_create(&session, &notifier, configs).await,
            Work::Delete(names) => ghrm::run_delete(&session, &notifier, action, names).await,
        };
        Ok(report.exit_code())
    }
}
