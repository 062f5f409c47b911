//! ghrm - provision, update and decommission GitHub organization repositories
//! from a YAML manifest.
//!
//! This crate holds the batch driver shared by the `ghrm` binary and its
//! tests:
//!
//! - [`driver`]: runs create / delete batches against a
//!   [`RepositoryPlatform`](ghrm_github::RepositoryPlatform) and reports
//!   through a [`Notifier`](ghrm_notify::Notifier)
//! - [`report`]: console lines and notification bodies

pub mod driver;
pub mod report;

pub use driver::{BatchItem, BatchReport, run_create, run_delete};
