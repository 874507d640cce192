//! Key listing commands.
//!
//! # Usage
//!
//! ```bash
//! # Keys of the identity the session is authenticated as (default command)
//! aws-credentials
//! aws-credentials list
//!
//! # Keys of another user, flagging anything older than 30 days
//! aws-credentials list --username alice --max-age 30
//!
//! # Every user in the account, as JSON
//! aws-credentials all --format json
//! ```
//!
//! # Output
//!
//! The table lists key id, age in days, status, last use and owner. The key
//! the session itself is using is marked with `✔`, stale ages are red and
//! active keys green.

use super::print_warnings;
use crate::iam_api::IamApi;
use crate::keys::report::{self, ReportSettings};
use crate::keys::table::{write_records, OutputFormat};
use crate::utils::format::count_label;
use crate::utils::progress::ProgressBar;
use anyhow::Result;
use std::io::Write;

pub async fn run(
    api: &dyn IamApi,
    user_name: Option<&str>,
    settings: &ReportSettings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let report = report::user_keys(api, user_name, settings).await?;
    print_warnings(&report);

    if format == OutputFormat::Table {
        writeln!(out)?;
    }
    write_records(out, &report.records, format)
}

pub async fn run_all(
    api: &dyn IamApi,
    settings: &ReportSettings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    eprintln!("Retrieving keys for all users, please wait...");

    let progress = ProgressBar::new(0, "Users");
    let report = report::all_users(api, settings, Some(&progress)).await;
    progress.finish();
    let report = report?;

    print_warnings(&report);
    eprintln!(
        "Found {}, {} stale",
        count_label(report.records.len(), "key", "keys"),
        report.stale().count()
    );

    if format == OutputFormat::Table {
        writeln!(out)?;
    }
    write_records(out, &report.records, format)
}
