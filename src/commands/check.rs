//! Stale key check for automation.
//!
//! Prints only the keys older than `--max-age` and exits with status 1 when
//! there are any, so the command can gate a CI job or a cron alert.
//!
//! # Usage
//!
//! ```bash
//! aws-credentials check
//! aws-credentials check --all --max-age 60
//! aws-credentials check --username deploy-bot
//! ```

use super::print_warnings;
use crate::iam_api::IamApi;
use crate::keys::report::{self, ReportSettings};
use crate::keys::table::write_stale_report;
use crate::utils::progress::ProgressBar;
use anyhow::{Context, Result};
use std::io::Write;

/// Exit status returned when at least one key is stale.
pub const STALE_KEYS_FOUND: u8 = 1;

/// Which identities the check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// The caller, or the named user
    User(Option<&'a str>),
    AllUsers,
}

/// Returns the process exit status: 0 when nothing is stale, otherwise
/// [`STALE_KEYS_FOUND`].
pub async fn run(
    api: &dyn IamApi,
    scope: Scope<'_>,
    settings: &ReportSettings,
    out: &mut dyn Write,
) -> Result<u8> {
    let report = match scope {
        Scope::User(user_name) => report::user_keys(api, user_name, settings).await?,
        Scope::AllUsers => {
            let progress = ProgressBar::new(0, "Users");
            let report = report::all_users(api, settings, Some(&progress)).await;
            progress.finish();
            report?
        }
    };
    print_warnings(&report);

    let stale = write_stale_report(out, &report.records).context("Failed to write report")?;
    if stale {
        log::info!(
            "{} key(s) older than {} days",
            report.stale().count(),
            settings.max_age_days
        );
        Ok(STALE_KEYS_FOUND)
    } else {
        Ok(0)
    }
}
