//! Builds key reports from the IAM API.
//!
//! Listings are fatal on failure. The per-key last-used lookup is not: a
//! failed lookup marks that record's `last_used` as unknown, records a
//! warning and moves on to the next key.

use super::types::{AccessKeyRecord, KeyMetadata, KeyReport, LastUsed};
use crate::iam_api::{collect_pages, IamApi};
use crate::utils::progress::ProgressBar;
use crate::utils::time::{age_days, is_stale};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub const DEFAULT_MAX_AGE_DAYS: i64 = 90;

/// Staleness threshold and the clock ages are measured against.
#[derive(Debug, Clone, Copy)]
pub struct ReportSettings {
    pub max_age_days: i64,
    pub now: DateTime<Utc>,
}

impl ReportSettings {
    pub fn new(max_age_days: i64) -> Self {
        Self {
            max_age_days,
            now: Utc::now(),
        }
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE_DAYS)
    }
}

/// Derive age, staleness and the current-key flag for one listing entry.
pub fn build_record(
    meta: KeyMetadata,
    last_used: LastUsed,
    caller_key: Option<&str>,
    settings: &ReportSettings,
) -> AccessKeyRecord {
    let age = age_days(&meta.created, &settings.now);
    let is_current = caller_key == Some(meta.access_key_id.as_str());

    AccessKeyRecord {
        user_name: meta.user_name,
        access_key_id: meta.access_key_id,
        status: meta.status,
        created: meta.created,
        last_used,
        age_days: age,
        is_old: is_stale(age, settings.max_age_days),
        is_current,
    }
}

/// Keys for one user, or for the caller when `user_name` is `None`.
pub async fn user_keys(
    api: &dyn IamApi,
    user_name: Option<&str>,
    settings: &ReportSettings,
) -> Result<KeyReport> {
    let caller_key = api.caller_access_key_id().await;
    keys_for(api, user_name, caller_key.as_deref(), settings).await
}

/// Keys for every user in the account, in the order IAM lists the users.
pub async fn all_users(
    api: &dyn IamApi,
    settings: &ReportSettings,
    progress: Option<&ProgressBar>,
) -> Result<KeyReport> {
    let users = collect_pages("ListUsers", |marker| api.list_users(marker))
        .await
        .context("Failed to list IAM users")?;
    log::info!("found {} IAM user(s)", users.len());
    if let Some(bar) = progress {
        bar.set_total(users.len());
    }

    let caller_key = api.caller_access_key_id().await;
    let mut report = KeyReport::default();

    for user in &users {
        if let Some(bar) = progress {
            bar.set_current(user);
        }
        let user_report =
            keys_for(api, Some(user.as_str()), caller_key.as_deref(), settings).await?;
        if let Some(bar) = progress {
            bar.inc();
        }
        report.extend(user_report);
    }

    Ok(report)
}

async fn keys_for(
    api: &dyn IamApi,
    user_name: Option<&str>,
    caller_key: Option<&str>,
    settings: &ReportSettings,
) -> Result<KeyReport> {
    let keys = collect_pages("ListAccessKeys", |marker| {
        api.list_access_keys(user_name, marker)
    })
    .await
    .with_context(|| match user_name {
        Some(user) => format!("Failed to list access keys for user {}", user),
        None => "Failed to list access keys".to_string(),
    })?;

    let mut report = KeyReport::default();
    for meta in keys {
        let last_used = match api.get_access_key_last_used(&meta.access_key_id).await {
            Ok(ts) => LastUsed::from(ts),
            Err(e) => {
                let warning = format!("Couldn't get usage data for {}: {}", meta.access_key_id, e);
                log::debug!("{}", warning);
                report.warnings.push(warning);
                LastUsed::Unknown
            }
        };
        report
            .records
            .push(build_record(meta, last_used, caller_key, settings));
    }

    Ok(report)
}
