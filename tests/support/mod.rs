//! In-memory `IamApi` used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use aws_credentials_tools::iam_api::{IamApi, IamError, Page};
use aws_credentials_tools::keys::types::{KeyMetadata, KeyStatus, NewAccessKey};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const CALLER: &str = "caller";

pub fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn key(user: &str, id: &str, age_days: i64) -> KeyMetadata {
    KeyMetadata {
        user_name: user.to_string(),
        access_key_id: id.to_string(),
        status: KeyStatus::Active,
        created: now() - Duration::days(age_days),
    }
}

/// Scripted IAM account. Page `n` of a listing is requested with marker
/// `"n"`; the first page with no marker.
#[derive(Default)]
pub struct FakeIam {
    user_pages: Vec<Vec<String>>,
    key_pages: HashMap<String, Vec<Vec<KeyMetadata>>>,
    last_used: HashMap<String, DateTime<Utc>>,
    failing_last_used: HashSet<String>,
    failing_users: HashSet<String>,
    caller_key: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeIam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, pages: Vec<Vec<&str>>) -> Self {
        self.user_pages = pages
            .into_iter()
            .map(|page| page.into_iter().map(String::from).collect())
            .collect();
        self
    }

    /// Key pages for `user`; `CALLER` stands for the authenticated identity.
    pub fn with_keys(mut self, user: &str, pages: Vec<Vec<KeyMetadata>>) -> Self {
        self.key_pages.insert(user.to_string(), pages);
        self
    }

    pub fn with_last_used(mut self, id: &str, at: DateTime<Utc>) -> Self {
        self.last_used.insert(id.to_string(), at);
        self
    }

    pub fn failing_last_used(mut self, id: &str) -> Self {
        self.failing_last_used.insert(id.to_string());
        self
    }

    pub fn failing_user(mut self, user: &str) -> Self {
        self.failing_users.insert(user.to_string());
        self
    }

    pub fn with_caller_key(mut self, id: &str) -> Self {
        self.caller_key = Some(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn page_of<T: Clone>(pages: &[Vec<T>], marker: Option<String>) -> Page<T> {
    let index = marker.map_or(0, |m| m.parse::<usize>().unwrap());
    let items = pages.get(index).cloned().unwrap_or_default();
    if index + 1 < pages.len() {
        Page::truncated(items, (index + 1).to_string())
    } else {
        Page::last(items)
    }
}

fn denied(operation: &'static str) -> IamError {
    IamError::Api {
        operation,
        message: "AccessDenied: not authorized".to_string(),
    }
}

#[async_trait]
impl IamApi for FakeIam {
    async fn list_access_keys(
        &self,
        user_name: Option<&str>,
        marker: Option<String>,
    ) -> Result<Page<KeyMetadata>, IamError> {
        let user = user_name.unwrap_or(CALLER);
        self.record(format!("ListAccessKeys {} {:?}", user, marker));
        if self.failing_users.contains(user) {
            return Err(denied("ListAccessKeys"));
        }
        let pages = self.key_pages.get(user).ok_or(IamError::Api {
            operation: "ListAccessKeys",
            message: format!("NoSuchEntity: user {} not found", user),
        })?;
        Ok(page_of(pages, marker))
    }

    async fn list_users(&self, marker: Option<String>) -> Result<Page<String>, IamError> {
        self.record(format!("ListUsers {:?}", marker));
        Ok(page_of(&self.user_pages, marker))
    }

    async fn get_access_key_last_used(
        &self,
        access_key_id: &str,
    ) -> Result<Option<DateTime<Utc>>, IamError> {
        self.record(format!("GetAccessKeyLastUsed {}", access_key_id));
        if self.failing_last_used.contains(access_key_id) {
            return Err(denied("GetAccessKeyLastUsed"));
        }
        Ok(self.last_used.get(access_key_id).copied())
    }

    async fn create_access_key(&self, user_name: Option<&str>) -> Result<NewAccessKey, IamError> {
        let user = user_name.unwrap_or(CALLER);
        self.record(format!("CreateAccessKey {}", user));
        if self.failing_users.contains(user) {
            return Err(denied("CreateAccessKey"));
        }
        Ok(NewAccessKey {
            user_name: user.to_string(),
            access_key_id: "AKIANEWKEY000000".to_string(),
            secret_access_key: "newSecret/Value+123".to_string(),
        })
    }

    async fn delete_access_key(
        &self,
        access_key_id: &str,
        user_name: Option<&str>,
    ) -> Result<(), IamError> {
        let user = user_name.unwrap_or(CALLER);
        self.record(format!("DeleteAccessKey {} {}", access_key_id, user));
        if self.failing_users.contains(user) {
            return Err(denied("DeleteAccessKey"));
        }
        Ok(())
    }

    async fn update_access_key_status(
        &self,
        access_key_id: &str,
        status: KeyStatus,
        user_name: Option<&str>,
    ) -> Result<(), IamError> {
        let user = user_name.unwrap_or(CALLER);
        self.record(format!("UpdateAccessKey {} {} {}", access_key_id, status, user));
        if self.failing_users.contains(user) {
            return Err(denied("UpdateAccessKey"));
        }
        Ok(())
    }

    async fn caller_access_key_id(&self) -> Option<String> {
        self.caller_key.clone()
    }
}
