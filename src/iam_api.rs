//! IAM API surface used by the commands.
//!
//! Commands never talk to `aws-sdk-iam` directly. They go through the
//! [`IamApi`] trait, which [`AwsIamClient`] implements for the real service
//! and the integration tests implement with scripted in-memory pages.

use crate::keys::types::{KeyMetadata, KeyStatus, NewAccessKey};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::types::StatusType;
use aws_sdk_iam::Client;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::env;
use std::future::Future;
use thiserror::Error;

/// Upper bound on pages fetched for a single listing.
pub const MAX_PAGES: usize = 1000;

/// Total attempts per request (first try plus three retries).
pub const MAX_ATTEMPTS: u32 = 4;

#[derive(Debug, Error)]
pub enum IamError {
    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("{operation} returned unexpected {field} value '{value}'")]
    UnexpectedValue {
        operation: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{operation} pagination aborted: {reason}")]
    Pagination {
        operation: &'static str,
        reason: String,
    },
}

/// One page of a listing call.
///
/// `next_marker` is only set when the listing was truncated and more
/// results remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_marker: None,
        }
    }

    pub fn truncated(items: Vec<T>, marker: impl Into<String>) -> Self {
        Self {
            items,
            next_marker: Some(marker.into()),
        }
    }
}

/// Remote identity operations the tool depends on.
///
/// A `None` user name means the identity the client is authenticated as.
#[async_trait]
pub trait IamApi: Send + Sync {
    async fn list_access_keys(
        &self,
        user_name: Option<&str>,
        marker: Option<String>,
    ) -> Result<Page<KeyMetadata>, IamError>;

    async fn list_users(&self, marker: Option<String>) -> Result<Page<String>, IamError>;

    /// `Ok(None)` means the key has never been used.
    async fn get_access_key_last_used(
        &self,
        access_key_id: &str,
    ) -> Result<Option<DateTime<Utc>>, IamError>;

    async fn create_access_key(&self, user_name: Option<&str>) -> Result<NewAccessKey, IamError>;

    async fn delete_access_key(
        &self,
        access_key_id: &str,
        user_name: Option<&str>,
    ) -> Result<(), IamError>;

    async fn update_access_key_status(
        &self,
        access_key_id: &str,
        status: KeyStatus,
        user_name: Option<&str>,
    ) -> Result<(), IamError>;

    /// Access key id of the credentials this client signs requests with.
    async fn caller_access_key_id(&self) -> Option<String>;
}

/// Follow continuation markers until a page comes back without one.
///
/// Items are returned in the order the pages delivered them. The loop stops
/// with [`IamError::Pagination`] if any marker is handed back a second time or
/// if more than [`MAX_PAGES`] pages are requested.
pub async fn collect_pages<T, F, Fut>(
    operation: &'static str,
    mut fetch: F,
) -> Result<Vec<T>, IamError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, IamError>>,
{
    let mut items = Vec::new();
    let mut marker: Option<String> = None;
    let mut seen = HashSet::new();

    for page_number in 1..=MAX_PAGES {
        let page = fetch(marker.clone()).await?;
        log::debug!(
            "{}: page {} returned {} item(s)",
            operation,
            page_number,
            page.items.len()
        );
        items.extend(page.items);

        match page.next_marker {
            None => return Ok(items),
            Some(next) if !seen.insert(next.clone()) => {
                return Err(IamError::Pagination {
                    operation,
                    reason: format!("marker '{}' was returned twice", next),
                });
            }
            Some(next) => marker = Some(next),
        }
    }

    Err(IamError::Pagination {
        operation,
        reason: format!("more than {} pages", MAX_PAGES),
    })
}

/// `IamApi` backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsIamClient {
    client: Client,
    credentials: Option<SharedCredentialsProvider>,
    profile: Option<String>,
}

impl AwsIamClient {
    /// Build a client from CLI options.
    ///
    /// The profile comes from the flag, then `AWS_PROFILE`, then the SDK's
    /// default provider chain.
    pub async fn from_options(profile: Option<&str>) -> Self {
        let profile = profile
            .map(|p| p.to_string())
            .or_else(|| env::var("AWS_PROFILE").ok())
            .filter(|p| !p.is_empty());

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS));
        if let Some(name) = &profile {
            loader = loader.profile_name(name);
        }
        let config = loader.load().await;

        Self {
            client: Client::new(&config),
            credentials: config.credentials_provider(),
            profile,
        }
    }

    /// Profile the session was built with, if any was selected explicitly.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

fn api_error<E>(operation: &'static str, err: E) -> IamError
where
    E: std::error::Error + 'static,
{
    IamError::Api {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

fn to_utc(dt: &aws_sdk_iam::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(dt.secs(), dt.subsec_nanos())
}

fn key_status(operation: &'static str, status: &StatusType) -> Result<KeyStatus, IamError> {
    match status {
        StatusType::Active => Ok(KeyStatus::Active),
        StatusType::Inactive => Ok(KeyStatus::Inactive),
        other => Err(IamError::UnexpectedValue {
            operation,
            field: "Status",
            value: other.as_str().to_string(),
        }),
    }
}

fn sdk_status(status: KeyStatus) -> StatusType {
    match status {
        KeyStatus::Active => StatusType::Active,
        KeyStatus::Inactive => StatusType::Inactive,
    }
}

#[async_trait]
impl IamApi for AwsIamClient {
    async fn list_access_keys(
        &self,
        user_name: Option<&str>,
        marker: Option<String>,
    ) -> Result<Page<KeyMetadata>, IamError> {
        const OP: &str = "ListAccessKeys";
        log::debug!("{} user={:?} marker={:?}", OP, user_name, marker);

        let out = self
            .client
            .list_access_keys()
            .set_user_name(user_name.map(|u| u.to_string()))
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;

        let mut items = Vec::with_capacity(out.access_key_metadata().len());
        for meta in out.access_key_metadata() {
            let missing = |field| IamError::MissingField {
                operation: OP,
                field,
            };
            items.push(KeyMetadata {
                user_name: meta.user_name().ok_or_else(|| missing("UserName"))?.to_string(),
                access_key_id: meta
                    .access_key_id()
                    .ok_or_else(|| missing("AccessKeyId"))?
                    .to_string(),
                status: key_status(OP, meta.status().ok_or_else(|| missing("Status"))?)?,
                created: meta
                    .create_date()
                    .and_then(to_utc)
                    .ok_or_else(|| missing("CreateDate"))?,
            });
        }

        let next_marker = if out.is_truncated() {
            out.marker().map(|m| m.to_string())
        } else {
            None
        };

        Ok(Page { items, next_marker })
    }

    async fn list_users(&self, marker: Option<String>) -> Result<Page<String>, IamError> {
        const OP: &str = "ListUsers";
        log::debug!("{} marker={:?}", OP, marker);

        let out = self
            .client
            .list_users()
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;

        let items = out
            .users()
            .iter()
            .map(|u| u.user_name().to_string())
            .collect();

        let next_marker = if out.is_truncated() {
            out.marker().map(|m| m.to_string())
        } else {
            None
        };

        Ok(Page { items, next_marker })
    }

    async fn get_access_key_last_used(
        &self,
        access_key_id: &str,
    ) -> Result<Option<DateTime<Utc>>, IamError> {
        const OP: &str = "GetAccessKeyLastUsed";
        log::debug!("{} key={}", OP, access_key_id);

        let out = self
            .client
            .get_access_key_last_used()
            .access_key_id(access_key_id)
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;

        Ok(out
            .access_key_last_used()
            .and_then(|used| used.last_used_date())
            .and_then(to_utc))
    }

    async fn create_access_key(&self, user_name: Option<&str>) -> Result<NewAccessKey, IamError> {
        const OP: &str = "CreateAccessKey";
        log::info!("{} user={:?}", OP, user_name);

        let out = self
            .client
            .create_access_key()
            .set_user_name(user_name.map(|u| u.to_string()))
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;

        let key = out.access_key().ok_or(IamError::MissingField {
            operation: OP,
            field: "AccessKey",
        })?;

        Ok(NewAccessKey {
            user_name: key.user_name().to_string(),
            access_key_id: key.access_key_id().to_string(),
            secret_access_key: key.secret_access_key().to_string(),
        })
    }

    async fn delete_access_key(
        &self,
        access_key_id: &str,
        user_name: Option<&str>,
    ) -> Result<(), IamError> {
        const OP: &str = "DeleteAccessKey";
        log::info!("{} key={} user={:?}", OP, access_key_id, user_name);

        self.client
            .delete_access_key()
            .access_key_id(access_key_id)
            .set_user_name(user_name.map(|u| u.to_string()))
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;
        Ok(())
    }

    async fn update_access_key_status(
        &self,
        access_key_id: &str,
        status: KeyStatus,
        user_name: Option<&str>,
    ) -> Result<(), IamError> {
        const OP: &str = "UpdateAccessKey";
        log::info!(
            "{} key={} status={} user={:?}",
            OP,
            access_key_id,
            status,
            user_name
        );

        self.client
            .update_access_key()
            .access_key_id(access_key_id)
            .status(sdk_status(status))
            .set_user_name(user_name.map(|u| u.to_string()))
            .send()
            .await
            .map_err(|e| api_error(OP, e))?;
        Ok(())
    }

    async fn caller_access_key_id(&self) -> Option<String> {
        let provider = self.credentials.as_ref()?;
        match provider.provide_credentials().await {
            Ok(creds) => Some(creds.access_key_id().to_string()),
            Err(e) => {
                log::debug!("could not resolve caller credentials: {}", e);
                None
            }
        }
    }
}
