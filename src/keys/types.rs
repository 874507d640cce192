use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Access key status as reported by IAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyStatus {
    Active,
    Inactive,
}

impl KeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of the last-used lookup for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "at", rename_all = "snake_case")]
pub enum LastUsed {
    /// IAM has no record of the key being used
    Never,
    At(DateTime<Utc>),
    /// The lookup itself failed
    Unknown,
}

impl From<Option<DateTime<Utc>>> for LastUsed {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Never, Self::At)
    }
}

/// Raw entry from a key listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMetadata {
    pub user_name: String,
    pub access_key_id: String,
    pub status: KeyStatus,
    pub created: DateTime<Utc>,
}

/// A listed key plus the attributes derived for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessKeyRecord {
    pub user_name: String,
    pub access_key_id: String,
    pub status: KeyStatus,
    pub created: DateTime<Utc>,
    pub last_used: LastUsed,
    pub age_days: i64,
    pub is_old: bool,
    /// The key the tool itself is authenticated with
    pub is_current: bool,
}

/// Freshly created key, including the secret which IAM only returns once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccessKey {
    pub user_name: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Records gathered for one command plus any advisory messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    pub records: Vec<AccessKeyRecord>,
    pub warnings: Vec<String>,
}

impl KeyReport {
    pub fn stale(&self) -> impl Iterator<Item = &AccessKeyRecord> {
        self.records.iter().filter(|r| r.is_old)
    }

    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
        self.warnings.extend(other.warnings);
    }
}
