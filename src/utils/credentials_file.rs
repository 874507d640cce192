//! Shared credentials file helpers.
//!
//! New keys are written as a separate `[<profile>.new]` section appended to
//! the end of the file. Existing content is never rewritten; removing the
//! old section is left to the user.

use crate::keys::types::NewAccessKey;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE: &str = "default";

/// Profile the new section is named after, falling back to `default`.
pub fn profile_or_default(profile: Option<String>) -> String {
    profile
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

pub fn section_name(profile: &str) -> String {
    format!("{}.new", profile)
}

/// Credentials file section for a new key, preceded by a blank line.
pub fn format_credentials_block(profile: &str, key: &NewAccessKey) -> String {
    format!(
        "\n[{}]\naws_access_key_id={}\naws_secret_access_key={}\n",
        section_name(profile),
        key.access_key_id,
        key.secret_access_key
    )
}

/// Shell statements that activate a new key in the current session.
pub fn format_console_export(key: &NewAccessKey) -> String {
    format!(
        "\texport AWS_ACCESS_KEY_ID={}\n\texport AWS_SECRET_ACCESS_KEY={}\n",
        key.access_key_id, key.secret_access_key
    )
}

/// Location of the shared credentials file.
///
/// `AWS_SHARED_CREDENTIALS_FILE` wins; otherwise `~/.aws/credentials`.
pub fn credentials_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os("AWS_SHARED_CREDENTIALS_FILE").filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .ok_or_else(|| {
            anyhow!("Cannot locate home directory: neither HOME nor USERPROFILE is set")
        })?;

    Ok(PathBuf::from(home).join(".aws").join("credentials"))
}

/// Append `block` to the file at `path`, creating the file if needed.
///
/// The parent directory must already exist.
pub fn append_block(path: &Path, block: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open credentials file: {}", path.display()))?;

    file.write_all(block.as_bytes())
        .with_context(|| format!("Failed to write credentials file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush credentials file: {}", path.display()))?;

    Ok(())
}
