//! Create a new access key.
//!
//! Prints the key id and either the shell `export` statements for the new
//! secret or, with `--write`, appends a `[<profile>.new]` section to the
//! shared credentials file. The previous key is left alone; the command to
//! delete it is printed once the new key has been verified.
//!
//! # Usage
//!
//! ```bash
//! aws-credentials new
//! aws-credentials new --write
//! aws-credentials new --username alice
//! ```
//!
//! If the credentials file cannot be written, the exports are printed
//! instead so the secret is not lost.
//!
//! IAM allows at most two keys per user, so a user who already has two
//! needs one deleted before a new one can be created.

use crate::iam_api::IamApi;
use crate::keys::types::NewAccessKey;
use crate::utils::credentials_file::{
    append_block, format_console_export, format_credentials_block, section_name,
};
use crate::BIN_NAME;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Where the new key should end up besides the terminal.
#[derive(Debug, Clone, Copy)]
pub struct NewKeyOptions<'a> {
    pub user_name: Option<&'a str>,
    /// Append the key to this credentials file
    pub credentials_file: Option<&'a Path>,
    /// Profile the new section is named after
    pub profile: &'a str,
}

pub async fn run(
    api: &dyn IamApi,
    options: NewKeyOptions<'_>,
    out: &mut dyn Write,
) -> Result<NewAccessKey> {
    let previous_key = match options.user_name {
        None => api.caller_access_key_id().await,
        Some(_) => None,
    };

    writeln!(out, "Generating new access key")?;
    let key = api
        .create_access_key(options.user_name)
        .await
        .context("Failed to create access key")?;
    writeln!(out, "Access key generated: {}", key.access_key_id.green())?;

    if let Some(path) = options.credentials_file {
        let block = format_credentials_block(options.profile, &key);
        writeln!(out, "Writing credentials file")?;
        if let Err(e) = append_block(path, &block) {
            writeln!(
                out,
                "Could not update {}. The secret is shown only once:\n",
                path.display()
            )?;
            writeln!(out, "{}", format_console_export(&key))?;
            return Err(e);
        }

        writeln!(out, "{} updated: ", path.display())?;
        writeln!(out, "{}", block)?;
        writeln!(out, "Activate new profile with: ")?;
        writeln!(out, "\texport AWS_PROFILE={}\n", section_name(options.profile))?;
    } else {
        writeln!(out, "Activate with:\n")?;
        writeln!(out, "{}", format_console_export(&key))?;
    }

    match (options.user_name, previous_key) {
        (None, Some(old)) => {
            writeln!(out, "Delete old key with:")?;
            writeln!(out, "\t{} delete {}", BIN_NAME, old)?;
        }
        (Some(_), _) => {
            writeln!(out, "Delete the previous key with:")?;
            writeln!(
                out,
                "\t{} delete <access-key-id> --username {}",
                BIN_NAME, key.user_name
            )?;
        }
        (None, None) => {
            log::warn!("could not determine the current access key id");
        }
    }

    Ok(key)
}
