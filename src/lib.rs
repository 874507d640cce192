//! # AWS Credentials Tools
//!
//! Command-line tooling for keeping AWS IAM access keys healthy: list keys
//! with their age and last use, fail a check when keys are older than a
//! threshold, and rotate keys by creating, disabling and deleting them.
//!
//! ## Overview
//!
//! Every command is a short sequence of IAM API calls. Listings follow IAM's
//! continuation markers to the end before anything is printed, so a report
//! is either complete or the command fails. Looking up when a key was last
//! used is best effort: if that call fails the key is still reported, with
//! its last use shown as `unknown`.
//!
//! ## Architecture
//!
//! - [`iam_api`] - The `IamApi` trait, bounded pagination and the AWS SDK client
//! - [`keys`] - Key records, report building and rendering
//! - [`commands`] - One module per subcommand
//! - [`utils`] - Time arithmetic, credentials file handling, logging, progress
//!
//! ## Example Usage
//!
//! ```bash
//! # Your own keys (default command)
//! aws-credentials
//!
//! # Every user's keys, flagging anything older than 60 days
//! aws-credentials all --max-age 60
//!
//! # Exit 1 if any key in the account is older than 90 days
//! aws-credentials check --all
//!
//! # Rotate: create a key and append it to ~/.aws/credentials as [default.new]
//! aws-credentials new --write
//! aws-credentials disable AKIAOLDKEYEXAMPLE
//! aws-credentials delete AKIAOLDKEYEXAMPLE
//! ```
//!
//! ## Configuration
//!
//! - `--profile` / `AWS_PROFILE` select the AWS profile for the session and
//!   name the `[<profile>.new]` section written by `new --write`.
//! - `AWS_SHARED_CREDENTIALS_FILE` overrides `~/.aws/credentials`.
//! - `-v`, `-vv`, `-vvv` raise diagnostic logging on stderr.

pub mod commands;
pub mod iam_api;
pub mod keys;
pub mod utils;

/// Name of the installed binary, used in printed follow-up commands.
pub const BIN_NAME: &str = "aws-credentials";
