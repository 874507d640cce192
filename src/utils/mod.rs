//! Utility functions and helpers.
//!
//! This module provides common functionality used across multiple commands:
//!
//! - [`credentials_file`] - Credentials file formatting and append-only writes
//! - [`format`] - Number formatting for summaries
//! - [`logging`] - `log`/`fern` setup for `-v` diagnostics
//! - [`progress`] - Progress display while walking all users
//! - [`time`] - Key age arithmetic and timestamp helpers
//!
//! # Examples
//!
//! ## Computing key age
//!
//! ```
//! use aws_credentials_tools::utils::time::{age_days, is_stale, parse_timestamp};
//!
//! let created = parse_timestamp("2025-01-01T00:00:00Z").unwrap();
//! let now = parse_timestamp("2025-04-11T00:00:00Z").unwrap();
//! let age = age_days(&created, &now);
//! assert_eq!(age, 100);
//! assert!(is_stale(age, 90));
//! ```

pub mod credentials_file;
pub mod format;
pub mod logging;
pub mod progress;
pub mod time;
