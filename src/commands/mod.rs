//! Command implementations.
//!
//! Every command receives the IAM client explicitly and writes its result
//! to the given output; advisory messages go to stderr.
//!
//! - [`list`] - `list` (default) and `all`: key tables for one or every user
//! - [`check`] - `check`: stale keys only, exit status 1 when any exist
//! - [`new_key`] - `new`: create a key, optionally appending it to the credentials file
//! - [`lifecycle`] - `delete`, `enable`, `disable`

pub mod check;
pub mod lifecycle;
pub mod list;
pub mod new_key;

use crate::keys::types::KeyReport;

fn print_warnings(report: &KeyReport) {
    for warning in &report.warnings {
        eprintln!("⚠️  {}", warning);
    }
}
