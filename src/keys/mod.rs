//! Access key records and how they are gathered and displayed.
//!
//! - [`types`] - records, statuses and the report container
//! - [`report`] - builds reports from the IAM API (age, staleness, last use)
//! - [`table`] - renders reports as aligned tables, JSON or CSV

pub mod report;
pub mod table;
pub mod types;
