//! Rendering of key reports.
//!
//! The table pads every cell before colouring it, so column alignment does
//! not depend on whether ANSI escapes are emitted.

use super::types::{AccessKeyRecord, LastUsed};
use crate::utils::time::format_timestamp;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

const CURRENT_MARK: &str = "✔  ";
const NO_MARK: &str = "   ";

/// Output format for `list` and `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

fn header() -> String {
    format!(
        "{:<20}\t{:<4}\t{:<8}\t{:<30}\t{}",
        "AccessKeyId", "Age", "Status", "LastUsed", "Username"
    )
}

/// Text shown in the LastUsed column.
pub fn last_used_label(last_used: &LastUsed) -> String {
    match last_used {
        LastUsed::At(ts) => format_timestamp(ts),
        LastUsed::Never => "never".to_string(),
        LastUsed::Unknown => "unknown".to_string(),
    }
}

fn plain_row(record: &AccessKeyRecord) -> String {
    format!(
        "{:<20}\t{:<4}\t{:<8}\t{:<30}\t{}",
        record.access_key_id,
        record.age_days,
        record.status,
        last_used_label(&record.last_used),
        record.user_name
    )
}

/// Write every record as an aligned table, highlighting the caller's key,
/// stale ages and active keys.
pub fn write_key_table(out: &mut dyn Write, records: &[AccessKeyRecord]) -> io::Result<()> {
    writeln!(out, "{}{}", NO_MARK, header().bold())?;

    for record in records {
        let mark = if record.is_current {
            CURRENT_MARK.green()
        } else {
            NO_MARK.normal()
        };

        let age = format!("{:<4}", record.age_days);
        let age = if record.is_old { age.red() } else { age.normal() };

        let status = format!("{:<8}", record.status);
        let status = if record.status.is_active() {
            status.green()
        } else {
            status.normal()
        };

        writeln!(
            out,
            "{}{:<20}\t{}\t{}\t{:<30}\t{}",
            mark,
            record.access_key_id,
            age,
            status,
            last_used_label(&record.last_used),
            record.user_name
        )?;
    }

    Ok(())
}

/// Write only the stale records, uncoloured, for automated checks.
///
/// The report is staged in memory and only written to `out` when at least
/// one record is stale. Returns whether anything was stale.
pub fn write_stale_report(out: &mut dyn Write, records: &[AccessKeyRecord]) -> io::Result<bool> {
    let mut buffer = Vec::new();
    writeln!(buffer, "{}", header())?;

    let mut found = false;
    for record in records.iter().filter(|r| r.is_old) {
        found = true;
        writeln!(buffer, "{}", plain_row(record))?;
    }

    if found {
        out.write_all(&buffer)?;
        out.flush()?;
    }
    Ok(found)
}

pub fn write_json(out: &mut dyn Write, records: &[AccessKeyRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv(out: &mut dyn Write, records: &[AccessKeyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "user_name",
        "access_key_id",
        "status",
        "created",
        "age_days",
        "is_old",
        "last_used",
        "is_current",
    ])?;

    for record in records {
        let last_used = match record.last_used {
            LastUsed::At(ts) => ts.to_rfc3339(),
            LastUsed::Never => "never".to_string(),
            LastUsed::Unknown => "unknown".to_string(),
        };
        writer.write_record([
            &record.user_name,
            &record.access_key_id,
            &record.status.to_string(),
            &record.created.to_rfc3339(),
            &record.age_days.to_string(),
            &record.is_old.to_string(),
            &last_used,
            &record.is_current.to_string(),
        ])?;
    }

    writer.flush().context("Failed to write CSV")?;
    Ok(())
}

/// Render records in the requested format.
pub fn write_records(
    out: &mut dyn Write,
    records: &[AccessKeyRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_key_table(out, records).context("Failed to write table"),
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Csv => write_csv(out, records),
    }
}
