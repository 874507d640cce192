//! Progress reporting for account-wide listings.
//!
//! Walking every IAM user costs a few requests per user, so `all` and
//! `check --all` show a bar on stderr. indicatif hides it automatically
//! when stderr is not a terminal.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Bar over `total` users
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("█░"));
        }
        bar.set_prefix(label.to_string());

        Self { bar }
    }

    /// Bar that never draws, for library callers and tests.
    pub fn hidden() -> Self {
        Self {
            bar: IndicatifBar::hidden(),
        }
    }

    /// Set the length once the user count is known.
    pub fn set_total(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    /// Show which user is being fetched.
    pub fn set_current(&self, user_name: &str) {
        self.bar.set_message(user_name.to_string());
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
