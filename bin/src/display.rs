//! Display utilities and output formatting for the pacer CLI.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pacer_lib::prelude::*;
use std::time::Duration;

/// How progress snapshots are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Output {
    /// Interactive progress bar on stderr.
    Bar,
    /// One JSON report per snapshot on stdout.
    Json,
    /// Nothing.
    Quiet,
}

impl Output {
    /// Picks the output mode from the command line flags. `--quiet` wins.
    pub(crate) const fn select(json: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if json {
            Self::Json
        } else {
            Self::Bar
        }
    }
}

/// Creates the progress bar for a transfer of `size` bytes.
pub(crate) fn progress_bar(size: u64, output: Output) -> ProgressBar {
    if output != Output::Bar {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}")
            .expect("Invalid progress template")
            .progress_chars("=>-"),
    );
    pb.set_message(format_remaining(None));
    pb
}

/// Describes the time left until the estimated completion.
pub(crate) fn format_remaining(remaining: Option<Duration>) -> String {
    let Some(remaining) = remaining else {
        return "estimating...".to_string();
    };

    let secs = remaining.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("about {hours}h {minutes:02}m remaining")
    } else if minutes > 0 {
        format!("about {minutes}m {seconds:02}s remaining")
    } else {
        format!("about {seconds}s remaining")
    }
}

/// Renders a snapshot as a single JSON line.
pub(crate) fn json_line(progress: &Progress) -> Result<String> {
    Ok(serde_json::to_string(&ProgressReport::from(progress))?)
}
