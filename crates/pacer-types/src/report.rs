//! Serializable progress summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Progress;

/// A point-in-time summary of a [`Progress`] snapshot.
///
/// Unlike [`Progress`], which recomputes the remaining time whenever it is
/// read, a report freezes every derived value at the moment it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Units read or written so far.
    pub count: u64,
    /// Total units expected.
    pub size: u64,
    /// Percentage complete.
    pub percent: f64,
    /// Whether any units have been observed.
    pub started: bool,
    /// Whether the count has reached the size.
    pub complete: bool,
    /// Seconds until the estimated completion, if estimated.
    pub remaining_secs: Option<f64>,
    /// Estimated wall-clock completion time, if estimated.
    pub estimated_at: Option<DateTime<Utc>>,
}

impl From<&Progress> for ProgressReport {
    fn from(progress: &Progress) -> Self {
        Self {
            count: progress.count(),
            size: progress.size(),
            percent: progress.percent(),
            started: progress.is_started(),
            complete: progress.is_complete(),
            remaining_secs: progress.remaining().map(|d| d.as_secs_f64()),
            estimated_at: progress.estimated_at(),
        }
    }
}

impl From<Progress> for ProgressReport {
    fn from(progress: Progress) -> Self {
        Self::from(&progress)
    }
}
