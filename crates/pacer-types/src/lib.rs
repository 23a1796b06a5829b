//! Core types for the pacer transfer progress estimator.
//!
//! This crate provides the fundamental data structures shared by the pacer
//! workspace:
//!
//! - [`Countable`] - Capability of reporting a cumulative count
//! - [`Progress`] - Immutable snapshot of a transfer at one sampling instant
//! - [`ProgressReport`] - Serializable summary of a [`Progress`] snapshot
//! - [`PacerError`] - Errors raised while configuring a sampler

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pacer/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod countable;
mod error;
mod progress;
mod report;

pub use countable::Countable;
pub use error::{PacerError, Result};
pub use progress::Progress;
pub use report::ProgressReport;
