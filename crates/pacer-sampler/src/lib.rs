//! Periodic progress sampling and completion-time estimation for pacer.
//!
//! This crate turns a running [`Countable`](pacer_types::Countable) into a
//! sequence of [`Progress`](pacer_types::Progress) snapshots:
//!
//! - [`Sampler`] - Samples a counter at a fixed interval against a known size
//! - [`progress_stream`] - Pull-driven stream of snapshots
//! - [`ProgressTicker`] - Sampler running on its own task
//! - [`SamplerConfig`] - Interval and size configuration
//! - [`estimate_completion`] - Linear extrapolation of the completion instant

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pacer/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod sampler;
mod ticker;

pub use config::SamplerConfig;
pub use sampler::{Sampler, estimate_completion, progress_stream};
pub use ticker::ProgressTicker;

pub use tokio_util::sync::CancellationToken;
