//! Completion-time estimation for in-progress byte transfers.
//!
//! This is a facade crate that re-exports functionality from the pacer
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use pacer_lib::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let data = "Now that's what I call progress";
//!     let mut reader = CountingReader::new(data.as_bytes());
//!
//!     let cancel = CancellationToken::new();
//!     let mut ticker = ProgressTicker::spawn(
//!         cancel.clone(),
//!         reader.counter(),
//!         data.len() as u64,
//!         Duration::from_secs(1),
//!     );
//!     tokio::spawn(async move {
//!         while let Some(progress) = ticker.next().await {
//!             println!("{progress}, about {:?} remaining", progress.remaining());
//!         }
//!     });
//!
//!     tokio::io::copy(&mut reader, &mut tokio::io::sink()).await?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pacer/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use pacer_types::*;

// Re-export sampling
pub use pacer_sampler::{
    CancellationToken, ProgressTicker, Sampler, SamplerConfig, estimate_completion,
    progress_stream,
};

// Re-export counting wrappers
#[cfg(feature = "io")]
pub use pacer_io::{ByteCounter, CountingReader, CountingWriter};

/// Prelude module for convenient imports.
///
/// ```
/// use pacer_lib::prelude::*;
/// ```
pub mod prelude {
    pub use pacer_types::{Countable, PacerError, Progress, ProgressReport, Result};

    pub use pacer_sampler::{
        CancellationToken, ProgressTicker, Sampler, SamplerConfig, progress_stream,
    };

    #[cfg(feature = "io")]
    pub use pacer_io::{ByteCounter, CountingReader, CountingWriter};
}
