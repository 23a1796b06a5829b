//! Copy command implementation.
//!
//! This module copies a file through a counting reader while a background
//! sampler reports progress and the estimated time remaining.

use crate::display::{self, Output};
use anyhow::{Context, Result, anyhow};
use futures::StreamExt;
use pacer_lib::prelude::*;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Copy `source` to `destination`, returning the number of bytes copied.
pub(crate) async fn copy(
    source: &Path,
    destination: &Path,
    interval: Duration,
    output: Output,
) -> Result<u64> {
    let (mut reader, size) = CountingReader::open(source)
        .await
        .with_context(|| format!("Cannot read {}", source.display()))?;
    let cancel = CancellationToken::new();
    let sampler = Sampler::from_config(
        cancel.clone(),
        reader.counter(),
        SamplerConfig::new(size, interval),
    )?;

    let mut target = File::create(destination)
        .await
        .with_context(|| format!("Cannot create {}", destination.display()))?;

    let reporter = tokio::spawn(report(ProgressTicker::from_sampler(sampler), size, output));
    let interrupt = tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        size,
        "starting copy"
    );

    let copied = tokio::select! {
        result = tokio::io::copy(&mut reader, &mut target) => result.with_context(|| {
            format!("Failed to copy {} to {}", source.display(), destination.display())
        }),
        () = cancel.cancelled() => Err(anyhow!("Copy interrupted")),
    };
    interrupt.abort();

    let copied = match copied {
        Ok(copied) => copied,
        Err(e) => {
            cancel.cancel();
            let _ = reporter.await;
            return Err(e);
        }
    };
    target
        .flush()
        .await
        .with_context(|| format!("Failed to flush {}", destination.display()))?;

    // The sampler only closes on its own once the count reaches the size.
    if copied < size {
        tracing::warn!(copied, size, "source shrank during copy");
        cancel.cancel();
    }

    reporter.await.context("Progress reporter panicked")??;
    tracing::info!(copied, "copy finished");
    Ok(copied)
}

/// Show every snapshot until the ticker closes.
async fn report(mut ticker: ProgressTicker, size: u64, output: Output) -> Result<()> {
    let bar = display::progress_bar(size, output);

    while let Some(progress) = ticker.next().await {
        match output {
            Output::Json => println!("{}", display::json_line(&progress)?),
            Output::Bar => {
                bar.set_position(progress.count());
                bar.set_message(display::format_remaining(progress.remaining()));
            }
            Output::Quiet => {}
        }
    }

    bar.finish_and_clear();
    Ok(())
}

/// Cancel the copy on Ctrl-C.
async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("interrupt received, cancelling copy");
        cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_copy_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.bin");
        let destination = temp_dir.path().join("destination.bin");
        let data: Vec<u8> = (0..256 * 1024).map(|i| (i % 251) as u8).collect();
        std::fs::write(&source, &data).unwrap();

        let copied = copy(&source, &destination, Duration::from_millis(5), Output::Quiet)
            .await
            .unwrap();

        assert_eq!(copied, data.len() as u64);
        assert_eq!(std::fs::read(&destination).unwrap(), data);
    }

    #[tokio::test]
    async fn test_copy_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("empty");
        let destination = temp_dir.path().join("copy");
        std::fs::write(&source, b"").unwrap();

        let copied = copy(&source, &destination, Duration::from_millis(5), Output::Quiet)
            .await
            .unwrap();

        assert_eq!(copied, 0);
        assert!(destination.exists());
    }

    #[tokio::test]
    async fn test_copy_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing");
        let destination = temp_dir.path().join("copy");

        let err = copy(&source, &destination, Duration::from_millis(5), Output::Quiet)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Cannot read"));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_copy_rejects_zero_interval() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        std::fs::write(&source, b"data").unwrap();

        let destination = temp_dir.path().join("copy");

        let result = copy(&source, &destination, Duration::ZERO, Output::Quiet).await;
        assert!(result.is_err());
        assert!(!destination.exists());
    }
}
