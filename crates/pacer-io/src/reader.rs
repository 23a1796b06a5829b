//! Byte-counting reader.

use std::io::{self, Read};
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use pacer_types::Result;
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};

use crate::ByteCounter;

/// A reader that counts the bytes read through it.
///
/// Works as a pass-through for both [`Read`] and [`AsyncRead`] inner
/// readers. Only bytes actually returned by the inner reader are counted.
#[derive(Debug)]
pub struct CountingReader<R> {
    inner: R,
    counter: ByteCounter,
}

impl<R> CountingReader<R> {
    /// Wraps `inner` with a fresh counter.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_counter(inner, ByteCounter::new())
    }

    /// Wraps `inner`, adding to an existing counter.
    #[must_use]
    pub const fn with_counter(inner: R, counter: ByteCounter) -> Self {
        Self { inner, counter }
    }

    /// Returns a handle to the byte count, suitable for a sampler.
    #[must_use]
    pub fn counter(&self) -> ByteCounter {
        self.counter.clone()
    }

    /// Returns the number of bytes read so far.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.counter.bytes()
    }

    /// Returns a reference to the inner reader.
    #[must_use]
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the inner reader.
    pub const fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the inner reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl CountingReader<File> {
    /// Opens a file for counted reading.
    ///
    /// Returns the reader together with the file size, which is the total a
    /// sampler should expect.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its metadata read.
    pub async fn open(path: impl AsRef<Path>) -> Result<(Self, u64)> {
        let file = File::open(path).await?;
        let size = file.metadata().await?.len();
        Ok((Self::new(file), size))
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counter.add(n as u64);
        Ok(n)
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for CountingReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let before = buf.filled().len();
        ready!(Pin::new(&mut this.inner).poll_read(cx, buf))?;
        this.counter.add((buf.filled().len() - before) as u64);
        Poll::Ready(Ok(()))
    }
}
