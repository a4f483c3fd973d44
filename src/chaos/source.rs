//! Byte sources that fail on demand.

use std::fmt;
use std::io::{self, Read};

use crate::error::Error;
use crate::source::ByteSource;

use super::{CountingInjector, FailureInjector};

/// A [`ByteSource`] wrapper that injects I/O failures.
///
/// Every [`open_stream`](ByteSource::open_stream) consults the injector; a
/// failing open returns an [`io::Error`] wrapping
/// [`Error::InjectedFailure`]. With [`with_read_limit`](Self::with_read_limit)
/// set, opened streams also fail once that many bytes have been delivered.
///
/// The size is never reported as known, so every accessor opens a stream.
///
/// # Example
///
/// ```rust
/// use testkit_bytes::chaos::{CountingInjector, FaultySource};
/// use testkit_bytes::source::{self, ByteSource};
///
/// let faulty = FaultySource::new(source::wrap(vec![1, 2, 3]), CountingInjector::fail_first(1));
///
/// assert!(faulty.size().is_err());
/// assert_eq!(faulty.size().unwrap(), 3);
/// ```
pub struct FaultySource<S, I = CountingInjector> {
    inner: S,
    injector: I,
    read_limit: Option<u64>,
}

impl<S: ByteSource, I: FailureInjector> FaultySource<S, I> {
    /// Wraps `inner`, failing opens whenever `injector` says so.
    #[must_use]
    pub fn new(inner: S, injector: I) -> Self {
        Self {
            inner,
            injector,
            read_limit: None,
        }
    }

    /// Makes opened streams fail after delivering `bytes` bytes.
    #[must_use]
    pub fn with_read_limit(mut self, bytes: u64) -> Self {
        self.read_limit = Some(bytes);
        self
    }

    /// Returns the injector deciding when opens fail.
    #[must_use]
    pub fn injector(&self) -> &I {
        &self.injector
    }
}

impl<S: ByteSource, I: FailureInjector> ByteSource for FaultySource<S, I> {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        let fails = self.injector.should_fail();
        self.injector.record_attempt();
        if fails {
            tracing::debug!(source = ?self.inner, "injecting open failure");
            return Err(io::Error::other(Error::injected_failure(format!(
                "open of {:?} refused",
                self.inner
            ))));
        }

        let stream = self.inner.open_stream()?;
        match self.read_limit {
            Some(limit) => Ok(Box::new(LimitedReader {
                inner: stream,
                remaining: limit,
            })),
            None => Ok(stream),
        }
    }
}

impl<S: fmt::Debug, I> fmt::Debug for FaultySource<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "faulty({:?})", self.inner)
    }
}

/// Fails the read that would go past `remaining` bytes.
struct LimitedReader<R> {
    inner: R,
    remaining: u64,
}

impl<R: Read> Read for LimitedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.remaining == 0 {
            // Only fail when there is actually more data to deliver.
            let mut probe = [0u8; 1];
            return match self.inner.read(&mut probe)? {
                0 => Ok(0),
                _ => Err(io::Error::other(Error::injected_failure(
                    "read limit reached",
                ))),
            };
        }
        let max = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = self.inner.read(&mut buf[..max])?;
        self.remaining -= n as u64;
        Ok(n)
    }
}
