//! Windows into another byte source.

use std::fmt;
use std::io::{self, Read};

use super::ByteSource;

/// A view of at most `length` bytes of an inner source, starting at `offset`.
///
/// Created by [`ByteSource::slice`]. A window that starts past the end of the
/// inner source is empty.
pub struct SliceSource<S> {
    inner: S,
    offset: u64,
    length: u64,
}

impl<S: ByteSource> SliceSource<S> {
    /// Creates a window over `inner`.
    #[must_use]
    pub fn new(inner: S, offset: u64, length: u64) -> Self {
        Self {
            inner,
            offset,
            length,
        }
    }

    /// Returns the source this window reads from.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ByteSource> ByteSource for SliceSource<S> {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        let mut stream = self.inner.open_stream()?;
        let skipped = io::copy(&mut stream.by_ref().take(self.offset), &mut io::sink())?;
        tracing::trace!(offset = self.offset, skipped, "opening slice");
        if skipped < self.offset {
            return Ok(Box::new(io::empty()));
        }
        Ok(Box::new(stream.take(self.length)))
    }

    fn size_if_known(&self) -> Option<u64> {
        self.inner
            .size_if_known()
            .map(|size| size.saturating_sub(self.offset).min(self.length))
    }
}

impl<S: fmt::Debug> fmt::Debug for SliceSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.slice({}, {})", self.inner, self.offset, self.length)
    }
}
