//! Re-openable, read-only byte containers.
//!
//! A [`ByteSource`] is the subject the assertions in
//! [`assertions`](crate::assertions) operate on. Each read opens a fresh
//! stream, so the same source can be inspected any number of times.
//!
//! - [`WrappedBytes`] - Bytes held in memory ([`wrap`], [`empty`])
//! - [`FileSource`] - The contents of a file
//! - [`SliceSource`] - A window into another source
//! - [`ConcatSource`] - Several sources read back to back
//!
//! # Example
//!
//! ```rust
//! use testkit_bytes::source::{self, ByteSource};
//!
//! let bytes = source::wrap(vec![1, 2, 3, 4]);
//! assert_eq!(bytes.size().unwrap(), 4);
//! assert!(bytes.slice(1, 2).content_equals(&source::wrap(vec![2, 3])).unwrap());
//! ```

use std::fmt::Debug;
use std::io::{self, Read};
use std::sync::Arc;

mod concat;
mod file;
mod slice;
mod wrapped;

pub use concat::ConcatSource;
pub use file::FileSource;
pub use slice::SliceSource;
pub use wrapped::WrappedBytes;

/// Buffer size used when streaming through a source.
pub(crate) const BUFFER_SIZE: usize = 8192;

/// A readable, re-openable source of bytes.
///
/// Implementors only need [`open_stream`](ByteSource::open_stream). The
/// remaining accessors have streaming defaults, and sources that know their
/// length up front should override [`size_if_known`](ByteSource::size_if_known)
/// so that `size` and `is_empty` never have to read.
///
/// The [`Debug`] rendering is what appears in assertion failure messages.
pub trait ByteSource: Debug {
    /// Opens a new stream over the contents of this source.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while opening the underlying data.
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>>;

    /// Returns the size of this source if it can be computed without
    /// opening a stream.
    fn size_if_known(&self) -> Option<u64> {
        None
    }

    /// Returns the number of bytes in this source.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading the source.
    fn size(&self) -> io::Result<u64> {
        if let Some(size) = self.size_if_known() {
            return Ok(size);
        }
        let mut stream = self.open_stream()?;
        io::copy(&mut stream, &mut io::sink())
    }

    /// Returns `true` if this source contains no bytes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading the source.
    fn is_empty(&self) -> io::Result<bool> {
        if let Some(size) = self.size_if_known() {
            return Ok(size == 0);
        }
        let mut stream = self.open_stream()?;
        let mut probe = [0u8; 1];
        loop {
            match stream.read(&mut probe) {
                Ok(n) => return Ok(n == 0),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    /// Reads the full contents of this source into memory.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading the source.
    fn read(&self) -> io::Result<Vec<u8>> {
        let capacity = self
            .size_if_known()
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(0);
        let mut contents = Vec::with_capacity(capacity);
        self.open_stream()?.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Returns `true` if this source and `other` hold the same bytes.
    ///
    /// Both streams are compared chunk by chunk, so neither source is ever
    /// held in memory in full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading either source.
    fn content_equals(&self, other: &dyn ByteSource) -> io::Result<bool> {
        let mut left = self.open_stream()?;
        let mut right = other.open_stream()?;
        let mut left_buf = vec![0u8; BUFFER_SIZE];
        let mut right_buf = vec![0u8; BUFFER_SIZE];

        loop {
            let left_read = read_fully(&mut left, &mut left_buf)?;
            let right_read = read_fully(&mut right, &mut right_buf)?;
            if left_read != right_read || left_buf[..left_read] != right_buf[..right_read] {
                return Ok(false);
            }
            if left_read < BUFFER_SIZE {
                return Ok(true);
            }
        }
    }

    /// Returns a view of at most `length` bytes starting at `offset`.
    fn slice(self, offset: u64, length: u64) -> SliceSource<Self>
    where
        Self: Sized,
    {
        SliceSource::new(self, offset, length)
    }
}

/// Fills `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes read.
pub(crate) fn read_fully(reader: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

/// Creates a source over the given bytes.
///
/// ```rust
/// use testkit_bytes::source::{self, ByteSource};
///
/// let bytes = source::wrap(vec![0u8; 9]);
/// assert_eq!(bytes.size().unwrap(), 9);
/// ```
#[must_use]
pub fn wrap(bytes: impl Into<Vec<u8>>) -> WrappedBytes {
    WrappedBytes::new(bytes)
}

/// Creates a source with no bytes.
#[must_use]
pub fn empty() -> WrappedBytes {
    WrappedBytes::new(Vec::new())
}

/// Creates a source reading each of `sources` in turn.
#[must_use]
pub fn concat<I>(sources: I) -> ConcatSource
where
    I: IntoIterator<Item = Box<dyn ByteSource>>,
{
    ConcatSource::new(sources)
}

macro_rules! forward_byte_source {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<T: ByteSource + ?Sized> ByteSource for $ptr {
            fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
                (**self).open_stream()
            }

            fn size_if_known(&self) -> Option<u64> {
                (**self).size_if_known()
            }

            fn size(&self) -> io::Result<u64> {
                (**self).size()
            }

            fn is_empty(&self) -> io::Result<bool> {
                (**self).is_empty()
            }

            fn read(&self) -> io::Result<Vec<u8>> {
                (**self).read()
            }

            fn content_equals(&self, other: &dyn ByteSource) -> io::Result<bool> {
                (**self).content_equals(other)
            }
        }
    )+};
}

forward_byte_source!(&T, Box<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    /// A source that hides its size and hands out bytes one at a time.
    #[derive(Debug)]
    struct Trickle(Vec<u8>);

    struct TrickleReader<'a> {
        bytes: &'a [u8],
    }

    impl Read for TrickleReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match (self.bytes.split_first(), buf.first_mut()) {
                (Some((&byte, rest)), Some(slot)) => {
                    *slot = byte;
                    self.bytes = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    impl ByteSource for Trickle {
        fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
            Ok(Box::new(TrickleReader { bytes: &self.0 }))
        }
    }

    #[test]
    fn test_default_size_counts_stream() {
        let source = Trickle(vec![7; 20_000]);
        assert_eq!(source.size_if_known(), None);
        assert_eq!(source.size().unwrap(), 20_000);
    }

    #[test]
    fn test_default_is_empty_probes_stream() {
        assert!(Trickle(Vec::new()).is_empty().unwrap());
        assert!(!Trickle(vec![0]).is_empty().unwrap());
    }

    #[test]
    fn test_content_equals_across_chunk_boundaries() {
        let long: Vec<u8> = (0..=255).cycle().take(BUFFER_SIZE * 2 + 17).collect();
        let trickle = Trickle(long.clone());

        assert!(trickle.content_equals(&wrap(long.clone())).unwrap());

        let mut changed = long.clone();
        let last = changed.len() - 1;
        changed[last] ^= 0xff;
        assert!(!trickle.content_equals(&wrap(changed)).unwrap());
    }

    #[test]
    fn test_content_equals_exact_buffer_multiple() {
        let exact = vec![1u8; BUFFER_SIZE];
        assert!(wrap(exact.clone()).content_equals(&wrap(exact.clone())).unwrap());

        let mut longer = exact.clone();
        longer.push(1);
        assert!(!wrap(exact).content_equals(&wrap(longer)).unwrap());
    }

    #[test]
    fn test_content_equals_prefix_is_not_equal() {
        assert!(!wrap(vec![1, 2]).content_equals(&wrap(vec![1, 2, 3])).unwrap());
        assert!(!wrap(vec![1, 2, 3]).content_equals(&wrap(vec![1, 2])).unwrap());
        assert!(empty().content_equals(&Trickle(Vec::new())).unwrap());
    }

    #[test]
    fn test_read_collects_everything() {
        assert_eq!(Trickle(vec![3, 2, 1]).read().unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_pointer_impls_forward() {
        let boxed: Box<dyn ByteSource> = Box::new(wrap(vec![1, 2, 3]));
        assert_eq!(boxed.size().unwrap(), 3);

        let shared = Arc::new(wrap(vec![1, 2, 3]));
        assert!((&shared).content_equals(&boxed).unwrap());
    }
}
