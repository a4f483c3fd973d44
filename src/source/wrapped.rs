//! In-memory byte sources.

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

use super::ByteSource;

/// Maximum number of hex characters shown when rendering wrapped bytes.
const MAX_HEX_CHARS: usize = 30;
const ELLIPSIS: &str = "...";

/// A [`ByteSource`] over bytes held in memory.
///
/// Cloning is cheap: clones share the same buffer.
///
/// # Example
///
/// ```rust
/// use testkit_bytes::source::{ByteSource, WrappedBytes};
///
/// let bytes = WrappedBytes::new(vec![0xca, 0xfe]);
/// assert_eq!(format!("{bytes:?}"), "wrap(cafe)");
/// assert!(!bytes.is_empty().unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WrappedBytes {
    bytes: Arc<[u8]>,
}

impl WrappedBytes {
    /// Wraps the given bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
        }
    }

    /// Returns the wrapped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&[u8]> for WrappedBytes {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for WrappedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl ByteSource for WrappedBytes {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        tracing::trace!(len = self.bytes.len(), "opening wrapped bytes");
        Ok(Box::new(&self.bytes[..]))
    }

    fn size_if_known(&self) -> Option<u64> {
        Some(self.bytes.len() as u64)
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.to_vec())
    }

    fn content_equals(&self, other: &dyn ByteSource) -> io::Result<bool> {
        // Different known sizes settle it without reading either side.
        match other.size_if_known() {
            Some(size) if size != self.bytes.len() as u64 => Ok(false),
            _ => {
                let mut expected = &self.bytes[..];
                let mut stream = other.open_stream()?;
                let mut buf = vec![0u8; super::BUFFER_SIZE];
                loop {
                    let n = super::read_fully(&mut stream, &mut buf)?;
                    if n > expected.len() || buf[..n] != expected[..n] {
                        return Ok(false);
                    }
                    expected = &expected[n..];
                    if n < buf.len() {
                        return Ok(expected.is_empty());
                    }
                }
            }
        }
    }
}

impl fmt::Debug for WrappedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = String::with_capacity(MAX_HEX_CHARS);
        let keep = MAX_HEX_CHARS - ELLIPSIS.len();
        let truncated = self.bytes.len() * 2 > MAX_HEX_CHARS;

        for byte in self.bytes.iter() {
            if truncated && hex.len() >= keep {
                break;
            }
            hex.push_str(&format!("{byte:02x}"));
        }
        if truncated {
            hex.truncate(keep);
            hex.push_str(ELLIPSIS);
        }
        write!(f, "wrap({hex})")
    }
}
