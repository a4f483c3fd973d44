//! Sources read back to back.

use std::fmt;
use std::io::{self, Read};

use super::ByteSource;

/// A [`ByteSource`] yielding the bytes of each inner source in order.
pub struct ConcatSource {
    sources: Vec<Box<dyn ByteSource>>,
}

impl ConcatSource {
    /// Creates a source reading each of `sources` in turn.
    #[must_use]
    pub fn new<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ByteSource>>,
    {
        Self {
            sources: sources.into_iter().collect(),
        }
    }

    /// Returns the number of inner sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl ByteSource for ConcatSource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(ConcatReader {
            remaining: &self.sources,
            current: None,
        }))
    }

    fn size_if_known(&self) -> Option<u64> {
        self.sources
            .iter()
            .try_fold(0u64, |total, source| total.checked_add(source.size_if_known()?))
    }

    fn is_empty(&self) -> io::Result<bool> {
        for source in &self.sources {
            if !source.is_empty()? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Debug for ConcatSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("concat(")?;
        f.debug_list().entries(&self.sources).finish()?;
        f.write_str(")")
    }
}

/// Opens each inner source lazily, once the previous one is exhausted.
struct ConcatReader<'a> {
    remaining: &'a [Box<dyn ByteSource>],
    current: Option<Box<dyn Read + 'a>>,
}

impl Read for ConcatReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if let Some(stream) = self.current.as_mut() {
                let n = stream.read(buf)?;
                if n > 0 {
                    return Ok(n);
                }
                self.current = None;
            }
            let Some((next, rest)) = self.remaining.split_first() else {
                return Ok(0);
            };
            self.remaining = rest;
            self.current = Some(next.open_stream()?);
        }
    }
}
