//! Byte sources backed by files.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use super::ByteSource;

/// A [`ByteSource`] over the contents of a file.
///
/// The file is opened anew for every stream, so changes made on disk between
/// reads are visible.
///
/// # Example
///
/// ```rust,no_run
/// use testkit_bytes::source::{ByteSource, FileSource};
///
/// let source = FileSource::new("Cargo.toml");
/// assert!(!source.is_empty().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + '_>> {
        tracing::trace!(path = %self.path.display(), "opening file source");
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn size_if_known(&self) -> Option<u64> {
        // Only regular files report a trustworthy length.
        std::fs::metadata(&self.path)
            .ok()
            .filter(std::fs::Metadata::is_file)
            .map(|meta| meta.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;
    use std::io::Write;

    #[test]
    fn test_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();
        file.flush().unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.path(), file.path());
        assert_eq!(source.size_if_known(), Some(5));
        assert_eq!(source.read().unwrap(), b"hello");
        assert!(source.content_equals(&source::wrap(b"hello".to_vec())).unwrap());
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = FileSource::new(file.path());
        assert!(source.is_empty().unwrap());
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.bin"));

        assert_eq!(source.size_if_known(), None);
        assert_eq!(source.size().unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
