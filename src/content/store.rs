//! Content store - raw post documents looked up by slug

use std::fs;
use std::io;
use std::path::PathBuf;

/// Reads the raw document for a slug.
///
/// Pure I/O seam with no parsing logic, so tests can substitute doubles
/// that count reads or inject failures.
pub trait SlugReader: Send + Sync {
    /// Returns the raw document text, or an error with kind `NotFound`
    /// when no file matches the slug.
    fn read(&self, slug: &str) -> io::Result<String>;
}

/// Production reader: `<slug>.md` under the posts directory.
pub struct FileReader {
    posts_dir: PathBuf,
}

impl FileReader {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }
}

impl SlugReader for FileReader {
    fn read(&self, slug: &str) -> io::Result<String> {
        fs::read_to_string(self.posts_dir.join(format!("{}.md", slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_read_existing_post() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "+++\n+++\nbody").unwrap();

        let reader = FileReader::new(dir.path());
        assert_eq!(reader.read("hello").unwrap(), "+++\n+++\nbody");
    }

    #[test]
    fn test_read_missing_post_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reader = FileReader::new(dir.path());

        let err = reader.read("nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
