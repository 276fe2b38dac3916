//! Filesystem access used by mode resolution and manifest loading

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait for reading small text files and probing for their existence
#[cfg_attr(test, automock)]
pub trait FileProbe: Send + Sync {
    /// Read the whole file as UTF-8 text
    fn read_text_file(&self, path: &Path) -> io::Result<String>;

    /// Check whether a file or directory exists at the path
    fn file_exists(&self, path: &Path) -> bool;
}

/// [`FileProbe`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileProbe;

impl FileProbe for LocalFileProbe {
    fn read_text_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
