//! File system abstraction
//!
//! The scaffolder writes through this trait so the write pipeline is testable
//! without touching the disk.

use std::path::Path;

use crate::error::GuardsmithResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content
    fn read_to_string(&self, path: &Path) -> GuardsmithResult<String>;

    /// Write file content, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> GuardsmithResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents; no error if already present
    fn create_dir_all(&self, path: &Path) -> GuardsmithResult<()>;
}

/// Local disk implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> GuardsmithResult<String> {
        std::fs::read_to_string(path).map_err(Into::into)
    }

    fn write(&self, path: &Path, content: &str) -> GuardsmithResult<()> {
        std::fs::write(path, content).map_err(Into::into)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> GuardsmithResult<()> {
        std::fs::create_dir_all(path).map_err(Into::into)
    }
}

/// In-memory file system for tests
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    >,
    pub dirs: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
    /// Paths whose writes should fail, for abort-path testing
    pub fail_writes: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_paths(&self) -> Vec<std::path::PathBuf> {
        let mut paths: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> GuardsmithResult<String> {
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            crate::error::GuardsmithError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            ))
        })
    }

    fn write(&self, path: &Path, content: &str) -> GuardsmithResult<()> {
        if self.fail_writes.lock().unwrap().iter().any(|p| p == path) {
            return Err(crate::error::GuardsmithError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write refused",
            )));
        }
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().iter().any(|p| p == path)
    }

    fn create_dir_all(&self, path: &Path) -> GuardsmithResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
