//! Target project layout
//!
//! Maps logical project locations to concrete paths under a single project
//! root, standing in for the host framework's `app_path`/`resource_path`/
//! `base_path` helpers. Passed explicitly to whatever needs it.

use std::path::{Path, PathBuf};

/// Directory layout of the target project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a project-relative path
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// `routes/` directory
    pub fn routes_dir(&self) -> PathBuf {
        self.root.join("routes")
    }

    /// `app/Http/Middleware/` directory (guard-independent)
    pub fn middleware_dir(&self) -> PathBuf {
        self.root.join("app/Http/Middleware")
    }

    /// `config/auth.toml` in the target project
    pub fn auth_config_file(&self) -> PathBuf {
        self.root.join("config/auth.toml")
    }
}
