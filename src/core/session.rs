//! The single currently-open repository.
//!
//! A [`RepoSession`] binds the repository path and its engine handle together,
//! so "is a repository open" is exactly one `Option` rather than two flags
//! that could drift apart. The controller holds `Option<RepoSession>` and
//! replaces it wholesale on open/init/clone.

use std::path::{Path, PathBuf};

use crate::core::engine::GitEngine;
use crate::core::error::Result;

/// Sentinel branch name for a repository whose HEAD has no commits yet.
pub const NO_BRANCH: &str = "no branch";

pub struct RepoSession {
    path: PathBuf,
    engine: GitEngine,
}

impl RepoSession {
    /// Open an existing repository.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(RepoSession {
            path: path.to_path_buf(),
            engine: GitEngine::open(path)?,
        })
    }

    /// Create a new repository.
    pub fn init(path: &Path) -> Result<Self> {
        Ok(RepoSession {
            path: path.to_path_buf(),
            engine: GitEngine::init(path)?,
        })
    }

    /// Clone `url` and open the result.
    pub fn clone(url: &str, destination: &Path) -> Result<Self> {
        Ok(RepoSession {
            path: destination.to_path_buf(),
            engine: GitEngine::clone(url, destination)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn engine(&self) -> &GitEngine {
        &self.engine
    }

    /// The current branch name; [`NO_BRANCH`] when it cannot be determined.
    pub fn branch_name(&self) -> String {
        self.engine
            .current_branch()
            .unwrap_or_else(|_| NO_BRANCH.to_string())
    }
}
