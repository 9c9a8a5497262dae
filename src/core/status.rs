//! Working-tree partition derived from git2 status flags.
//!
//! [`ChangedFiles`] splits the working tree into four sets: staged, unstaged
//! (modified but still on disk), untracked, and deleted. The snapshot is
//! recomputed on demand from the repository and never cached across mutating
//! operations.
//!
//! A path that is both staged and modified again afterwards appears in both
//! the `staged` and `unstaged` sets; within each set paths are unique.

use serde::Serialize;
use std::path::PathBuf;

/// Partition of changed working-tree paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangedFiles {
    /// Paths with changes recorded in the index.
    pub staged: Vec<PathBuf>,
    /// Paths modified in the working tree but not staged (and not deleted).
    pub unstaged: Vec<PathBuf>,
    /// Paths not known to the index.
    pub untracked: Vec<PathBuf>,
    /// Tracked paths deleted from the working tree.
    pub deleted: Vec<PathBuf>,
}

const INDEX_CHANGED: git2::Status = git2::Status::INDEX_NEW
    .union(git2::Status::INDEX_MODIFIED)
    .union(git2::Status::INDEX_DELETED)
    .union(git2::Status::INDEX_RENAMED)
    .union(git2::Status::INDEX_TYPECHANGE);

const WORKTREE_MODIFIED: git2::Status = git2::Status::WT_MODIFIED
    .union(git2::Status::WT_RENAMED)
    .union(git2::Status::WT_TYPECHANGE);

impl ChangedFiles {
    /// Whether no path changed in any of the four sets.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
            && self.unstaged.is_empty()
            && self.untracked.is_empty()
            && self.deleted.is_empty()
    }

    /// Total number of entries across all sets.
    pub fn len(&self) -> usize {
        self.staged.len() + self.unstaged.len() + self.untracked.len() + self.deleted.len()
    }

    /// Flatten into one list, in staged/unstaged/untracked/deleted order.
    pub fn flatten(&self) -> Vec<PathBuf> {
        self.staged
            .iter()
            .chain(&self.unstaged)
            .chain(&self.untracked)
            .chain(&self.deleted)
            .cloned()
            .collect()
    }

    /// Route one git2 status entry into the partition.
    pub(crate) fn insert(&mut self, flags: git2::Status, path: PathBuf) {
        if flags.intersects(INDEX_CHANGED) {
            self.staged.push(path.clone());
        }
        if flags.contains(git2::Status::WT_NEW) {
            self.untracked.push(path);
        } else if flags.contains(git2::Status::WT_DELETED) {
            self.deleted.push(path);
        } else if flags.intersects(WORKTREE_MODIFIED) {
            self.unstaged.push(path);
        }
    }
}
