//! Git engine capability built on git2 and the `git` binary.
//!
//! This module provides the high-level engine interface through the
//! [`GitEngine`] struct. Reads (status partition, branch list, current branch)
//! go through the `git2` library; mutations spawn the `git` binary so their
//! stderr can be captured for the classifier. The one exception is staging,
//! which edits the git2 index directly to distinguish on-disk paths from
//! already-deleted ones.
//!
//! # Public API
//! - [`GitEngine`]: the single doorway to repository operations
//!
//! # Key behaviors
//! - **Removal-aware staging**: an on-disk path is added normally; a path that
//!   is gone from disk but known to the index is staged as a removal without
//!   touching the working tree.
//! - **Unborn tolerance**: [`GitEngine::current_branch`] and
//!   [`GitEngine::changed_files`] work on a repository with no commits yet.

use git2::{Repository, StatusOptions};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::{
    error::{EngineError, Result},
    session::NO_BRANCH,
    status::ChangedFiles,
};

pub struct GitEngine {
    repo: Repository,
}

impl GitEngine {
    /// Open an existing repository at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path)?;
        Self::from_repository(repo)
    }

    /// Create a new repository at `path`.
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::init(path)?;
        Self::from_repository(repo)
    }

    /// Clone `url` to `destination` and open the result.
    ///
    /// The clone itself runs through the `git` binary so network and
    /// authentication failures keep their raw diagnostics.
    pub fn clone<P: AsRef<Path>>(url: &str, destination: P) -> Result<Self> {
        let mut cmd = Command::new("git");
        cmd.arg("clone")
            .arg(url)
            .arg(destination.as_ref().as_os_str());
        capture_git_output(cmd)?;
        Self::open(destination)
    }

    fn from_repository(repo: Repository) -> Result<Self> {
        if repo.is_bare() {
            return Err(EngineError::BareRepository);
        }
        Ok(GitEngine { repo })
    }

    /// The repository's working directory.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(EngineError::BareRepository)
    }

    /// Run a git command in the repository's working directory
    fn execute_git_command(&self, mut cmd: Command) -> Result<String> {
        cmd.current_dir(self.workdir()?);
        capture_git_output(cmd)
    }

    /// Stage repo-relative paths, recording deletions for paths gone from disk.
    pub fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let workdir = self.workdir()?.to_path_buf();
        let mut index = self.repo.index()?;
        for path in paths {
            if workdir.join(path).exists() {
                index.add_path(path)?;
            } else if index.get_path(path, 0).is_some() {
                // Gone from disk but tracked: stage the removal, leave the tree alone
                index.remove_path(path)?;
            } else {
                return Err(EngineError::command_failed(
                    "git add failed",
                    Some(format!(
                        "fatal: pathspec '{}' did not match any files",
                        path.display()
                    )),
                ));
            }
        }
        index.write()?;
        Ok(())
    }

    /// Remove paths from the index, keeping working-tree copies.
    pub fn unstage(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        // An unborn HEAD has nothing to reset against; drop the entries directly.
        if self.repo.head().is_err() {
            let mut index = self.repo.index()?;
            for path in paths {
                index.remove_path(path)?;
            }
            index.write()?;
            return Ok(());
        }

        let mut cmd = Command::new("git");
        cmd.args(["reset", "HEAD", "--"]);
        for path in paths {
            cmd.arg(path);
        }
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Commit the staged changes with `message`.
    pub fn commit(&self, message: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["commit", "-m"]).arg(message);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Register a remote under `name`.
    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["remote", "add", name, url]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Push `branch` to `remote`.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["push", remote, branch]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Pull `branch` from `remote` as a fetch plus merge, never a rebase.
    pub fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["pull", "--no-rebase", remote, branch]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Create `branch_name` and switch to it.
    pub fn create_branch(&self, branch_name: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["checkout", "-b", branch_name]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Switch to an existing branch.
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["checkout", branch_name]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Delete a branch; refusals (checked out, unmerged) come from git itself.
    pub fn delete_branch(&self, branch_name: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["branch", "-d", branch_name]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Merge `source_branch` into the current branch.
    pub fn merge(&self, source_branch: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["merge", source_branch]);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Names of all local branches.
    pub fn branches(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in self.repo.branches(Some(git2::BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// The current branch name, tolerating an unborn or detached HEAD.
    pub fn current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                return Ok(NO_BRANCH.to_string());
            }
            Err(e) => return Err(e.into()),
        };

        match head.shorthand() {
            Some(name) if head.is_branch() => Ok(name.to_string()),
            _ => match head.target() {
                Some(oid) => Ok(format!("detached at {}", &oid.to_string()[..7])),
                None => Ok(NO_BRANCH.to_string()),
            },
        }
    }

    /// Derive the four-way changed-files partition.
    pub fn changed_files(&self) -> Result<ChangedFiles> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut files = ChangedFiles::default();
        for entry in statuses.iter() {
            let path = entry.path().ok_or(EngineError::InvalidUtf8Path)?;
            files.insert(entry.status(), PathBuf::from(path));
        }
        Ok(files)
    }
}

/// Run a prepared git command, capturing its diagnostic output on failure.
///
/// git splits its failure reporting across both streams ("nothing to commit"
/// and conflict notices land on stdout), so the diagnostic combines stderr
/// and stdout, stderr first.
fn capture_git_output(mut cmd: Command) -> Result<String> {
    debug!("running {:?}", cmd);
    let output = cmd.output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let mut diagnostic = stderr;
        if !stdout.is_empty() {
            if !diagnostic.is_empty() {
                diagnostic.push('\n');
            }
            diagnostic.push_str(&stdout);
        }
        return Err(EngineError::command_failed(
            "git command failed",
            (!diagnostic.is_empty()).then_some(diagnostic),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git(repo_path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(repo_path)
            .output()
            .expect("git available in test environment");
        assert!(status.status.success(), "git {:?} failed", args);
    }

    fn setup_test_repo() -> (TempDir, GitEngine) {
        let temp_dir = TempDir::new().expect("temp dir");
        let repo_path = temp_dir.path().to_path_buf();
        git(&repo_path, &["init"]);
        git(&repo_path, &["config", "user.name", "Test User"]);
        git(&repo_path, &["config", "user.email", "test@example.com"]);
        let engine = GitEngine::open(&repo_path).expect("open test repo");
        (temp_dir, engine)
    }

    fn setup_repo_with_commit() -> (TempDir, GitEngine) {
        let (temp_dir, engine) = setup_test_repo();
        fs::write(temp_dir.path().join("initial.txt"), "initial\n").unwrap();
        git(temp_dir.path(), &["add", "initial.txt"]);
        git(temp_dir.path(), &["commit", "-m", "Initial commit"]);
        (temp_dir, engine)
    }

    #[test]
    fn test_open_non_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(GitEngine::open(temp_dir.path()).is_err());
    }

    #[test]
    fn test_init_creates_openable_repository() {
        let temp_dir = TempDir::new().unwrap();
        let engine = GitEngine::init(temp_dir.path()).expect("init");
        assert!(engine.changed_files().unwrap().is_empty());
    }

    #[test]
    fn test_current_branch_tolerates_unborn_head() {
        let (_temp_dir, engine) = setup_test_repo();
        assert_eq!(engine.current_branch().unwrap(), NO_BRANCH);
    }

    #[test]
    fn test_changed_files_partition() {
        let (temp_dir, engine) = setup_repo_with_commit();
        let workdir = temp_dir.path();

        fs::write(workdir.join("staged.txt"), "staged\n").unwrap();
        git(workdir, &["add", "staged.txt"]);
        fs::write(workdir.join("initial.txt"), "edited\n").unwrap();
        fs::write(workdir.join("new.txt"), "new\n").unwrap();

        let files = engine.changed_files().unwrap();
        assert_eq!(files.staged, vec![PathBuf::from("staged.txt")]);
        assert_eq!(files.unstaged, vec![PathBuf::from("initial.txt")]);
        assert_eq!(files.untracked, vec![PathBuf::from("new.txt")]);
        assert!(files.deleted.is_empty());
    }

    #[test]
    fn test_stage_mixes_additions_and_removals() {
        let (temp_dir, engine) = setup_repo_with_commit();
        let workdir = temp_dir.path();

        // One path exists on disk, one was deleted after being committed.
        fs::write(workdir.join("kept.txt"), "kept\n").unwrap();
        fs::remove_file(workdir.join("initial.txt")).unwrap();

        engine
            .stage(&[PathBuf::from("kept.txt"), PathBuf::from("initial.txt")])
            .unwrap();

        let files = engine.changed_files().unwrap();
        assert!(files.staged.contains(&PathBuf::from("kept.txt")));
        assert!(files.staged.contains(&PathBuf::from("initial.txt")));
        // The deletion stayed a deletion; the file was not re-created.
        assert!(!workdir.join("initial.txt").exists());
        assert!(files.deleted.is_empty());
        assert!(files.untracked.is_empty());
    }

    #[test]
    fn test_stage_unknown_path_reports_pathspec() {
        let (_temp_dir, engine) = setup_repo_with_commit();
        let err = engine.stage(&[PathBuf::from("ghost.txt")]).unwrap_err();
        let diagnostic = err.diagnostic().expect("pathspec diagnostic");
        assert!(diagnostic.contains("pathspec 'ghost.txt'"));
    }

    #[test]
    fn test_unborn_repository_treats_index_entries_as_staged() {
        let (temp_dir, engine) = setup_test_repo();
        fs::write(temp_dir.path().join("a.txt"), "hello\n").unwrap();
        engine.stage(&[PathBuf::from("a.txt")]).unwrap();

        let files = engine.changed_files().unwrap();
        assert_eq!(files.staged, vec![PathBuf::from("a.txt")]);
        assert!(files.untracked.is_empty());
    }

    #[test]
    fn test_unstage_on_unborn_head() {
        let (temp_dir, engine) = setup_test_repo();
        fs::write(temp_dir.path().join("a.txt"), "hello\n").unwrap();
        engine.stage(&[PathBuf::from("a.txt")]).unwrap();
        engine.unstage(&[PathBuf::from("a.txt")]).unwrap();

        let files = engine.changed_files().unwrap();
        assert!(files.staged.is_empty());
        assert_eq!(files.untracked, vec![PathBuf::from("a.txt")]);
        // Working tree copy untouched
        assert!(temp_dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_unstage_after_commit() {
        let (temp_dir, engine) = setup_repo_with_commit();
        fs::write(temp_dir.path().join("initial.txt"), "edited\n").unwrap();
        engine.stage(&[PathBuf::from("initial.txt")]).unwrap();
        assert_eq!(
            engine.changed_files().unwrap().staged,
            vec![PathBuf::from("initial.txt")]
        );

        engine.unstage(&[PathBuf::from("initial.txt")]).unwrap();
        let files = engine.changed_files().unwrap();
        assert!(files.staged.is_empty());
        assert_eq!(files.unstaged, vec![PathBuf::from("initial.txt")]);
    }

    #[test]
    fn test_commit_with_clean_index_fails_with_diagnostic() {
        let (_temp_dir, engine) = setup_repo_with_commit();
        let err = engine.commit("empty").unwrap_err();
        let diagnostic = err.diagnostic().expect("diagnostic");
        assert!(diagnostic.to_lowercase().contains("nothing to commit"));
    }

    #[test]
    fn test_branch_round_trip() {
        let (_temp_dir, engine) = setup_repo_with_commit();
        let original = engine.current_branch().unwrap();

        engine.create_branch("feature").unwrap();
        assert_eq!(engine.current_branch().unwrap(), "feature");

        engine.checkout_branch(&original).unwrap();
        assert_eq!(engine.current_branch().unwrap(), original);

        let mut branches = engine.branches().unwrap();
        branches.sort();
        assert!(branches.contains(&"feature".to_string()));
        assert!(branches.contains(&original));

        engine.delete_branch("feature").unwrap();
        assert!(!engine.branches().unwrap().contains(&"feature".to_string()));
    }

    #[test]
    fn test_delete_checked_out_branch_fails() {
        let (_temp_dir, engine) = setup_repo_with_commit();
        let current = engine.current_branch().unwrap();
        assert!(engine.delete_branch(&current).is_err());
    }

    #[test]
    fn test_add_remote_twice_fails() {
        let (_temp_dir, engine) = setup_repo_with_commit();
        engine.add_remote("origin", "https://example.com/demo.git").unwrap();
        let err = engine
            .add_remote("origin", "https://example.com/demo.git")
            .unwrap_err();
        assert!(err
            .diagnostic()
            .expect("diagnostic")
            .contains("already exists"));
    }

    #[test]
    fn test_clone_from_local_repository() {
        let (source_dir, _source) = setup_repo_with_commit();
        let dest_dir = TempDir::new().unwrap();
        let dest = dest_dir.path().join("clone");

        let engine = GitEngine::clone(&source_dir.path().to_string_lossy(), &dest).unwrap();
        assert!(dest.join("initial.txt").exists());
        assert!(engine.changed_files().unwrap().is_empty());
    }
}
