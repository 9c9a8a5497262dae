//! Operation executor: one entry point per Git action.
//!
//! [`AppController`] is the boundary between callers (a GUI, the CLI) and the
//! Git engine. Every method returns a [`CommandResult`] and never panics or
//! leaks an engine error. Operations that need an open repository share one
//! pre-check and fail with the no-repository message before touching the
//! engine. After a mutating success the controller recomputes the
//! changed-files partition and publishes it through the [`EventHub`].
//!
//! The controller is built once per session-owning context and passed by
//! reference to whatever drives the UI; there is no global instance.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::core::{
    classify::{classify, MSG_NO_REPOSITORY},
    events::{AppEvent, EventHub},
    result::{join_paths, CommandResult, ResultData},
    session::{RepoSession, NO_BRANCH},
};

pub struct AppController {
    session: Option<RepoSession>,
    hub: EventHub,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    pub fn new() -> Self {
        AppController {
            session: None,
            hub: EventHub::new(),
        }
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppEvent) + 'static) {
        self.hub.subscribe(subscriber);
    }

    pub fn is_repository_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn repository_path(&self) -> Option<&Path> {
        self.session.as_ref().map(|s| s.path())
    }

    /// Current branch name, `None` when no repository is open.
    pub fn current_branch_name(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.branch_name())
    }

    // ==================== Repository lifecycle ====================

    /// Open an existing repository, replacing any open session.
    pub fn open_repository(&mut self, path: &Path) -> CommandResult {
        let command = format!("cd {}", path.display());
        match RepoSession::open(path) {
            Ok(session) => {
                info!("opened repository at {}", path.display());
                let result = CommandResult::ok(&command, "Opened the repository")
                    .with_output(format!("Repository: {}", path.display()));
                self.adopt_session(session, &result);
                result
            }
            Err(e) => self.fail(classify(&e, &command, "Open repository")),
        }
    }

    /// Create a new repository, replacing any open session.
    pub fn init_repository(&mut self, path: &Path) -> CommandResult {
        let command = format!("git init {}", path.display());
        match RepoSession::init(path) {
            Ok(session) => {
                info!("created repository at {}", path.display());
                let result = CommandResult::ok(&command, "Created a new repository")
                    .with_output(format!(
                        "Initialized empty Git repository in {}",
                        path.display()
                    ));
                self.adopt_session(session, &result);
                result
            }
            Err(e) => self.fail(classify(&e, &command, "Create repository")),
        }
    }

    /// Clone a repository, replacing any open session.
    pub fn clone_repository(&mut self, url: &str, destination: &Path) -> CommandResult {
        let command = format!("git clone {} {}", url, destination.display());
        match RepoSession::clone(url, destination) {
            Ok(session) => {
                info!("cloned {} to {}", url, destination.display());
                let result = CommandResult::ok(&command, "Cloned the repository")
                    .with_output(format!("Cloned to {}", destination.display()));
                self.adopt_session(session, &result);
                result
            }
            Err(e) => self.fail(classify(&e, &command, "Clone repository")),
        }
    }

    /// Close the open repository, if any.
    pub fn close_repository(&mut self) {
        if self.session.take().is_some() {
            self.hub.emit(&AppEvent::RepositoryClosed);
        }
    }

    // ==================== Staging ====================

    /// Stage repo-relative paths; deleted paths are staged as removals.
    pub fn stage_files(&self, paths: &[PathBuf]) -> CommandResult {
        let description = "Stage files";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git add", description);
        };

        let command = format!("git add {}", join_paths(paths));
        let result = match session.engine().stage(paths) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_files();
        }
        result
    }

    /// Remove paths from the index, keeping working-tree changes.
    pub fn unstage_files(&self, paths: &[PathBuf]) -> CommandResult {
        let description = "Unstage files";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git reset", description);
        };

        let command = format!("git reset HEAD -- {}", join_paths(paths));
        let result = match session.engine().unstage(paths) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_files();
        }
        result
    }

    // ==================== Commits ====================

    pub fn commit(&self, message: &str) -> CommandResult {
        let description = "Commit changes";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git commit", description);
        };

        let command = format!("git commit -m '{message}'");
        let result = match session.engine().commit(message) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_files();
        }
        result
    }

    // ==================== Remotes ====================

    /// Register a remote; `name` defaults to "origin".
    pub fn connect_remote(&self, url: &str, name: Option<&str>) -> CommandResult {
        let description = "Connect remote";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git remote add", description);
        };

        let name = name.unwrap_or("origin");
        let command = format!("git remote add {name} {url}");
        let result = match session.engine().add_remote(name, url) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        result
    }

    /// Push to `remote` (default "origin"); `branch` defaults to the current
    /// branch, falling back to "main" on an unborn HEAD.
    pub fn push(&self, remote: Option<&str>, branch: Option<&str>) -> CommandResult {
        let description = "Push changes";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git push", description);
        };

        let remote = remote.unwrap_or("origin");
        let branch = match branch {
            Some(name) => name.to_string(),
            None => self.default_branch(session),
        };
        let command = format!("git push {remote} {branch}");
        let result = match session.engine().push(remote, &branch) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        result
    }

    /// Pull from `remote` as fetch plus merge, never a rebase.
    pub fn pull(&self, remote: Option<&str>, branch: Option<&str>) -> CommandResult {
        let description = "Pull changes";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git pull", description);
        };

        let remote = remote.unwrap_or("origin");
        let branch = match branch {
            Some(name) => name.to_string(),
            None => self.default_branch(session),
        };
        let command = format!("git pull {remote} {branch}");
        let result = match session.engine().pull(remote, &branch) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_files();
        }
        result
    }

    // ==================== Branches ====================

    pub fn create_branch(&self, branch_name: &str) -> CommandResult {
        let description = "Create branch";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git checkout -b", description);
        };

        let command = format!("git checkout -b {branch_name}");
        let result = match session.engine().create_branch(branch_name) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_branch();
            self.refresh_files();
        }
        result
    }

    pub fn switch_branch(&self, branch_name: &str) -> CommandResult {
        let description = "Switch branch";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git checkout", description);
        };

        let command = format!("git checkout {branch_name}");
        let result = match session.engine().checkout_branch(branch_name) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_branch();
            self.refresh_files();
        }
        result
    }

    /// Delete a branch. Refusals (checked out, not fully merged) surface
    /// through the classifier rather than a pre-check.
    pub fn delete_branch(&self, branch_name: &str) -> CommandResult {
        let description = "Delete branch";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git branch -d", description);
        };

        let command = format!("git branch -d {branch_name}");
        let result = match session.engine().delete_branch(branch_name) {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_branch();
            self.refresh_files();
        }
        result
    }

    /// Merge `source_branch` into `target_branch` (default: current branch).
    ///
    /// Two engine steps: check out the target, then merge the source. A
    /// failure in either step reports as this one result under the merge
    /// description.
    pub fn merge_branch(&self, source_branch: &str, target_branch: Option<&str>) -> CommandResult {
        let description = "Merge branch";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git merge", description);
        };

        let target = match target_branch {
            Some(name) => name.to_string(),
            None => session.branch_name(),
        };
        let command = format!("git checkout {target} && git merge {source_branch}");
        let outcome = session
            .engine()
            .checkout_branch(&target)
            .and_then(|_| session.engine().merge(source_branch));
        let result = match outcome {
            Ok(()) => CommandResult::ok(&command, description),
            Err(e) => classify(&e, &command, description),
        };
        self.publish(&result);
        if result.success {
            self.refresh_branch();
            self.refresh_files();
        }
        result
    }

    // ==================== Read-only queries ====================

    /// List local branch names.
    pub fn branches(&self) -> CommandResult {
        let description = "List branches";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git branch", description);
        };

        match session.engine().branches() {
            Ok(names) => CommandResult::ok("git branch", description)
                .with_output(names.join("\n"))
                .with_data(ResultData::Branches(names)),
            Err(e) => {
                let result = classify(&e, "git branch", description);
                self.announce_error(&result);
                result
            }
        }
    }

    /// The current branch name, or the no-branch sentinel on an unborn HEAD.
    pub fn current_branch(&self) -> CommandResult {
        let description = "Show current branch";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git branch --show-current", description);
        };

        let name = session.branch_name();
        CommandResult::ok("git branch --show-current", description)
            .with_output(name.clone())
            .with_data(ResultData::Branch(name))
    }

    /// Recompute the changed-files partition.
    pub fn changed_files(&self) -> CommandResult {
        let description = "Show changed files";
        let Some(session) = self.session.as_ref() else {
            return self.no_repository("git status", description);
        };

        match session.engine().changed_files() {
            Ok(files) => CommandResult::ok("git status", description)
                .with_data(ResultData::ChangedFiles(files)),
            Err(e) => {
                let result = classify(&e, "git status", description);
                self.announce_error(&result);
                result
            }
        }
    }

    // ==================== Private helpers ====================

    /// Replace the session after a successful open/init/clone and publish the
    /// opened/result/branch/files event sequence.
    fn adopt_session(&mut self, session: RepoSession, result: &CommandResult) {
        if self.session.take().is_some() {
            self.hub.emit(&AppEvent::RepositoryClosed);
        }
        let path = session.path().to_path_buf();
        self.session = Some(session);
        self.hub.emit(&AppEvent::RepositoryOpened { path });
        self.publish(result);
        self.refresh_branch();
        self.refresh_files();
    }

    /// Failed result for an operation invoked with no open repository.
    /// The engine is never touched; only the error event fires.
    fn no_repository(&self, command: &str, description: &str) -> CommandResult {
        let result = CommandResult::err(
            command,
            format!("{description} failed"),
            MSG_NO_REPOSITORY,
        );
        self.hub.emit(&AppEvent::ErrorOccurred {
            message: MSG_NO_REPOSITORY.to_string(),
        });
        result
    }

    /// Emit CommandExecuted, plus ErrorOccurred for failures.
    fn publish(&self, result: &CommandResult) {
        self.hub.emit(&AppEvent::CommandExecuted {
            result: result.clone(),
        });
        self.announce_error(result);
    }

    fn announce_error(&self, result: &CommandResult) {
        if let Some(message) = &result.error_message {
            self.hub.emit(&AppEvent::ErrorOccurred {
                message: message.clone(),
            });
        }
    }

    /// Classified failure for open/init/clone: publish and return it.
    fn fail(&self, result: CommandResult) -> CommandResult {
        self.publish(&result);
        result
    }

    fn refresh_files(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        match session.engine().changed_files() {
            Ok(files) => self.hub.emit(&AppEvent::FilesChanged {
                paths: files.flatten(),
            }),
            Err(e) => warn!("could not refresh file status: {e}"),
        }
    }

    fn refresh_branch(&self) {
        if let Some(session) = self.session.as_ref() {
            self.hub.emit(&AppEvent::BranchChanged {
                name: session.branch_name(),
            });
        }
    }

    fn default_branch(&self, session: &RepoSession) -> String {
        let name = session.branch_name();
        if name == NO_BRANCH {
            "main".to_string()
        } else {
            name
        }
    }
}
