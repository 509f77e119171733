//! git
//!
//! Single interface for all git subprocess queries.
//!
//! # Architecture
//!
//! This module is the only doorway to git. Every query flows through the
//! [`Git`] struct; no other module spawns the `git` executable. The tool
//! only ever *reads* from git (remote URL, repository root, git dir), so
//! the interface is a handful of typed query methods over one subprocess
//! helper.
//!
//! # Failure Model
//!
//! Queries never return an error type. A nonzero exit code, a missing
//! binary, or any other spawn failure collapses to `None`, and callers
//! treat absence as "not applicable here". No timeout is applied to the
//! subprocess.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Interface to the git executable, bound to a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    cwd: PathBuf,
}

impl Git {
    /// Create a git interface that runs queries as if started in `cwd`.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Check whether the git executable is discoverable on the path.
    pub fn is_available(&self) -> bool {
        self.query(&["--version"]).is_some()
    }

    /// Path of the `.git` directory, or `None` outside a repository.
    pub fn git_dir(&self) -> Option<String> {
        self.query(&["rev-parse", "--git-dir"])
    }

    /// Absolute path of the repository root, if inside a working tree.
    pub fn toplevel(&self) -> Option<String> {
        self.query(&["rev-parse", "--show-toplevel"])
    }

    /// URL of the `origin` remote, if one is configured.
    pub fn remote_origin_url(&self) -> Option<String> {
        self.query(&["config", "--get", "remote.origin.url"])
    }

    /// Run a git subcommand and return its trimmed stdout.
    ///
    /// Returns `None` on nonzero exit or any execution failure.
    fn query(&self, args: &[&str]) -> Option<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Some(stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo(dir: &Path) {
        let status = Command::new("git")
            .args(["init", "--quiet"])
            .current_dir(dir)
            .status()
            .expect("git init");
        assert!(status.success());
    }

    #[test]
    fn version_query_succeeds() {
        let temp = TempDir::new().unwrap();
        let git = Git::new(temp.path());
        assert!(git.is_available());
    }

    #[test]
    fn git_dir_inside_repo() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());

        let git = Git::new(temp.path());
        assert!(git.git_dir().is_some());
    }

    #[test]
    fn toplevel_matches_repo_root() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());
        let sub = temp.path().join("deep/nested");
        fs::create_dir_all(&sub).unwrap();

        let git = Git::new(&sub);
        let top = git.toplevel().expect("toplevel");
        let expected = temp.path().canonicalize().unwrap();
        assert_eq!(PathBuf::from(top).canonicalize().unwrap(), expected);
    }

    #[test]
    fn remote_url_absent_without_remote() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());

        let git = Git::new(temp.path());
        assert_eq!(git.remote_origin_url(), None);
    }

    #[test]
    fn remote_url_returned_when_configured() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());
        let status = Command::new("git")
            .args(["remote", "add", "origin", "git@github.com:acme/widgets.git"])
            .current_dir(temp.path())
            .status()
            .unwrap();
        assert!(status.success());

        let git = Git::new(temp.path());
        assert_eq!(
            git.remote_origin_url().as_deref(),
            Some("git@github.com:acme/widgets.git")
        );
    }

    #[test]
    fn failed_query_collapses_to_none() {
        let temp = TempDir::new().unwrap();
        let git = Git::new(temp.path());
        // Not a repository, so rev-parse exits nonzero.
        assert_eq!(git.git_dir(), None);
    }
}
