//! scope
//!
//! Derives the rule query scope from the git remote URL and the caller's
//! working directory.
//!
//! # Design
//!
//! The query scope is a slash-delimited path filter understood by the rule
//! service. The base scope `/org/repo/` comes from the `origin` remote URL;
//! when the working directory sits at least two segments deep under a
//! top-level `modules/` directory, the scope narrows to
//! `/org/repo/modules/<name>/` so module-specific rules apply.
//!
//! Scope resolution is deliberately forgiving: a missing repository root or
//! a working directory that cannot be expressed relative to it falls back
//! to the repository-wide scope instead of failing the run. Only a missing
//! remote (nothing to scope against) or an unparseable remote URL halt
//! resolution, and both are surfaced as [`ScopeError`] variants for the
//! caller to map.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::git::Git;

/// Label shown when rules apply to the whole repository.
const REPOSITORY_WIDE: &str = "Scope: Repository-wide";

/// Errors that stop scope resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScopeError {
    /// No `origin` remote is configured; the tool has nothing to scope
    /// against and the run ends silently.
    #[error("no git remote configured")]
    NoRemote,

    /// The remote URL does not contain an `org/repo` pair.
    #[error("could not parse repository from git remote: {0}")]
    UnparseableRemote(String),
}

/// The resolved query scope and its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDescriptor {
    /// Slash-delimited path filter sent to the rule service,
    /// e.g. `/acme/widgets/` or `/acme/widgets/modules/billing/`.
    pub query_scope: String,
    /// Display label for the banner, e.g. `Scope: Repository-wide`.
    pub context: String,
}

impl ScopeDescriptor {
    fn repository_wide(query_scope: String) -> Self {
        Self {
            query_scope,
            context: REPOSITORY_WIDE.to_string(),
        }
    }
}

/// Resolve the query scope for a run.
pub fn resolve(git: &Git, cwd: &Path) -> Result<ScopeDescriptor, ScopeError> {
    let remote_url = git.remote_origin_url().ok_or(ScopeError::NoRemote)?;
    let repo_scope =
        parse_repo_scope(&remote_url).ok_or(ScopeError::UnparseableRemote(remote_url))?;

    match git.toplevel() {
        Some(root) => Ok(refine(&repo_scope, Path::new(&root), cwd)),
        None => Ok(ScopeDescriptor::repository_wide(repo_scope)),
    }
}

/// Parse an `org/repo` pair out of a git remote URL.
///
/// Takes the last two slash-or-colon-delimited segments, stripping an
/// optional trailing `.git`. Tolerates SSH (`git@host:org/repo.git`),
/// HTTPS (`https://host/org/repo.git`), and suffix-less forms. Returns
/// the base scope `/org/repo/`, or `None` when no pair is present.
pub fn parse_repo_scope(remote_url: &str) -> Option<String> {
    let url = remote_url.strip_suffix(".git").unwrap_or(remote_url);

    let (rest, repo) = url.rsplit_once('/')?;
    if repo.is_empty() {
        return None;
    }

    // The org segment must itself be preceded by a delimiter; a bare
    // "org/repo" with nothing in front is not a remote URL.
    let (_, org) = rest.rsplit_once(['/', ':'])?;
    if org.is_empty() {
        return None;
    }

    Some(format!("/{}/{}/", org, repo))
}

/// Narrow the base scope when the working directory is inside a module.
///
/// The refinement applies only when the path of `cwd` relative to
/// `repo_root` starts with a segment literally equal to `modules` and is
/// at least two segments deep. The query scope always uses forward
/// slashes; the display label uses the platform's native separators.
fn refine(repo_scope: &str, repo_root: &Path, cwd: &Path) -> ScopeDescriptor {
    let root = canonical(repo_root);
    let cwd = canonical(cwd);

    let Ok(rel) = cwd.strip_prefix(&root) else {
        // cwd outside the root (or on an unrelated filesystem root).
        return ScopeDescriptor::repository_wide(repo_scope.to_string());
    };

    let segments: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    if segments.len() >= 2 && segments[0] == "modules" {
        let name = segments[1].to_string_lossy();
        let display = Path::new("modules").join(segments[1]);
        return ScopeDescriptor {
            query_scope: format!("{}modules/{}/", repo_scope, name),
            context: format!("Module: `{}`", display.display()),
        };
    }

    ScopeDescriptor::repository_wide(repo_scope.to_string())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
