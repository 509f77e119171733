//! cli
//!
//! Command-line interface layer: orchestrates one run and owns the exit
//! policy.
//!
//! # Exit Policy
//!
//! Internally every early-exit condition is a distinct [`Halt`] variant,
//! so the phases stay explicit about *why* a run stopped. At the outer
//! boundary they all collapse to the same observable behavior: print the
//! variant's message (some are silent), exit with status 0. The tool is
//! an optional context-enrichment step and must never signal failure to
//! the workflow that invokes it.

pub mod args;

pub use args::Cli;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{self, Config};
use crate::git::Git;
use crate::rules::{FetchError, RulesClient};
use crate::scope::{self, ScopeError};
use crate::ui::output::{self, Verbosity};
use crate::ui::report;

/// Why a run stopped before producing a report.
///
/// Every variant is terminal for the current run; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// The git executable is not discoverable on the path.
    GitMissing,
    /// The working directory is not inside a git repository.
    NotARepository,
    /// The repository has no `origin` remote.
    NoRemote,
    /// No API key resolved from config file or environment.
    NoApiKey,
    /// The remote URL does not contain an `org/repo` pair.
    UnparseableRemote(String),
    /// The paginated fetch failed.
    Fetch(FetchError),
    /// The service has no rules configured for this scope.
    NoRules(String),
}

impl From<ScopeError> for Halt {
    fn from(err: ScopeError) -> Self {
        match err {
            ScopeError::NoRemote => Halt::NoRemote,
            ScopeError::UnparseableRemote(url) => Halt::UnparseableRemote(url),
        }
    }
}

impl Halt {
    /// The message printed for this halt, or `None` for silent exits.
    pub fn message(&self) -> Option<String> {
        match self {
            Halt::GitMissing => Some(
                "⚠️  Git is not installed or not in PATH. Please install Git:\n\
                 \x20  - macOS: brew install git or download from https://git-scm.com\n\
                 \x20  - Ubuntu/Debian: apt-get install git\n\
                 \x20  - Windows: Download from https://git-scm.com/download/win"
                    .to_string(),
            ),
            Halt::NotARepository | Halt::NoRemote => None,
            Halt::NoApiKey => Some(
                "ℹ️  No Qodo API key configured. To enable repository-specific coding rules:\n\
                 \x20  - Set QODO_API_KEY environment variable, or\n\
                 \x20  - Create ~/.qodo/config.json with your API key\n\
                 \n\
                 Get your API key at: https://app.qodo.ai/settings/api-keys"
                    .to_string(),
            ),
            Halt::UnparseableRemote(url) => Some(format!(
                "⚠️  Could not parse repository from git remote: {}",
                url
            )),
            Halt::Fetch(FetchError::AuthFailed) => Some(
                "⚠️  Invalid or expired Qodo API key. Please check your API key at \
                 https://app.qodo.ai/settings/api-keys"
                    .to_string(),
            ),
            Halt::Fetch(FetchError::Api { status }) => {
                Some(format!("⚠️  Failed to fetch Qodo rules (HTTP {})", status))
            }
            Halt::Fetch(FetchError::Network { base }) => {
                Some(format!("⚠️  Could not connect to Qodo API at {}", base))
            }
            Halt::Fetch(FetchError::Unexpected(_)) => {
                Some("⚠️  Failed to fetch Qodo rules".to_string())
            }
            Halt::NoRules(scope) => Some(format!(
                "ℹ️  No Qodo rules configured for repository: {}\n\
                 \n\
                 Set up rules at: https://app.qodo.ai",
                scope
            )),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Always returns
/// `Ok(())` for anticipated conditions; only argument parsing and an
/// unreadable process working directory can surface an error.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let cwd = match cli.cwd {
        Some(path) => path,
        None => std::env::current_dir().context("could not determine working directory")?,
    };
    let verbosity = Verbosity::from_flags(cli.debug);

    match execute(&cwd, verbosity) {
        Ok(rendered) => print!("{}", rendered),
        Err(halt) => {
            output::debug(format!("halted: {:?}", halt), verbosity);
            if let Some(message) = halt.message() {
                println!("{}", message);
            }
        }
    }

    Ok(())
}

/// Execute one run: git checks, config, scope, fetch, render.
fn execute(cwd: &Path, verbosity: Verbosity) -> Result<String, Halt> {
    let git = Git::new(cwd);
    if !git.is_available() {
        return Err(Halt::GitMissing);
    }
    if git.git_dir().is_none() {
        return Err(Halt::NotARepository);
    }

    let config = Config::load();
    let Some(api_key) = config.api_key else {
        return Err(Halt::NoApiKey);
    };

    let api_url = config::api_base_url(config.environment_name.as_deref());
    output::debug(format!("rule service base: {}", api_url), verbosity);

    let scope = scope::resolve(&git, cwd)?;
    output::debug(format!("query scope: {}", scope.query_scope), verbosity);

    let client = RulesClient::new(&api_url, &api_key).map_err(Halt::Fetch)?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Halt::Fetch(FetchError::Unexpected(e.to_string())))?;
    let rules = runtime
        .block_on(client.fetch_all(&scope.query_scope))
        .map_err(Halt::Fetch)?;
    output::debug(format!("fetched {} rules", rules.len()), verbosity);

    if rules.is_empty() {
        return Err(Halt::NoRules(scope.query_scope));
    }

    Ok(report::render(&scope, &rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_halts_are_silent() {
        assert_eq!(Halt::NotARepository.message(), None);
        assert_eq!(Halt::NoRemote.message(), None);
    }

    #[test]
    fn unparseable_remote_names_the_url() {
        let message = Halt::UnparseableRemote("file:stuff".to_string())
            .message()
            .unwrap();
        assert_eq!(
            message,
            "⚠️  Could not parse repository from git remote: file:stuff"
        );
    }

    #[test]
    fn auth_failure_points_at_key_settings() {
        let message = Halt::Fetch(FetchError::AuthFailed).message().unwrap();
        assert!(message.contains("Invalid or expired Qodo API key"));
        assert!(message.contains("https://app.qodo.ai/settings/api-keys"));
    }

    #[test]
    fn http_failure_includes_status() {
        let message = Halt::Fetch(FetchError::Api { status: 503 }).message().unwrap();
        assert_eq!(message, "⚠️  Failed to fetch Qodo rules (HTTP 503)");
    }

    #[test]
    fn network_failure_names_the_base_url() {
        let halt = Halt::Fetch(FetchError::Network {
            base: "https://qodo-platform.qodo.ai/rules/v1".to_string(),
        });
        assert_eq!(
            halt.message().unwrap(),
            "⚠️  Could not connect to Qodo API at https://qodo-platform.qodo.ai/rules/v1"
        );
    }

    #[test]
    fn scope_errors_map_to_halts() {
        assert_eq!(Halt::from(ScopeError::NoRemote), Halt::NoRemote);
        assert_eq!(
            Halt::from(ScopeError::UnparseableRemote("x".into())),
            Halt::UnparseableRemote("x".into())
        );
    }

    #[test]
    fn no_rules_message_names_the_scope() {
        let message = Halt::NoRules("/acme/widgets/".to_string()).message().unwrap();
        assert!(message.starts_with("ℹ️  No Qodo rules configured for repository: /acme/widgets/"));
        assert!(message.ends_with("Set up rules at: https://app.qodo.ai"));
    }
}
