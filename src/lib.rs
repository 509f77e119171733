//! qodo-rules - Fetch Qodo coding rules as assistant context
//!
//! qodo-rules is a single-binary tool that looks up the coding rules an
//! organization has configured for the current repository (and, when the
//! working directory sits inside a `modules/<name>` tree, for that module)
//! and prints them grouped by severity. Its stdout is injected into an AI
//! coding assistant's context window.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, orchestrates a run)
//! - [`config`] - API key and environment resolution (file + env overlay)
//! - [`git`] - Single interface for all git subprocess queries
//! - [`scope`] - Derives the rule query scope from the remote URL and cwd
//! - [`rules`] - Authenticated, paginated rule fetching over HTTP
//! - [`ui`] - Output helpers and the severity-grouped report renderer
//!
//! # Exit Behavior
//!
//! Every anticipated failure (no git, not a repository, no API key,
//! unparseable remote, network or API error, zero rules) prints a
//! human-readable message - or nothing - and exits with status 0. The tool
//! is a best-effort context-injection step and must never fail the workflow
//! that invokes it.

pub mod cli;
pub mod config;
pub mod git;
pub mod rules;
pub mod scope;
pub mod ui;
