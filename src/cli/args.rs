//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The binary does exactly one thing, so there are no subcommands - just
//! the flags shared by every invocation:
//! - `--cwd <path>`: Run as if started in that directory
//! - `--debug`: Trace each phase on stderr

use clap::Parser;
use std::path::PathBuf;

/// Fetch Qodo coding rules for the current repository and print them as
/// assistant context.
#[derive(Parser, Debug)]
#[command(name = "qodo-rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if qodo-rules was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
