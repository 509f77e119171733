//! rules
//!
//! Rule records and the authenticated, paginated rule service client.

mod client;
mod types;

pub use client::{FetchError, RulesClient, PAGE_SIZE};
pub use types::{RuleRecord, Severity};
