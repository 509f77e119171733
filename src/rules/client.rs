//! rules::client
//!
//! Paginated, bearer-authenticated client for the rule service.
//!
//! # Design
//!
//! One `GET {base}/rules` request per page, filtered by scope and the
//! `active` state, with a fixed page size of 50 and a 1-based page
//! counter. Accumulation stops as soon as a page comes back with fewer
//! than `page_size` records; a server that has more pages signals so by
//! filling the page completely.
//!
//! There are no retries and no backoff. Any failure aborts the whole
//! fetch, and pages already received are discarded by the caller - no
//! output has been produced at that point, so a partial report can never
//! leak.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::types::RuleRecord;

/// Records requested per page.
pub const PAGE_SIZE: usize = 50;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the rule service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The service rejected the API key (HTTP 401).
    #[error("invalid or expired API key")]
    AuthFailed,

    /// The service returned a non-success status other than 401.
    #[error("rule service returned HTTP {status}")]
    Api {
        /// HTTP status code
        status: u16,
    },

    /// Connection-level failure: DNS, refusal, or timeout.
    #[error("could not connect to {base}")]
    Network {
        /// Base URL the connection was attempted against
        base: String,
    },

    /// Anything else that went wrong during a page request.
    #[error("failed to fetch rules: {0}")]
    Unexpected(String),
}

/// One page of the list response.
///
/// An absent `rules` array decodes as an empty page.
#[derive(Debug, Default, Deserialize)]
struct RulesPage {
    #[serde(default)]
    rules: Vec<RuleRecord>,
}

/// Rule service client.
#[derive(Debug, Clone)]
pub struct RulesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RulesClient {
    /// Create a client against the given base URL,
    /// e.g. `https://qodo-platform.qodo.ai/rules/v1`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every active rule matching `query_scope`.
    ///
    /// Pages are requested sequentially until one returns fewer than
    /// [`PAGE_SIZE`] records.
    pub async fn fetch_all(&self, query_scope: &str) -> Result<Vec<RuleRecord>, FetchError> {
        let mut all_rules = Vec::new();
        let mut page: u32 = 1;

        loop {
            let batch = self.fetch_page(query_scope, page).await?;
            let count = batch.len();
            all_rules.extend(batch);

            if count < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(all_rules)
    }

    async fn fetch_page(
        &self,
        query_scope: &str,
        page: u32,
    ) -> Result<Vec<RuleRecord>, FetchError> {
        let url = format!("{}/rules", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("scopes", query_scope.to_string()),
                ("state", "active".to_string()),
                ("page", page.to_string()),
                ("page_size", PAGE_SIZE.to_string()),
            ])
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FetchError::AuthFailed);
        }
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
            });
        }

        let body: RulesPage = response
            .json()
            .await
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        Ok(body.rules)
    }

    fn classify_send_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_connect() || err.is_timeout() {
            FetchError::Network {
                base: self.base_url.clone(),
            }
        } else {
            FetchError::Unexpected(err.to_string())
        }
    }
}
