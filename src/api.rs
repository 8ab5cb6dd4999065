//! HTTP client for the catalog's autocomplete endpoint
//!
//! One endpoint, one verb: `GET /search_autocomplete?q=<query>` returning a
//! JSON array of suggestion records. The response order is the server's
//! ranking and is preserved verbatim; the client never re-sorts or dedupes.

use crate::error::{MarqueeError, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Path of the autocomplete endpoint, relative to the server base URL
pub const AUTOCOMPLETE_PATH: &str = "search_autocomplete";

/// A single search-result candidate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Display title
    pub title: String,
    /// Navigation target, usually relative to the server base URL
    pub url: String,
}

/// Blocking client for the autocomplete endpoint
pub struct SuggestClient {
    http: reqwest::blocking::Client,
    endpoint: Url,
}

impl SuggestClient {
    /// Build a client for the given server base URL.
    ///
    /// The timeout bounds the whole request; a hung server cannot wedge the
    /// caller indefinitely.
    pub fn new(server: &Url, timeout: Duration) -> Result<Self> {
        let endpoint = server.join(AUTOCOMPLETE_PATH)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// The fully resolved endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch suggestions for a query.
    ///
    /// The query is sent URL-encoded as the single `q` parameter. Any
    /// non-success status is an error; so is a body that does not decode as
    /// an array of suggestion records.
    pub fn fetch_suggestions(&self, query: &str) -> Result<Vec<Suggestion>> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarqueeError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let suggestions: Vec<Suggestion> = serde_json::from_str(&body)?;

        Ok(suggestions)
    }
}
