//! marquee - Terminal search client for a movie catalog
//!
//! Talks to the catalog's live-search endpoint and renders suggestions as
//! the user types, without flooding the server on every keystroke.
//!
//! # Features
//!
//! - **Live Suggestions**: debounced search-as-you-type against the
//!   catalog's autocomplete endpoint
//! - **Stable Rendering**: responses are sequence-tagged so a slow, stale
//!   reply can never overwrite a newer one
//! - **Quick Navigation**: open a suggestion in the browser or copy its
//!   link from the results list
//! - **One-shot Mode**: query the endpoint once from the command line
//!
//! # Example
//!
//! ```no_run
//! use marquee::SuggestClient;
//! use std::time::Duration;
//! use url::Url;
//!
//! fn main() -> marquee::Result<()> {
//!     let server = Url::parse("http://127.0.0.1:5000")?;
//!     let client = SuggestClient::new(&server, Duration::from_secs(10))?;
//!
//!     for suggestion in client.fetch_suggestions("matrix")? {
//!         println!("{}: {}", suggestion.title, suggestion.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export main types
pub use api::{SuggestClient, Suggestion, AUTOCOMPLETE_PATH};
pub use error::{MarqueeError, Result};

use std::time::Duration;
use url::Url;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default catalog server (the original site's development address)
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Default quiet period before a keystroke turns into a request
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default minimum trimmed query length that triggers a request
pub const DEFAULT_MIN_QUERY_LEN: usize = 1;

/// Default bound on a single suggestion request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog server
    pub server: Url,
    /// Quiet period with no edits before a request is dispatched
    pub debounce: Duration,
    /// Trimmed queries shorter than this never hit the network
    pub min_query_len: usize,
    /// Bound on a single suggestion request
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(server: Url) -> Self {
        Self {
            server,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Shorten a string to `max_chars` characters, eliding the middle.
///
/// Used for long suggestion URLs in narrow terminals; keeps both the host
/// end and the trailing path segment readable.
pub fn middle_ellipsis(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars <= 1 {
        return "\u{2026}".to_string();
    }

    let keep = max_chars - 1;
    let head = keep - keep / 2;
    let tail = keep / 2;

    let mut out = String::with_capacity(max_chars);
    out.extend(text.chars().take(head));
    out.push('\u{2026}');
    out.extend(text.chars().skip(count - tail));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_ellipsis_keeps_short_strings() {
        assert_eq!(middle_ellipsis("/movie/1", 20), "/movie/1");
        assert_eq!(middle_ellipsis("", 5), "");
    }

    #[test]
    fn middle_ellipsis_elides_the_middle() {
        let out = middle_ellipsis("/movie/the-matrix-reloaded/2003", 15);
        assert_eq!(out.chars().count(), 15);
        assert!(out.starts_with("/movie/"));
        assert!(out.ends_with("2003"));
        assert!(out.contains('\u{2026}'));
    }

    #[test]
    fn middle_ellipsis_degenerate_width() {
        assert_eq!(middle_ellipsis("abcdef", 1), "\u{2026}");
    }
}
