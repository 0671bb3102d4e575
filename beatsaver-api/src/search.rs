//! Search API.
//!
//! Endpoint: `GET /search/text/{page}`
//!
//! Query parameters (all optional except `sortOrder`):
//! - `q` — free text
//! - `automapper`, `chroma`, `cinema`, `curated`, `followed`, `fullSpread`,
//!   `me`, `noodle`, `verified` — boolean flags
//! - `minBpm`/`maxBpm`, `minDuration`/`maxDuration`, `minNps`/`maxNps`,
//!   `minRating`/`maxRating` — ranges
//! - `from`/`to` — upload date range
//! - `environments`, `leaderboard`, `tags` — passed through verbatim
//! - `sortOrder` — `Latest` unless set otherwise
//!
//! Response:
//! ```json
//! {
//!   "docs": [ { "id": "1b3f", "name": "...", ... } ],
//!   "info": { "pages": 12, "total": 240 }
//! }
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::resolve::fetch;
use crate::transport::{Request, Transport};
use crate::types::SearchQuery;

/// Resource client for map search.
///
/// Obtained from [`BeatSaverClient::search`](crate::BeatSaverClient::search).
#[derive(Debug, Clone, Copy)]
pub struct SearchClient<'a> {
    transport: &'a Transport,
}

impl<'a> SearchClient<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &'a Transport {
        self.transport
    }

    /// Search maps with the filters in `query`.
    ///
    /// Filters left as `None` are not sent at all, so the service does not
    /// apply them. `Some(false)` is sent as `false`.
    ///
    /// # Errors
    ///
    /// - [`BeatSaverError::Transport`](crate::BeatSaverError::Transport) — network failure
    /// - [`BeatSaverError::RateLimited`](crate::BeatSaverError::RateLimited) — too many searches
    pub fn search_maps(&self, query: &SearchQuery) -> Result<Value> {
        fetch(self.transport, &search_request(query))
    }
}

fn search_request(query: &SearchQuery) -> Request {
    Request::get(format!("/search/text/{}", query.page)).with_query(query.to_params())
}
