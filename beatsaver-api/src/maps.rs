//! Map API.
//!
//! | Method                                      | Endpoint                               |
//! |---------------------------------------------|----------------------------------------|
//! | [`MapsClient::map_by_id`]                   | `GET /maps/id/{id}`                    |
//! | [`MapsClient::maps_by_ids`]                 | `GET /maps/ids/{id},{id},...`          |
//! | [`MapsClient::map_by_hash`]                 | `GET /maps/hash/{hash}`                |
//! | [`MapsClient::maps_by_uploader`]            | `GET /maps/uploader/{id}/{page}`       |
//! | [`MapsClient::maps_with_collaborations`]    | `GET /maps/collaborations/{id}`        |
//! | [`MapsClient::latest_maps`]                 | `GET /maps/latest`                     |
//! | [`MapsClient::deleted_maps`]                | `GET /maps/deleted[?before=...]`       |
//! | [`MapsClient::maps_by_play_count`]          | `GET /maps/plays/{page}`               |
//!
//! User endpoints live on the same client, see the `user` module.
//!
//! Single-map responses look like:
//! ```json
//! {
//!   "id": "1b3f",
//!   "name": "...",
//!   "uploader": { "id": 4284201, "name": "..." },
//!   "metadata": { "bpm": 174.0, "duration": 183, ... },
//!   "versions": [ { "hash": "e2f1...", "state": "Published", ... } ]
//! }
//! ```
//! Batch responses are objects keyed by id. The payload is returned as-is.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::Result;
use crate::resolve::fetch;
use crate::transport::{Request, Transport};
use crate::types::QueryParams;

/// Resource client for `/maps/*` and `/users/*`.
///
/// Obtained from [`BeatSaverClient::maps`](crate::BeatSaverClient::maps).
/// Ids are not validated locally; the service decides what exists.
#[derive(Debug, Clone, Copy)]
pub struct MapsClient<'a> {
    transport: &'a Transport,
}

impl<'a> MapsClient<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &'a Transport {
        self.transport
    }

    pub(crate) fn call(&self, request: &Request) -> Result<Value> {
        fetch(self.transport, request)
    }

    /// Get a single map by its key (e.g. `"1b3f"`).
    pub fn map_by_id(&self, map_id: &str) -> Result<Value> {
        self.call(&Request::get(format!("/maps/id/{}", segment(map_id))))
    }

    /// Get several maps in one request. Order of `map_ids` is preserved in
    /// the path; an empty slice yields an empty segment.
    pub fn maps_by_ids<S: AsRef<str>>(&self, map_ids: &[S]) -> Result<Value> {
        self.call(&maps_by_ids_request(map_ids))
    }

    /// Get the map containing the version with this hash.
    pub fn map_by_hash(&self, hash: &str) -> Result<Value> {
        self.call(&Request::get(format!("/maps/hash/{}", segment(hash))))
    }

    /// Get one page of maps uploaded by `uploader_id`. Pages start at `0`.
    pub fn maps_by_uploader(&self, uploader_id: &str, page: u32) -> Result<Value> {
        self.call(&Request::get(format!(
            "/maps/uploader/{}/{page}",
            segment(uploader_id)
        )))
    }

    /// Get maps by `uploader_id`, including maps where they are a collaborator.
    pub fn maps_with_collaborations(&self, uploader_id: &str) -> Result<Value> {
        self.call(&Request::get(format!(
            "/maps/collaborations/{}",
            segment(uploader_id)
        )))
    }

    /// Get the most recently published maps.
    pub fn latest_maps(&self) -> Result<Value> {
        self.call(&Request::get("/maps/latest"))
    }

    /// Get deleted maps. `before` (an ISO-8601 date) is sent only when it is
    /// `Some` and not empty.
    pub fn deleted_maps(&self, before: Option<&str>) -> Result<Value> {
        self.call(&deleted_maps_request(before))
    }

    /// Get one page of maps ordered by play count. Pages start at `0`.
    pub fn maps_by_play_count(&self, page: u32) -> Result<Value> {
        self.call(&Request::get(format!("/maps/plays/{page}")))
    }
}

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Encode each id, then join with a literal `,`.
pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| segment(id.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn maps_by_ids_request<S: AsRef<str>>(map_ids: &[S]) -> Request {
    Request::get(format!("/maps/ids/{}", join_ids(map_ids)))
}

fn deleted_maps_request(before: Option<&str>) -> Request {
    let mut query = QueryParams::new();
    query.push_non_empty("before", before);
    Request::get("/maps/deleted").with_query(query)
}
