//! Playlist API.
//!
//! Endpoints:
//! - `GET /playlists/latest`
//! - `GET /playlists/search/{page}?q=...`
//! - `GET /playlists/search/v1/{page}?q=...`
//! - `GET /playlists/user/{userId}/{page}`
//! - `GET /playlists/id/{playlistId}/{page}` — playlist plus one page of its maps
//!
//! `q` is omitted when absent or empty.

use serde_json::Value;

use crate::error::Result;
use crate::maps::segment;
use crate::resolve::fetch;
use crate::transport::{Request, Transport};
use crate::types::QueryParams;

/// Resource client for `/playlists/*`.
///
/// Obtained from [`BeatSaverClient::playlists`](crate::BeatSaverClient::playlists).
#[derive(Debug, Clone, Copy)]
pub struct PlaylistsClient<'a> {
    transport: &'a Transport,
}

impl<'a> PlaylistsClient<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &'a Transport {
        self.transport
    }

    /// Get the most recently updated playlists.
    pub fn latest_playlists(&self) -> Result<Value> {
        fetch(self.transport, &Request::get("/playlists/latest"))
    }

    /// Search playlists. Pages start at `0`.
    pub fn search_playlists(&self, page: u32, query: Option<&str>) -> Result<Value> {
        fetch(self.transport, &search_request("/playlists/search", page, query))
    }

    /// Same as [`search_playlists`](Self::search_playlists) against the `v1`
    /// route.
    pub fn search_playlists_v1(&self, page: u32, query: Option<&str>) -> Result<Value> {
        fetch(
            self.transport,
            &search_request("/playlists/search/v1", page, query),
        )
    }

    /// Get one page of playlists owned by `user_id`.
    pub fn playlists_by_user(&self, user_id: &str, page: u32) -> Result<Value> {
        fetch(
            self.transport,
            &Request::get(format!("/playlists/user/{}/{page}", segment(user_id))),
        )
    }

    /// Get a playlist with one page of the maps it contains.
    pub fn playlist_detail(&self, playlist_id: &str, page: u32) -> Result<Value> {
        fetch(
            self.transport,
            &Request::get(format!("/playlists/id/{}/{page}", segment(playlist_id))),
        )
    }
}

fn search_request(route: &str, page: u32, query: Option<&str>) -> Request {
    let mut params = QueryParams::new();
    params.push_non_empty("q", query);
    Request::get(format!("{route}/{page}")).with_query(params)
}
