//! Entry point: [`BeatSaverClient`] and its configuration.
//!
//! The client owns a single [`Transport`] and lends it to the resource
//! clients it hands out. Nothing is created implicitly behind the caller's
//! back: every resource client borrows the facade's transport.
//!
//! ```no_run
//! use beatsaver_api::BeatSaverClient;
//! use beatsaver_api::types::SearchQuery;
//!
//! let client = BeatSaverClient::new()?;
//! let map = client.maps().map_by_id("1b3f")?;
//! let hits = client.search().search_maps(&SearchQuery {
//!     min_nps: Some(4.0),
//!     ..SearchQuery::default()
//! })?;
//! # Ok::<(), beatsaver_api::BeatSaverError>(())
//! ```

use std::time::Duration;

use crate::error::Result;
use crate::maps::MapsClient;
use crate::playlist::PlaylistsClient;
use crate::search::SearchClient;
use crate::transport::{BASE_URL, Transport};

/// Construction-time settings for [`BeatSaverClient`].
///
/// The default targets the public service with the transport's own timeout
/// behaviour and no `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing path (e.g. `https://api.beatsaver.com`).
    pub base_url: String,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Value for the `User-Agent` header. `None` sends none.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }
}

/// Blocking client for the BeatSaver API.
///
/// Cheap to share: `&BeatSaverClient` may be used from several threads at
/// once, all requests going through the same connection pool.
#[derive(Debug, Clone)]
pub struct BeatSaverClient {
    transport: Transport,
}

impl BeatSaverClient {
    /// Create a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client with an explicit [`ClientConfig`] (alternate base URL
    /// for testing, timeouts, user agent).
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Wrap an existing transport.
    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Return a reference to the shared transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Map and user endpoints (`/maps/*`, `/users/*`).
    pub fn maps(&self) -> MapsClient<'_> {
        MapsClient::new(&self.transport)
    }

    /// Map search (`/search/text/*`).
    pub fn search(&self) -> SearchClient<'_> {
        SearchClient::new(&self.transport)
    }

    /// Playlist endpoints (`/playlists/*`).
    pub fn playlists(&self) -> PlaylistsClient<'_> {
        PlaylistsClient::new(&self.transport)
    }
}
