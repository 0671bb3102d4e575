//! BeatSaver API client library.
//!
//! Blocking access to the public BeatSaver map catalog at
//! `https://api.beatsaver.com`: maps, users, playlists, and filtered map
//! search. Responses are returned as raw [`serde_json::Value`] payloads;
//! failures are returned as a single [`BeatSaverError`] enum.
//!
//! ```no_run
//! use beatsaver_api::{BeatSaverClient, ErrorKind};
//!
//! let client = BeatSaverClient::new()?;
//! match client.maps().map_by_hash("e2f1c7d6") {
//!     Ok(map) => println!("{}", map["name"]),
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("no such map"),
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), beatsaver_api::BeatSaverError>(())
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                           | Endpoint                        |
//! |--------------------------------------------------|---------------------------------|
//! | [`MapsClient::map_by_id`]                        | `GET /maps/id/{id}`             |
//! | [`MapsClient::maps_by_ids`]                      | `GET /maps/ids/{ids}`           |
//! | [`MapsClient::map_by_hash`]                      | `GET /maps/hash/{hash}`         |
//! | [`MapsClient::maps_by_uploader`]                 | `GET /maps/uploader/{id}/{page}`|
//! | [`MapsClient::maps_with_collaborations`]         | `GET /maps/collaborations/{id}` |
//! | [`MapsClient::latest_maps`]                      | `GET /maps/latest`              |
//! | [`MapsClient::deleted_maps`]                     | `GET /maps/deleted`             |
//! | [`MapsClient::maps_by_play_count`]               | `GET /maps/plays/{page}`        |
//! | [`MapsClient::user_by_id`]                       | `GET /users/id/{id}`            |
//! | [`MapsClient::users_by_ids`]                     | `GET /users/ids/{ids}`          |
//! | [`MapsClient::user_by_name`]                     | `GET /users/name/{name}`        |
//! | [`MapsClient::verify_user_token`]                | `POST /users/verify`            |
//! | [`SearchClient::search_maps`]                    | `GET /search/text/{page}`       |
//! | [`PlaylistsClient::latest_playlists`]            | `GET /playlists/latest`         |
//! | [`PlaylistsClient::search_playlists`]            | `GET /playlists/search/{page}`  |
//! | [`PlaylistsClient::search_playlists_v1`]         | `GET /playlists/search/v1/{page}` |
//! | [`PlaylistsClient::playlists_by_user`]           | `GET /playlists/user/{id}/{page}` |
//! | [`PlaylistsClient::playlist_detail`]             | `GET /playlists/id/{id}/{page}` |
//!
//! # Errors
//!
//! Status codes are classified by [`resolve`](crate::resolve::resolve):
//! 404, 401/403, 429 and 5xx each have their own variant, any other non-2xx
//! status is [`BeatSaverError::Unexpected`], and a 2xx body that is not JSON
//! is [`BeatSaverError::Decode`]. Nothing is retried.

pub mod client;
pub mod error;
mod maps;
mod playlist;
pub mod resolve;
mod search;
pub mod transport;
pub mod types;
mod user;

pub use client::{BeatSaverClient, ClientConfig};
pub use error::{BeatSaverError, ErrorKind, Result};
pub use maps::MapsClient;
pub use playlist::PlaylistsClient;
pub use search::SearchClient;
pub use transport::{BASE_URL, Transport};
