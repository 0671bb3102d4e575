//! User API.
//!
//! Endpoints:
//! - `GET /users/id/{id}`
//! - `GET /users/ids/{id},{id},...`
//! - `GET /users/name/{name}`
//! - `POST /users/verify` with body `{ "token": "..." }`
//!
//! Response (single user):
//! ```json
//! {
//!   "id": 4284201,
//!   "name": "...",
//!   "avatar": "https://...",
//!   "stats": { "totalMaps": 12, "avgBpm": 160.5, ... }
//! }
//! ```

use serde_json::{Value, json};

use crate::error::Result;
use crate::maps::{MapsClient, join_ids, segment};
use crate::transport::Request;

impl MapsClient<'_> {
    /// Get a user profile by numeric id.
    pub fn user_by_id(&self, user_id: &str) -> Result<Value> {
        self.call(&Request::get(format!("/users/id/{}", segment(user_id))))
    }

    /// Get several users in one request. Order of `user_ids` is preserved.
    pub fn users_by_ids<S: AsRef<str>>(&self, user_ids: &[S]) -> Result<Value> {
        self.call(&Request::get(format!("/users/ids/{}", join_ids(user_ids))))
    }

    /// Get a user profile by display name.
    pub fn user_by_name(&self, username: &str) -> Result<Value> {
        self.call(&Request::get(format!("/users/name/{}", segment(username))))
    }

    /// Ask the service whether `token` is valid.
    ///
    /// The token is only passed through; it is not stored or attached to
    /// later requests.
    ///
    /// # Errors
    ///
    /// - [`BeatSaverError::Auth`](crate::BeatSaverError::Auth) — token rejected
    ///   with 401/403
    pub fn verify_user_token(&self, token: &str) -> Result<Value> {
        self.call(&verify_request(token))
    }
}

fn verify_request(token: &str) -> Request {
    Request::post("/users/verify", json!({ "token": token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[test]
    fn verify_posts_token_as_json() {
        let req = verify_request("abc123");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/users/verify");
        assert_eq!(req.body, Some(json!({ "token": "abc123" })));
    }

    #[test]
    fn usernames_are_encoded() {
        assert_eq!(segment("Top Cat"), "Top%20Cat");
    }
}
