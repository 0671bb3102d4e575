//! Classification of HTTP outcomes.
//!
//! Every resource client funnels its [`RawResponse`] through [`resolve`], so
//! the status-to-error mapping lives in exactly one place:
//!
//! | Status         | Result                          |
//! |----------------|---------------------------------|
//! | `404`          | [`BeatSaverError::NotFound`]    |
//! | `401`, `403`   | [`BeatSaverError::Auth`]        |
//! | `429`          | [`BeatSaverError::RateLimited`] |
//! | `500..=599`    | [`BeatSaverError::Server`]      |
//! | other non-2xx  | [`BeatSaverError::Unexpected`]  |
//! | 2xx, bad JSON  | [`BeatSaverError::Decode`]      |
//! | 2xx            | decoded JSON payload            |

use serde_json::Value;

use crate::error::{BeatSaverError, Result};
use crate::transport::{RawResponse, Request, Transport};

/// Map a raw HTTP outcome to the decoded payload or a typed error.
///
/// Rules are checked in table order; the first match wins.
pub fn resolve(resp: RawResponse) -> Result<Value> {
    let RawResponse { status, body } = resp;
    match status {
        404 => Err(BeatSaverError::NotFound {
            message: "Resource not found".into(),
        }),
        401 | 403 => Err(BeatSaverError::Auth {
            status,
            message: "Authentication failed".into(),
        }),
        429 => Err(BeatSaverError::RateLimited {
            message: "Rate limit exceeded".into(),
        }),
        500..=599 => Err(BeatSaverError::Server {
            status,
            message: "Server error".into(),
        }),
        200..=299 => serde_json::from_slice(&body)
            .map_err(|source| BeatSaverError::Decode { status, source }),
        _ => Err(BeatSaverError::Unexpected {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }),
    }
}

/// Send `request` over `transport` and resolve the outcome.
pub(crate) fn fetch(transport: &Transport, request: &Request) -> Result<Value> {
    resolve(transport.send(request)?)
}
