//! Error types for the BeatSaver API client.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when interacting with the BeatSaver API.
///
/// Every resource-client operation fails with exactly one of these. Branch on
/// [`kind`](Self::kind) and [`status`](Self::status); the message text differs
/// between call sites and is meant for humans only.
#[derive(Debug, Error)]
pub enum BeatSaverError {
    /// HTTP 404.
    #[error("[HTTP 404] {message}")]
    NotFound {
        /// Human-readable description.
        message: String,
    },

    /// HTTP 401 or 403.
    #[error("[HTTP {status}] {message}")]
    Auth {
        /// Either `401` or `403`.
        status: u16,
        /// Human-readable description.
        message: String,
    },

    /// HTTP 429.
    #[error("[HTTP 429] {message}")]
    RateLimited {
        /// Human-readable description.
        message: String,
    },

    /// HTTP 500 through 599.
    #[error("[HTTP {status}] {message}")]
    Server {
        /// The exact 5xx status returned.
        status: u16,
        /// Human-readable description.
        message: String,
    },

    /// Any other non-2xx status (e.g. `400`, `302`, `418`).
    #[error("[HTTP {status}] Unexpected error: {body}")]
    Unexpected {
        /// The status returned by the server.
        status: u16,
        /// Raw response body, unmodified.
        body: String,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("[HTTP {status}] malformed JSON body: {source}")]
    Decode {
        /// The (successful) status of the response.
        status: u16,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network-level failure: DNS, connection refused, TLS, timeout, or an
    /// unreadable response body. No status code is available.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Discriminator for [`BeatSaverError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`BeatSaverError::NotFound`]: HTTP 404.
    NotFound,
    /// [`BeatSaverError::Auth`]: HTTP 401 or 403.
    AuthFailure,
    /// [`BeatSaverError::RateLimited`]: HTTP 429.
    RateLimited,
    /// [`BeatSaverError::Server`]: HTTP 500 through 599.
    ServerError,
    /// [`BeatSaverError::Unexpected`]: any other non-2xx status.
    Unexpected,
    /// [`BeatSaverError::Decode`]: 2xx with a body that is not JSON.
    DecodeFailure,
    /// [`BeatSaverError::Transport`]: no HTTP response at all.
    TransportFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::AuthFailure => "authentication failure",
            Self::RateLimited => "rate limited",
            Self::ServerError => "server error",
            Self::Unexpected => "unexpected response",
            Self::DecodeFailure => "decode failure",
            Self::TransportFailure => "transport failure",
        };
        f.write_str(name)
    }
}

impl BeatSaverError {
    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Auth { .. } => ErrorKind::AuthFailure,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Server { .. } => ErrorKind::ServerError,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::Transport(_) => ErrorKind::TransportFailure,
        }
    }

    /// Return the HTTP status that produced this error, if there was one.
    ///
    /// `None` only for [`BeatSaverError::Transport`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Auth { status, .. }
            | Self::Server { status, .. }
            | Self::Unexpected { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// Convenience alias for `Result<T, BeatSaverError>`.
pub type Result<T> = std::result::Result<T, BeatSaverError>;
