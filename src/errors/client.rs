// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the mirror node REST client.

use reqwest::StatusCode;

/// Errors that can occur when fetching a resource from the mirror node.
///
/// Every failure of a single GET is normalized into one of three shapes:
/// the request never produced an HTTP response ([`Transport`]), the mirror
/// node answered with a non-success status ([`Response`]), or the body did
/// not match the expected schema ([`Decode`]).
///
/// Entity caches reduce this to an [`ErrorKind`] via [`ClientError::kind`]
/// before exposing it to observers; the full error is only used for logging.
///
/// [`Transport`]: ClientError::Transport
/// [`Response`]: ClientError::Response
/// [`Decode`]: ClientError::Decode
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request failed before an HTTP response arrived.
    ///
    /// Covers DNS resolution failures, connection errors, and timeouts.
    #[error("transport failure for {path}: {source}")]
    Transport {
        /// Request path relative to the base URL
        path: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The mirror node answered with a non-success HTTP status.
    #[error("mirror node returned HTTP {status} for {path}")]
    Response {
        /// Request path relative to the base URL
        path: String,
        /// HTTP status code of the response
        status: StatusCode,
    },

    /// The response body could not be decoded into the expected schema.
    #[error("failed to decode response body for {path}: {source}")]
    Decode {
        /// Request path relative to the base URL
        path: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The request path could not be joined onto the base URL.
    #[error("invalid request path {path}: {source}")]
    InvalidPath {
        /// Offending request path
        path: String,
        /// Underlying URL parse error
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be constructed.
    ///
    /// Only produced by [`MirrorClientBuilder::build`](crate::client::MirrorClientBuilder::build).
    #[error("failed to construct HTTP client: {source}")]
    Builder {
        /// Underlying client construction error
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Create a `Response` error for a path and status code.
    pub fn response(path: impl Into<String>, status: StatusCode) -> Self {
        ClientError::Response {
            path: path.into(),
            status,
        }
    }

    /// The coarse kind of this error, as recorded on cache state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport { .. } => ErrorKind::Transport,
            ClientError::Response { .. } => ErrorKind::Response,
            ClientError::Decode { .. } => ErrorKind::Decode,
            // Construction-time failures behave like an unreachable endpoint.
            ClientError::InvalidPath { .. } | ClientError::Builder { .. } => ErrorKind::Transport,
        }
    }
}

/// Coarse classification of a failed load, surfaced on cache state.
///
/// The concrete [`ClientError`] is logged at the cache boundary and never
/// propagated to observers; this marker is all a consumer sees, and it does
/// not change cache behavior (a failed load always keeps the previous value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, DNS, or timeout failure; no HTTP response arrived.
    Transport,
    /// The mirror node answered with a non-success HTTP status.
    Response,
    /// The response body did not match the expected schema.
    Decode,
}
