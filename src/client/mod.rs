// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Typed REST client for the mirror node.
//!
//! [`MirrorClient`] is the transport collaborator the entity caches delegate
//! to: a single capability, `get`, that performs one parameterized GET
//! against the configured base URL and decodes the JSON body into a typed
//! schema. It carries no retry logic; retrying is the owner's concern
//! (typically the cache's auto-refresh timer or an explicit reload).
//!
//! # Example
//!
//! ```rust,ignore
//! use mirrorscan::{ContractsResponse, MirrorClient};
//!
//! let client = MirrorClient::builder("https://mainnet.mirrornode.example.com/")?.build()?;
//! let page: ContractsResponse = client
//!     .get("api/v1/contracts", &[("limit", "100".to_string())])
//!     .await?;
//! ```

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::errors::ClientError;

mod config;

pub use config::MirrorClientBuilder;

/// REST client bound to one mirror node base URL.
///
/// Cheap to clone: the underlying connection pool is shared between clones,
/// so one client can back any number of entity caches.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MirrorClient {
    /// Create a builder for a client targeting `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPath`] if `base_url` is not a valid URL.
    pub fn builder(base_url: &str) -> Result<MirrorClientBuilder, ClientError> {
        MirrorClientBuilder::new(base_url)
    }

    pub(crate) fn from_parts(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Base URL this client issues requests against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one GET against `path` with the given query parameters and
    /// decode the JSON body into `T`.
    ///
    /// `path` is joined onto the base URL, so it is given without a leading
    /// slash (e.g. `api/v1/contracts`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if no HTTP response arrived
    /// - [`ClientError::Response`] if the status was not 2xx
    /// - [`ClientError::Decode`] if the body did not match `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ClientError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        debug!(path, query = ?query, "GET mirror node resource");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| {
                warn!(path, error = %source, "mirror node request failed");
                ClientError::Transport {
                    path: path.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(path, %status, "mirror node returned error status");
            return Err(ClientError::Response {
                path: path.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| {
            warn!(path, error = %source, "mirror node response did not match schema");
            ClientError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }
}
