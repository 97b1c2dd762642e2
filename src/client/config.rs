// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Builder for [`MirrorClient`].

use std::time::Duration;

use url::Url;

use super::MirrorClient;
use crate::errors::ClientError;

/// Default request timeout (prevents hanging on unresponsive mirror nodes).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for a [`MirrorClient`].
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use mirrorscan::MirrorClient;
///
/// let client = MirrorClient::builder("https://testnet.mirrornode.example.com/")?
///     .timeout(Duration::from_secs(10))
///     .user_agent("my-explorer/1.0")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct MirrorClientBuilder {
    base_url: Url,
    timeout: Duration,
    user_agent: Option<String>,
}

impl MirrorClientBuilder {
    /// Create a builder targeting `base_url`.
    ///
    /// A trailing slash is appended if missing so relative request paths
    /// join onto the full base path rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPath`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|source| ClientError::InvalidPath {
            path: normalized,
            source,
        })?;

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        })
    }

    /// Sets the per-request timeout.
    ///
    /// Default: 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configured [`MirrorClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Builder`] if the underlying HTTP client cannot
    /// be constructed (e.g. TLS backend initialization failure).
    pub fn build(self) -> Result<MirrorClient, ClientError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder
            .build()
            .map_err(|source| ClientError::Builder { source })?;

        Ok(MirrorClient::from_parts(http, self.base_url))
    }
}
