// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cache for the contracts listing endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::cache::{CacheState, EntityCache, EntityLoader, RefreshPolicy};
use crate::client::MirrorClient;
use crate::errors::{ClientError, ErrorKind};
use crate::types::page::PageLimit;
use crate::types::schemas::ContractsResponse;

/// Loader fetching one page of `GET api/v1/contracts`.
pub struct ContractsLoader {
    client: MirrorClient,
    limit: PageLimit,
}

#[async_trait]
impl EntityLoader for ContractsLoader {
    type Entity = ContractsResponse;

    async fn load(&self) -> Result<ContractsResponse, ClientError> {
        let query = [("limit", self.limit.to_string())];
        self.client.get("api/v1/contracts", &query).await
    }
}

/// Polling cache over the most recently created contracts.
///
/// The page limit is fixed at construction. Pass
/// [`RefreshPolicy::disabled`] for a cache that only reloads on demand.
pub struct ContractsCache {
    cache: EntityCache<ContractsLoader>,
}

impl ContractsCache {
    /// Create a contracts cache fetching pages of `limit` entries.
    pub fn new(client: MirrorClient, limit: PageLimit, policy: RefreshPolicy) -> Self {
        let loader = ContractsLoader { client, limit };
        Self {
            cache: EntityCache::new(loader, policy),
        }
    }

    /// Trigger a new load. See [`EntityCache::reload`].
    pub async fn reload(&self) {
        self.cache.reload().await;
    }

    /// Snapshot of the current observable state.
    pub fn state(&self) -> CacheState<ContractsResponse> {
        self.cache.state()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CacheState<ContractsResponse>> {
        self.cache.subscribe()
    }

    /// The last successfully fetched page, if any.
    pub fn value(&self) -> Option<Arc<ContractsResponse>> {
        self.cache.value()
    }

    /// Whether a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    /// Marker of the last failed load, if the most recent settle failed.
    pub fn error(&self) -> Option<ErrorKind> {
        self.cache.error()
    }

    /// Dispose of the cache. See [`EntityCache::dispose`].
    pub fn dispose(&self) {
        self.cache.dispose();
    }
}
