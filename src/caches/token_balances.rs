// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cache for the token balances sub-resource.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::cache::{CacheState, EntityCache, EntityLoader, RefreshPolicy};
use crate::client::MirrorClient;
use crate::errors::{ClientError, ErrorKind};
use crate::types::entity::EntityId;
use crate::types::page::{PageLimit, SortOrder};
use crate::types::schemas::TokenBalancesResponse;

/// Default cadence for keeping a balances view current.
const BALANCES_UPDATE_PERIOD: Duration = Duration::from_secs(5);
/// Default ceiling on automatic refreshes for a balances view.
const BALANCES_MAX_AUTO_REFRESHES: u64 = 10;

/// Loader fetching one page of `GET api/v1/tokens/{token_id}/balances`.
///
/// The token identifier is mutable so one cache can be repointed at another
/// token; limit and order are fixed.
pub struct TokenBalancesLoader {
    client: MirrorClient,
    token_id: RwLock<EntityId>,
    limit: PageLimit,
    order: SortOrder,
}

impl TokenBalancesLoader {
    fn token_id(&self) -> EntityId {
        match self.token_id.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn set_token_id(&self, token_id: EntityId) {
        let mut guard = match self.token_id.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = token_id;
    }
}

#[async_trait]
impl EntityLoader for TokenBalancesLoader {
    type Entity = TokenBalancesResponse;

    async fn load(&self) -> Result<TokenBalancesResponse, ClientError> {
        let path = format!("api/v1/tokens/{}/balances", self.token_id());
        let query = [
            ("limit", self.limit.to_string()),
            ("order", self.order.to_string()),
        ];
        self.client.get(&path, &query).await
    }
}

/// Polling cache over the holders of one token, in ascending account order.
///
/// By default refreshes every 5 seconds, at most 10 times, after the first
/// settled load; use [`with_policy`](Self::with_policy) to override.
pub struct TokenBalancesCache {
    cache: EntityCache<TokenBalancesLoader>,
}

impl TokenBalancesCache {
    /// Create a balances cache for `token_id` with the default refresh
    /// policy (5s cadence, 10 automatic refreshes).
    pub fn new(client: MirrorClient, token_id: EntityId, limit: PageLimit) -> Self {
        Self::with_policy(
            client,
            token_id,
            limit,
            RefreshPolicy::every(BALANCES_UPDATE_PERIOD)
                .with_max_refreshes(BALANCES_MAX_AUTO_REFRESHES),
        )
    }

    /// Create a balances cache with an explicit refresh policy.
    pub fn with_policy(
        client: MirrorClient,
        token_id: EntityId,
        limit: PageLimit,
        policy: RefreshPolicy,
    ) -> Self {
        let loader = TokenBalancesLoader {
            client,
            token_id: RwLock::new(token_id),
            limit,
            order: SortOrder::Asc,
        };
        Self {
            cache: EntityCache::new(loader, policy),
        }
    }

    /// Token this cache currently points at.
    pub fn token_id(&self) -> EntityId {
        self.cache.loader().token_id()
    }

    /// Repoint the cache at another token.
    ///
    /// Clears any cached value and error immediately and invalidates
    /// in-flight loads; a value fetched for one token is never shown for
    /// another. No load is scheduled until the next reload (manual or
    /// timer-driven).
    pub fn set_token_id(&self, token_id: EntityId) {
        self.cache.loader().set_token_id(token_id);
        self.cache.clear();
    }

    /// Trigger a new load. See [`EntityCache::reload`].
    pub async fn reload(&self) {
        self.cache.reload().await;
    }

    /// Snapshot of the current observable state.
    pub fn state(&self) -> CacheState<TokenBalancesResponse> {
        self.cache.state()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CacheState<TokenBalancesResponse>> {
        self.cache.subscribe()
    }

    /// The last successfully fetched page, if any.
    pub fn value(&self) -> Option<Arc<TokenBalancesResponse>> {
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
