// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Observable snapshot of an entity cache.

use std::sync::Arc;

use crate::errors::ErrorKind;

/// Snapshot of a cache's observable state.
///
/// Consumers can distinguish three user-visible situations from one
/// snapshot: no data yet while loading (`value` absent, `loading` true),
/// data present (`value` set), and error present (`error` set, possibly
/// alongside a stale `value` retained from an earlier successful load).
///
/// `value` is held behind an [`Arc`], so snapshots are cheap to clone and
/// hand out through a watch channel regardless of payload size.
#[derive(Debug)]
pub struct CacheState<T> {
    /// Payload of the last successful load, if any.
    pub value: Option<Arc<T>>,
    /// Whether a load initiated by the most recent request is outstanding.
    pub loading: bool,
    /// Marker of the last failed load, cleared by the next success.
    pub error: Option<ErrorKind>,
    /// Monotonic counter incremented on every load attempt and on every
    /// invalidation; used to discard superseded in-flight responses.
    pub version: u64,
}

impl<T> CacheState<T> {
    /// The state of a freshly constructed cache: nothing loaded, not loading.
    pub(crate) fn empty() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
            version: 0,
        }
    }

    /// Whether the cache holds no value (loaded nothing yet, or cleared).
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

// Manual impl: `T` need not be `Clone`, the value is shared via `Arc`.
impl<T> Clone for CacheState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            loading: self.loading,
            error: self.error,
            version: self.version,
        }
    }
}
