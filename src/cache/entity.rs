// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Generic single-resource polling cache.
//!
//! [`EntityCache`] owns the load/refresh/observe contract for one remote
//! resource; what that resource is comes from the [`EntityLoader`] it is
//! constructed with. Version stamping is the load-bearing mechanism: every
//! load attempt is tagged with a monotonically increasing counter, and a
//! response only commits if its tag is still current when it arrives. Two
//! overlapping reloads therefore always converge to the value of whichever
//! was issued last, regardless of network completion order, without any
//! network-level cancellation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::{ClientError, ErrorKind};

use super::policy::RefreshPolicy;
use super::state::CacheState;

/// Capability an [`EntityCache`] delegates to for fetching its resource.
///
/// Implementations perform exactly one remote fetch using their current
/// configuration and return the raw typed payload, or fail with a
/// [`ClientError`]. They must not hold any cache state of their own; the
/// cache orchestrates all state transitions around this call.
#[async_trait]
pub trait EntityLoader: Send + Sync + 'static {
    /// Payload type produced by a successful load.
    type Entity: Send + Sync + 'static;

    /// Perform one remote fetch.
    async fn load(&self) -> Result<Self::Entity, ClientError>;
}

/// Generic polling cache for a single remote resource.
///
/// # Contract
///
/// - [`reload`](Self::reload) triggers a new load unconditionally; the most
///   recently issued load is the only one allowed to commit.
/// - A failed load records an [`ErrorKind`] marker but never clears a
///   previously cached value (stale-on-error).
/// - [`clear`](Self::clear) drops value and error and invalidates any
///   in-flight load, without scheduling a new one.
/// - With an enabled [`RefreshPolicy`], one reload is scheduled after every
///   settled load; the pending timer is replaced on each settle, so a manual
///   reload resets the countdown rather than racing the timer.
/// - [`dispose`](Self::dispose) cancels the timer and makes any in-flight
///   load unable to mutate state; it is idempotent and also runs on drop.
///
/// # Example
///
/// ```rust,ignore
/// let cache = EntityCache::new(loader, RefreshPolicy::disabled());
/// cache.reload().await;
/// if let Some(page) = cache.value() {
///     render(&page);
/// }
/// ```
pub struct EntityCache<L: EntityLoader> {
    inner: Arc<Inner<L>>,
}

struct Inner<L: EntityLoader> {
    loader: L,
    tx: watch::Sender<CacheState<L::Entity>>,
    policy: RefreshPolicy,
    /// Automatic reloads still allowed to fire; `u64::MAX` means unlimited.
    auto_remaining: AtomicU64,
    /// The single pending auto-refresh timer, replaced on every settle.
    timer: Mutex<Option<JoinHandle<()>>>,
    disposed: AtomicBool,
}

impl<L: EntityLoader> EntityCache<L> {
    /// Create a cache around `loader` with the given refresh policy.
    ///
    /// No load is performed at construction; the owner triggers the first
    /// one via [`reload`](Self::reload), after which auto-refresh (if
    /// enabled) keeps the cache current.
    pub fn new(loader: L, policy: RefreshPolicy) -> Self {
        let (tx, _rx) = watch::channel(CacheState::empty());
        let auto_remaining = policy.max_auto_refreshes.unwrap_or(u64::MAX);

        Self {
            inner: Arc::new(Inner {
                loader,
                tx,
                policy,
                auto_remaining: AtomicU64::new(auto_remaining),
                timer: Mutex::new(None),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Trigger a new load unconditionally.
    ///
    /// Supersedes any load still in flight: when the older response arrives
    /// it is discarded silently. On success the cached value is replaced and
    /// the error marker cleared; on failure the error marker is set and the
    /// previous value kept. No-op on a disposed cache.
    pub async fn reload(&self) {
        Inner::reload(&self.inner).await;
    }

    /// Drop the cached value and error marker and invalidate any in-flight
    /// load, without scheduling a new one.
    ///
    /// Used when a loader's identifying configuration changes and a stale
    /// value must not be shown for the new identity.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Snapshot of the current observable state.
    pub fn state(&self) -> CacheState<L::Entity> {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver is notified on every committed transition (load started,
    /// load settled, cleared, disposed); superseded responses never produce
    /// a notification because they never commit.
    pub fn subscribe(&self) -> watch::Receiver<CacheState<L::Entity>> {
        self.inner.tx.subscribe()
    }

    /// Payload of the last successful load, if any.
    pub fn value(&self) -> Option<Arc<L::Entity>> {
        self.inner.tx.borrow().value.clone()
    }

    /// Whether a load initiated by the most recent request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.inner.tx.borrow().loading
    }

    /// Marker of the last failed load, if the most recent settle failed.
    pub fn error(&self) -> Option<ErrorKind> {
        self.inner.tx.borrow().error
    }

    /// Access the loader, e.g. to change its mutable configuration.
    ///
    /// Callers that change an identifying parameter must follow up with
    /// [`clear`](Self::clear).
    pub fn loader(&self) -> &L {
        &self.inner.loader
    }

    /// Turn off auto-refresh and cancel any pending timer.
    ///
    /// Already-exhausted or disabled policies are unaffected; the cache
    /// remains usable for manual reloads.
    pub fn stop_auto_refresh(&self) {
        self.inner.auto_remaining.store(0, Ordering::SeqCst);
        self.inner.abort_timer();
    }

    /// Dispose of the cache: cancel any pending timer and prevent any
    /// in-flight load from mutating state. Idempotent.
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl<L: EntityLoader> Drop for EntityCache<L> {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl<L: EntityLoader> Inner<L> {
    async fn reload(inner: &Arc<Self>) {
        if inner.disposed.load(Ordering::SeqCst) {
            return;
        }

        let mut version = 0;
        inner.tx.send_modify(|state| {
            state.version += 1;
            state.loading = true;
            version = state.version;
        });

        // If this future is dropped mid-load, the guard settles the loading
        // flag so observers are not left watching a load that no longer
        // exists.
        let mut guard = LoadGuard {
            tx: &inner.tx,
            version,
            armed: true,
        };

        let outcome = inner.loader.load().await;

        let mut committed = false;
        inner.tx.send_if_modified(|state| {
            if inner.disposed.load(Ordering::SeqCst) || state.version != version {
                debug!(
                    version,
                    current = state.version,
                    "discarding superseded load result"
                );
                return false;
            }

            match outcome {
                Ok(entity) => {
                    state.value = Some(Arc::new(entity));
                    state.error = None;
                    debug!(version, "entity load committed");
                }
                Err(err) => {
                    warn!(
                        version,
                        kind = ?err.kind(),
                        error = %err,
                        "entity load failed, keeping previous value"
                    );
                    state.error = Some(err.kind());
                }
            }
            state.loading = false;
            committed = true;
            true
        });
        guard.armed = false;

        if committed {
            Self::schedule_auto_refresh(inner);
        }
    }

    fn clear(&self) {
        self.tx.send_modify(|state| {
            state.value = None;
            state.error = None;
            state.loading = false;
            // Bumping (rather than zeroing) the version keeps in-flight tags
            // from ever matching again.
            state.version += 1;
        });
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.abort_timer();
        self.tx.send_modify(|state| {
            state.version += 1;
            state.loading = false;
        });
        debug!("entity cache disposed");
    }

    /// Schedule one automatic reload after the policy's update period.
    ///
    /// Replaces (and aborts) any pending timer, so the countdown restarts
    /// from the most recent settle. The spawned task holds only a weak
    /// reference: a pending timer cannot keep a dropped cache alive.
    fn schedule_auto_refresh(inner: &Arc<Self>) {
        let Some(period) = inner.policy.update_period else {
            return;
        };
        if inner.disposed.load(Ordering::SeqCst)
            || inner.auto_remaining.load(Ordering::SeqCst) == 0
        {
            return;
        }

        let weak = Arc::downgrade(inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(period).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.disposed.load(Ordering::SeqCst) || !inner.consume_auto_refresh() {
                return;
            }
            debug!("auto-refresh firing");
            Inner::reload(&inner).await;
        });

        let mut slot = lock_unpoisoned(&inner.timer);
        if let Some(old) = slot.replace(handle) {
            old.abort();
        }
    }

    fn abort_timer(&self) {
        if let Some(handle) = lock_unpoisoned(&self.timer).take() {
            handle.abort();
        }
    }

    /// Take one firing from the auto-refresh budget.
    ///
    /// Returns `false` once the budget is exhausted. Unlimited policies
    /// (sentinel `u64::MAX`) always succeed without decrementing.
    fn consume_auto_refresh(&self) -> bool {
        loop {
            let remaining = self.auto_remaining.load(Ordering::SeqCst);
            if remaining == u64::MAX {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            if self
                .auto_remaining
                .compare_exchange(remaining, remaining - 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return true;
            }
        }
    }
}

/// A poisoned lock only means another thread panicked mid-update; the timer
/// slot holds no invariants worth propagating a panic for.
fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Settles the loading flag if a reload future is dropped before its
/// response was handled (e.g. the owner raced it against a timeout).
struct LoadGuard<'a, T> {
    tx: &'a watch::Sender<CacheState<T>>,
    version: u64,
    armed: bool,
}

impl<T> Drop for LoadGuard<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.tx.send_if_modified(|state| {
            if state.version == self.version && state.loading {
                state.loading = false;
                true
            } else {
                false
            }
        });
    }
}
