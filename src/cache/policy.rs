// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Auto-refresh policy for entity caches.

use std::time::Duration;

/// Governs whether and how often a cache re-fetches its resource
/// automatically after a settled load.
///
/// With auto-refresh enabled, the cache schedules one reload `update_period`
/// after every settled load (success or failure), up to `max_auto_refreshes`
/// automatic firings, or indefinitely when no limit is set. Manual reloads
/// reset the countdown of a pending timer and never consume the budget.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use mirrorscan::RefreshPolicy;
///
/// // Never refresh automatically (the default)
/// let manual = RefreshPolicy::disabled();
/// assert!(!manual.is_enabled());
///
/// // Refresh every 5 seconds, at most 10 times
/// let bounded = RefreshPolicy::every(Duration::from_secs(5)).with_max_refreshes(10);
/// assert!(bounded.is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshPolicy {
    /// Interval between a settled load and the next automatic reload.
    /// `None` disables auto-refresh.
    pub update_period: Option<Duration>,
    /// Ceiling on the number of automatic reloads. `None` means unlimited.
    pub max_auto_refreshes: Option<u64>,
}

impl RefreshPolicy {
    /// Policy with auto-refresh turned off.
    pub const fn disabled() -> Self {
        Self {
            update_period: None,
            max_auto_refreshes: None,
        }
    }

    /// Policy refreshing every `period`, with no firing limit.
    pub const fn every(period: Duration) -> Self {
        Self {
            update_period: Some(period),
            max_auto_refreshes: None,
        }
    }

    /// Caps the number of automatic reloads.
    pub const fn with_max_refreshes(mut self, max: u64) -> Self {
        self.max_auto_refreshes = Some(max);
        self
    }

    /// Whether this policy schedules any automatic reloads.
    pub const fn is_enabled(&self) -> bool {
        self.update_period.is_some()
    }
}
