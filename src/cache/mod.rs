// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Generic polling entity cache.
//!
//! This module provides a reusable caching mechanism for any single remote
//! resource fetched over HTTP. An [`EntityCache`] memoizes the last
//! successful response, exposes loading and error markers to observers, and
//! can refresh itself on a fixed cadence. Version stamping guarantees that
//! rapid-fire or overlapping reloads never interleave: the externally
//! observable state always corresponds to the most recently issued load that
//! has settled.

mod entity;
mod policy;
mod state;

pub use entity::{EntityCache, EntityLoader};
pub use policy::RefreshPolicy;
pub use state::CacheState;
