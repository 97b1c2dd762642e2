// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the mirror node REST API.
//!
//! This module provides newtype wrappers and response schemas:
//! - Entity identifiers in `shard.realm.num` form
//! - Pagination limits and sort order for listing endpoints
//! - Serde schemas for the contracts and token-balances endpoints

pub mod entity;
pub mod page;
pub mod schemas;

// Note: Public types are re-exported from lib.rs, not here
