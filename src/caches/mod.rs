// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Concrete entity caches, one per mirror node resource.
//!
//! Each cache binds the generic [`EntityCache`](crate::cache::EntityCache)
//! to one REST endpoint through a resource-specific loader. Pagination limit
//! and sort order are fixed at construction; the caches hold a single-page
//! snapshot and never follow pagination cursors.

mod contracts;
mod token_balances;

pub use contracts::{ContractsCache, ContractsLoader};
pub use token_balances::{TokenBalancesCache, TokenBalancesLoader};
