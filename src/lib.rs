//! Polling entity caches for a mirror node REST API.
//!
//! This crate provides the data-fetch layer of a mirror node explorer: each
//! [`EntityCache`] wraps one remote resource with memoization of the last
//! successful response, loading and error markers, optional timed
//! auto-refresh, and version-stamped discarding of superseded in-flight
//! responses. Concrete caches bind the generic mechanism to specific
//! endpoints ([`ContractsCache`], [`TokenBalancesCache`]) through a typed
//! REST client ([`MirrorClient`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use mirrorscan::{ContractsCache, MirrorClient, PageLimit, RefreshPolicy};
//!
//! let client = MirrorClient::builder("https://mainnet.mirrornode.example.com/")?.build()?;
//! let contracts = ContractsCache::new(client, PageLimit::MAX, RefreshPolicy::disabled());
//!
//! contracts.reload().await;
//! if let Some(page) = contracts.value() {
//!     for contract in &page.contracts {
//!         println!("{:?}", contract.contract_id);
//!     }
//! }
//! ```

pub mod cache;
pub mod caches;
pub mod client;
pub mod errors;
pub mod types;

pub use cache::{CacheState, EntityCache, EntityLoader, RefreshPolicy};
pub use caches::{ContractsCache, ContractsLoader, TokenBalancesCache, TokenBalancesLoader};
pub use client::{MirrorClient, MirrorClientBuilder};
pub use errors::{ClientError, ErrorKind};
pub use types::entity::{EntityId, InvalidEntityId};
pub use types::page::{PageLimit, SortOrder};
pub use types::schemas::{
    Contract, ContractsResponse, Links, TokenBalancesResponse, TokenDistribution,
};
