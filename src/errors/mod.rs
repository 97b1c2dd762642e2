// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the mirrorscan library.
//!
//! The load path has exactly one error family: [`ClientError`], produced by
//! the REST client when a request fails. Entity caches never surface the
//! concrete error to observers; they log it and record only its
//! [`ErrorKind`] on the observable state, so consumers can render an error
//! indicator (possibly alongside stale data) without depending on transport
//! details.
//!
//! # Example
//!
//! ```rust,ignore
//! use mirrorscan::{ClientError, ErrorKind};
//!
//! match client.get::<ContractsResponse>("api/v1/contracts", &query).await {
//!     Ok(response) => println!("{} contracts", response.contracts.len()),
//!     Err(ClientError::Response { status, .. }) => {
//!         eprintln!("mirror node rejected the request: {status}");
//!     }
//!     Err(e) => eprintln!("load failed ({:?}): {e}", e.kind()),
//! }
//! ```

mod client;

pub use client::{ClientError, ErrorKind};
