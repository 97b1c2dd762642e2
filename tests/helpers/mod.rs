// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for mirrorscan integration tests
//!
//! Provides a scripted loader to drive the generic entity cache without a
//! real mirror node, with full control over completion order and outcomes.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mirrorscan::{ClientError, EntityLoader};
use reqwest::StatusCode;

/// Install a logging subscriber once, so `RUST_LOG` surfaces cache logs
/// when a test is run in isolation.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One scripted load outcome with an artificial completion delay.
pub enum Step {
    /// Resolve successfully with the given payload after the delay.
    Success(&'static str, Duration),
    /// Fail with the given HTTP status after the delay.
    Failure(StatusCode, Duration),
}

/// Loader that replays a script of delayed outcomes and records call times.
///
/// Once the script is exhausted, every further call resolves instantly with
/// the payload `"auto"`, so auto-refresh cadence tests only need to assert
/// on call count and spacing.
///
/// # Example
///
/// ```rust,ignore
/// let loader = MockLoader::new(vec![
///     Step::Success("old", Duration::from_millis(100)),
///     Step::Success("new", Duration::from_millis(10)),
/// ]);
/// let cache = EntityCache::new(loader, RefreshPolicy::disabled());
/// ```
pub struct MockLoader {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU64,
    instants: Mutex<Vec<tokio::time::Instant>>,
}

impl MockLoader {
    /// Create a loader that replays `steps` in order.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicU64::new(0),
            instants: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `load` has been called.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Instants at which each `load` call started.
    pub fn instants(&self) -> Vec<tokio::time::Instant> {
        self.instants.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntityLoader for MockLoader {
    type Entity = String;

    async fn load(&self) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.instants
            .lock()
            .unwrap()
            .push(tokio::time::Instant::now());

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Success(payload, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(payload.to_string())
            }
            Some(Step::Failure(status, delay)) => {
                tokio::time::sleep(delay).await;
                Err(ClientError::response("mock", status))
            }
            None => Ok("auto".to_string()),
        }
    }
}
