//! Remote progress-store adapter.
//!
//! # Architecture
//!
//! The rest of the workspace never sees HTTP. It sees [`ProgressStore`], the
//! four-operation contract the reconciliation service is written against:
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | [`find_student`](ProgressStore::find_student) | Single-row fetch by handle; a missing learner is `Ok(None)`, not an error |
//! | [`fetch_progress`](ProgressStore::fetch_progress) | All progress rows for one learner |
//! | [`insert_progress`](ProgressStore::insert_progress) | Insert one row; upsert on the (learner, module) key |
//! | [`update_progress`](ProgressStore::update_progress) | Partial update of one row by (learner, module) key |
//!
//! [`RestStore`] implements the contract against a PostgREST-style dialect:
//! key-equality filters in query strings, JSON rows, upsert via the
//! `Prefer: resolution=merge-duplicates` header. Any store exposing the same
//! four operations with equivalent filtering satisfies the contract equally.
//!
//! # Error Handling
//!
//! Requests are retried (exponential backoff, down-jitter, `Retry-After`
//! support) before a failure is surfaced as a [`StoreError`]. Callers decide
//! retry-vs-give-up with [`StoreError::is_transient`].

mod error;
mod rest;
pub mod retry;

pub use error::StoreError;
pub use rest::RestStore;

use std::sync::OnceLock;
use std::time::Duration;

use unitlab_types::{Handle, ModuleSlug, NewProgress, ProgressPatch, ProgressRecord, Student, StudentId};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 8;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// The four store operations the platform core is allowed to depend on.
///
/// Implementations are single-session collaborators; futures need not be
/// `Send` because the reconciliation service never moves them across tasks.
#[allow(async_fn_in_trait)]
pub trait ProgressStore {
    /// Resolve a learner row by handle. A handle with no row is `Ok(None)`.
    async fn find_student(&self, handle: &Handle) -> Result<Option<Student>, StoreError>;

    /// Every progress row belonging to one learner.
    async fn fetch_progress(&self, student: StudentId) -> Result<Vec<ProgressRecord>, StoreError>;

    /// Insert a progress row, upserting on the (learner, module) key so that
    /// a retried insert cannot create a duplicate.
    async fn insert_progress(&self, row: &NewProgress) -> Result<(), StoreError>;

    /// Apply a partial update to the row keyed by (learner, module).
    async fn update_progress(
        &self,
        student: StudentId,
        module: ModuleSlug,
        patch: &ProgressPatch,
    ) -> Result<(), StoreError>;
}

/// Shared HTTP client for all store traffic.
///
/// Plain-HTTP endpoints stay allowed: self-hosted and local development
/// stores listen on localhost without TLS.
pub(crate) fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("failed to build pooled HTTP client: {e}. Using defaults.");
                reqwest::Client::new()
            })
    })
}
