//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `mvm_types` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use mvm_types::{MicroVm, MicroVmSpec};

use crate::domain::{ListFilter, StoreError};

// ── Remote Store Port ─────────────────────────────────────────────────────────

/// The collection of MicroVMs owned by the orchestration service.
///
/// Implemented by the HTTP client for the real service and by the in-memory
/// reference store used in tests. Every call blocks the caller until the
/// service answers; nothing is retried here.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Create a MicroVM. The returned record carries the assigned uid.
    async fn create(&self, spec: &MicroVmSpec) -> Result<MicroVm, StoreError>;
    /// Fetch one MicroVM by uid, or `StoreError::NotFound`.
    async fn get(&self, uid: &str) -> Result<MicroVm, StoreError>;
    /// List MicroVMs matching `filter` (see [`ListFilter::matches`]), in
    /// store order.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<MicroVm>, StoreError>;
    /// Delete one MicroVM by uid.
    async fn delete(&self, uid: &str) -> Result<(), StoreError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
