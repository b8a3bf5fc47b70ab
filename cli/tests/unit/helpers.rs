//! Shared test helpers: seeded stores, a failing store and recording reporters.

#![allow(dead_code, clippy::expect_used)]

use std::sync::Mutex;

use mvm_types::{MicroVm, MicroVmSpec};
use mvmctl_cli::application::ports::{ProgressReporter, RemoteStore};
use mvmctl_cli::domain::{ListFilter, StoreError};
use mvmctl_cli::infra::reference_store::ReferenceStore;

// ── Store construction ───────────────────────────────────────────────────────

/// Create one MicroVM and return its uid.
pub async fn seed(store: &impl RemoteStore, name: &str, namespace: &str) -> String {
    store
        .create(&MicroVmSpec::named(name, namespace))
        .await
        .expect("create")
        .uid()
        .expect("uid assigned")
        .to_string()
}

/// A reference store holding the given `(name, namespace)` pairs, in order.
pub async fn seeded(pairs: &[(&str, &str)]) -> (ReferenceStore, Vec<String>) {
    let store = ReferenceStore::new();
    let mut uids = Vec::with_capacity(pairs.len());
    for (name, namespace) in pairs {
        uids.push(seed(&store, name, namespace).await);
    }
    (store, uids)
}

/// Everything in the store, in store order.
pub async fn all_vms(store: &impl RemoteStore) -> Vec<MicroVm> {
    store.list(&ListFilter::default()).await.expect("list")
}

pub fn uids(vms: &[MicroVm]) -> Vec<String> {
    vms.iter()
        .map(|vm| vm.uid().expect("uid").to_string())
        .collect()
}

// ── Failing store ────────────────────────────────────────────────────────────

/// Wraps a reference store and fails the delete of one uid with a transport
/// error, as a service that goes away mid-batch would.
pub struct FailOnDelete {
    pub inner: ReferenceStore,
    pub fail_uid: String,
}

impl RemoteStore for FailOnDelete {
    async fn create(&self, spec: &MicroVmSpec) -> Result<MicroVm, StoreError> {
        self.inner.create(spec).await
    }

    async fn get(&self, uid: &str) -> Result<MicroVm, StoreError> {
        self.inner.get(uid).await
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<MicroVm>, StoreError> {
        self.inner.list(filter).await
    }

    async fn delete(&self, uid: &str) -> Result<(), StoreError> {
        if uid == self.fail_uid {
            return Err(StoreError::transport("connection reset by peer"));
        }
        self.inner.delete(uid).await
    }
}

/// Lists one uid-less record after everything in `inner`, as a gateway that
/// drops the field would.
pub struct UidlessListing {
    pub inner: ReferenceStore,
}

impl RemoteStore for UidlessListing {
    async fn create(&self, spec: &MicroVmSpec) -> Result<MicroVm, StoreError> {
        self.inner.create(spec).await
    }

    async fn get(&self, uid: &str) -> Result<MicroVm, StoreError> {
        self.inner.get(uid).await
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<MicroVm>, StoreError> {
        let mut vms = self.inner.list(filter).await?;
        vms.push(MicroVm {
            spec: MicroVmSpec::named("ghost", "bar"),
            ..MicroVm::default()
        });
        Ok(vms)
    }

    async fn delete(&self, uid: &str) -> Result<(), StoreError> {
        self.inner.delete(uid).await
    }
}

/// Store whose every call fails, for transport error propagation.
pub struct UnreachableStore;

impl RemoteStore for UnreachableStore {
    async fn create(&self, _: &MicroVmSpec) -> Result<MicroVm, StoreError> {
        Err(StoreError::transport("connection refused"))
    }

    async fn get(&self, _: &str) -> Result<MicroVm, StoreError> {
        Err(StoreError::transport("connection refused"))
    }

    async fn list(&self, _: &ListFilter) -> Result<Vec<MicroVm>, StoreError> {
        Err(StoreError::transport("connection refused"))
    }

    async fn delete(&self, _: &str) -> Result<(), StoreError> {
        Err(StoreError::transport("connection refused"))
    }
}

// ── Reporters ────────────────────────────────────────────────────────────────

/// Records every progress event as `"<kind>: <message>"`.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }

    fn push(&self, kind: &str, message: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(format!("{kind}: {message}"));
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push("step", message);
    }

    fn success(&self, message: &str) {
        self.push("success", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
}
