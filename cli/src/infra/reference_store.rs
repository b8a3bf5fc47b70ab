//! In-memory `RemoteStore` with the same filtering rules as the real service.
//!
//! Used to exercise resolution and bulk deletes without a live backend. The
//! collection lives behind a mutex owned by the store value, so a store can be
//! shared across test threads by reference or `Arc`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use mvm_types::{MicroVm, MicroVmSpec, MicroVmState, MicroVmStatus};

use crate::application::ports::RemoteStore;
use crate::domain::{ListFilter, StoreError};

/// What `delete` does when the uid is not in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDelete {
    /// Fail with `StoreError::NotFound`, as the real service does.
    #[default]
    Fail,
    /// Succeed without doing anything.
    Ignore,
}

/// In-memory MicroVM collection.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    vms: Mutex<Vec<MicroVm>>,
    missing_delete: MissingDelete,
}

impl ReferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_delete(mut self, policy: MissingDelete) -> Self {
        self.missing_delete = policy;
        self
    }

    /// Number of MicroVMs currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MicroVm>> {
        // A panic while holding the lock cannot leave the Vec half-updated.
        self.vms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RemoteStore for ReferenceStore {
    async fn create(&self, spec: &MicroVmSpec) -> Result<MicroVm, StoreError> {
        let mut spec = spec.clone();
        spec.uid = Some(uuid::Uuid::new_v4().to_string());
        let vm = MicroVm {
            version: 0,
            spec,
            status: MicroVmStatus {
                state: MicroVmState::Created,
                ..MicroVmStatus::default()
            },
        };
        self.lock().push(vm.clone());
        Ok(vm)
    }

    async fn get(&self, uid: &str) -> Result<MicroVm, StoreError> {
        self.lock()
            .iter()
            .find(|vm| vm.uid() == Some(uid))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                uid: uid.to_string(),
            })
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<MicroVm>, StoreError> {
        Ok(self
            .lock()
            .iter()
            .filter(|vm| filter.matches(vm))
            .cloned()
            .collect())
    }

    async fn delete(&self, uid: &str) -> Result<(), StoreError> {
        let mut vms = self.lock();
        match vms.iter().position(|vm| vm.uid() == Some(uid)) {
            Some(idx) => {
                vms.remove(idx);
                Ok(())
            }
            None if self.missing_delete == MissingDelete::Ignore => Ok(()),
            None => Err(StoreError::NotFound {
                uid: uid.to_string(),
            }),
        }
    }
}
