//! Application service — create a MicroVM.

use mvm_types::{MicroVm, MicroVmSpec};

use crate::application::ports::{ProgressReporter, RemoteStore};
use crate::domain::{MissingScope, ResolveError};

/// Create a MicroVM from `spec`.
///
/// The spec must carry a name and a namespace; the service assigns the uid.
/// A uid already present in the spec is dropped.
///
/// # Errors
///
/// Returns `MissingScope` if name or namespace is empty, or the store's error.
pub async fn create(
    store: &impl RemoteStore,
    mut spec: MicroVmSpec,
    reporter: &impl ProgressReporter,
) -> Result<MicroVm, ResolveError> {
    match (spec.id.is_empty(), spec.namespace.is_empty()) {
        (false, false) => {}
        (false, true) => return Err(MissingScope::Namespace.into()),
        (true, false) => return Err(MissingScope::Name.into()),
        (true, true) => return Err(MissingScope::NameAndNamespace.into()),
    }
    if let Some(uid) = spec.uid.take() {
        tracing::debug!(%uid, "ignoring uid on create");
    }

    reporter.step(&format!("creating {}/{}...", spec.namespace, spec.id));
    let vm = store.create(&spec).await?;
    reporter.success(&format!(
        "created {}",
        vm.uid().unwrap_or("MicroVM without uid")
    ));
    Ok(vm)
}
