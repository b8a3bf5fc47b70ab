//! Application service — resolve a selection to the MicroVMs it names.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use mvm_types::MicroVm;

use crate::application::ports::RemoteStore;
use crate::domain::{ResolveError, Selection};

/// Resolve `selection` against `store`.
///
/// A uid wins outright: the MicroVM is fetched directly and name/namespace are
/// ignored. Otherwise the store is listed with the selection's filter and the
/// result is returned as is, which may be empty.
///
/// # Errors
///
/// Returns `StoreError::NotFound` (wrapped) if a uid was given and does not
/// exist, or any transport error from the store unchanged.
pub async fn resolve(
    store: &impl RemoteStore,
    selection: &Selection,
) -> Result<Vec<MicroVm>, ResolveError> {
    if let Some(uid) = &selection.uid {
        tracing::debug!(%uid, "resolving by uid");
        let vm = store.get(uid).await?;
        return Ok(vec![vm]);
    }

    let filter = selection.filter();
    tracing::debug!(name = %filter.name, namespace = %filter.namespace, "resolving by filter");
    let found = store.list(&filter).await?;
    tracing::debug!(count = found.len(), "resolved");
    Ok(found)
}

/// Like [`resolve`], but an empty result is an error.
///
/// # Errors
///
/// Returns `ResolveError::NoMatch` naming the namespace/name searched when
/// nothing matches, plus everything [`resolve`] can return.
pub async fn resolve_existing(
    store: &impl RemoteStore,
    selection: &Selection,
) -> Result<Vec<MicroVm>, ResolveError> {
    let found = resolve(store, selection).await?;
    if found.is_empty() {
        return Err(ResolveError::NoMatch {
            namespace: selection.namespace.clone().unwrap_or_default(),
            name: selection.name.clone().unwrap_or_default(),
        });
    }
    Ok(found)
}
