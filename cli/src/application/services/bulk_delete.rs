//! Application service — delete the MicroVMs a selection names.
//!
//! Deleting on an ambiguous name/namespace match is the riskiest mistake the
//! tool can make, so more than one match without `all` deletes nothing and
//! hands the candidates back to the caller.

use mvm_types::MicroVm;

use crate::application::ports::{ProgressReporter, RemoteStore};
use crate::application::services::locate;
use crate::domain::{BulkDeleteError, Selection, StoreError};

/// Result of a delete that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// uids deleted, in the order they were deleted. May be empty when `all`
    /// was set and nothing matched.
    Deleted(Vec<String>),
    /// More than one MicroVM matched without `all`; nothing was deleted.
    Ambiguous(Vec<MicroVm>),
}

/// Delete according to `selection`.
///
/// Steps:
/// 1. A uid is deleted directly, whatever `all` says.
/// 2. Without `all`, both name and namespace are required.
/// 3. The remaining filter is resolved through [`locate::resolve`].
/// 4. Several matches without `all` abort with [`DeleteOutcome::Ambiguous`].
/// 5. Each match is deleted in list order. The first failure stops the batch,
///    including a listed MicroVM that carries no uid; earlier deletes are kept
///    and reported in the error.
///
/// # Errors
///
/// Returns a [`BulkDeleteError`] carrying the uids deleted before the failure.
pub async fn delete(
    store: &impl RemoteStore,
    selection: &Selection,
    reporter: &impl ProgressReporter,
) -> Result<DeleteOutcome, BulkDeleteError> {
    if let Some(uid) = &selection.uid {
        delete_one(store, uid, reporter).await?;
        return Ok(DeleteOutcome::Deleted(vec![uid.clone()]));
    }

    selection.require_scope()?;

    let matches = locate::resolve(store, selection).await?;
    if !selection.all && matches.len() > 1 {
        tracing::info!(
            count = matches.len(),
            scope = %selection.scope_label(),
            "ambiguous selection, nothing deleted"
        );
        return Ok(DeleteOutcome::Ambiguous(matches));
    }

    let mut deleted = Vec::with_capacity(matches.len());
    for vm in &matches {
        let Some(uid) = vm.uid() else {
            return Err(BulkDeleteError {
                deleted,
                source: StoreError::transport(format!(
                    "listed MicroVM {}/{} has no uid",
                    vm.namespace(),
                    vm.name()
                ))
                .into(),
            });
        };
        if let Err(err) = delete_one(store, uid, reporter).await {
            return Err(BulkDeleteError {
                deleted,
                source: err.into(),
            });
        }
        deleted.push(uid.to_string());
    }

    Ok(DeleteOutcome::Deleted(deleted))
}

async fn delete_one(
    store: &impl RemoteStore,
    uid: &str,
    reporter: &impl ProgressReporter,
) -> Result<(), StoreError> {
    reporter.step(&format!("deleting {uid}..."));
    store.delete(uid).await.inspect_err(|err| {
        tracing::debug!(%uid, error = %err, "delete failed");
    })?;
    reporter.success(&format!("deleted {uid}"));
    Ok(())
}
