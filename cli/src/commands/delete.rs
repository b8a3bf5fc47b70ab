//! `mvmctl delete` — delete MicroVMs by uid or by name/namespace.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ProgressReporter, RemoteStore};
use crate::application::services::bulk_delete::{self, DeleteOutcome};
use crate::commands::SelectionArgs;

/// Arguments for the delete command.
#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Delete all matching MicroVMs (filter with --name and --namespace)
    #[arg(long)]
    pub all: bool,
}

/// Run `mvmctl delete`.
///
/// An ambiguous match deletes nothing, lists the candidates and succeeds.
///
/// # Errors
///
/// Returns an error if scope is missing, the spec file is unusable, or a
/// service call fails. A failure part-way through names the uids already
/// deleted.
pub async fn run(app: &AppContext, args: &DeleteArgs, store: &impl RemoteStore) -> Result<()> {
    let selection = args.selection.to_selection(args.all)?;
    let reporter = app.reporter();
    if selection.all
        && selection.uid.is_none()
        && selection.name.is_some()
        && selection.namespace.is_none()
    {
        reporter.warn("--name has no effect without --namespace; --all applies to every MicroVM");
    }

    let renderer = app.renderer();
    match bulk_delete::delete(store, &selection, &reporter).await? {
        DeleteOutcome::Ambiguous(candidates) => {
            renderer.render_ambiguous(&selection.scope_label(), &candidates)
        }
        DeleteOutcome::Deleted(deleted) => renderer.render_deleted(&deleted),
    }
}
