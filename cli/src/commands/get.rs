//! `mvmctl get` — show one MicroVM, or the uids of several.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RemoteStore;
use crate::application::services::locate;
use crate::commands::SelectionArgs;

/// Arguments for the get command.
#[derive(Args, Debug, Default)]
pub struct GetArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print only the state of the MicroVM
    #[arg(short, long)]
    pub state: bool,
}

/// Run `mvmctl get`.
///
/// # Errors
///
/// Returns an error if nothing matches, the spec file is unusable, or the
/// service call fails.
pub async fn run(app: &AppContext, args: &GetArgs, store: &impl RemoteStore) -> Result<()> {
    let selection = args.selection.to_selection(false)?;
    let found = locate::resolve_existing(store, &selection).await?;

    let renderer = app.renderer();
    match found.as_slice() {
        [vm] if args.state => renderer.render_state(vm.state()),
        [vm] => renderer.render_microvm(vm),
        many => renderer.render_matches(&selection.scope_label(), many),
    }
}
