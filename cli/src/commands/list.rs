//! `mvmctl list` — list MicroVMs, optionally scoped by namespace and name.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RemoteStore;
use crate::application::services::locate;
use crate::domain::Selection;

/// Arguments for the list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// MicroVM name (only applied together with --namespace)
    #[arg(short, long)]
    pub name: Option<String>,

    /// MicroVM namespace
    #[arg(long, visible_alias = "ns")]
    pub namespace: Option<String>,
}

/// Run `mvmctl list`.
///
/// # Errors
///
/// Returns an error if the service call fails.
pub async fn run(app: &AppContext, args: &ListArgs, store: &impl RemoteStore) -> Result<()> {
    if args.name.is_some() && args.namespace.is_none() {
        tracing::warn!("--name has no effect without --namespace");
    }
    let selection = Selection::new(None, args.name.clone(), args.namespace.clone(), false);
    let found = locate::resolve(store, &selection).await?;
    app.renderer().render_list(&found)
}
