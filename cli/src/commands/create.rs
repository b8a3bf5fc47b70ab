//! `mvmctl create` — create a MicroVM.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mvm_types::MicroVmSpec;

use crate::app::AppContext;
use crate::application::ports::RemoteStore;
use crate::application::services::create;
use crate::infra::spec_file;

/// Arguments for the create command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// MicroVM name
    #[arg(short, long, default_value = "mvm0")]
    pub name: String,

    /// MicroVM namespace
    #[arg(long, visible_alias = "ns", default_value = "ns0")]
    pub namespace: String,

    /// Path to a JSON MicroVM spec, sent as is. Overrides --name and --namespace
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Run `mvmctl create`.
///
/// # Errors
///
/// Returns an error if the spec file is unusable or the service call fails.
pub async fn run(app: &AppContext, args: &CreateArgs, store: &impl RemoteStore) -> Result<()> {
    let spec = match &args.file {
        Some(path) => spec_file::load_spec(path)?,
        None => MicroVmSpec::named(&args.name, &args.namespace),
    };
    let vm = create::create(store, spec, &app.reporter()).await?;
    app.renderer().render_microvm(&vm)
}
