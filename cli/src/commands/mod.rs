//! Command implementations

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use std::path::PathBuf;

use clap::Args;

use crate::domain::{Selection, SpecFileError};
use crate::infra::spec_file;

/// Flags identifying which MicroVM(s) a command applies to.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// MicroVM uid
    #[arg(short, long)]
    pub id: Option<String>,

    /// MicroVM name
    #[arg(short, long)]
    pub name: Option<String>,

    /// MicroVM namespace
    #[arg(long, visible_alias = "ns")]
    pub namespace: Option<String>,

    /// Path to a JSON MicroVM spec. Its uid, name and namespace override the
    /// other flags
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl SelectionArgs {
    /// Build the selection, applying `--file` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec file cannot be loaded or carries no
    /// usable identity.
    pub fn to_selection(&self, all: bool) -> Result<Selection, SpecFileError> {
        let selection = Selection::new(
            self.id.clone(),
            self.name.clone(),
            self.namespace.clone(),
            all,
        );
        match &self.file {
            Some(path) => spec_file::selection_from_file(path, selection),
            None => Ok(selection),
        }
    }
}
