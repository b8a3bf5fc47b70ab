//! Human-readable terminal renderer.

use std::path::Path;

use anyhow::{Context, Result};
use mvm_types::{MicroVm, MicroVmState};
use owo_colors::OwoColorize as _;
use serde::Serialize;

use crate::domain::MvmctlConfig;
use crate::output::OutputContext;

/// Hint printed when a delete matched more than one MicroVM.
pub const AMBIGUOUS_HINT: &str =
    "To delete all microvms in this list, re-run command with `--all`.";

/// Header line for a multi-match result, e.g. `2 MicroVMs found under bar/foo:`.
#[must_use]
pub fn matches_header(count: usize, scope: &str) -> String {
    format!("{count} MicroVMs found under {scope}:")
}

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Print a single MicroVM as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_microvm(&self, vm: &MicroVm) -> Result<()> {
        print_pretty(vm)
    }

    /// Print a list of MicroVMs as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_list(&self, vms: &[MicroVm]) -> Result<()> {
        print_pretty(&vms)
    }

    pub fn render_state(&self, state: MicroVmState) {
        println!("{state}");
    }

    /// Print the count line and one uid per line.
    pub fn render_matches(&self, scope: &str, vms: &[MicroVm]) {
        println!("{}", matches_header(vms.len(), scope));
        for vm in vms {
            println!("{}", vm.uid().unwrap_or_default().style(self.ctx.styles.uid));
        }
    }

    /// Print the candidates of an aborted delete and how to proceed.
    pub fn render_ambiguous(&self, scope: &str, vms: &[MicroVm]) {
        self.render_matches(scope, vms);
        println!();
        println!("{AMBIGUOUS_HINT}");
    }

    pub fn render_deleted(&self, deleted: &[String]) {
        if deleted.is_empty() {
            self.ctx.info("No MicroVMs matched, nothing deleted");
        }
    }

    pub fn render_config(&self, config: &MvmctlConfig, path: &Path) {
        self.ctx.kv("Config:", &path.display().to_string());
        self.ctx
            .kv("address:", config.address.as_deref().unwrap_or("(default)"));
        self.ctx.kv(
            "token:",
            if config.token.is_some() { "(set)" } else { "(unset)" },
        );
        let timeout = config
            .timeout_secs
            .map_or_else(|| "(default)".to_string(), |s| format!("{s}s"));
        self.ctx.kv("timeout_secs:", &timeout);
    }
}

fn print_pretty<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}
