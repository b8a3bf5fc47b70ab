//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use mvm_types::{MicroVm, MicroVmState};
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::domain::MvmctlConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Output renderer selected by the `--json` flag.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_microvm(&self, vm: &MicroVm) -> Result<()> {
        match self {
            Self::Human(r) => r.render_microvm(vm),
            Self::Json(r) => r.render_microvm(vm),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_list(&self, vms: &[MicroVm]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_list(vms),
            Self::Json(r) => r.render_list(vms),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_state(&self, state: MicroVmState) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_state(state);
                Ok(())
            }
            Self::Json(r) => r.render_state(state),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_matches(&self, scope: &str, vms: &[MicroVm]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_matches(scope, vms);
                Ok(())
            }
            Self::Json(r) => r.render_matches(scope, vms),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_ambiguous(&self, scope: &str, vms: &[MicroVm]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_ambiguous(scope, vms);
                Ok(())
            }
            Self::Json(r) => r.render_ambiguous(scope, vms),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_deleted(&self, deleted: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_deleted(deleted);
                Ok(())
            }
            Self::Json(r) => r.render_deleted(deleted),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &MvmctlConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }
}
