//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one JSON document on stdout,
//! including failures, which use the error object from [`format_error`].

use std::path::Path;

use anyhow::{Context, Result};
use mvm_types::{MicroVm, MicroVmState};
use serde::Serialize;

use crate::domain::{BulkDeleteError, ConfigError, MvmctlConfig, ResolveError, SpecFileError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Build the document printed for a multi-match result.
#[must_use]
pub fn matches_document(scope: &str, vms: &[MicroVm]) -> serde_json::Value {
    serde_json::json!({
        "scope": scope,
        "count": vms.len(),
        "uids": uids(vms),
    })
}

/// Build the document printed when a delete was aborted as ambiguous.
#[must_use]
pub fn ambiguous_document(scope: &str, vms: &[MicroVm]) -> serde_json::Value {
    serde_json::json!({
        "ambiguous": true,
        "scope": scope,
        "deleted": [],
        "candidates": uids(vms),
    })
}

fn uids(vms: &[MicroVm]) -> Vec<&str> {
    vms.iter().filter_map(MicroVm::uid).collect()
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_microvm(&self, vm: &MicroVm) -> Result<()> {
        print_json(vm)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_list(&self, vms: &[MicroVm]) -> Result<()> {
        print_json(&vms)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_state(&self, state: MicroVmState) -> Result<()> {
        print_json(&serde_json::json!({ "state": state }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_matches(&self, scope: &str, vms: &[MicroVm]) -> Result<()> {
        print_json(&matches_document(scope, vms))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_ambiguous(&self, scope: &str, vms: &[MicroVm]) -> Result<()> {
        print_json(&ambiguous_document(scope, vms))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_deleted(&self, deleted: &[String]) -> Result<()> {
        print_json(&serde_json::json!({ "deleted": deleted }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &MvmctlConfig, path: &Path) -> Result<()> {
        print_json(&serde_json::json!({
            "path": path,
            "address": config.address,
            "token_set": config.token.is_some(),
            "timeout_secs": config.timeout_secs,
        }))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Stable code for an error surfaced by a command, used in `--json` mode.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<BulkDeleteError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<ResolveError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<SpecFileError>() {
        e.code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "config"
    } else {
        "error"
    }
}
