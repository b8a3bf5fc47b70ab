//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Store errors ──────────────────────────────────────────────────────────────

/// Errors returned by a `RemoteStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MicroVM {uid} not found")]
    NotFound { uid: String },

    /// The call itself failed: connectivity, or a rejection by the service.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StoreError {
    /// Wrap any transport-level failure.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Transport(err.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Selection errors ──────────────────────────────────────────────────────────

/// Which identifying input a selection is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingScope {
    #[error("required: --namespace")]
    Namespace,

    #[error("required: --name")]
    Name,

    #[error("required: --namespace, --name")]
    NameAndNamespace,

    #[error("required: uid or name/namespace")]
    FileIdentity,
}

/// Errors raised while resolving a selection against a store.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("MicroVM {namespace}/{name} not found")]
    NoMatch { namespace: String, name: String },

    #[error(transparent)]
    MissingScope(#[from] MissingScope),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoMatch { .. } | Self::Store(StoreError::NotFound { .. }) => "not_found",
            Self::MissingScope(_) => "missing_scope",
            Self::Store(StoreError::Transport(_)) => "transport",
        }
    }
}

/// A bulk delete stopped before finishing.
///
/// `deleted` lists the identifiers removed before `source` occurred. They are
/// not restored.
#[derive(Debug, Error)]
#[error("{source}{}", already_deleted(.deleted))]
pub struct BulkDeleteError {
    pub deleted: Vec<String>,
    #[source]
    pub source: ResolveError,
}

impl BulkDeleteError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        if self.deleted.is_empty() {
            self.source.code()
        } else {
            "partial_delete"
        }
    }
}

impl From<ResolveError> for BulkDeleteError {
    fn from(source: ResolveError) -> Self {
        Self {
            deleted: Vec::new(),
            source,
        }
    }
}

impl From<MissingScope> for BulkDeleteError {
    fn from(err: MissingScope) -> Self {
        ResolveError::from(err).into()
    }
}

impl From<StoreError> for BulkDeleteError {
    fn from(err: StoreError) -> Self {
        ResolveError::from(err).into()
    }
}

fn already_deleted(deleted: &[String]) -> String {
    if deleted.is_empty() {
        String::new()
    } else {
        format!(" (already deleted: {})", deleted.join(", "))
    }
}

// ── Spec file errors ──────────────────────────────────────────────────────────

/// Errors reading a MicroVM spec from disk.
#[derive(Debug, Error)]
pub enum SpecFileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    MissingScope(#[from] MissingScope),
}

impl SpecFileError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Parse { .. } => "file",
            Self::MissingScope(_) => "missing_scope",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },
}
