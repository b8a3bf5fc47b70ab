//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod selection;

pub use config::{ClientSettings, MvmctlConfig};
pub use error::{BulkDeleteError, ConfigError, MissingScope, ResolveError, SpecFileError, StoreError};
pub use selection::{ListFilter, Selection};
