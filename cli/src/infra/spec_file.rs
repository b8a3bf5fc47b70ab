//! Load MicroVM specs from JSON files on disk.

use std::path::Path;

use mvm_types::MicroVmSpec;

use crate::domain::{Selection, SpecFileError};

/// Read and parse a MicroVM spec.
///
/// # Errors
///
/// Returns `SpecFileError::Read` or `SpecFileError::Parse`.
pub fn load_spec(path: &Path) -> Result<MicroVmSpec, SpecFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| SpecFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SpecFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the identity in the spec file at `path` over `selection`.
///
/// # Errors
///
/// Returns a read/parse error, or `MissingScope::FileIdentity` if the file
/// holds neither a uid nor both name and namespace.
pub fn selection_from_file(path: &Path, selection: Selection) -> Result<Selection, SpecFileError> {
    let spec = load_spec(path)?;
    Ok(selection.apply_spec(&spec)?)
}
