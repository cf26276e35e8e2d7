//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Read the raw configuration document at `path`.
///
/// Re-reads from the filesystem on every call so operator edits to the base
/// document are picked up between sessions. An existing but zero-byte file is
/// rejected: it means the document was never provisioned.
pub fn read_document(path: &Path) -> Result<Vec<u8>, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let data = fs::read(path).map_err(|source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    if data.is_empty() {
        return Err(Error::EmptyDocument(path.to_path_buf()));
    }

    Ok(data)
}
