use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::WriteError;
use crate::model::Collection;

/// Renders the collection as 2-space indented JSON, keys in declaration order.
pub fn render(collection: &Collection) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Writes the rendered collection to `path`, replacing any existing file.
///
/// The content goes to a temporary file in the destination directory first
/// and is renamed into place, so a failed run never leaves a truncated file.
/// Returns the number of bytes written.
pub fn write_collection(collection: &Collection, path: &Path) -> Result<usize, WriteError> {
    let rendered = render(collection)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| WriteError::io(dir, e))?;
    temp.write_all(rendered.as_bytes())
        .map_err(|e| WriteError::io(temp.path(), e))?;
    temp.flush().map_err(|e| WriteError::io(temp.path(), e))?;

    debug!(temp = %temp.path().display(), "persisting collection");
    temp.persist(path).map_err(|e| WriteError::io(path, e.error))?;

    info!(path = %path.display(), bytes = rendered.len(), "wrote collection");
    Ok(rendered.len())
}
