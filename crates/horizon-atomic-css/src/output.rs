//! Writing the accumulated stylesheet to disk.

use std::path::Path;

use crate::resolve::StyleEngine;
use crate::{Error, Result};

/// Write every registered definition to a stylesheet file.
///
/// Parent directories are created as needed. A non-empty stylesheet ends
/// with a newline; an empty engine produces an empty file.
pub fn write_stylesheet(engine: &StyleEngine, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut css = engine.dump();
    if !css.is_empty() {
        css.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, css).map_err(|e| Error::io(path, e))?;

    tracing::info!("Wrote {} atomic rules to {}", engine.len(), path.display());
    Ok(())
}
