//! Document output
//!
//! File output goes through a temporary file in the destination directory
//! that is renamed over the target, so a failed run never leaves a partial
//! coefficient file behind.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::encode::OutputDocument;
use crate::error::{Error, Result};

/// Print the document, or write it to `file` and print a confirmation
///
/// # Errors
///
/// Returns [`Error::Io`] if the file or `out` cannot be written.
pub fn emit(doc: &OutputDocument, file: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let stdout_err = |source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };

    match file {
        Some(path) => {
            write_atomic(path, doc.text())?;
            writeln!(out, "Coefficients written to {}", path.display()).map_err(stdout_err)
        }
        None => writeln!(out, "{}", doc.text()).map_err(stdout_err),
    }
}

/// Write `contents` to `path` completely or not at all
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be created, written,
/// flushed or renamed. The temporary file is removed on failure.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    info!(path = %path.display(), bytes = contents.len(), "wrote coefficients");
    Ok(())
}
