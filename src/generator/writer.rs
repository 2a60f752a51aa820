use super::document::Document;
use crate::error::{GeneratorError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pretty-printed JSON text of the document with one trailing newline.
pub fn render_document(document: &Document) -> Result<String> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Write the rendered document to `path`.
///
/// The text is written to a sibling temporary file and renamed over `path`,
/// so a failure leaves any previous file untouched.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let text = render_document(document)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::write(path, e))?;
    }
    let temp = temp_path_for(path).map_err(|e| GeneratorError::write(path, e))?;

    if let Err(e) = fs::write(&temp, &text).and_then(|()| fs::rename(&temp, path)) {
        if let Err(cleanup) = fs::remove_file(&temp) {
            tracing::debug!(path = %temp.display(), error = %cleanup, "temporary file not removed");
        }
        return Err(GeneratorError::write(path, e));
    }

    tracing::info!(path = %path.display(), bytes = text.len(), "wrote API document");
    Ok(())
}

/// Whether the file at `path` already holds exactly the rendered document.
///
/// A missing file counts as stale.
pub fn check_document(document: &Document, path: &Path) -> Result<bool> {
    let expected = render_document(document)?;
    match fs::read_to_string(path) {
        Ok(current) => Ok(current == expected),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(GeneratorError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
