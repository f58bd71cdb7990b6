//! Locating and loading chain documents from disk.
//!
//! A chain is addressed by id (`tc-1`) and resolved to the first file, in name order, in
//! the chains directory whose name starts with that id and whose extension is configured.
//! A path to an existing file is accepted as-is.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::section::{sectionize, Section};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want == ext))
}

/// Find the document for `chain` inside `dir`.
///
/// The id is compared literally as a file name prefix; `*`, `?` and `[` in it have no
/// wildcard meaning.
///
/// # Errors
///
/// Returns [`Error::DocumentNotFound`] if no file matches or `dir` does not exist, and
/// [`Error::Io`] if the directory cannot be listed.
pub fn find_document(dir: &Path, chain: &str, extensions: &[String]) -> Result<PathBuf> {
    let not_found = || Error::DocumentNotFound {
        chain: chain.to_string(),
        dir: dir.to_path_buf(),
    };
    let io_err = |source: io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(io_err(e)),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry.map_err(io_err)?.path();
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(chain));
        if name_matches && path.is_file() && has_extension(&path, extensions) {
            candidates.push(path);
        }
    }
    candidates.sort();
    debug!(?candidates, "chain document candidates");

    candidates.into_iter().next().ok_or_else(not_found)
}

/// Resolve `chain` as a file path if one exists, else look it up in `dir`.
///
/// # Errors
///
/// See [`find_document`].
pub fn resolve_document(chain: &str, dir: &Path, extensions: &[String]) -> Result<PathBuf> {
    let direct = Path::new(chain);
    let path = if direct.is_file() {
        direct.to_path_buf()
    } else {
        find_document(dir, chain, extensions)?
    };
    info!(path = %path.display(), "resolved chain document");
    Ok(path)
}

/// Read a document and split it into sections.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read as UTF-8 text.
pub fn load_sections(path: &Path, format: &dyn Format) -> Result<Vec<Section>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sectionize(&text, format))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
