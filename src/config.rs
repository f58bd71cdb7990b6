//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a chainhash.toml, and if present we load settings from there.
//! This provides the chains directory, file extensions, preview width and the compatibility
//! switches for chains written by first-generation tooling.

use crate::canonical::Join;
use crate::error::{Error, Result};
use crate::formats::markdown::Numbering;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "chainhash.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from chainhash.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "src/trust-chain/chains".to_string())]
    /// Directory searched for chain documents.
    pub chains_dir: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes a chain document may carry.
    pub file_extensions: Vec<String>,
    #[facet(default = 300)]
    /// Characters of canonical content shown in the text report.
    pub preview_chars: usize,
    #[facet(default = false)]
    /// Recognise only `###` headings numbered 0 to 12.
    pub legacy_numbering: bool,
    #[facet(default = false)]
    /// Hash without the terminator of the last kept line, as first-generation chains were.
    pub legacy_join: bool,
}

impl Config {
    /// Load configuration from `path`, or from chainhash.toml in the working directory.
    ///
    /// A missing chainhash.toml yields the defaults; a missing explicit `path` does not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if it does not
    /// deserialise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(CONFIG_FILE), false),
        };
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Self::parse(""),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Deserialise a TOML document, defaulting every absent field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `contents` is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// Header numbering policy implied by `legacy_numbering`.
    pub fn numbering(&self) -> Numbering {
        if self.legacy_numbering {
            Numbering::Legacy
        } else {
            Numbering::Open
        }
    }

    #[must_use]
    /// Canonical join implied by `legacy_join`.
    pub fn join(&self) -> Join {
        if self.legacy_join {
            Join::Legacy
        } else {
            Join::Terminated
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
