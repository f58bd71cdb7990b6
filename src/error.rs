//! Failures that stop a verification before a result can be produced.
//!
//! A section without a recorded hash is not an error: it is reported through
//! [`crate::verify::Status::NoRecordedHash`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a lookup or load can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// No file in the chains directory matches the requested chain id.
    #[error("No trust chain file found for chain ID \"{chain}\" in {}", .dir.display())]
    DocumentNotFound {
        /// Chain id as supplied by the caller.
        chain: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The document parsed, but no section carries the requested id.
    #[error("Link ID \"{section}\" not found in chain \"{chain}\"")]
    SectionNotFound {
        /// Chain id or document path the section was looked up in.
        chain: String,
        /// Section id as supplied by the caller.
        section: String,
    },

    /// Reading a document, directory or config file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    /// A config file exists but could not be deserialised.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Shorthand used across the library.
pub type Result<T> = std::result::Result<T, Error>;
