//! Recompute a section's digest and compare it with the one recorded in the document.

use crate::canonical::{extract_content_for_hashing_with, extract_hash_metadata, Join};
use crate::section::Section;
use serde::Serialize;
use sha3::{Digest, Sha3_256};
use tracing::info;

/// Lowercase hex SHA3-256 of the UTF-8 bytes of `content`.
#[must_use]
pub fn sha3_256_hex(content: &str) -> String {
    hex::encode(Sha3_256::digest(content.as_bytes()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Outcome of comparing the computed digest with the recorded one.
pub enum Status {
    /// Computed and recorded digests are identical.
    Match,
    /// A digest is recorded but differs from the computed one.
    Mismatch,
    /// The section records no Section Hash.
    NoRecordedHash,
}

impl Status {
    #[must_use]
    /// Compare hex digests exactly, case included.
    pub fn compare(computed: &str, recorded: Option<&str>) -> Self {
        match recorded {
            None => Self::NoRecordedHash,
            Some(recorded) if recorded == computed => Self::Match,
            Some(_) => Self::Mismatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything learnt about one section in a single verification.
pub struct Verification {
    /// Section that was checked.
    pub section: Section,
    /// Bytes the digest was computed over.
    pub canonical_content: String,
    /// SHA3-256 of `canonical_content`.
    pub computed_hash: String,
    /// Parent hash recorded in the metadata block.
    pub parent_hash: Option<String>,
    /// Section hash recorded in the metadata block.
    pub section_hash: Option<String>,
    /// Comparison outcome.
    pub status: Status,
}

impl Verification {
    #[must_use]
    /// Byte length of the canonical content.
    pub fn canonical_len(&self) -> usize {
        self.canonical_content.len()
    }
}

/// Verify one section. Total over any section, including an empty one.
#[must_use]
pub fn verify(section: &Section) -> Verification {
    verify_with(section, Join::Terminated)
}

/// [`verify`] with the canonical content joined according to `join`.
#[must_use]
pub fn verify_with(section: &Section, join: Join) -> Verification {
    let meta = extract_hash_metadata(&section.content);
    let canonical_content = extract_content_for_hashing_with(&section.content, join);
    let computed_hash = sha3_256_hex(&canonical_content);
    let status = Status::compare(&computed_hash, meta.section_hash.as_deref());
    info!(id = %section.id, ?status, "verified section");

    Verification {
        section: section.clone(),
        canonical_content,
        computed_hash,
        parent_hash: meta.parent_hash,
        section_hash: meta.section_hash,
        status,
    }
}

#[cfg(test)]
#[path = "tests/verify.rs"]
mod tests;
