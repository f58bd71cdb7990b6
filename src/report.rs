//! Human and machine readable renderings of a verification.
//!
//! The text form is what a maintainer reads when fixing a chain by hand, so on a mismatch
//! it spells out both digests. The JSON form wraps the same data in `{ "ok": true, "data": ... }`
//! and failures in `{ "ok": false, "error": ... }`.

use crate::section::Section;
use crate::verify::{Status, Verification};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
/// Envelope for JSON output.
pub struct JsonOut<T: Serialize> {
    /// True for a completed run.
    pub ok: bool,
    /// Payload.
    pub data: T,
}

#[derive(Serialize)]
/// Envelope for a failed run under JSON output.
pub struct JsonError {
    /// Always false.
    pub ok: bool,
    /// Human-readable failure, cause chain included.
    pub error: String,
}

/// Pretty JSON for any report payload.
///
/// # Errors
///
/// Returns an error if `data` fails to serialise.
pub fn to_json<T: Serialize>(data: T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOut { ok: true, data })
}

/// Pretty JSON envelope for a failure.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn error_json(error: &impl fmt::Display) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonError {
        ok: false,
        error: error.to_string(),
    })
}

/// First `max` characters of `s`, with `...` appended when anything was cut.
#[must_use]
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

#[derive(Serialize)]
/// A verification together with where it came from.
pub struct VerificationReport<'a> {
    /// Chain id or path the user asked for.
    pub chain: &'a str,
    /// Result for the requested section.
    #[serde(flatten)]
    pub verification: &'a Verification,
    /// Characters of canonical content to show in text mode.
    #[serde(skip)]
    pub preview_chars: usize,
}

impl fmt::Display for VerificationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.verification;
        writeln!(f, "Chain: {}", self.chain)?;
        writeln!(f, "Node: {} ({})", v.section.title, v.section.id)?;
        writeln!(f)?;
        writeln!(f, "Content for hashing ({} bytes):", v.canonical_len())?;
        writeln!(f, "{}", preview(&v.canonical_content, self.preview_chars))?;
        writeln!(f)?;
        writeln!(
            f,
            "Parent Hash: {}",
            v.parent_hash.as_deref().unwrap_or("None")
        )?;
        writeln!(f, "SHA3-256 Calculated Hash: {}", v.computed_hash)?;

        match (v.status, v.section_hash.as_deref()) {
            (Status::NoRecordedHash, _) | (_, None) => {
                writeln!(f, "No Section Hash recorded in metadata")
            }
            (Status::Match, Some(recorded)) => {
                writeln!(f, "Section Hash in Metadata: {recorded}")?;
                writeln!(f, "Hashes MATCH ✓")
            }
            (Status::Mismatch, Some(recorded)) => {
                writeln!(f, "Section Hash in Metadata: {recorded}")?;
                writeln!(f, "Hashes DO NOT MATCH ✗")?;
                writeln!(f)?;
                writeln!(f, "To update the section hash in the document, replace:")?;
                writeln!(f, "{recorded}")?;
                writeln!(f, "with:")?;
                writeln!(f, "{}", v.computed_hash)
            }
        }
    }
}

#[derive(Serialize)]
/// One row of a section listing.
pub struct SectionSummary<'a> {
    /// Section id.
    pub id: &'a str,
    /// Heading text.
    pub title: &'a str,
    /// Byte length of the raw section content.
    pub bytes: usize,
    /// Whether a metadata block is present.
    pub has_metadata: bool,
}

impl<'a> From<&'a Section> for SectionSummary<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            id: &section.id,
            title: &section.title,
            bytes: section.content.len(),
            has_metadata: section
                .content
                .contains(crate::canonical::METADATA_MARKER),
        }
    }
}

impl fmt::Display for SectionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.has_metadata { "●" } else { "○" };
        write!(
            f,
            "{marker} {:<8} {:>7} bytes  {}",
            self.id, self.bytes, self.title
        )
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
