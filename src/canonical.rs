//! Carve the hashable part out of a section and read its recorded hashes.
//!
//! A hashed section ends with a metadata block:
//!
//! ```text
//! *Merkle Tree Metadata:*
//! - **Parent Hash**: `9f86d0...`
//! - **Section Hash**: `2c26b4...`
//! ```
//!
//! The section hash was computed over everything before its own line, parent hash line
//! included. [`extract_content_for_hashing`] reproduces that byte sequence.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Opens the metadata block.
pub const METADATA_MARKER: &str = "*Merkle Tree Metadata:*";
/// Labels the hash of the preceding section.
pub const PARENT_HASH_LABEL: &str = "**Parent Hash**:";
/// Labels the recorded digest of this section.
pub const SECTION_HASH_LABEL: &str = "**Section Hash**:";

static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([a-f0-9]+)`").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Hash values recorded in a section's metadata block.
pub struct HashMetadata {
    /// Digest of the predecessor section, if recorded.
    pub parent_hash: Option<String>,
    /// Digest recorded for this section, if any.
    pub section_hash: Option<String>,
}

fn hex_token(line: &str) -> Option<String> {
    HEX_TOKEN.captures(line).map(|caps| caps[1].to_string())
}

/// Read the parent and section hashes recorded in `content`.
///
/// The first backtick-quoted lowercase hex token on a labelled line is taken. When a
/// label appears more than once the last line wins, even if its token is unreadable.
#[must_use]
pub fn extract_hash_metadata(content: &str) -> HashMetadata {
    content
        .lines()
        .fold(HashMetadata::default(), |mut meta, line| {
            if line.contains(PARENT_HASH_LABEL) {
                meta.parent_hash = hex_token(line);
            } else if line.contains(SECTION_HASH_LABEL) {
                meta.section_hash = hex_token(line);
            }
            meta
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Position of the canonicalisation walk relative to the metadata block.
pub enum MetadataState {
    /// Ordinary section text.
    Outside,
    /// Between the metadata marker and the end of its bullet list.
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What to do with the line just classified.
pub enum Step {
    /// Include the line in the canonical content.
    Keep,
    /// Leave the line out and carry on.
    Drop,
    /// Stop here; neither this line nor anything after it was hashed.
    Cut,
}

/// Shape of a line as far as the metadata block is concerned.
enum LineKind {
    Marker,
    ParentHash,
    SectionHash,
    Blank,
    Bullet,
    Text,
}

impl LineKind {
    fn of(line: &str) -> Self {
        if line.contains(METADATA_MARKER) {
            Self::Marker
        } else if line.contains(PARENT_HASH_LABEL) {
            Self::ParentHash
        } else if line.contains(SECTION_HASH_LABEL) {
            Self::SectionHash
        } else if line.trim().is_empty() {
            Self::Blank
        } else if line.starts_with('-') {
            Self::Bullet
        } else {
            Self::Text
        }
    }
}

impl MetadataState {
    #[must_use]
    /// Advance the walk by one line, given without its terminator.
    ///
    /// Inside the block, parent hash lines are kept, the section hash line cuts, other
    /// bullets are dropped, and a blank or non-bullet line closes the block.
    pub fn step(self, line: &str) -> (Self, Step) {
        match (self, LineKind::of(line)) {
            (_, LineKind::Marker) | (Self::Inside, LineKind::ParentHash) => {
                (Self::Inside, Step::Keep)
            }
            (Self::Inside, LineKind::SectionHash) => (Self::Inside, Step::Cut),
            (Self::Inside, LineKind::Bullet) => (Self::Inside, Step::Drop),
            (Self::Outside, _) | (Self::Inside, LineKind::Blank | LineKind::Text) => {
                (Self::Outside, Step::Keep)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How kept lines are put back together once the Section Hash line is reached.
pub enum Join {
    /// Every kept line keeps its terminator, the parent hash line's included.
    #[default]
    Terminated,
    /// Kept lines are joined by `\n` with nothing after the last one, as chains written by
    /// the first generation of tooling were hashed.
    Legacy,
}

/// The exact text that was hashed to produce the section's recorded digest.
///
/// Content without a metadata marker, or whose metadata block never reaches a Section
/// Hash line, is returned unchanged. Kept lines retain their own terminators.
#[must_use]
pub fn extract_content_for_hashing(content: &str) -> String {
    extract_content_for_hashing_with(content, Join::Terminated)
}

/// [`extract_content_for_hashing`] with an explicit [`Join`] for the cut case.
#[must_use]
pub fn extract_content_for_hashing_with(content: &str, join: Join) -> String {
    if !content.contains(METADATA_MARKER) {
        return content.to_string();
    }

    let mut state = MetadataState::Outside;
    let mut hashable = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let (next, step) = state.step(line.trim_end_matches(['\n', '\r']));
        match step {
            Step::Keep => hashable.push_str(line),
            Step::Drop => {}
            Step::Cut => {
                if join == Join::Legacy && hashable.ends_with('\n') {
                    hashable.pop();
                }
                return hashable;
            }
        }
        state = next;
    }
    content.to_string()
}

#[cfg(test)]
#[path = "tests/canonical.rs"]
mod tests;
