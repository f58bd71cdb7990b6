//! Markdown header rules for trust chain documents.
//!
//! Numbered sections are level-3 ATX headings (`### 2. Data`, `### 0.1 Genesis`) and the
//! purpose statement is the level-2 heading `## Purpose`.

use crate::formats::{Format, Header};
use regex::Regex;
use std::sync::LazyLock;

static SECTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### (\d+(?:\.\d+)?)").unwrap());

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### (\d+)\.(\d+)?").unwrap());

const NUMBERED_MARKER: &str = "### ";
const PURPOSE_MARKER: &str = "## Purpose";
const PURPOSE_ID: &str = "Purpose";

/// First path segments recognised under [`Numbering::Legacy`].
const LEGACY_TOKENS: [&str; 13] = [
    " 0.", " 1.", " 2.", " 3.", " 4.", " 5.", " 6.", " 7.", " 8.", " 9.", " 10.", " 11.", " 12.",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How numbered headings are recognised.
pub enum Numbering {
    /// Any `### <n>.` heading opens a section, whatever the size of `n`.
    #[default]
    Open,
    /// Only headings containing one of ` 0.` to ` 12.` open a section, as the first
    /// generation of chain tooling did. Documents with headings past 12 relied on them
    /// being folded into the preceding section.
    Legacy,
}

/// Header rules for ATX-style trust chain headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat {
    /// Rule used for `###` headings.
    pub numbering: Numbering,
}

impl MarkdownFormat {
    #[must_use]
    /// Markdown rules with the given numbering policy.
    pub fn new(numbering: Numbering) -> Self {
        Self { numbering }
    }

    fn numbered(&self, line: &str) -> Option<Header> {
        let title = line.strip_prefix(NUMBERED_MARKER)?.trim().to_string();
        match self.numbering {
            Numbering::Open => {
                let caps = NUMBERED_PREFIX.captures(line)?;
                let id = match caps.get(2) {
                    Some(minor) => format!("{}.{}", &caps[1], minor.as_str()),
                    None => caps[1].to_string(),
                };
                Some(Header::Section { id, title })
            }
            Numbering::Legacy => {
                if !LEGACY_TOKENS.iter().any(|token| line.contains(token)) {
                    return None;
                }
                Some(match SECTION_ID.captures(line) {
                    Some(caps) => Header::Section {
                        id: caps[1].to_string(),
                        title,
                    },
                    None => Header::Unaddressable,
                })
            }
        }
    }
}

impl Format for MarkdownFormat {
    fn header(&self, line: &str) -> Option<Header> {
        if let Some(header) = self.numbered(line) {
            return Some(header);
        }
        line.starts_with(PURPOSE_MARKER).then(|| Header::Section {
            id: PURPOSE_ID.to_string(),
            title: PURPOSE_ID.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
