//! Section representation for trust chain documents.
//!
//! A section is the span of a document from one recognised header line (inclusive) up to
//! the next one (exclusive). Lines before the first header are preamble and belong to no
//! section. Splitting is a single fold over the document's lines; the resulting sections
//! are never mutated afterwards.

use crate::formats::{Format, Header};
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Addressable span of a document with the raw text that was hashed.
pub struct Section {
    /// Dotted numeric identifier (`0.1`, `2`) or the literal `Purpose`.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Raw text from the header line onwards, trailing whitespace trimmed.
    pub content: String,
}

/// Where the fold currently is in the document.
enum Cursor {
    /// Before any header, or after a header without a readable id.
    Discarding,
    /// Inside a section whose body is still growing.
    Open {
        id: String,
        title: String,
        body: String,
    },
}

impl Cursor {
    fn start(header: Header, line: &str) -> Self {
        match header {
            Header::Section { id, title } => Self::Open {
                id,
                title,
                body: line.to_string(),
            },
            Header::Unaddressable => {
                debug!(line = line.trim_end(), "numbered header without an id");
                Self::Discarding
            }
        }
    }

    fn push(self, line: &str) -> Self {
        match self {
            Self::Discarding => Self::Discarding,
            Self::Open {
                id,
                title,
                mut body,
            } => {
                body.push_str(line);
                Self::Open { id, title, body }
            }
        }
    }

    fn finish(self) -> Option<Section> {
        match self {
            Self::Discarding => None,
            Self::Open { id, title, body } => Some(Section {
                id,
                title,
                content: body.trim_end().to_string(),
            }),
        }
    }
}

/// Split a document into its sections, in document order.
///
/// Each line is offered to `format`; a recognised header closes the open section and
/// starts the next. Line terminators are kept verbatim, so a section's content is an
/// exact slice of the document up to trailing whitespace.
#[must_use]
pub fn sectionize(text: &str, format: &dyn Format) -> Vec<Section> {
    let (mut sections, cursor) = text.split_inclusive('\n').fold(
        (Vec::new(), Cursor::Discarding),
        |(mut sections, cursor), line| {
            let bare = line.trim_end_matches(['\n', '\r']);
            match format.header(bare) {
                Some(header) => {
                    sections.extend(cursor.finish());
                    (sections, Cursor::start(header, line))
                }
                None => (sections, cursor.push(line)),
            }
        },
    );
    sections.extend(cursor.finish());
    debug!(count = sections.len(), "sectionized document");
    sections
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
