//! Resolve a caller-supplied section id against parsed sections.
//!
//! Two conventions apply before the lookup: the bare root id `0` is the same as `0.0`, and
//! `purpose` in any case addresses the `## Purpose` section. Everything else is an exact,
//! case-sensitive match. When ids repeat, the first section in document order wins.

use crate::error::{Error, Result};
use crate::section::Section;

const ROOT_ALIAS: &str = "0";
const ROOT_ID: &str = "0.0";
const PURPOSE_ID: &str = "Purpose";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A requested id after normalisation.
pub enum Query {
    /// The purpose section, however it was spelt.
    Purpose,
    /// Any other id, compared exactly.
    Id(String),
}

impl Query {
    #[must_use]
    /// Normalise a raw id from the command line.
    pub fn parse(requested: &str) -> Self {
        if requested.eq_ignore_ascii_case(PURPOSE_ID) {
            Self::Purpose
        } else if requested == ROOT_ALIAS {
            Self::Id(ROOT_ID.to_string())
        } else {
            Self::Id(requested.to_string())
        }
    }

    #[must_use]
    /// Whether `section` is addressed by this query.
    pub fn matches(&self, section: &Section) -> bool {
        match self {
            Self::Purpose => section.id == PURPOSE_ID,
            Self::Id(id) => section.id == *id,
        }
    }
}

/// First section addressed by `requested`, or `None` when the id is not in the document.
#[must_use]
pub fn locate<'a>(sections: &'a [Section], requested: &str) -> Option<&'a Section> {
    let query = Query::parse(requested);
    sections.iter().find(|section| query.matches(section))
}

/// Like [`locate`], but a missing id is an [`Error::SectionNotFound`] naming `chain`.
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] if no section is addressed by `requested`.
pub fn require<'a>(sections: &'a [Section], chain: &str, requested: &str) -> Result<&'a Section> {
    locate(sections, requested).ok_or_else(|| Error::SectionNotFound {
        chain: chain.to_string(),
        section: requested.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/locate.rs"]
mod tests;
