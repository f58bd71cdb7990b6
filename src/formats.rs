//! Format trait and implementations for different document types.
//!
//! A format decides which lines open a new section. Everything else about splitting a
//! document (accumulating bodies, trimming, ordering) is shared and lives in
//! [`crate::section`].

pub mod markdown;

/// What a format recognised at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// A boundary opening an addressable section.
    Section {
        /// Identifier callers use to address the section, e.g. `0.1` or `Purpose`.
        id: String,
        /// Heading text without the markup marker.
        title: String,
    },
    /// A boundary whose id could not be read. It closes the open section and the lines
    /// that follow are dropped until the next addressable header.
    Unaddressable,
}

/// Line-level header rules for one document syntax.
pub trait Format {
    /// Classify a single line, given without its line terminator.
    fn header(&self, line: &str) -> Option<Header>;
}
