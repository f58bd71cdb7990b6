use super::{MarkdownFormat, Numbering};
use crate::formats::{Format, Header};

fn section(id: &str, title: &str) -> Option<Header> {
    Some(Header::Section {
        id: id.to_string(),
        title: title.to_string(),
    })
}

#[test]
fn test_numbered_headers() {
    let md = MarkdownFormat::default();
    assert_eq!(md.header("### 1. Scope"), section("1", "1. Scope"));
    assert_eq!(md.header("### 0.1 Genesis"), section("0.1", "0.1 Genesis"));
    assert_eq!(md.header("### 0.0 Root  "), section("0.0", "0.0 Root"));
    assert_eq!(md.header("### 2.10. Nested"), section("2.10", "2.10. Nested"));
}

#[test]
fn test_purpose_header() {
    let md = MarkdownFormat::default();
    assert_eq!(md.header("## Purpose"), section("Purpose", "Purpose"));
    assert_eq!(
        md.header("## Purpose of this chain"),
        section("Purpose", "Purpose")
    );
    assert_eq!(md.header("# Purpose"), None);
    assert_eq!(md.header(" ## Purpose"), None);
}

#[test]
fn test_non_headers() {
    let md = MarkdownFormat::default();
    assert_eq!(md.header(""), None);
    assert_eq!(md.header("Plain text 1. with a number"), None);
    assert_eq!(md.header("## 1. Level two"), None);
    assert_eq!(md.header("#### 1. Level four"), None);
    assert_eq!(md.header("### Unnumbered"), None);
    assert_eq!(md.header("###1. No space"), None);
    assert_eq!(md.header("### 3 No period"), None);
}

#[test]
fn test_open_numbering_accepts_large_numbers() {
    let md = MarkdownFormat::new(Numbering::Open);
    assert_eq!(md.header("### 13. Appendix"), section("13", "13. Appendix"));
    assert_eq!(md.header("### 100.2 Far"), section("100.2", "100.2 Far"));
}

#[test]
fn test_legacy_numbering_closed_range() {
    let md = MarkdownFormat::new(Numbering::Legacy);
    assert_eq!(md.header("### 12. Last"), section("12", "12. Last"));
    assert_eq!(md.header("### 0.1 Genesis"), section("0.1", "0.1 Genesis"));
    assert_eq!(md.header("### 13. Appendix"), None, "13 is outside 0-12");
}

#[test]
fn test_legacy_numbering_token_anywhere() {
    let md = MarkdownFormat::new(Numbering::Legacy);
    // The token may sit anywhere on the line; the id must still follow the marker.
    assert_eq!(
        md.header("### Appendix, see 3. above"),
        Some(Header::Unaddressable)
    );
    assert_eq!(
        MarkdownFormat::new(Numbering::Open).header("### Appendix, see 3. above"),
        None
    );
}
