//! chainhash: recompute and check the section hashes of trust chain documents.
//!
//! A trust chain is a markdown document whose numbered sections each carry a small
//! metadata block recording a parent hash and the SHA3-256 digest of the section itself.
//! The pipeline is linear:
//!
//! ```text
//! document text -> section::sectionize -> locate::locate -> verify::verify -> report
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod canonical;
pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod locate;
pub mod report;
pub mod section;
pub mod verify;

pub use error::{Error, Result};
