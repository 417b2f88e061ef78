//! Bibliographic identifier normalization for wiki markup
//!
//! This crate rewrites identifiers written in the many ad hoc notations found
//! in wiki articles into canonical citation templates:
//! - ISBN and SBN, hyphenated from the registration range table
//! - OCLC, ISSN, DOI and ASIN, wrapped in their templates
//!
//! The work is done by an ordered registry of detectors (`detectors`), each
//! bound to a normalizer (`normalizers`), driven line by line by the
//! `Rewriter`.

pub mod detectors;
pub mod error;
pub mod hyphenation;
pub mod identifier;
pub mod normalizers;
pub mod ranges;
pub mod rewriter;

pub use detectors::{detector, registry, Detector, Normalizer, Occurrence};
pub use error::{Error, HyphenationError, Result};
pub use hyphenation::{hyphenate, hyphenate_sbn};
pub use identifier::Identifier;
pub use normalizers::*;
pub use rewriter::{fix_bullets, Bullet, LineRewrite, RewriteOptions, RewriteReport, Rewriter};
