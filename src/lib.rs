//! # kss
//!
//! A parser for KSS (Knowledge Style Sheets) documentation comments.
//!
//! KSS is a documentation convention for stylesheets: human-readable comment
//! blocks inside CSS, LESS, SASS and SCSS files describe one UI element each
//! and carry a `Styleguide <reference>` declaration. This crate extracts
//! those comment blocks, decomposes them into description, modifiers, markup
//! example and styleguide reference, and collects them into a registry
//! queryable by reference.
//!
//! The pipeline has three layers:
//!
//! 1. [`extraction`] — strips `//` and `/* ... */` comment syntax from raw
//!    source text and groups contiguous comment lines into normalized blocks.
//! 2. [`section`] / [`modifier`] — decompose one block into its sub-sections.
//! 3. [`parser`] — walks directories of stylesheets (or literal text blobs),
//!    filters blocks that carry a styleguide declaration, and builds the
//!    reference-keyed registry.

pub mod error;
pub mod extraction;
pub mod modifier;
pub mod parser;
pub mod section;

pub use error::Error;
pub use extraction::{extract_blocks, ExtractOptions};
pub use modifier::Modifier;
pub use parser::{Input, Parser};
pub use section::Section;
