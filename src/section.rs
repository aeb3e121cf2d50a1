//! Styleguide sections
//!
//! A [`Section`] represents one documented UI element: the collection of its
//! description, modifiers, markup example and styleguide reference, all
//! recovered from a single normalized comment block.
//!
//! Sub-sections of a block are delimited by blank lines. They are recognized
//! by content, not position: the reference sub-section is the one carrying a
//! `Styleguide <key>` declaration, the markup sub-section starts with
//! `Markup: `, the modifiers sub-section is the last remaining one after the
//! first, and everything else is description.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::modifier::{parse_modifiers, Modifier};

static STYLEGUIDE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Styleguide [a-zA-Z0-9]").unwrap());
static STYLEGUIDE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Styleguide (.+)").unwrap());

const MARKUP_PREFIX: &str = "Markup: ";

/// Does this text contain a styleguide declaration such as
/// `Styleguide 2.1.1` or `Styleguide Buttons.Big`?
///
/// `No Styleguide reference.` is the conventional opt-out and does not
/// count as a declaration.
pub fn is_styleguide_declaration(text: &str) -> bool {
    // Rust's regex crate has no lookbehind, so the `No `-exclusion is checked
    // per candidate. A rejected candidate only advances the scan by one
    // position: another occurrence may start inside its span.
    let mut from = 0;
    while let Some(found) = STYLEGUIDE_DECLARATION.find_at(text, from) {
        if !preceded_by_no(&text[..found.start()]) {
            return true;
        }
        from = found.start() + 1;
    }
    false
}

fn preceded_by_no(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b"No ")
}

/// One documented UI element parsed from a comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    raw: String,
    file_name: String,
    reference: String,
    description: String,
    modifiers: Vec<Modifier>,
    markup: String,
}

impl Section {
    /// Decompose a normalized comment block into a section.
    ///
    /// `file_name` is the base name of the originating file, or empty for
    /// in-memory input. Blocks without a recognizable styleguide declaration
    /// produce an empty `reference`; filtering those out is the parser's
    /// job, not this type's.
    pub fn new(raw_text: &str, file_name: &str) -> Section {
        let sub_sections: Vec<&str> = raw_text.split("\n\n").collect();

        let reference_comment = sub_sections
            .iter()
            .copied()
            .find(|sub| is_styleguide_declaration(sub))
            .unwrap_or("");
        let markup_comment = sub_sections
            .iter()
            .copied()
            .find(|sub| has_markup_prefix(sub))
            .unwrap_or("");
        // The modifiers list is the last sub-section after the first that is
        // neither the reference nor the markup. With no modifier list
        // present this deliberately claims the final description paragraph;
        // that heuristic comes with the format.
        let modifiers_comment = sub_sections
            .iter()
            .skip(1)
            .copied()
            .filter(|sub| *sub != reference_comment && *sub != markup_comment)
            .last();

        let description = sub_sections
            .iter()
            .copied()
            .filter(|sub| {
                *sub != reference_comment
                    && *sub != markup_comment
                    && modifiers_comment != Some(*sub)
            })
            .collect::<Vec<&str>>()
            .join("\n\n");

        Section {
            raw: raw_text.to_string(),
            file_name: file_name.to_string(),
            reference: extract_reference(reference_comment),
            description,
            modifiers: parse_modifiers(modifiers_comment),
            markup: extract_markup(markup_comment),
        }
    }

    /// The raw comment text for the section, minus any comment syntax.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Base name of the file this section was found in; empty for
    /// string input.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The styleguide reference this block documents, e.g. `"2.1.1"` or
    /// `"Buttons - Truly Lime"`. Empty when the block carries no
    /// declaration.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The description paragraphs, joined by blank lines.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The modifiers of this element, in source order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The example markup, or empty when the block has no `Markup:`
    /// sub-section.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

fn has_markup_prefix(sub_section: &str) -> bool {
    sub_section
        .get(..MARKUP_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MARKUP_PREFIX))
}

fn extract_reference(reference_comment: &str) -> String {
    let cleaned = reference_comment.trim().trim_end_matches('.');
    STYLEGUIDE_REFERENCE
        .captures(cleaned)
        .and_then(|captures| captures.get(1))
        .map(|key| key.as_str().trim().to_string())
        .unwrap_or_default()
}

fn extract_markup(markup_comment: &str) -> String {
    if markup_comment.trim().is_empty() {
        String::new()
    } else {
        markup_comment
            .get(MARKUP_PREFIX.len()..)
            .unwrap_or("")
            .to_string()
    }
}
