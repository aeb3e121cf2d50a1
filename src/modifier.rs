//! Style modifiers
//!
//! A [`Modifier`] is a named variant of a documented UI element, usually a
//! class name or a pseudo-class such as `:hover`, paired with a human
//! description.
//!
//! The modifiers sub-section of a comment block is parsed line by line:
//!
//! ```text
//! :hover    - Highlights when hovering.
//! .primary  - Indicates button is the primary action,
//!               wrapped onto a continuation line.
//! ```
//!
//! A line indented deeper than the previous one continues the previous
//! modifier's description. Lines without a ` - ` separator are silently
//! dropped; the parse is best-effort.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extraction::leading_whitespace;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

const NAME_SEPARATOR: &str = " - ";

/// A named variant of a UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    name: String,
    description: String,
}

impl Modifier {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Modifier {
        Modifier {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The modifier name, e.g. `:hover` or `.primary`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human description of the modifier.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The modifier name as a CSS class. For pseudo-classes, a generated
    /// class name is returned. Useful for generating styleguides.
    ///
    /// ```text
    /// :hover      => "pseudo-class-hover"
    /// sexy-button => "sexy-button"
    /// ```
    pub fn class_name(&self) -> String {
        self.name
            .replace('.', " ")
            .replace(':', " pseudo-class-")
            .trim()
            .to_string()
    }
}

/// Parse the modifiers sub-section of a comment block into an ordered list.
pub fn parse_modifiers(text: Option<&str>) -> Vec<Modifier> {
    let mut modifiers: Vec<Modifier> = Vec::new();
    let Some(text) = text else {
        return modifiers;
    };

    let mut last_indent: Option<usize> = None;
    for line in text.split('\n').filter(|line| !line.trim().is_empty()) {
        let indent = leading_whitespace(line);

        if last_indent.is_some_and(|last| indent > last) {
            // Deeper indent wraps the previous modifier's description;
            // space runs collapse to a single space.
            if let Some(modifier) = modifiers.last_mut() {
                modifier
                    .description
                    .push_str(&SPACE_RUNS.replace_all(line, " "));
            }
        } else if let Some((name, description)) = line.split_once(NAME_SEPARATOR) {
            modifiers.push(Modifier::new(name.trim(), description.trim()));
        }

        last_indent = Some(indent);
    }

    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_description() {
        let modifiers = parse_modifiers(Some(":hover    - Highlights when hovering."));
        assert_eq!(modifiers.len(), 1);
        assert_eq!(modifiers[0].name(), ":hover");
        assert_eq!(modifiers[0].description(), "Highlights when hovering.");
    }

    #[test]
    fn preserves_source_order_and_allows_duplicates() {
        let modifiers = parse_modifiers(Some(
            ".primary - First description\n.primary - Second description",
        ));
        assert_eq!(modifiers.len(), 2);
        assert_eq!(modifiers[0].description(), "First description");
        assert_eq!(modifiers[1].description(), "Second description");
    }

    #[test]
    fn deeper_indent_continues_the_previous_description() {
        let modifiers = parse_modifiers(Some(
            ".primary - Indicates button is\n              the   primary action.",
        ));
        assert_eq!(modifiers.len(), 1);
        assert_eq!(
            modifiers[0].description(),
            "Indicates button is the primary action."
        );
    }

    #[test]
    fn malformed_lines_are_silently_dropped() {
        let modifiers = parse_modifiers(Some(
            "not a modifier line\n:hover - Highlights when hovering.",
        ));
        assert_eq!(modifiers.len(), 1);
        assert_eq!(modifiers[0].name(), ":hover");
    }

    #[test]
    fn continuation_without_a_modifier_is_dropped() {
        let modifiers = parse_modifiers(Some("stray line\n   indented continuation"));
        assert!(modifiers.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let modifiers = parse_modifiers(Some(":hover - One.\n\n:focus - Two."));
        assert_eq!(modifiers.len(), 2);
    }

    #[test]
    fn absent_text_yields_no_modifiers() {
        assert!(parse_modifiers(None).is_empty());
    }

    #[test]
    fn class_name_expands_pseudo_classes() {
        assert_eq!(Modifier::new(":hover", "").class_name(), "pseudo-class-hover");
        assert_eq!(Modifier::new(".primary", "").class_name(), "primary");
        assert_eq!(Modifier::new("sexy-button", "").class_name(), "sexy-button");
    }
}
