//! Comment-block extraction
//!
//! Takes raw stylesheet text and extracts the embedded comments from it.
//! Two comment formats are recognized:
//!
//! ```text
//! // Single line style.
//! /* Multi-line style. */
//! ```
//!
//! Extraction is a line-oriented pass over the input. Contiguous runs of
//! single-line comments, and each `/* ... */` span, are grouped into one
//! block apiece. Two independent flags track whether a single-line run or a
//! multi-line span is open; both the single-line and multi-line branches are
//! evaluated for every line, and block boundaries depend on that — do not
//! collapse the flags into a mutually exclusive state.
//!
//! Finalized blocks are normalized (unless [`ExtractOptions`] says to
//! preserve whitespace): leading `*` gutters are stripped, the indentation
//! measured on the block's first line is removed from every line, blank
//! lines become empty strings, and the whole block is trimmed.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_LINE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*//").unwrap());
static MULTI_LINE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\*").unwrap());
static MULTI_LINE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*/").unwrap());
static IS_SINGLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*//").unwrap());
static IS_MULTI_LINE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*/\*").unwrap());
static LINE_GUTTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\*+").unwrap());

/// Options controlling block extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Preserve the whitespace before/after comment markers (default: false).
    pub preserve_whitespace: bool,
}

/// Is this a single-line comment? `// This style`
pub fn is_single_line_comment(line: &str) -> bool {
    IS_SINGLE_LINE.is_match(line)
}

/// Is this the start of a multi-line comment? `/* This style */`
pub fn is_start_multi_line_comment(line: &str) -> bool {
    IS_MULTI_LINE_START.is_match(line)
}

/// Is this the end of a multi-line comment? `/* This style */`
///
/// A single-line comment never ends a multi-line span, even when its text
/// contains a literal `*/`.
pub fn is_end_multi_line_comment(line: &str) -> bool {
    !is_single_line_comment(line) && MULTI_LINE_CLOSE.is_match(line)
}

/// Removes the comment identifier for single-line comments.
///
/// Only the leading marker (with any whitespace immediately before it) is
/// removed; `//` appearing later in the line is content.
pub fn strip_single_line_marker(line: &str) -> String {
    SINGLE_LINE_MARKER.replace(line, "").trim_end().to_string()
}

/// Removes the comment identifiers for multi-line comments.
pub fn strip_multi_line_markers(line: &str) -> String {
    let opened = MULTI_LINE_OPEN.replace(line, "");
    MULTI_LINE_CLOSE.replace(&opened, "").trim_end().to_string()
}

/// Extract every comment block from `text`, in source order.
///
/// A block is either the content of one `/* ... */` span or the joined
/// content of consecutive single-line comments. Lines are split on `\n`
/// with a trailing `\r` stripped, so CRLF input works unchanged.
pub fn extract_blocks(text: &str, options: &ExtractOptions) -> Vec<String> {
    // A trailing comment line with no final newline must still close its
    // block, so make sure the last line is followed by one.
    let text: Cow<'_, str> = if !text.is_empty() && !text.ends_with('\n') {
        Cow::Owned(format!("{}\n", text))
    } else {
        Cow::Borrowed(text)
    };

    let mut blocks = Vec::new();
    let mut current: Option<String> = None;
    let mut in_single_line_run = false;
    let mut in_multi_line_run = false;

    for line in text.split('\n').map(|line| line.trim_end_matches('\r')) {
        // Single-line style
        if is_single_line_comment(line) {
            let stripped = strip_single_line_marker(line);
            if in_single_line_run {
                if let Some(block) = current.as_mut() {
                    block.push('\n');
                    block.push_str(&stripped);
                }
            } else {
                current = Some(stripped);
                in_single_line_run = true;
            }
        }

        // Multi-line style, evaluated independently of the branch above
        if is_start_multi_line_comment(line) || in_multi_line_run {
            let stripped = strip_multi_line_markers(line);
            if in_multi_line_run {
                if let Some(block) = current.as_mut() {
                    block.push('\n');
                    block.push_str(&stripped);
                }
            } else {
                current = Some(stripped);
                in_multi_line_run = true;
            }
        }

        // Close the multi-line span after this line's content was taken
        if is_end_multi_line_comment(line) {
            in_multi_line_run = false;
        }

        // A line that belongs to no open comment finalizes the block
        if !(is_single_line_comment(line) || in_multi_line_run) {
            if let Some(block) = current.take() {
                blocks.push(normalize_block(&block, options));
            }
            in_single_line_run = false;
        }
    }

    blocks
}

/// Normalizes a comment block to ignore any consistent preceding
/// whitespace. The indentation of the block's first line is taken as the
/// block's indent and stripped from every line that carries at least that
/// much. Leading `*` gutters (the `/** ... * line ... */` style) are
/// stripped first, and the whole block is trimmed.
pub fn normalize_block(block: &str, options: &ExtractOptions) -> String {
    if options.preserve_whitespace {
        return block.to_string();
    }

    let without_gutter = LINE_GUTTER.replace_all(block, "");

    let mut indent_size: Option<usize> = None;
    let unindented: Vec<&str> = without_gutter
        .split('\n')
        .map(|line| {
            let leading = leading_whitespace(line);
            let indent = *indent_size.get_or_insert(leading);
            if line.trim().is_empty() {
                ""
            } else if indent > 0 && leading >= indent {
                strip_leading_chars(line, indent)
            } else {
                line
            }
        })
        .collect();

    unindented.join("\n").trim().to_string()
}

/// Number of leading whitespace characters on a line.
pub(crate) fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_leading_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        extract_blocks(text, &ExtractOptions::default())
    }

    #[test]
    fn recognizes_single_line_comment_syntax() {
        assert!(is_single_line_comment("// yuuuup"));
        assert!(is_single_line_comment("    // indented"));
        assert!(!is_single_line_comment("!nooooope"));
    }

    #[test]
    fn recognizes_start_of_multi_line_comment_syntax() {
        assert!(is_start_multi_line_comment("/* yuuuup"));
        assert!(!is_start_multi_line_comment("nooooope"));
    }

    #[test]
    fn recognizes_end_of_multi_line_comment_syntax() {
        assert!(is_end_multi_line_comment(" yuuuuup */"));
        assert!(!is_end_multi_line_comment("noooooope"));
        // a single-line comment never closes a span
        assert!(!is_end_multi_line_comment("// content with */ inside"));
    }

    #[test]
    fn strips_single_line_comment_marker() {
        assert_eq!(strip_single_line_marker("// yuuuuup"), " yuuuuup");
        assert_eq!(strip_single_line_marker("    // indented   "), " indented");
    }

    #[test]
    fn strips_multi_line_comment_markers() {
        assert_eq!(strip_multi_line_markers("/* yuuuup */"), " yuuuup");
    }

    #[test]
    fn keeps_marker_lookalikes_in_content() {
        let blocks = extract("// This comment has a /* comment */ identifier inside of it!\n");
        assert_eq!(
            blocks,
            vec!["This comment has a /* comment */ identifier inside of it!"]
        );
    }

    #[test]
    fn no_comments_means_no_blocks() {
        let blocks = extract("a.button {\n  color: green;\n}\n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn groups_contiguous_single_line_comments() {
        let blocks = extract("// one\n// two\n\n// three\n");
        assert_eq!(blocks, vec!["one\ntwo", "three"]);
    }

    #[test]
    fn closes_trailing_block_without_final_newline() {
        let blocks = extract("// one\n// two");
        assert_eq!(blocks, vec!["one\ntwo"]);
    }

    #[test]
    fn extracts_multi_line_spans() {
        let blocks = extract("/* first\nsecond */\nbody {\n}\n/* third */\n");
        assert_eq!(blocks, vec!["first\nsecond", "third"]);
    }

    #[test]
    fn strips_star_gutters() {
        let blocks = extract("/* heading\n *\n * detail line */\n");
        assert_eq!(blocks, vec!["heading\n\ndetail line"]);
    }

    #[test]
    fn strips_consistent_indentation_measured_on_first_line() {
        let block = " first line\n  still indented\nflush left";
        let normalized = normalize_block(block, &ExtractOptions::default());
        assert_eq!(normalized, "first line\n still indented\nflush left");
    }

    #[test]
    fn blank_lines_become_empty_strings() {
        let block = "  first\n   \t \n  second";
        let normalized = normalize_block(block, &ExtractOptions::default());
        assert_eq!(normalized, "first\n\nsecond");
    }

    #[test]
    fn normalization_is_idempotent_on_normalized_blocks() {
        let options = ExtractOptions::default();
        let once = normalize_block("  first\n\n  second paragraph\n", &options);
        let twice = normalize_block(&once, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserve_whitespace_skips_normalization() {
        let options = ExtractOptions {
            preserve_whitespace: true,
        };
        let blocks = extract_blocks("//   padded   \n", &options);
        assert_eq!(blocks, vec!["   padded"]);
    }
}
