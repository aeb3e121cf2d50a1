//! The main KSS parser
//!
//! Takes CSS / LESS / SASS / SCSS files or directories of them, or literal
//! KSS strings, and builds a registry of [`Section`]s keyed by styleguide
//! reference. Blocks are kept only when their final blank-line-delimited
//! sub-section carries a `Styleguide` declaration; a later section with the
//! same reference overwrites an earlier one, in input order and then in
//! source order within a file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::error::Error;
use crate::extraction::{extract_blocks, ExtractOptions};
use crate::section::{is_styleguide_declaration, Section};

/// Extensions of the stylesheet formats KSS comments live in.
const STYLE_EXTENSIONS: &[&str] = &["css", "less", "sass", "scss"];

static EMPTY_SECTION: Lazy<Section> = Lazy::new(Section::default);

/// One parser input: a stylesheet file, a directory of stylesheets, or a
/// literal KSS text blob.
///
/// The distinction is made once, at the boundary; the parsing core never
/// probes the filesystem itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Text(String),
}

impl Input {
    /// Classify a raw argument: an existing file or directory is a
    /// [`Input::Path`], anything else is literal KSS text. There is no
    /// invalid-input case.
    pub fn detect(value: &str) -> Input {
        let path = Path::new(value);
        if path.is_dir() || path.is_file() {
            Input::Path(path.to_path_buf())
        } else {
            Input::Text(value.to_string())
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Input {
        Input::detect(value)
    }
}

/// A registry of styleguide sections, built once and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    sections: HashMap<String, Section>,
}

impl Parser {
    /// Scan every input for comment blocks that look like KSS and collect
    /// them into a reference-keyed registry.
    ///
    /// Directory inputs are walked recursively for stylesheet files, in a
    /// stable (file-name-sorted) order so reference collisions resolve the
    /// same way on every run; a file input is parsed on its own. An
    /// unreadable file fails the whole build.
    pub fn new<I>(inputs: I) -> Result<Parser, Error>
    where
        I: IntoIterator<Item = Input>,
    {
        let mut parser = Parser::default();
        for input in inputs {
            match input {
                Input::Path(path) if path.is_dir() => {
                    for file in discover_style_files(&path)? {
                        parser.add_file(&file)?;
                    }
                }
                Input::Path(file) => parser.add_file(&file)?,
                Input::Text(text) => parser.add_blocks(&text, ""),
            }
        }
        Ok(parser)
    }

    fn add_file(&mut self, file: &Path) -> Result<(), Error> {
        let text = fs::read_to_string(file).map_err(|source| Error::Read {
            path: file.to_path_buf(),
            source,
        })?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.add_blocks(&text, &file_name);
        Ok(())
    }

    fn add_blocks(&mut self, text: &str, file_name: &str) {
        for block in extract_blocks(text, &ExtractOptions::default()) {
            if is_documentation_block(&block) {
                let section = Section::new(&block, file_name);
                self.sections
                    .insert(section.reference().to_string(), section);
            }
        }
    }

    /// Finds the section for a given styleguide reference. Returns an empty
    /// sentinel section when the reference is unknown, so downstream
    /// renderers never deal with an absence case.
    pub fn section(&self, reference: &str) -> &Section {
        self.sections.get(reference).unwrap_or(&EMPTY_SECTION)
    }

    /// All parsed sections, keyed by styleguide reference.
    pub fn sections(&self) -> &HashMap<String, Section> {
        &self.sections
    }
}

/// Takes a cleaned (no comment syntax like `//` or `/* */`) comment block
/// and determines whether it is a KSS documentation block: its last
/// blank-line-delimited sub-section must be a styleguide declaration.
pub fn is_documentation_block(block: &str) -> bool {
    block
        .split("\n\n")
        .last()
        .is_some_and(is_styleguide_declaration)
}

fn discover_style_files(directory: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_style_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_style_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            STYLE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}
