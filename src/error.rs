//! Errors surfaced while building a styleguide registry
//!
//! The only failures the parser can hit are I/O failures from the
//! filesystem: an unreadable stylesheet or a directory traversal error.
//! Either one aborts the whole build; there is no skip-and-continue.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A stylesheet file could not be read as UTF-8 text.
    Read { path: PathBuf, source: io::Error },
    /// Recursive directory traversal failed.
    Walk(walkdir::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            Error::Walk(source) => write!(f, "directory traversal failed: {}", source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::Walk(source) => Some(source),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(source: walkdir::Error) -> Error {
        Error::Walk(source)
    }
}
