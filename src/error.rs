//! Errors raised while building or querying a search path

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchPathError {
    #[error("Search path(s) {paths:?} is not absolute.")]
    NotAbsolute { paths: Vec<String> },

    #[error("Search path(s) {paths:?} does not exist.")]
    NotExist { paths: Vec<String> },

    #[error("File '{filename}' not found in search paths {paths:?}.")]
    FileNotFound {
        filename: String,
        paths: Vec<String>,
    },

    /// The filesystem refused a probe for a reason other than absence
    #[error("Failed to probe {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SearchPathError {
    /// The search paths that caused a construction failure
    ///
    /// Returns an empty slice for lookup and I/O failures.
    pub fn offending_paths(&self) -> &[String] {
        match self {
            SearchPathError::NotAbsolute { paths } | SearchPathError::NotExist { paths } => paths,
            SearchPathError::FileNotFound { .. } | SearchPathError::Io { .. } => &[],
        }
    }
}
