//! Ordered directory lookup
//!
//! A [`SearchPath`] holds an ordered list of absolute directory paths and
//! resolves a filename against them, first entry wins:
//!
//! ```no_run
//! use search_path::SearchPath;
//!
//! let search_path = SearchPath::new(["/usr/share/app", "/opt/app/data"])?;
//!
//! // "/usr/share/app/theme.css" if it exists there, else "/opt/app/data/theme.css"
//! let theme = search_path.find("theme.css")?;
//!
//! // Same lookup, but a miss is an error
//! let schema = search_path.find_required("schema.json")?;
//! # Ok::<(), search_path::SearchPathError>(())
//! ```
//!
//! Candidates are formed by plain string concatenation of directory,
//! separator and filename. Nothing is normalized, so `"/a/"` and `"b"` probe
//! `"/a//b"`.

use crate::error::SearchPathError;
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::{debug, trace};

/// Search path input before validation
///
/// Accepts nothing (`None`), a single path, or an ordered collection of
/// paths. Order and duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPaths(Vec<String>);

impl RawPaths {
    /// The paths in the order given
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for RawPaths {
    fn from(path: &str) -> Self {
        RawPaths(vec![path.to_string()])
    }
}

impl From<String> for RawPaths {
    fn from(path: String) -> Self {
        RawPaths(vec![path])
    }
}

impl<S: Into<String>> From<Vec<S>> for RawPaths {
    fn from(paths: Vec<S>) -> Self {
        RawPaths(paths.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for RawPaths {
    fn from(paths: &[S]) -> Self {
        RawPaths(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for RawPaths {
    fn from(paths: [S; N]) -> Self {
        RawPaths(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawPaths>> From<Option<T>> for RawPaths {
    fn from(paths: Option<T>) -> Self {
        paths.map(Into::into).unwrap_or_default()
    }
}

/// Construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPathOptions {
    /// Require every entry to be an existing directory at construction time
    pub verify_paths: bool,
}

/// An immutable, ordered list of absolute directories to search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    paths: Vec<String>,
}

impl SearchPath {
    /// Build a search path without checking that the directories exist
    pub fn new(paths: impl Into<RawPaths>) -> Result<Self, SearchPathError> {
        Self::with_options(paths, SearchPathOptions::default())
    }

    /// Build a search path
    ///
    /// Every entry must be absolute, otherwise this fails with
    /// [`SearchPathError::NotAbsolute`] listing all relative entries. With
    /// `verify_paths` set, every entry must then also be an existing
    /// directory, otherwise this fails with [`SearchPathError::NotExist`]
    /// listing all missing entries. The absoluteness check always runs first.
    pub fn with_options(
        paths: impl Into<RawPaths>,
        options: SearchPathOptions,
    ) -> Result<Self, SearchPathError> {
        let paths = paths.into().into_vec();

        let not_absolute: Vec<String> = paths
            .iter()
            .filter(|path| !Path::new(path).is_absolute())
            .cloned()
            .collect();
        if !not_absolute.is_empty() {
            return Err(SearchPathError::NotAbsolute {
                paths: not_absolute,
            });
        }

        if options.verify_paths {
            let mut not_existing = Vec::new();
            for path in &paths {
                match probe(path)? {
                    Some(metadata) if metadata.is_dir() => {}
                    _ => not_existing.push(path.clone()),
                }
            }
            if !not_existing.is_empty() {
                return Err(SearchPathError::NotExist {
                    paths: not_existing,
                });
            }
        }

        debug!(
            entries = paths.len(),
            verified = options.verify_paths,
            "search path ready"
        );
        Ok(Self { paths })
    }

    /// The directories in search order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when there is nothing to search
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate the directories in search order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.paths.iter()
    }

    /// Find `filename` in the first directory that contains it
    ///
    /// Returns `Ok(None)` when no directory has a match. Files and
    /// directories both count as a match. Fails only if the filesystem
    /// refuses a probe for a reason other than absence.
    pub fn find(&self, filename: &str) -> Result<Option<String>, SearchPathError> {
        for dir in &self.paths {
            let candidate = format!("{dir}{MAIN_SEPARATOR}{filename}");
            if probe(&candidate)?.is_some() {
                debug!(%filename, path = %candidate, "found");
                return Ok(Some(candidate));
            }
            trace!(path = %candidate, "no match");
        }

        debug!(%filename, "not found in any search path");
        Ok(None)
    }

    /// Same as [`find`](Self::find) but a miss is a
    /// [`SearchPathError::FileNotFound`]
    pub fn find_required(&self, filename: &str) -> Result<String, SearchPathError> {
        self.find(filename)?
            .ok_or_else(|| SearchPathError::FileNotFound {
                filename: filename.to_string(),
                paths: self.paths.clone(),
            })
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stat `path`, following symlinks
///
/// `Ok(None)` means nothing is there. A path running through a regular file
/// (`/etc/hosts/x`) or a name the filesystem cannot hold counts as absent too.
fn probe(path: &str) -> Result<Option<fs::Metadata>, SearchPathError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if matches!(
            e.kind(),
            io::ErrorKind::NotFound
                | io::ErrorKind::NotADirectory
                | io::ErrorKind::InvalidFilename
        ) =>
        {
            Ok(None)
        }
        Err(source) => Err(SearchPathError::Io {
            path: PathBuf::from(path),
            source,
        }),
    }
}
