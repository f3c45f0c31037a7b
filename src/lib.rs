//! Resolve a filename against an ordered list of directories, `PATH`-style.

pub mod config;
pub mod error;
pub mod search_path;

pub use error::SearchPathError;
pub use search_path::{RawPaths, SearchPath, SearchPathOptions};
