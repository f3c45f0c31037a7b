use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve a filename against an ordered list of directories
#[derive(Parser, Debug)]
#[command(name = "search-path")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory to search (repeatable, searched in the order given)
    #[arg(long = "path", short = 'p', value_name = "DIR", global = true)]
    pub paths: Vec<String>,

    /// Require every search directory to exist
    #[arg(long, global = true)]
    pub verify: bool,

    /// Config file to read instead of ~/.config/search-path/config.json
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log each probe to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the first search directory entry matching FILENAME
    Find {
        /// File name, may contain path separators
        filename: String,
    },
    /// Print the effective search path, one directory per line
    List,
    /// Check that every search directory exists
    Check,
}
