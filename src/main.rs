mod cli;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use output::{CheckResult, FindResult, ListResult};
use search_path::config::Config;
use search_path::{SearchPath, SearchPathOptions};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a platform-separated directory list
const SEARCH_PATH_ENV: &str = "SEARCH_PATH";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::Find { ref filename }) => run_find(&cli, filename),
        Some(Command::List) => run_list(&cli),
        Some(Command::Check) => run_check(&cli),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Build the search path from flags, environment and config, in that order
fn build_search_path(
    cli: &Cli,
    force_verify: bool,
) -> Result<SearchPath, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let paths = if !cli.paths.is_empty() {
        cli.paths.clone()
    } else if let Some(value) = std::env::var_os(SEARCH_PATH_ENV).filter(|v| !v.is_empty()) {
        std::env::split_paths(&value)
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    } else {
        config.paths
    };

    let options = SearchPathOptions {
        verify_paths: force_verify || cli.verify || config.verify_paths,
    };

    Ok(SearchPath::with_options(paths, options)?)
}

fn run_find(cli: &Cli, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let search_path = build_search_path(cli, false)?;
    let path = search_path.find_required(filename)?;

    if cli.json {
        output::print_json(&FindResult {
            filename: filename.to_string(),
            path,
        });
    } else {
        println!("{}", path);
    }

    Ok(())
}

fn run_list(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let search_path = build_search_path(cli, false)?;

    if cli.json {
        output::print_json(&ListResult {
            paths: search_path.paths().to_vec(),
        });
    } else if search_path.is_empty() {
        println!("Search path is empty");
    } else {
        for dir in &search_path {
            println!("{}", dir);
        }
    }

    Ok(())
}

fn run_check(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let search_path = build_search_path(cli, true)?;

    if cli.json {
        output::print_json(&CheckResult {
            ok: true,
            paths: search_path.paths().to_vec(),
        });
    } else {
        println!("OK: {} search path(s) exist", search_path.len());
    }

    Ok(())
}
