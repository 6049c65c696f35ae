//! termblog-index - offline post index generator
//!
//! Scans a directory tree of HTML posts and writes `posts.json`, a
//! date-sorted index of `{title, date, category, file}` entries. A
//! failed scan is fatal; a single file's version-control date failing to
//! resolve is logged and falls through to the next date source.

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{error, info};

use termblog::config::ConfigLoader;
use termblog::index;

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Posts directory to scan; defaults to the configured one
    posts_dir: Option<PathBuf>,
    /// Output path; defaults to the configured one
    output: Option<PathBuf>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> std::result::Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        app_args.output = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing output path".to_string());
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("termblog-index v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg));
                }
                arg => {
                    if app_args.posts_dir.is_some() {
                        return Err(format!("Unexpected argument: {}", arg));
                    }
                    app_args.posts_dir = Some(PathBuf::from(arg));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("termblog-index - offline post index generator");
    println!();
    println!("USAGE:");
    println!("    termblog-index [POSTS_DIR] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -o, --output <PATH>    Where to write the index (default: posts.json)");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
}

fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        print_help();
        process::exit(1);
    });

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .compact()
        .init();

    let config = ConfigLoader::new().load_or_default();
    let posts_dir = args.posts_dir.unwrap_or(config.index.posts_dir);
    let output = args.output.unwrap_or(config.index.output);
    let repo_root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // the scan as a whole is fatal; everything below it is not
    let entries = match index::generate(&posts_dir, &repo_root) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = index::write_index(&entries, &output) {
        error!("{}", e);
        process::exit(1);
    }

    info!("indexed {} post(s)", entries.len());
}
