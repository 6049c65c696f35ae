//! termblog - a terminal-style blog shell
//!
//! Interactive binary: reads one command line per turn from stdin, runs
//! it through the session, and prints the resulting output block. The
//! loop only ends at end-of-input; command failures are output lines,
//! never process failures.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use termblog::config::{Config, ConfigLoader};
use termblog::content::{ContentStore, RemoteStore, StaticStore};
use termblog::error::Result;
use termblog::session::{TerminalSession, Turn};

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Serve the built-in sample content instead of the remote listing
    offline: bool,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> std::result::Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".to_string());
                    }
                }
                "--offline" => {
                    app_args.offline = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("termblog v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg => {
                    return Err(format!("Unknown option: {}", arg));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("termblog - a terminal-style blog shell");
    println!();
    println!("USAGE:");
    println!("    termblog [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("        --offline          Serve built-in sample content, no network");
    println!("    -d, --debug            Enable debug logging");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    termblog looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $TERMBLOG_CONFIG");
    println!("    3. ~/.config/termblog/config.toml");
    println!("    4. ~/.termblog.toml");
    println!("    5. ./termblog.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        print_help();
        process::exit(1);
    });

    let log_level = if args.debug { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .compact()
        .init();

    info!("starting termblog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_configuration(&args);
    let store = create_store(&args, &config)?;
    let mut session = TerminalSession::new(store, &config);

    // intro block, then the read loop
    for block in session.log() {
        println!("{}", block.plain_text());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", session.prompt_line());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // end of input
            println!();
            break;
        };

        match session.run_line(&line).await {
            Turn::Quiet => {}
            Turn::Cleared => {
                // wipe the scrollback the way the log was wiped
                print!("\x1b[2J\x1b[1;1H");
            }
            Turn::Output(block) => {
                println!("{}", block.plain_text());
            }
        }
    }

    info!("termblog shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Config {
    if let Some(path) = &args.config_path {
        debug!("loading config from: {}", path.display());
        match ConfigLoader::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config from {}: {}", path.display(), e);
                Config::default()
            }
        }
    } else {
        ConfigLoader::new().load_or_default()
    }
}

/// Build the content store the session will walk
fn create_store(args: &AppArgs, config: &Config) -> Result<Box<dyn ContentStore>> {
    if args.offline {
        debug!("using built-in sample content");
        Ok(Box::new(StaticStore::sample()))
    } else {
        debug!("using remote listing at {}", config.content.api_base);
        let store = RemoteStore::new(&config.content.api_base, &config.content.posts_dir)?;
        Ok(Box::new(store))
    }
}
