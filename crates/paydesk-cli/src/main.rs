//! # paydesk CLI entry point
//!
//! Parses command-line arguments, opens the platform registry and
//! dispatches to the route command handlers.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use paydesk_cli::load_registry;
use paydesk_cli::route::{run_route, RouteCommand};
use paydesk_router::PlatformRouteHandler;

/// Paydesk console routing tool.
///
/// Resolves navigation targets the way the console's navigation guard does,
/// and inspects or switches the active platform.
#[derive(Parser, Debug)]
#[command(name = "paydesk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML registry configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file persisting the active platform (default: .paydesk/state.json).
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: RouteCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_registry(cli.config.as_deref(), cli.state_file.as_deref()).and_then(
        |registry| {
            let routes = PlatformRouteHandler::new(Arc::new(registry));
            run_route(&cli.command, &routes, &mut std::io::stdout().lock())
        },
    );

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
