//! operadora-routes
//!
//! Command-line entry point: serve the route resolver over HTTP, or
//! resolve, list and build paths from the configured route table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use operadora_routes::config::{load_config, AppConfig};
use operadora_routes::history::{HistoryBase, Navigator};
use operadora_routes::lifecycle::{signals, startup, Shutdown};
use operadora_routes::observability::logging;
use operadora_routes::routing::{Params, RouteError, RouteTable};

#[derive(Parser)]
#[command(name = "operadora-routes")]
#[command(about = "Route table for the ANS operadoras web interface", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve route resolution over HTTP
    Serve,
    /// Resolve a path and print the matched route as JSON
    Resolve {
        /// Path or URL, e.g. /operadoras/12345678000190
        path: String,
    },
    /// List configured routes
    Routes,
    /// Build the path for a named route
    Href {
        /// Route name, e.g. operadora
        name: String,

        /// Parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level)?;
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Serve => {
            tracing::info!("operadora-routes v{} starting", env!("CARGO_PKG_VERSION"));
            let shutdown = Shutdown::new();
            signals::spawn_signal_listener(shutdown.clone());
            startup::run(config, &shutdown).await?;
            tracing::info!("Shutdown complete");
        }
        Commands::Resolve { path } => {
            let routes = RouteTable::from_config(&config.routes, config.router)?;
            let navigator = Navigator::new(&routes, HistoryBase::new(&config.history.base));
            match navigator.resolve(&path) {
                Ok(entry) => println!("{}", serde_json::to_string_pretty(&entry.resolved)?),
                Err(e @ RouteError::NoMatch { .. }) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Routes => {
            let routes = RouteTable::from_config(&config.routes, config.router)?;
            let base = HistoryBase::new(&config.history.base);
            for route in routes.routes() {
                println!("{:<12} {:<28} {}", route.name(), base.prepend(route.path()), route.view());
            }
        }
        Commands::Href { name, params } => {
            let routes = RouteTable::from_config(&config.routes, config.router)?;
            let navigator = Navigator::new(&routes, HistoryBase::new(&config.history.base));
            let params: Params = params.into_iter().collect();
            println!("{}", navigator.href(&name, &params)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
