//! Model router (v1)
//!
//! Classifies a free-text task and decides which model should handle it.
//!
//! # Architecture Overview
//!
//! ```text
//!   task text ──▶ prefix ──▶ strong tier ──▶ medium tier ──▶ default
//!                 (/code)    (any hit)       (best score)    (continue)
//!                    │           │                │
//!                    └───────────┴────────────────┴──▶ Decision (JSON)
//!
//!   config file ──▶ loader ──▶ validation ──▶ IntentRouter (immutable)
//!        │                                          ▲
//!        └── watcher (serve mode) ──▶ ArcSwap ──────┘
//! ```
//!
//! # Commands
//! - `route <TASK>...` prints the decision for one task
//! - `check` validates the configuration
//! - `serve` exposes the router over HTTP

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use model_router::config::watcher::ConfigWatcher;
use model_router::config::{load_or_default, ConfigSource, RouterConfig};
use model_router::http::HttpServer;
use model_router::lifecycle::{signals, Shutdown};
use model_router::observability::{logging, metrics};
use model_router::routing::{IntentRouter, KeywordMatcher};

#[derive(Parser)]
#[command(name = "model-router", version)]
#[command(about = "Route a task description to the model that should handle it", long_about = None)]
struct Cli {
    /// TOML or JSON config file (default: ./model-router.toml, else built-in tables)
    #[arg(short, long, global = true, env = "MODEL_ROUTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a task and print the decision as JSON
    Route {
        /// Task words, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        task: Vec<String>,
    },
    /// Validate the configuration and print the route tables
    Check,
    /// Serve the routing API over HTTP
    Serve {
        /// Override server.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, source) = match load_or_default(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    logging::init_logging(&config.observability);
    tracing::debug!(source = %source, "Configuration loaded");

    let result = match cli.command {
        Commands::Route { task } => route(&config, &task.join(" ")),
        Commands::Check => check(&config, &source),
        Commands::Serve { bind } => serve(config, source, bind).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn route(config: &RouterConfig, task: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = IntentRouter::new(config)?;
    let decision = router.route(task);

    tracing::debug!(
        strategy = decision.strategy.as_str(),
        target = %decision.target,
        "Task routed"
    );
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

fn check(config: &RouterConfig, source: &ConfigSource) -> Result<(), Box<dyn std::error::Error>> {
    let router = IntentRouter::new(config)?;

    println!("Configuration OK ({source})");
    println!("  default target: {}", router.default_target());
    println!("  auto route:     {}", router.auto_route());
    println!("  prefixes:");
    for (alias, target) in router.prefixes().entries() {
        println!("    /{alias:<10} -> {target}");
    }
    print_tier("strong", router.strong_routes());
    print_tier("medium", router.medium_routes());
    Ok(())
}

fn print_tier(label: &str, routes: &[KeywordMatcher]) {
    println!("  {label} routes:");
    for route in routes {
        println!(
            "    {:<10} -> {:<10} min {} of {}: {}",
            route.name(),
            route.target(),
            route.min_matches(),
            route.patterns().len(),
            route.patterns().join(", ")
        );
    }
}

async fn serve(
    config: RouterConfig,
    source: ConfigSource,
    bind: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = bind.unwrap_or_else(|| config.server.bind_address.clone());
    let router = IntentRouter::new(&config)?;

    let metrics_handle = if config.observability.metrics_enabled {
        match metrics::init_metrics() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install metrics recorder");
                None
            }
        }
    } else {
        None
    };

    // The watcher handle must outlive the server.
    let (_watcher, config_updates) = match &source {
        ConfigSource::File(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        ConfigSource::BuiltIn => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        source = %source,
        default_target = %router.default_target(),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(router, &config, metrics_handle);
    server
        .run(listener, config_updates, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
