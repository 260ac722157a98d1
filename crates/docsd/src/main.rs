//! docsd - Gateway documentation daemon
//!
//! Serves the aggregated API documentation index for the services behind
//! the gateway.
//!
//! Usage:
//!   docsd [OPTIONS] [config.toml]
//!
//! If no config file is provided, the built-in service list is used.

mod config;

use anyhow::Context;
use docs_api::{create_router, AppState};
use docs_registry::{populate, DocRegistry};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DaemonConfig, ServerConfig};

/// Parsed command-line arguments
#[derive(Debug, Default)]
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
    /// Keep the registry writable regardless of config
    dynamic: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Args {
    let mut result = Args::default();

    for arg in args {
        match arg.as_str() {
            "--dynamic" => result.dynamic = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            a if !a.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(a.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"docsd - Gateway documentation daemon

Usage: docsd [OPTIONS] [config.toml]

Options:
      --dynamic   Accept service (un)registration through the admin API
                  after startup
  -h, --help      Print this help message

Examples:
  # Run with the built-in service list
  docsd

  # Run with config file
  docsd docsd.toml
"#
    );
}

/// Populate the registry and move it into its serving form.
///
/// The returned state is the only handle request handlers get, so the
/// registry is complete before anything can read it.
fn build_state(config: &DaemonConfig, force_dynamic: bool) -> anyhow::Result<AppState> {
    let registry = populate(config.entries()).context("Invalid service documentation entry")?;

    let dynamic = force_dynamic || config.registry.dynamic;
    let registry = if dynamic {
        tracing::info!(count = registry.len(), "Registry in dynamic mode");
        registry.into_shared().into_arc()
    } else {
        tracing::info!(count = registry.len(), "Registry in static mode");
        registry.freeze().into_arc()
    };

    if let Some(primary) = &config.registry.primary {
        if registry.snapshot().find(primary).is_none() {
            tracing::warn!(primary = %primary, "Primary service is not registered");
        }
    }

    Ok(AppState::with_api_info(registry, config.api_info.clone())
        .with_primary(config.registry.primary.clone()))
}

/// Bind the HTTP listener. `host` may be an IP literal or a hostname.
async fn bind_listener(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", server.host, server.port))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsd=info,docs_api=info,docs_registry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docsd (gateway documentation daemon)");

    let args = parse_args(std::env::args().skip(1));

    let config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        DaemonConfig::load(path)?
    } else {
        tracing::info!("No config file provided, using built-in service list");
        DaemonConfig::builtin()
    };

    let state = match build_state(&config, args.dynamic) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup aborted: {:#}", e);
            return Err(e);
        }
    };

    let app = create_router(state);

    let listener = bind_listener(&config.server).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
