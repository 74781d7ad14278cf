// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{Parser, Subcommand};
use ns1_backend::{
    config::BackendConfig,
    notify::{LogNotifier, RequestContext},
    ns1::Ns1Client,
    reconciler::ZoneReconciler,
    zone::Zone,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Reconcile a single zone event into NS1.
#[derive(Debug, Parser)]
#[command(name = "ns1-backend", version, about)]
struct Cli {
    /// Path to the backend configuration file (YAML)
    #[arg(short, long)]
    config: PathBuf,

    /// Correlation id attached to log lines and notifications
    #[arg(long)]
    request_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a zone on NS1 as a secondary of the configured master
    Create {
        /// Fully-qualified zone name, e.g. `example.com.`
        zone: String,
        /// Orchestrator identifier of the zone
        #[arg(long, default_value = "")]
        zone_id: String,
    },
    /// Delete a zone from NS1
    Delete {
        zone: String,
        #[arg(long, default_value = "")]
        zone_id: String,
    },
    /// Report whether a zone exists on NS1
    Exists { zone: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // One zone operation at a time; no worker threads needed
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    // Initialize logging with custom format
    // Format: timestamp file:line LEVEL message
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Respects RUST_LOG_FORMAT environment variable for output format (json|text)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    debug!("Loading configuration from {}", cli.config.display());
    let config = BackendConfig::load(&cli.config)?;

    let client = Ns1Client::new(&config.provider)?;
    debug!("NS1 client created for {}", client.base_url());
    let reconciler = ZoneReconciler::new(&config, client, LogNotifier)?;

    let context = RequestContext::new(
        cli.request_id
            .unwrap_or_else(|| format!("cli-{}", std::process::id())),
    );

    match cli.command {
        Command::Create { zone, zone_id } => {
            let action = reconciler
                .create_zone(&context, &Zone::new(zone, zone_id))
                .await?;
            info!("Create finished: {action:?}");
        }
        Command::Delete { zone, zone_id } => {
            let action = reconciler
                .delete_zone(&context, &Zone::new(zone, zone_id))
                .await?;
            info!("Delete finished: {action:?}");
        }
        Command::Exists { zone } => {
            let exists = reconciler.zone_exists(&Zone::new(zone, "")).await?;
            println!("{exists}");
        }
    }

    Ok(())
}
