// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone sync checker
//!
//! Creates or deletes zones through the orchestrator's public API so that the
//! result can be checked on NS1 by hand.
//!
//! Usage:
//!   zone-sync-check -c create -a http://192.168.0.60 -u admin -p password -z ab -i 10
//!   zone-sync-check -c delete -a http://192.168.0.60 -u admin -p password -z ab -i 10
//!
//! `create` makes zones `ab0.com.` to `ab9.com.` with ten A record sets each;
//! `delete` removes every zone the user can see.

use clap::Parser;
use ns1_backend::verify::{create_zones, delete_zones, BulkCommand, OrchestratorClient};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "zone-sync-check", version, about)]
struct Args {
    /// Operation to run
    #[arg(short = 'c', value_enum)]
    command: BulkCommand,

    /// Orchestrator base URL, e.g. http://192.168.0.60
    #[arg(short = 'a')]
    api_url: String,

    /// User name
    #[arg(short = 'u')]
    username: String,

    /// Password
    #[arg(short = 'p')]
    password: String,

    /// Zone name prefix
    #[arg(short = 'z')]
    zone_prefix: String,

    /// Number of zones, and of records per zone
    #[arg(short = 'i', value_parser = clap::value_parser!(u32).range(0..=256))]
    count: u32,
}

fn main() -> ExitCode {
    // clap exits with status 2 on argument errors
    let args = Args::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(args))
}

async fn run(args: Args) -> ExitCode {
    let mut client = OrchestratorClient::new(&args.api_url);
    if let Err(e) = client.authenticate(&args.username, &args.password).await {
        println!("Error getting auth token: {e:#}");
        return ExitCode::FAILURE;
    }
    println!("Authenticated as {}", args.username);

    let mut out = std::io::stdout();
    let result = match args.command {
        BulkCommand::Create => create_zones(&client, &args.zone_prefix, args.count, &mut out).await,
        BulkCommand::Delete => delete_zones(&client, &mut out).await,
    };

    match result {
        Ok(summary) => {
            println!("==================================");
            println!(
                "Zones: {}, records: {}, failures: {}",
                summary.zones, summary.records, summary.failures
            );
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
