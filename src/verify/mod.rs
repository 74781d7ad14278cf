// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manual end-to-end verification through the orchestrator's public API.
//!
//! Zones and records are created (or deleted) in the orchestrator, which in
//! turn drives the NS1 backend. An operator then checks NS1 by hand. Nothing in
//! here is used by the backend itself.

pub mod bulk;
pub mod client;
pub mod types;

pub use bulk::{create_zones, delete_zones, zone_names, BulkSummary};
pub use client::OrchestratorClient;

/// Bulk operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BulkCommand {
    /// Create zones with A record sets
    Create,
    /// Delete all zones
    Delete,
}
