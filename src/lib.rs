// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # NS1 Backend - secondary-zone driver for DNS-as-a-Service orchestration
//!
//! This crate keeps zones on the NS1 managed DNS platform in step with zone
//! lifecycle events from a DNS orchestrator. Every zone is configured on NS1 as
//! a secondary that transfers its data from the orchestrator's own
//! authoritative name server.
//!
//! ## Modules
//!
//! - [`reconciler`] - Idempotent create/delete of zones with compensating cleanup
//! - [`ns1`] - NS1 HTTP API client and the [`ns1::ZoneProvider`] seam
//! - [`notify`] - Zone-change notification back to the orchestrator
//! - [`config`] - YAML configuration with environment overrides
//! - [`zone`] - Zone identity, masters and TSIG keys
//! - [`errors`] - Provider, backend and configuration errors
//! - [`verify`] - Bulk zone/record creation through the orchestrator API for manual checks
//!
//! ## Example
//!
//! ```rust,no_run
//! use ns1_backend::config::BackendConfig;
//! use ns1_backend::notify::{LogNotifier, RequestContext};
//! use ns1_backend::ns1::Ns1Client;
//! use ns1_backend::reconciler::ZoneReconciler;
//! use ns1_backend::zone::Zone;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = BackendConfig::load(Path::new("/etc/ns1-backend/config.yaml"))?;
//! let client = Ns1Client::new(&config.provider)?;
//! let reconciler = ZoneReconciler::new(&config, client, LogNotifier)?;
//!
//! let zone = Zone::new("example.com.", "7d1c9b4e");
//! reconciler.create_zone(&RequestContext::new("req-1"), &zone).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod notify;
pub mod ns1;
pub mod reconciler;
pub mod verify;
pub mod zone;

#[cfg(test)]
mod zone_tests;
