// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone-change notification back to the orchestrator.
//!
//! After a zone is created on NS1 the orchestrator must start propagating the
//! zone (NOTIFY to the secondary, polling for serials). Delivery and retry are
//! owned entirely by the orchestrator; the backend only hands over the
//! parameters it was configured with.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::constants::{
    DEFAULT_NOTIFY_DELAY_SECS, DEFAULT_NOTIFY_HOST, DEFAULT_NOTIFY_MAX_RETRIES,
    DEFAULT_NOTIFY_PORT, DEFAULT_NOTIFY_RETRY_INTERVAL_SECS, DEFAULT_NOTIFY_TIMEOUT_SECS,
};
use crate::zone::Zone;

/// Opaque request context passed through from the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation id of the orchestrator request
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// Where and how persistently the orchestrator should announce a zone change.
///
/// Durations are configured in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifyParams {
    pub host: String,
    pub port: u16,
    pub timeout: u64,
    pub retry_interval: u64,
    pub max_retries: u32,
    pub delay: u64,
}

impl Default for NotifyParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_NOTIFY_HOST.to_string(),
            port: DEFAULT_NOTIFY_PORT,
            timeout: DEFAULT_NOTIFY_TIMEOUT_SECS,
            retry_interval: DEFAULT_NOTIFY_RETRY_INTERVAL_SECS,
            max_retries: DEFAULT_NOTIFY_MAX_RETRIES,
            delay: DEFAULT_NOTIFY_DELAY_SECS,
        }
    }
}

impl NotifyParams {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    #[must_use]
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay)
    }
}

/// Orchestrator service that propagates zone changes.
#[async_trait]
pub trait ZoneNotifier: Send + Sync {
    /// Announce that `zone` changed on the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the orchestrator refused or could not accept the request.
    async fn notify_zone_changed(
        &self,
        context: &RequestContext,
        zone: &Zone,
        params: &NotifyParams,
    ) -> Result<()>;
}

/// Notifier that only records the change in the log.
///
/// Used when the backend runs standalone and no orchestrator is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl ZoneNotifier for LogNotifier {
    async fn notify_zone_changed(
        &self,
        context: &RequestContext,
        zone: &Zone,
        params: &NotifyParams,
    ) -> Result<()> {
        info!(
            request_id = %context.request_id,
            zone = %zone.name,
            zone_id = %zone.id,
            host = %params.host,
            port = params.port,
            timeout = ?params.timeout(),
            retry_interval = ?params.retry_interval(),
            max_retries = params.max_retries,
            delay = ?params.delay(),
            "Zone change ready for propagation"
        );
        Ok(())
    }
}
