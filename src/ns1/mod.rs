// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! NS1 managed DNS provider client.
//!
//! This module provides the [`ZoneProvider`] seam the reconciler talks to and
//! its HTTP implementation, [`Ns1Client`]. It handles:
//!
//! - Building zone URLs from the configured endpoint
//! - Probing zone existence
//! - Creating secondary zones
//! - Deleting zones
//!
//! Authentication is a static API key sent in the `X-NSONE-Key` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use ns1_backend::config::ProviderConfig;
//! use ns1_backend::ns1::{Ns1Client, ZoneProvider};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProviderConfig {
//!     api_endpoint: "api.nsone.net".to_string(),
//!     api_token: "my-key".to_string(),
//!     insecure_skip_tls_verify: false,
//! };
//! let client = Ns1Client::new(&config)?;
//!
//! let probe = client.probe_zone("example.com.").await?;
//! println!("example.com exists: {}", probe.exists());
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod zone_ops;

pub use types::{SecondaryConfig, TsigConfig, ZoneDocument, ZoneProbe};

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::config::ProviderConfig;
use crate::errors::ProviderError;

/// Zone operations the reconciler needs from a DNS provider.
///
/// Zone names may be passed with or without the trailing dot.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Probe a zone once.
    ///
    /// # Errors
    ///
    /// Returns an error only if the provider could not be reached.
    async fn probe_zone(&self, zone_name: &str) -> Result<ZoneProbe, ProviderError>;

    /// Create a zone from a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn put_zone(&self, document: &ZoneDocument) -> Result<(), ProviderError>;

    /// Delete a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn delete_zone(&self, zone_name: &str) -> Result<(), ProviderError>;
}

/// HTTP client for the NS1 zone API.
#[derive(Clone)]
pub struct Ns1Client {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// NS1 API key
    token: Arc<String>,
    /// Scheme, host and port of the API
    base_url: Url,
}

impl Ns1Client {
    /// Create a new `Ns1Client` from provider settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a usable URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = zone_ops::build_base_url(&config.api_endpoint)?;
        let client = HttpClient::builder()
            .danger_accept_invalid_certs(config.insecure_skip_tls_verify)
            .build()
            .map_err(ProviderError::ClientBuild)?;

        Ok(Self {
            client: Arc::new(client),
            token: Arc::new(config.api_token.clone()),
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a zone resource on this endpoint.
    #[must_use]
    pub fn zone_url(&self, zone_name: &str) -> Url {
        zone_ops::zone_url(&self.base_url, zone_name)
    }
}

impl fmt::Debug for Ns1Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ns1Client")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ZoneProvider for Ns1Client {
    async fn probe_zone(&self, zone_name: &str) -> Result<ZoneProbe, ProviderError> {
        zone_ops::probe_zone(&self.client, &self.token, &self.base_url, zone_name).await
    }

    async fn put_zone(&self, document: &ZoneDocument) -> Result<(), ProviderError> {
        zone_ops::put_zone(&self.client, &self.token, &self.base_url, document).await
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<(), ProviderError> {
        zone_ops::delete_zone(&self.client, &self.token, &self.base_url, zone_name).await
    }
}

#[cfg(test)]
mod types_tests;
