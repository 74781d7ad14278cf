// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Backend configuration.
//!
//! Configuration is read once from a YAML file, optionally overridden from the
//! environment, validated, and then treated as immutable for the lifetime of the
//! backend.
//!
//! # Example
//!
//! ```yaml
//! api_endpoint: api.nsone.net
//! api_token: "<NS1 API key>"
//! masters:
//!   - host: 192.0.2.10
//!     port: 5354
//! tsig_key:
//!   name: transfer-key
//!   algorithm: hmac-sha256
//!   secret: c2VjcmV0LWtleQ==
//! replace_existing_zones: false
//! notify:
//!   host: 127.0.0.1
//!   port: 53
//! ```

use base64::Engine;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::constants::{ENV_API_ENDPOINT, ENV_API_TOKEN};
use crate::errors::ConfigError;
use crate::notify::NotifyParams;
use crate::ns1::zone_ops::build_base_url;
use crate::zone::{MasterServer, TsigKey};

/// Connection settings for the NS1 API.
#[derive(Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Host (optionally with scheme and port) of the NS1 API, e.g. `api.nsone.net`
    #[serde(default)]
    pub api_endpoint: String,
    /// Static API key sent in the `X-NSONE-Key` header
    #[serde(default)]
    pub api_token: String,
    /// Accept invalid TLS certificates from the endpoint
    #[serde(default)]
    pub insecure_skip_tls_verify: bool,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_token", &"<redacted>")
            .field("insecure_skip_tls_verify", &self.insecure_skip_tls_verify)
            .finish()
    }
}

/// Complete backend configuration for one NS1 target.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(flatten)]
    pub provider: ProviderConfig,

    /// Authoritative servers NS1 transfers zones from; only the first is used
    #[serde(default)]
    pub masters: Vec<MasterServer>,

    /// Optional TSIG key attached to the zone-transfer configuration
    #[serde(default)]
    pub tsig_key: Option<TsigKey>,

    /// Delete and recreate zones that already exist on NS1 instead of leaving them alone
    #[serde(default)]
    pub replace_existing_zones: bool,

    /// Parameters forwarded to the orchestrator when a zone change is announced
    #[serde(default)]
    pub notify: NotifyParams,
}

impl BackendConfig {
    /// Parse configuration from a YAML document without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a file, apply environment overrides and validate.
    ///
    /// `NS1_API_ENDPOINT` and `NS1_API_TOKEN` take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_yaml_str(&contents)?;
        config.apply_overrides(
            std::env::var(ENV_API_ENDPOINT).ok(),
            std::env::var(ENV_API_TOKEN).ok(),
        );
        config.validate()?;

        debug!(
            "Loaded backend configuration from {}: endpoint={}, masters={}, tsig={}",
            path.display(),
            config.provider.api_endpoint,
            config.masters.len(),
            config.tsig_key.is_some()
        );

        Ok(config)
    }

    /// Replace endpoint and token with non-empty override values.
    pub fn apply_overrides(&mut self, api_endpoint: Option<String>, api_token: Option<String>) {
        if let Some(endpoint) = api_endpoint.filter(|v| !v.trim().is_empty()) {
            self.provider.api_endpoint = endpoint;
        }
        if let Some(token) = api_token.filter(|v| !v.trim().is_empty()) {
            self.provider.api_token = token;
        }
    }

    /// Check that the configuration can drive a backend.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: missing endpoint or token, an endpoint
    /// that is not a usable URL, no masters, a master without a host, or an
    /// incomplete TSIG key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.api_endpoint.trim().is_empty() {
            return Err(ConfigError::MissingOption("api_endpoint"));
        }
        if self.provider.api_token.trim().is_empty() {
            return Err(ConfigError::MissingOption("api_token"));
        }
        build_base_url(&self.provider.api_endpoint).map_err(|e| ConfigError::InvalidOption {
            option: "api_endpoint",
            reason: e.to_string(),
        })?;

        let Some(master) = self.masters.first() else {
            return Err(ConfigError::NoMasters);
        };
        if master.host.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "masters",
                reason: "master host must not be empty".to_string(),
            });
        }

        if let Some(key) = &self.tsig_key {
            if key.name.trim().is_empty() {
                return Err(ConfigError::InvalidOption {
                    option: "tsig_key.name",
                    reason: "key name must not be empty".to_string(),
                });
            }
            base64::engine::general_purpose::STANDARD
                .decode(key.secret.trim())
                .map_err(|e| ConfigError::InvalidOption {
                    option: "tsig_key.secret",
                    reason: format!("secret is not valid base64: {e}"),
                })?;
        }

        Ok(())
    }

    /// The master forwarded to NS1: the first one configured.
    #[must_use]
    pub fn primary_master(&self) -> Option<&MasterServer> {
        self.masters.first()
    }
}
