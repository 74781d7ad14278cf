// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider, backend and configuration error types.
//!
//! This module provides specialized error types for:
//! - NS1 HTTP API calls (transport failures and non-success responses)
//! - Zone reconciliation (probe, create, delete and notification failures)
//! - Backend configuration loading and validation
//!
//! A zone that is absent on NS1 is never an error: the probe reports it as a
//! value. Only failures to talk to NS1 at all surface as [`ProviderError::Transport`].

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the NS1 HTTP API.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, TCP, TLS or protocol failure)
    #[error("Failed to send {method} request to {url}: {source}")]
    Transport {
        /// HTTP method of the failed request
        method: String,
        /// Full request URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// NS1 answered with a non-success status code
    #[error("NS1 API returned HTTP {status} for {method} {url}: {message}")]
    Http {
        /// HTTP method of the failed request
        method: String,
        /// Full request URL
        url: String,
        /// Status code returned by NS1
        status: StatusCode,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// The configured API endpoint cannot be turned into a base URL
    #[error("Invalid NS1 API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ProviderError {
    /// Status code of the failed response, if NS1 answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the zone reconciler.
///
/// Every variant names the zone it concerns so the orchestrator can log
/// and retry at its own level.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The existence probe could not reach NS1
    #[error("Failed to check whether zone '{zone}' exists on NS1: {source}")]
    Probe {
        /// Canonical zone name
        zone: String,
        /// Provider failure
        #[source]
        source: ProviderError,
    },

    /// Creating (or replacing) the zone failed
    ///
    /// Any compensating delete has already been attempted when this is returned.
    #[error("Failed to create zone '{zone}' on NS1: {source}")]
    Create {
        /// Canonical zone name
        zone: String,
        /// Provider failure of the PUT itself
        #[source]
        source: ProviderError,
    },

    /// Deleting the zone failed
    #[error("Failed to delete zone '{zone}' on NS1: {source}")]
    Delete {
        /// Canonical zone name
        zone: String,
        /// Provider failure
        #[source]
        source: ProviderError,
    },

    /// The zone was created but the orchestrator could not be notified
    #[error("Zone '{zone}' was created on NS1 but change notification failed: {source}")]
    Notify {
        /// Canonical zone name
        zone: String,
        /// Notifier failure
        #[source]
        source: anyhow::Error,
    },

    /// The zone handed over by the orchestrator is unusable
    #[error("Invalid zone '{zone}': {reason}")]
    InvalidZone {
        /// Zone name as received
        zone: String,
        /// Explanation of what is invalid
        reason: String,
    },
}

impl BackendError {
    /// The provider error behind this failure, if any.
    #[must_use]
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Probe { source, .. }
            | Self::Create { source, .. }
            | Self::Delete { source, .. } => Some(source),
            Self::Notify { .. } | Self::InvalidZone { .. } => None,
        }
    }
}

/// Errors that can occur while loading backend configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        /// Path of the file
        path: String,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::config::BackendConfig`]
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required option is missing or empty
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),

    /// No master server is configured
    #[error("At least one master server must be configured")]
    NoMasters,

    /// An option has an unusable value
    #[error("Invalid value for '{option}': {reason}")]
    InvalidOption {
        /// Option name
        option: &'static str,
        /// Explanation of what is invalid
        reason: String,
    },
}
