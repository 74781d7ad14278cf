// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request documents and probe results for the NS1 zone API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::zone::{MasterServer, TsigAlgorithm, TsigKey, Zone};

/// Body of `PUT /v1/zones/{name}` creating a secondary zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDocument {
    /// Zone name without the trailing dot
    pub zone: String,
    /// Zone-transfer configuration
    pub secondary: SecondaryConfig,
}

impl ZoneDocument {
    /// Build the document for a secondary zone pulling from `master`.
    #[must_use]
    pub fn secondary(zone: &Zone, master: &MasterServer, tsig_key: Option<&TsigKey>) -> Self {
        Self {
            zone: zone.canonical_name().to_string(),
            secondary: SecondaryConfig {
                enabled: true,
                primary_ip: master.host.clone(),
                primary_port: master.port,
                tsig: tsig_key.map(TsigConfig::from),
            },
        }
    }
}

/// Secondary-zone settings of a [`ZoneDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryConfig {
    pub enabled: bool,
    pub primary_ip: String,
    pub primary_port: u16,
    /// Omitted from the body entirely when no key is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsig: Option<TsigConfig>,
}

/// TSIG settings NS1 uses when transferring from the primary.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigConfig {
    pub enabled: bool,
    pub hash: TsigAlgorithm,
    pub name: String,
    pub key: String,
}

impl From<&TsigKey> for TsigConfig {
    fn from(key: &TsigKey) -> Self {
        Self {
            enabled: true,
            hash: key.algorithm,
            name: key.name.clone(),
            key: key.secret.clone(),
        }
    }
}

// Request bodies are logged; keep the shared secret out of them.
impl fmt::Debug for TsigConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TsigConfig")
            .field("enabled", &self.enabled)
            .field("hash", &self.hash)
            .field("name", &self.name)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Outcome of a single existence probe.
///
/// Only [`ZoneProbe::Exists`] counts as present. The other variants are kept
/// apart so callers can log why a zone was considered absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneProbe {
    /// NS1 answered 200
    Exists,
    /// NS1 answered 404
    NotFound,
    /// NS1 answered with any other status
    UnexpectedStatus(StatusCode),
}

impl ZoneProbe {
    /// Classify a probe response by status code.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => Self::Exists,
            StatusCode::NOT_FOUND => Self::NotFound,
            other => Self::UnexpectedStatus(other),
        }
    }

    #[must_use]
    pub fn exists(self) -> bool {
        matches!(self, Self::Exists)
    }
}
