// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Orchestrator-side zone identity and zone-transfer settings.
//!
//! The orchestrator always hands over fully-qualified names ending in a dot
//! (`example.com.`), while NS1 addresses zones without it (`example.com`).
//! [`Zone::canonical_name`] is the single place that conversion happens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_MASTER_PORT;

/// Strip exactly one trailing dot from a zone name.
///
/// ```rust
/// use ns1_backend::zone::canonical_zone_name;
///
/// assert_eq!(canonical_zone_name("example.com."), "example.com");
/// assert_eq!(canonical_zone_name("example.com"), "example.com");
/// ```
#[must_use]
pub fn canonical_zone_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// A zone as known to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Fully-qualified name, normally trailing-dot-terminated
    pub name: String,
    /// Opaque orchestrator identifier
    pub id: String,
}

impl Zone {
    /// Create a zone from its orchestrator name and identifier.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Name as NS1 expects it, without the trailing dot.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        canonical_zone_name(&self.name)
    }

    /// Check that the zone can be addressed on NS1 at all.
    ///
    /// # Errors
    ///
    /// Returns a reason string if the name is empty, is the root zone, or
    /// contains characters that cannot appear in a single URL path segment.
    pub fn validate(&self) -> Result<(), String> {
        let canonical = self.canonical_name();
        if canonical.is_empty() {
            return Err("zone name must not be empty or the root zone".to_string());
        }
        if canonical.contains('/') || canonical.chars().any(char::is_whitespace) {
            return Err("zone name must not contain '/' or whitespace".to_string());
        }
        if canonical.split('.').any(str::is_empty) {
            return Err("zone name must not contain empty labels".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

fn default_master_port() -> u16 {
    DEFAULT_MASTER_PORT
}

/// An authoritative name server NS1 transfers the zone from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterServer {
    /// IP address or host name
    pub host: String,
    /// Zone-transfer port
    #[serde(default = "default_master_port")]
    pub port: u16,
}

impl MasterServer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// TSIG HMAC algorithms NS1 accepts for secondary zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TsigAlgorithm {
    HmacMd5,
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl TsigAlgorithm {
    /// Algorithm identifier as used on the wire (`hmac-sha256`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacMd5 => "hmac-md5",
            Self::HmacSha1 => "hmac-sha1",
            Self::HmacSha224 => "hmac-sha224",
            Self::HmacSha256 => "hmac-sha256",
            Self::HmacSha384 => "hmac-sha384",
            Self::HmacSha512 => "hmac-sha512",
        }
    }
}

impl fmt::Display for TsigAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TSIG key securing zone transfers from the master.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigKey {
    /// Key name
    pub name: String,
    /// HMAC algorithm
    pub algorithm: TsigAlgorithm,
    /// Base64-encoded shared secret
    pub secret: String,
}

// Keeps the secret out of logs.
impl fmt::Debug for TsigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TsigKey")
            .field("name", &self.name)
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}
