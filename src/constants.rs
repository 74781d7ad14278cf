// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the NS1 backend.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// NS1 API Constants
// ============================================================================

/// Header carrying the static NS1 API key
pub const NS1_API_KEY_HEADER: &str = "X-NSONE-Key";

/// API version path segment for NS1 zone endpoints
pub const NS1_API_VERSION: &str = "v1";

/// Collection path segment for NS1 zones
pub const NS1_ZONES_PATH: &str = "zones";

/// Scheme assumed when the configured endpoint has none
pub const DEFAULT_API_SCHEME: &str = "https";

// ============================================================================
// Zone Transfer Constants
// ============================================================================

/// Default port of the orchestrator's authoritative name server (mini-DNS)
pub const DEFAULT_MASTER_PORT: u16 = 5354;

// ============================================================================
// Notification Defaults
// ============================================================================

/// Default host the orchestrator should send NOTIFY messages to
pub const DEFAULT_NOTIFY_HOST: &str = "127.0.0.1";

/// Default DNS port used for NOTIFY messages
pub const DEFAULT_NOTIFY_PORT: u16 = 53;

/// Default timeout for a single NOTIFY round trip (seconds)
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 30;

/// Default interval between NOTIFY retries (seconds)
pub const DEFAULT_NOTIFY_RETRY_INTERVAL_SECS: u64 = 15;

/// Default maximum number of NOTIFY retries
pub const DEFAULT_NOTIFY_MAX_RETRIES: u32 = 10;

/// Default delay before the first NOTIFY is sent (seconds)
pub const DEFAULT_NOTIFY_DELAY_SECS: u64 = 5;

// ============================================================================
// Environment Variables
// ============================================================================

/// Overrides `api_endpoint` from the configuration file
pub const ENV_API_ENDPOINT: &str = "NS1_API_ENDPOINT";

/// Overrides `api_token` from the configuration file
pub const ENV_API_TOKEN: &str = "NS1_API_TOKEN";

// ============================================================================
// Orchestrator API Constants (verification tool)
// ============================================================================

/// Path of the orchestrator's zone collection, relative to its base URL
pub const ORCHESTRATOR_ZONES_PATH: &str = "/dns/v2/zones";

/// Path of the identity token-exchange endpoint, relative to the base URL
pub const ORCHESTRATOR_TOKEN_PATH: &str = "/identity/v3/auth/tokens";

/// Header the identity service returns the issued token in
pub const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// Header carrying the token on subsequent orchestrator requests
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Identity domain used for both user and project scope
pub const IDENTITY_DOMAIN: &str = "Default";

/// Project the verification tool scopes its token to
pub const IDENTITY_PROJECT: &str = "admin";

/// Contact email attached to zones created by the verification tool
pub const VERIFY_ZONE_EMAIL: &str = "e@e.com";

/// Top-level domain appended to generated zone names
pub const VERIFY_ZONE_SUFFIX: &str = "com.";

/// Label prefix of generated A records
pub const VERIFY_RECORD_PREFIX: &str = "www";

/// TTL of generated A records (1 hour)
pub const VERIFY_RECORD_TTL_SECS: u32 = 3600;

/// Network prefix of generated A record addresses
pub const VERIFY_RECORD_NETWORK: &str = "10.1.0.";
