// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request and response documents of the orchestrator's public API.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    IDENTITY_DOMAIN, IDENTITY_PROJECT, VERIFY_RECORD_NETWORK, VERIFY_RECORD_PREFIX,
    VERIFY_RECORD_TTL_SECS,
};

/// Password token-exchange request for the identity service.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub auth: Auth,
}

#[derive(Debug, Clone, Serialize)]
pub struct Auth {
    pub identity: Identity,
    pub scope: Scope,
}

#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub methods: Vec<String>,
    pub password: PasswordMethod,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordMethod {
    pub user: UserCredentials,
}

#[derive(Clone, Serialize)]
pub struct UserCredentials {
    pub domain: DomainRef,
    pub name: String,
    pub password: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("domain", &self.domain)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scope {
    pub project: ProjectRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub domain: DomainRef,
    pub name: String,
}

impl AuthRequest {
    /// Password authentication in the default domain, scoped to the admin project.
    #[must_use]
    pub fn password(username: &str, password: &str) -> Self {
        let domain = || DomainRef {
            name: IDENTITY_DOMAIN.to_string(),
        };

        Self {
            auth: Auth {
                identity: Identity {
                    methods: vec!["password".to_string()],
                    password: PasswordMethod {
                        user: UserCredentials {
                            domain: domain(),
                            name: username.to_string(),
                            password: password.to_string(),
                        },
                    },
                },
                scope: Scope {
                    project: ProjectRef {
                        domain: domain(),
                        name: IDENTITY_PROJECT.to_string(),
                    },
                },
            },
        }
    }
}

/// Body of `POST /dns/v2/zones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateZoneRequest {
    pub name: String,
    pub email: String,
}

/// A zone as returned by create and list calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneRef {
    pub id: String,
    pub name: String,
}

/// One page of `GET /dns/v2/zones`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneList {
    pub zones: Vec<ZoneRef>,
    #[serde(default)]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

/// Body of `POST /dns/v2/zones/{id}/recordsets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSetRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub records: Vec<String>,
}

impl RecordSetRequest {
    /// The `sequence`-th generated A record set of `zone_name`.
    ///
    /// `www3.example.com.` pointing at `10.1.0.3` for sequence 3.
    #[must_use]
    pub fn a_record(zone_name: &str, sequence: u32) -> Self {
        Self {
            name: format!("{VERIFY_RECORD_PREFIX}{sequence}.{zone_name}"),
            description: "This is an example record set.".to_string(),
            record_type: "A".to_string(),
            ttl: VERIFY_RECORD_TTL_SECS,
            records: vec![format!("{VERIFY_RECORD_NETWORK}{sequence}")],
        }
    }
}
