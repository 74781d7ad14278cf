// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP client for the orchestrator's public zone API.

use anyhow::{bail, Context, Result};
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};

use super::types::{AuthRequest, CreateZoneRequest, RecordSetRequest, ZoneList, ZoneRef};
use crate::constants::{
    AUTH_TOKEN_HEADER, ORCHESTRATOR_TOKEN_PATH, ORCHESTRATOR_ZONES_PATH, SUBJECT_TOKEN_HEADER,
};

/// Client for the orchestrator's zone and identity endpoints.
#[derive(Clone)]
pub struct OrchestratorClient {
    client: HttpClient,
    zones_url: String,
    token_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for OrchestratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestratorClient")
            .field("zones_url", &self.zones_url)
            .field("token_url", &self.token_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl OrchestratorClient {
    /// Create an unauthenticated client for the orchestrator at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client: HttpClient::new(),
            zones_url: format!("{base}{ORCHESTRATOR_ZONES_PATH}"),
            token_url: format!("{base}{ORCHESTRATOR_TOKEN_PATH}"),
            token: None,
        }
    }

    #[must_use]
    pub fn zones_url(&self) -> &str {
        &self.zones_url
    }

    /// Exchange a username and password for an API token.
    ///
    /// The token is kept for all further requests and never returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity service is unreachable, does not answer
    /// 201, or omits the token header.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.token_url)
            .json(&AuthRequest::password(username, password))
            .send()
            .await
            .context(format!("Failed to send token request to {}", self.token_url))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            bail!("Token request for user {username} returned HTTP {status}");
        }

        let token = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .context("Token response has no X-Subject-Token header")?
            .to_str()
            .context("X-Subject-Token header is not valid text")?
            .to_string();

        self.token = Some(token);
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Create a zone and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the orchestrator rejects it.
    pub async fn create_zone(&self, name: &str, email: &str) -> Result<ZoneRef> {
        let body = CreateZoneRequest {
            name: name.to_string(),
            email: email.to_string(),
        };

        let response = self
            .authorized(self.client.post(&self.zones_url))
            .json(&body)
            .send()
            .await
            .context(format!("Failed to send create request for zone {name}"))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Create zone status code: {status}: {error_text}");
        }

        response
            .json::<ZoneRef>()
            .await
            .context(format!("Failed to parse create response for zone {name}"))
    }

    /// Create a record set in a zone and return the response status.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was received.
    pub async fn create_recordset(
        &self,
        zone_id: &str,
        record: &RecordSetRequest,
    ) -> Result<StatusCode> {
        let url = format!("{}/{zone_id}/recordsets", self.zones_url);
        let response = self
            .authorized(self.client.post(&url))
            .json(record)
            .send()
            .await
            .context(format!("Failed to send create request for record {}", record.name))?;

        Ok(response.status())
    }

    /// List every zone, following pagination links.
    ///
    /// # Errors
    ///
    /// Returns an error if any page cannot be fetched or parsed.
    pub async fn list_zones(&self) -> Result<Vec<ZoneRef>> {
        let mut zones = Vec::new();
        let mut next = Some(self.zones_url.clone());

        while let Some(url) = next.take() {
            let response = self
                .authorized(self.client.get(&url))
                .send()
                .await
                .context(format!("Failed to list zones from {url}"))?;

            let status = response.status();
            if !status.is_success() {
                bail!("List zones returned HTTP {status}");
            }

            let page: ZoneList = response
                .json()
                .await
                .context("Failed to parse zone list")?;
            zones.extend(page.zones);
            next = page
                .links
                .and_then(|links| links.next)
                .filter(|link| *link != url);
        }

        Ok(zones)
    }

    /// Delete a zone and return the response status.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was received.
    pub async fn delete_zone(&self, zone: &ZoneRef) -> Result<StatusCode> {
        let url = format!("{}/{}", self.zones_url, zone.id);
        let response = self
            .authorized(self.client.delete(&url))
            .send()
            .await
            .context(format!("Failed to send delete request for zone {}", zone.name))?;

        Ok(response.status())
    }
}
