// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone HTTP API operations against NS1.
//!
//! Every call is a single attempt. Failures are returned to the caller as
//! [`ProviderError`] without any retry; the orchestrator retries whole
//! operations at its own level.

use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use tracing::{debug, error, info};
use url::Url;

use super::types::{ZoneDocument, ZoneProbe};
use crate::constants::{DEFAULT_API_SCHEME, NS1_API_KEY_HEADER, NS1_API_VERSION, NS1_ZONES_PATH};
use crate::errors::ProviderError;
use crate::zone::canonical_zone_name;

/// Build the API base URL from a configured endpoint.
///
/// Converts "api.nsone.net" or "api.nsone.net:8443" to `<https://api.nsone.net>`
/// or `<https://api.nsone.net:8443>`. An explicit scheme is kept. Any path,
/// query, fragment or credentials in the endpoint are discarded.
///
/// # Errors
///
/// Returns [`ProviderError::InvalidEndpoint`] if the endpoint has no host or
/// cannot be parsed as a URL.
pub fn build_base_url(endpoint: &str) -> Result<Url, ProviderError> {
    let endpoint = endpoint.trim();
    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("{DEFAULT_API_SCHEME}://{endpoint}")
    };

    let invalid = |reason: String| ProviderError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("endpoint has no host".to_string()));
    }

    url.set_path("");
    url.set_query(None);
    url.set_fragment(None);
    // Only fails for URLs without a host, excluded above.
    let _ = url.set_username("");
    let _ = url.set_password(None);

    debug!("NS1 API base URL for endpoint {endpoint}: {url}");
    Ok(url)
}

/// URL of a single zone resource, `{base}/v1/zones/{name}`.
///
/// The trailing dot of a fully-qualified name is stripped and the name is
/// percent-encoded as one path segment.
#[must_use]
pub fn zone_url(base: &Url, zone_name: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .clear()
            .extend([NS1_API_VERSION, NS1_ZONES_PATH, canonical_zone_name(zone_name)]);
    }
    url
}

/// Send one request to the NS1 API.
///
/// Returns the response whatever its status; only failures to obtain a
/// response at all are errors.
async fn ns1_send<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    token: &str,
    method: Method,
    url: &Url,
    body: Option<&T>,
) -> Result<Response, ProviderError> {
    info!(
        method = %method,
        url = %url,
        body = ?body,
        "HTTP API request to NS1"
    );

    let mut request = client
        .request(method.clone(), url.clone())
        .header(NS1_API_KEY_HEADER, token);
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    request
        .send()
        .await
        .map_err(|source| ProviderError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })
}

/// Turn a non-success response into [`ProviderError::Http`].
async fn expect_success(method: &Method, url: &Url, response: Response) -> Result<(), ProviderError> {
    let status = response.status();
    if status.is_success() {
        info!(
            method = %method,
            url = %url,
            status = %status,
            "HTTP API request successful"
        );
        return Ok(());
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error!(
        method = %method,
        url = %url,
        status = %status,
        error = %error_text,
        "HTTP API request failed"
    );
    Err(ProviderError::Http {
        method: method.to_string(),
        url: url.to_string(),
        status,
        message: error_text,
    })
}

/// Check whether a zone exists on NS1 with a single GET.
///
/// # Errors
///
/// Returns [`ProviderError::Transport`] if no response was received. Every
/// HTTP status, including 4xx and 5xx, is a successful probe result.
pub async fn probe_zone(
    client: &HttpClient,
    token: &str,
    base: &Url,
    zone_name: &str,
) -> Result<ZoneProbe, ProviderError> {
    let url = zone_url(base, zone_name);
    let response = ns1_send(client, token, Method::GET, &url, None::<&()>).await?;
    let probe = ZoneProbe::from_status(response.status());

    debug!(
        zone = %canonical_zone_name(zone_name),
        status = %response.status(),
        result = ?probe,
        "NS1 zone existence probe"
    );

    Ok(probe)
}

/// Create a zone with `PUT /v1/zones/{name}`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or NS1 rejects it.
pub async fn put_zone(
    client: &HttpClient,
    token: &str,
    base: &Url,
    document: &ZoneDocument,
) -> Result<(), ProviderError> {
    let url = zone_url(base, &document.zone);
    let response = ns1_send(client, token, Method::PUT, &url, Some(document)).await?;
    expect_success(&Method::PUT, &url, response).await
}

/// Delete a zone with `DELETE /v1/zones/{name}`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or NS1 rejects it.
pub async fn delete_zone(
    client: &HttpClient,
    token: &str,
    base: &Url,
    zone_name: &str,
) -> Result<(), ProviderError> {
    let url = zone_url(base, zone_name);
    let response = ns1_send(client, token, Method::DELETE, &url, None::<&()>).await?;
    expect_success(&Method::DELETE, &url, response).await
}
