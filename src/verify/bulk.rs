// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Bulk zone creation and deletion through the orchestrator.
//!
//! Progress is written as plain text to the given writer, one line per step.
//! Failures of single records or deletions are reported and skipped; a zone
//! that cannot be created stops the run.

use anyhow::Result;
use std::io::Write;

use super::client::OrchestratorClient;
use super::types::RecordSetRequest;
use crate::constants::{VERIFY_ZONE_EMAIL, VERIFY_ZONE_SUFFIX};

/// Counters reported at the end of a bulk run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub zones: usize,
    pub records: usize,
    pub failures: usize,
}

/// Names of the zones a create run generates: `<prefix>0.com.` ... `<prefix><count-1>.com.`
#[must_use]
pub fn zone_names(prefix: &str, count: u32) -> Vec<String> {
    (0..count)
        .map(|n| format!("{prefix}{n}.{VERIFY_ZONE_SUFFIX}"))
        .collect()
}

/// Create `count` zones, each with `count` A record sets.
///
/// # Errors
///
/// Returns an error only if writing progress fails.
pub async fn create_zones<W: Write>(
    client: &OrchestratorClient,
    prefix: &str,
    count: u32,
    out: &mut W,
) -> Result<BulkSummary> {
    let mut summary = BulkSummary::default();
    writeln!(out, "Creating zones...")?;

    for name in zone_names(prefix, count) {
        let zone = match client.create_zone(&name, VERIFY_ZONE_EMAIL).await {
            Ok(zone) => zone,
            Err(e) => {
                writeln!(out, "Error creating zone {name}: {e:#}")?;
                summary.failures += 1;
                return Ok(summary);
            }
        };
        summary.zones += 1;
        writeln!(out, "Zone created: {name}")?;

        for sequence in 0..count {
            let record = RecordSetRequest::a_record(&name, sequence);
            match client.create_recordset(&zone.id, &record).await {
                Ok(status) if status.is_success() => {
                    summary.records += 1;
                    writeln!(out, "Zone {name} record created: {} ({status})", record.name)?;
                }
                Ok(status) => {
                    summary.failures += 1;
                    writeln!(out, "Zone {name} record {} failed: {status}", record.name)?;
                }
                Err(e) => {
                    summary.failures += 1;
                    writeln!(out, "Exception on create record {}: {e:#}", record.name)?;
                }
            }
        }
    }

    Ok(summary)
}

/// Delete every zone visible to the authenticated user.
///
/// # Errors
///
/// Returns an error if the zone list cannot be fetched or writing progress fails.
pub async fn delete_zones<W: Write>(client: &OrchestratorClient, out: &mut W) -> Result<BulkSummary> {
    let mut summary = BulkSummary::default();

    for zone in client.list_zones().await? {
        match client.delete_zone(&zone).await {
            Ok(status) if status == reqwest::StatusCode::ACCEPTED => {
                summary.zones += 1;
                writeln!(out, "Zone {} deleted", zone.name)?;
            }
            Ok(status) => {
                summary.failures += 1;
                writeln!(out, "Error deleting zone {} Error code: {status}", zone.name)?;
            }
            Err(e) => {
                summary.failures += 1;
                writeln!(out, "Error deleting zone {}: {e:#}", zone.name)?;
            }
        }
    }

    Ok(summary)
}
