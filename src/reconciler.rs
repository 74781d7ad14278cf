// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone reconciliation against NS1.
//!
//! The reconciler brings NS1 in line with a zone lifecycle event from the
//! orchestrator. Every operation follows the same shape:
//!
//! ```text
//! START → CHECK_EXISTS → {CREATE | DELETE | NOOP} → [ROLLBACK_ON_ERROR] → NOTIFY | ERROR
//! ```
//!
//! 1. **Probe** - one GET decides whether the zone is present on NS1
//! 2. **Act** - create, delete, or do nothing when NS1 already matches
//! 3. **Compensate** - a failed create that NS1 half-applied is deleted again
//! 4. **Notify** - a newly created zone is announced to the orchestrator
//!
//! Both operations are idempotent: creating a present zone and deleting an
//! absent one succeed without touching NS1 beyond the probe.

use tracing::{debug, error, info, warn};

use crate::config::BackendConfig;
use crate::errors::{BackendError, ConfigError};
use crate::notify::{NotifyParams, RequestContext, ZoneNotifier};
use crate::ns1::{ZoneDocument, ZoneProbe, ZoneProvider};
use crate::zone::{MasterServer, TsigKey, Zone};

/// What a reconciliation did to NS1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneAction {
    /// The zone was created and the orchestrator notified
    Created,
    /// An existing zone was deleted, recreated and the orchestrator notified
    Replaced,
    /// The zone already existed; nothing was changed and nobody notified
    AlreadyPresent,
    /// The zone was deleted
    Deleted,
    /// The zone was not on NS1; deletion succeeded vacuously
    AlreadyAbsent,
}

/// Reconciles orchestrator zone events into NS1.
///
/// Configuration is captured at construction and never changes afterwards.
#[derive(Debug)]
pub struct ZoneReconciler<P, N> {
    provider: P,
    notifier: N,
    master: MasterServer,
    tsig_key: Option<TsigKey>,
    notify: NotifyParams,
    replace_existing: bool,
}

impl<P: ZoneProvider, N: ZoneNotifier> ZoneReconciler<P, N> {
    /// Create a reconciler for one NS1 target.
    ///
    /// Only the first configured master is kept; NS1 secondary zones support a
    /// single primary.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: &BackendConfig, provider: P, notifier: N) -> Result<Self, ConfigError> {
        config.validate()?;
        let master = config
            .primary_master()
            .cloned()
            .ok_or(ConfigError::NoMasters)?;

        if config.masters.len() > 1 {
            debug!(
                "{} masters configured, forwarding only {}:{} to NS1",
                config.masters.len(),
                master.host,
                master.port
            );
        }

        Ok(Self {
            provider,
            notifier,
            master,
            tsig_key: config.tsig_key.clone(),
            notify: config.notify.clone(),
            replace_existing: config.replace_existing_zones,
        })
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The document sent to NS1 when `zone` is created.
    #[must_use]
    pub fn zone_document(&self, zone: &Zone) -> ZoneDocument {
        ZoneDocument::secondary(zone, &self.master, self.tsig_key.as_ref())
    }

    /// Check whether `zone` exists on NS1.
    ///
    /// Only HTTP 200 means present. Any other status means absent.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Probe`] if NS1 could not be reached, and
    /// [`BackendError::InvalidZone`] for unusable zone names.
    pub async fn zone_exists(&self, zone: &Zone) -> Result<bool, BackendError> {
        validate_zone(zone)?;
        let name = zone.canonical_name();

        match self.provider.probe_zone(name).await {
            Ok(ZoneProbe::Exists) => Ok(true),
            Ok(ZoneProbe::NotFound) => Ok(false),
            Ok(ZoneProbe::UnexpectedStatus(status)) => {
                warn!("Probe for zone {name} returned HTTP {status}, treating zone as absent");
                Ok(false)
            }
            Err(source) => {
                error!("Error checking if zone {name} exists on NS1: {source}");
                Err(BackendError::Probe {
                    zone: name.to_string(),
                    source,
                })
            }
        }
    }

    /// Create `zone` on NS1 as a secondary of the configured master.
    ///
    /// If NS1 rejects the create but created the zone anyway, one best-effort
    /// delete removes it again before the original error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe, the create, a replacing delete or the
    /// notification fails. A failed compensating delete is only logged.
    pub async fn create_zone(
        &self,
        context: &RequestContext,
        zone: &Zone,
    ) -> Result<ZoneAction, BackendError> {
        let name = zone.canonical_name();
        info!(request_id = %context.request_id, "Creating zone {name} on NS1");

        let mut action = ZoneAction::Created;
        if self.zone_exists(zone).await? {
            if !self.replace_existing {
                info!("Zone {name} already exists on NS1, nothing to do");
                return Ok(ZoneAction::AlreadyPresent);
            }

            info!("Zone {name} exists on NS1, deleting it before creation");
            self.provider.delete_zone(name).await.map_err(|source| {
                error!("Could not delete pre-existing zone {name}: {source}");
                BackendError::Delete {
                    zone: name.to_string(),
                    source,
                }
            })?;
            action = ZoneAction::Replaced;
        }

        let document = self.zone_document(zone);
        if let Err(source) = self.provider.put_zone(&document).await {
            debug!("NS1 API error while creating zone {name}: {source}");
            self.remove_partial_zone(name).await;
            return Err(BackendError::Create {
                zone: name.to_string(),
                source,
            });
        }

        info!(
            "Created zone {name} on NS1 as secondary of {}:{}",
            self.master.host, self.master.port
        );

        self.notifier
            .notify_zone_changed(context, zone, &self.notify)
            .await
            .map_err(|source| BackendError::Notify {
                zone: name.to_string(),
                source,
            })?;

        Ok(action)
    }

    /// Delete `zone` from NS1.
    ///
    /// A zone that is not present counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe or the delete fails.
    pub async fn delete_zone(
        &self,
        context: &RequestContext,
        zone: &Zone,
    ) -> Result<ZoneAction, BackendError> {
        let name = zone.canonical_name();
        info!(request_id = %context.request_id, "Deleting zone {name} from NS1");

        if !self.zone_exists(zone).await? {
            warn!("Trying to delete zone {name} but that zone is not present on NS1. Assuming success.");
            return Ok(ZoneAction::AlreadyAbsent);
        }

        self.provider
            .delete_zone(name)
            .await
            .map_err(|source| BackendError::Delete {
                zone: name.to_string(),
                source,
            })?;

        info!("Deleted zone {name} from NS1");
        Ok(ZoneAction::Deleted)
    }

    /// Delete a zone NS1 created despite rejecting the create request.
    ///
    /// Never fails: the create error is what the caller reports.
    async fn remove_partial_zone(&self, name: &str) {
        match self.provider.probe_zone(name).await {
            Ok(ZoneProbe::Exists) => {
                info!("Zone {name} was created with an error, deleting it");
                if let Err(e) = self.provider.delete_zone(name).await {
                    error!("Could not delete errored zone {name}: {e}");
                }
            }
            Ok(probe) => debug!("Zone {name} was not created by the failed request ({probe:?})"),
            Err(e) => error!("Could not check whether zone {name} was partially created: {e}"),
        }
    }
}

fn validate_zone(zone: &Zone) -> Result<(), BackendError> {
    zone.validate().map_err(|reason| BackendError::InvalidZone {
        zone: zone.name.clone(),
        reason,
    })
}
