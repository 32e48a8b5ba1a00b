//! Schedule reconciliation loop
//!
//! Periodically fetches the published schedule, validates and persists
//! it, resolves the slot on air, and pushes metadata and source updates
//! to the streaming server. When the publisher is unreachable or the
//! document is malformed, the last-known-good schedule takes over; when
//! no schedule is available at all, the cycle aborts and the next timer
//! tick retries.

use crate::config::SyncConfig;
use crate::publisher::PublisherClient;
use chrono::{Local, NaiveDateTime};
use onaircontrol::AdminClient;
use onairschedule::{active_slot, ScheduleDocument, ScheduleStore, StoreError};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Where the document used by a cycle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Freshly fetched and validated this cycle
    Fresh,
    /// Last-known-good document (in-memory or persisted)
    Cached,
}

/// Outcome of a single reconciliation cycle
///
/// Failures inside a cycle are logged rather than propagated; the report
/// records what the cycle managed to do.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Document used for resolution; `None` when the cycle aborted
    /// because no schedule was available
    pub source: Option<ScheduleSource>,
    /// Id of the slot resolved as on air, if any
    pub active: Option<String>,
    /// Whether the "now playing" metadata update succeeded
    pub metadata_updated: bool,
    /// Whether a source switch was issued and succeeded
    pub source_switched: bool,
}

impl CycleReport {
    fn aborted() -> Self {
        Self {
            source: None,
            active: None,
            metadata_updated: false,
            source_switched: false,
        }
    }

    fn idle(source: ScheduleSource) -> Self {
        Self {
            source: Some(source),
            active: None,
            metadata_updated: false,
            source_switched: false,
        }
    }
}

/// The reconciliation loop
///
/// Owns the in-memory last-known-good document; nothing else writes it
/// or the persisted mirror. Independent reconcilers are safe to run
/// side by side as long as they use distinct store paths and mounts.
pub struct Reconciler {
    publisher: PublisherClient,
    control: AdminClient,
    store: ScheduleStore,
    mount: String,
    poll_interval: Duration,
    current: Option<ScheduleDocument>,
}

impl Reconciler {
    /// Build a reconciler from the daemon configuration
    pub fn new(config: &SyncConfig) -> anyhow::Result<Self> {
        let publisher = PublisherClient::new(&config.schedule_endpoint)?;
        let control = AdminClient::builder(&config.server_url)
            .credentials(&config.admin_user, &config.admin_password)
            .build()?;
        let store = ScheduleStore::new(&config.schedule_file);

        Ok(Self::from_parts(
            publisher,
            control,
            store,
            &config.mount,
            config.poll_interval,
        ))
    }

    /// Build a reconciler from explicit collaborators
    pub fn from_parts(
        publisher: PublisherClient,
        control: AdminClient,
        store: ScheduleStore,
        mount: impl Into<String>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            publisher,
            control,
            store,
            mount: mount.into(),
            poll_interval,
            current: None,
        }
    }

    /// Document currently held as last-known-good
    pub fn current(&self) -> Option<&ScheduleDocument> {
        self.current.as_ref()
    }

    /// Run one reconciliation cycle at the current local time
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.run_cycle_at(Local::now().naive_local()).await
    }

    /// Run one reconciliation cycle, resolving the active slot at `now`
    pub async fn run_cycle_at(&mut self, now: NaiveDateTime) -> CycleReport {
        let (document, source) = match self.acquire_schedule().await {
            Some(pair) => pair,
            None => return CycleReport::aborted(),
        };

        let Some(slot) = active_slot(&document, now) else {
            debug!("No show scheduled right now");
            return CycleReport::idle(source);
        };
        info!("On air: {} ({})", slot.title, slot.id);

        let metadata_updated = match self.control.update_metadata(&self.mount, &slot.title).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to update metadata on {}: {}", self.mount, e);
                false
            }
        };

        let mut source_switched = false;
        if let Some(track) = slot.tracks.first() {
            match self.control.switch_source(&self.mount, track).await {
                Ok(()) => source_switched = true,
                Err(e) => error!("Failed to switch source on {}: {}", self.mount, e),
            }
        }

        CycleReport {
            source: Some(source),
            active: Some(slot.id.clone()),
            metadata_updated,
            source_switched,
        }
    }

    /// Fetch and validate a fresh document, falling back to the
    /// last-known-good copy. Returns `None` when no schedule is
    /// available at all.
    async fn acquire_schedule(&mut self) -> Option<(ScheduleDocument, ScheduleSource)> {
        match self.fetch_validated().await {
            Ok(document) => {
                if let Err(e) = self.store.save(&document) {
                    // Freshness over durability: keep going with the
                    // unsaved document.
                    warn!("Failed to persist schedule: {}", e);
                }
                self.current = Some(document.clone());
                Some((document, ScheduleSource::Fresh))
            }
            Err(e) => {
                warn!("Schedule refresh failed ({}), using last known good", e);
                self.fallback_schedule()
                    .map(|document| (document, ScheduleSource::Cached))
            }
        }
    }

    async fn fetch_validated(&self) -> anyhow::Result<ScheduleDocument> {
        let value = self.publisher.fetch().await?;
        let document = ScheduleDocument::from_value(&value)?;
        info!(
            "Schedule updated successfully ({} slots)",
            document.slot_count()
        );
        Ok(document)
    }

    /// The in-memory copy is at least as fresh as disk (a failed persist
    /// leaves memory ahead), so it is preferred; the store is only read
    /// when memory is empty, i.e. on the first cycles after a restart.
    fn fallback_schedule(&mut self) -> Option<ScheduleDocument> {
        if let Some(document) = &self.current {
            debug!("Falling back to in-memory schedule");
            return Some(document.clone());
        }

        match self.store.load() {
            Ok(Some(document)) => {
                info!(
                    "Recovered persisted schedule from {}",
                    self.store.path().display()
                );
                self.current = Some(document.clone());
                Some(document)
            }
            Ok(None) => {
                error!("No schedule available: fetch failed and nothing persisted yet");
                None
            }
            Err(e @ StoreError::Corrupt(_)) => {
                error!("Persisted schedule unusable: {}", e);
                None
            }
            Err(e) => {
                error!("Failed to read persisted schedule: {}", e);
                None
            }
        }
    }

    /// Run the loop until the surrounding task is cancelled.
    ///
    /// One cycle runs immediately at startup, then the timer fires at
    /// the configured interval. Each cycle is awaited to completion
    /// before the next tick is taken, so a slow cycle delays the
    /// following tick instead of overlapping it.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(
            "Starting schedule reconciliation for {} every {:?}",
            self.mount, self.poll_interval
        );

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // The first tick completes immediately: startup triggers one
            // cycle before the timer cadence begins.
            ticker.tick().await;
            let report = self.run_cycle().await;
            debug!("Cycle complete: {:?}", report);
        }
    }
}
