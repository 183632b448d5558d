//! Router - owns every destination of a run and fans payload out to the
//! active ones

use std::collections::HashMap;

use contracts::{ContractError, DestinationName, OutputSink, SinkFactory};
use observability::{
    record_destination_opened, record_directive, record_line_discarded, record_line_routed,
};
use tracing::{debug, info, instrument, warn};

use crate::error::RouterError;
use crate::metrics::RouterMetrics;

/// Destination set plus active-target list for one run.
///
/// Destinations are created lazily the first time a directive names them
/// and are never recreated afterwards, so a later directive naming the same
/// destination appends instead of truncating.
pub struct Router<F: SinkFactory> {
    factory: F,
    /// Open destinations in creation order
    destinations: Vec<F::Sink>,
    /// Name -> position in `destinations`
    index: HashMap<DestinationName, usize>,
    /// Positions in `destinations` receiving payload, duplicates allowed
    active: Vec<usize>,
    metrics: RouterMetrics,
}

impl<F: SinkFactory> Router<F> {
    /// Create an empty router: no destinations, nothing active
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            destinations: Vec::new(),
            index: HashMap::new(),
            active: Vec::new(),
            metrics: RouterMetrics::new(),
        }
    }

    /// Open every name not opened yet, then make `names` the active targets.
    ///
    /// Stops at the first creation failure; destinations created before it
    /// stay in the set so run-level cleanup removes them. The active targets
    /// are left untouched on failure.
    #[instrument(
        name = "router_ensure_open",
        skip(self, names),
        fields(targets = names.len())
    )]
    pub fn ensure_open(&mut self, names: &[DestinationName]) -> Result<(), RouterError> {
        for name in names {
            if self.index.contains_key(name.as_str()) {
                continue;
            }
            let sink = self.factory.create(name).map_err(|source| {
                warn!(destination = %name, error = %source, "Create failed");
                RouterError::destination_create(name.clone(), source)
            })?;

            debug!(destination = %name, "Destination created");
            self.index.insert(name.clone(), self.destinations.len());
            self.destinations.push(sink);
            self.metrics.on_opened();
            record_destination_opened();
        }

        self.active = names.iter().map(|name| self.index[name.as_str()]).collect();
        self.metrics.on_directive();
        record_directive(names.len());
        Ok(())
    }

    /// Write `line` verbatim to every active destination, in order.
    ///
    /// Lines arriving before the first directive are dropped.
    pub fn route(&mut self, line: &[u8]) -> Result<(), RouterError> {
        if self.active.is_empty() {
            self.metrics.on_discarded();
            record_line_discarded();
            return Ok(());
        }

        for &idx in &self.active {
            let sink = &mut self.destinations[idx];
            sink.write_line(line).map_err(|source| {
                warn!(destination = %sink.name(), error = %source, "Write failed");
                RouterError::write(sink.name().clone(), source)
            })?;
        }

        self.metrics.on_routed(line.len(), self.active.len());
        record_line_routed(line.len(), self.active.len());
        Ok(())
    }

    /// Tear the run down, keeping the outputs only if `success`.
    ///
    /// Consumes the router, so it runs once per run. See [`Router::commit`]
    /// and [`Router::discard`].
    pub fn finalize(self, success: bool) -> Result<RouterMetrics, ContractError> {
        if success {
            self.commit()
        } else {
            Ok(self.discard())
        }
    }

    /// Flush and close every destination.
    ///
    /// If any of them fails, the run is treated as failed after all: every
    /// destination is discarded and the first close error is returned.
    #[instrument(
        name = "router_commit",
        skip(self),
        fields(destinations = self.destinations.len())
    )]
    pub fn commit(mut self) -> Result<RouterMetrics, ContractError> {
        match self.close_all() {
            Ok(()) => {
                info!(
                    destinations = self.destinations.len(),
                    bytes_written = self.metrics.bytes_written,
                    "Destinations closed"
                );
                Ok(self.metrics)
            }
            Err(err) => {
                warn!(error = %err, "Close failed, discarding all destinations");
                self.discard_all();
                Err(err)
            }
        }
    }

    /// Close and remove every destination, best-effort.
    ///
    /// Removal failures are only logged.
    #[instrument(
        name = "router_discard",
        skip(self),
        fields(destinations = self.destinations.len())
    )]
    pub fn discard(mut self) -> RouterMetrics {
        self.discard_all();
        self.metrics
    }

    /// Names currently receiving payload, in directive order
    pub fn active_targets(&self) -> impl Iterator<Item = &DestinationName> + '_ {
        self.active.iter().map(|&idx| self.destinations[idx].name())
    }

    /// Every destination opened so far, in creation order
    pub fn destination_names(&self) -> impl Iterator<Item = &DestinationName> + '_ {
        self.destinations.iter().map(|sink| sink.name())
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn metrics(&self) -> &RouterMetrics {
        &self.metrics
    }

    fn close_all(&mut self) -> Result<(), ContractError> {
        for sink in &mut self.destinations {
            sink.close()
                .map_err(|source| ContractError::flush(sink.name().clone(), source))?;
        }
        Ok(())
    }

    fn discard_all(&mut self) {
        for sink in &mut self.destinations {
            sink.abandon();
        }
        for sink in &self.destinations {
            match self.factory.remove(sink.name()) {
                Ok(()) => debug!(destination = %sink.name(), "Destination removed"),
                Err(err) => {
                    warn!(destination = %sink.name(), error = %err, "Failed to remove destination")
                }
            }
        }
        self.active.clear();
        warn!(
            destinations = self.destinations.len(),
            "Run failed, all destinations removed"
        );
    }
}
