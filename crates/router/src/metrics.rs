//! Router counters for the run report

/// Per-run router counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterMetrics {
    /// Payload lines written to at least one destination
    pub lines_routed: u64,
    /// Payload lines seen while no destination was active
    pub lines_discarded: u64,
    /// Directive lines applied
    pub directives: u64,
    /// Destinations created
    pub destinations_opened: u64,
    /// Bytes written, summed over every destination
    pub bytes_written: u64,
}

impl RouterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on_routed(&mut self, bytes: usize, targets: usize) {
        self.lines_routed += 1;
        self.bytes_written += (bytes * targets) as u64;
    }

    pub(crate) fn on_discarded(&mut self) {
        self.lines_discarded += 1;
    }

    pub(crate) fn on_directive(&mut self) {
        self.directives += 1;
    }

    pub(crate) fn on_opened(&mut self) {
        self.destinations_opened += 1;
    }
}
