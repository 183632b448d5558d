//! Run counters
//!
//! Thin wrappers over the `metrics` facade so metric names live in one place.

use metrics::{counter, histogram};

/// Final state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failure,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// A payload line was written to `targets` destinations
pub fn record_line_routed(bytes: usize, targets: usize) {
    counter!("ftee_lines_routed_total").increment(1);
    counter!("ftee_bytes_written_total").increment((bytes * targets) as u64);
}

/// A payload line arrived while no destination was active
pub fn record_line_discarded() {
    counter!("ftee_lines_discarded_total").increment(1);
}

/// A directive switched the active destinations
pub fn record_directive(targets: usize) {
    counter!("ftee_directives_total").increment(1);
    histogram!("ftee_directive_targets").record(targets as f64);
}

/// A new destination was created
pub fn record_destination_opened() {
    counter!("ftee_destinations_opened_total").increment(1);
}

/// A run finished
pub fn record_run_outcome(outcome: RunOutcome) {
    counter!("ftee_runs_total", "outcome" => outcome.as_str()).increment(1);
}
