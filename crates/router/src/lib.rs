//! # Router
//!
//! Output fan-out for ftee.
//!
//! Responsibilities:
//! - Own the run-wide destination set and the active-target list
//! - Create destinations lazily, exactly once per name
//! - Fan payload lines out to every active destination
//! - Keep all outputs on success, remove all of them on any failure
//!
//! ```no_run
//! use contracts::RunConfig;
//!
//! let report = router::split_files(&RunConfig::default(), &["notes.txt"])?;
//! println!("{} destinations written", report.destinations.len());
//! # Ok::<(), contracts::ContractError>(())
//! ```

pub mod driver;
pub mod error;
pub mod metrics;
pub mod router;
pub mod sinks;

pub use contracts::{OutputSink, SinkFactory};
pub use driver::{split, split_files, RunReport, Splitter};
pub use error::RouterError;
pub use metrics::RouterMetrics;
pub use router::Router;
pub use sinks::{FileSink, FileSinkFactory, MemorySink, MemorySinkFactory, MemoryStore};
