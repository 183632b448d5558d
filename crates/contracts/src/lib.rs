//! # Contracts
//!
//! Shared interface contracts for the ftee workspace: the types that cross
//! crate boundaries (delimiter, destination names, line classes), the output
//! traits and the error taxonomy.
//! All business crates depend on this crate, reverse dependencies are prohibited.

mod config;
mod destination;
mod directive;
mod error;
mod sink;

pub use config::*;
pub use destination::DestinationName;
pub use directive::LineClass;
pub use error::*;
pub use sink::{OutputSink, SinkFactory};
