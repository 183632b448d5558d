//! Sink implementations
//!
//! Contains FileSink (the real destinations) and MemorySink (in-process
//! destinations for exercising the router without touching disk).

mod file;
mod memory;

pub use self::file::{FileSink, FileSinkFactory};
pub use self::memory::{MemorySink, MemorySinkFactory, MemoryStore};
