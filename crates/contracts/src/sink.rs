//! Output interfaces used by the router.
//!
//! `SinkFactory` owns how a destination comes into existence on disk (or
//! elsewhere) and how it is removed again; `OutputSink` is the open handle.

use std::io;

use crate::DestinationName;

/// Open write handle for one destination
pub trait OutputSink {
    /// Destination name (used for logging/errors)
    fn name(&self) -> &DestinationName;

    /// Append one line, bytes verbatim including any terminator
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Flush and release the handle.
    ///
    /// Called at most once, on successful runs.
    fn close(&mut self) -> io::Result<()>;

    /// Release the handle, dropping any buffered bytes.
    ///
    /// Called on failed runs before the destination is removed.
    fn abandon(&mut self);
}

/// Creates destinations by name and removes them again
pub trait SinkFactory {
    type Sink: OutputSink;

    /// Create `name`, truncating whatever already exists there
    fn create(&mut self, name: &DestinationName) -> io::Result<Self::Sink>;

    /// Remove a destination previously returned by [`SinkFactory::create`]
    fn remove(&mut self, name: &DestinationName) -> io::Result<()>;
}
