//! FileSink - buffered writer over a truncated output file

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use contracts::{DestinationName, OutputSink, SinkFactory, DEFAULT_OUTPUT_BUFFER_BYTES};
use tracing::{debug, instrument};

/// Destination backed by a file on disk
pub struct FileSink {
    name: DestinationName,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Create (or truncate) the file named by `name`
    pub fn create(name: DestinationName, buffer_capacity: usize) -> io::Result<Self> {
        let file = File::create(name.as_path())?;
        Ok(Self {
            name,
            writer: Some(BufWriter::with_capacity(buffer_capacity, file)),
        })
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other(format!("output file {} is closed", self.name)))
    }
}

impl OutputSink for FileSink {
    fn name(&self) -> &DestinationName {
        &self.name
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer()?.write_all(line)
    }

    #[instrument(name = "file_sink_close", skip(self), fields(sink = %self.name))]
    fn close(&mut self) -> io::Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.into_inner().map_err(io::IntoInnerError::into_error)?;
            debug!("FileSink closed");
        }
        Ok(())
    }

    fn abandon(&mut self) {
        if let Some(writer) = self.writer.take() {
            // into_parts hands back the unflushed buffer instead of writing it
            let (_file, _unflushed) = writer.into_parts();
        }
    }
}

/// Creates [`FileSink`]s, using each destination name verbatim as a path
#[derive(Debug, Clone)]
pub struct FileSinkFactory {
    buffer_capacity: usize,
}

impl FileSinkFactory {
    pub fn new(buffer_capacity: usize) -> Self {
        Self { buffer_capacity }
    }
}

impl Default for FileSinkFactory {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_BUFFER_BYTES)
    }
}

impl SinkFactory for FileSinkFactory {
    type Sink = FileSink;

    fn create(&mut self, name: &DestinationName) -> io::Result<FileSink> {
        FileSink::create(name.clone(), self.buffer_capacity)
    }

    fn remove(&mut self, name: &DestinationName) -> io::Result<()> {
        fs::remove_file(name.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn name_in(dir: &tempfile::TempDir, file: &str) -> DestinationName {
        dir.path().join(file).to_string_lossy().into_owned().into()
    }

    #[test]
    fn test_file_sink_write_and_close() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "out.txt");

        let mut sink = FileSinkFactory::default().create(&name).unwrap();
        sink.write_line(b"first\n").unwrap();
        sink.write_line(b"second").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(name.as_path()).unwrap(), "first\nsecond");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "stale.txt");
        fs::write(name.as_path(), "left over from last time\n").unwrap();

        let mut sink = FileSinkFactory::default().create(&name).unwrap();
        sink.write_line(b"fresh\n").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(name.as_path()).unwrap(), "fresh\n");
    }

    #[test]
    fn test_abandon_drops_buffered_bytes() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "partial.txt");

        let mut sink = FileSinkFactory::new(1024).create(&name).unwrap();
        sink.write_line(b"never flushed\n").unwrap();
        sink.abandon();

        assert_eq!(fs::read_to_string(name.as_path()).unwrap(), "");
    }

    #[test]
    fn test_write_after_close_fails() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "closed.txt");

        let mut sink = FileSinkFactory::default().create(&name).unwrap();
        sink.close().unwrap();
        assert!(sink.write_line(b"late\n").is_err());
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "no/such/dir/out.txt");
        assert!(FileSinkFactory::default().create(&name).is_err());
    }

    #[test]
    fn test_remove_deletes_file() {
        let dir = tempdir().unwrap();
        let name = name_in(&dir, "gone.txt");
        let mut factory = FileSinkFactory::default();

        let mut sink = factory.create(&name).unwrap();
        sink.abandon();
        factory.remove(&name).unwrap();

        assert!(!name.as_path().exists());
    }
}
