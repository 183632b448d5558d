//! MemorySink - destinations held in a shared in-process map

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::rc::Rc;

use contracts::{DestinationName, OutputSink, SinkFactory};

/// Shared contents of every in-memory destination, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Rc<RefCell<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of `name`, if it currently exists
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files
            .borrow()
            .get(name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Names of every existing destination, sorted
    pub fn names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }

    /// Seed a destination as if it existed before the run
    pub fn insert(&self, name: &str, contents: &str) {
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.as_bytes().to_vec());
    }
}

/// Unbuffered destination writing straight into a [`MemoryStore`]
pub struct MemorySink {
    name: DestinationName,
    store: MemoryStore,
    fail_writes: bool,
    fail_close: bool,
    open: bool,
}

impl OutputSink for MemorySink {
    fn name(&self) -> &DestinationName {
        &self.name
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        if !self.open {
            return Err(io::Error::other(format!("{} is closed", self.name)));
        }
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "no space left"));
        }
        self.store
            .files
            .borrow_mut()
            .entry(self.name.to_string())
            .or_default()
            .extend_from_slice(line);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.open = false;
        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "disk full on close"));
        }
        Ok(())
    }

    fn abandon(&mut self) {
        self.open = false;
    }
}

/// Creates [`MemorySink`]s, optionally failing on chosen names
#[derive(Debug, Clone, Default)]
pub struct MemorySinkFactory {
    store: MemoryStore,
    fail_create: HashSet<String>,
    fail_writes: HashSet<String>,
    fail_close: HashSet<String>,
}

impl MemorySinkFactory {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Make creation of `name` fail
    pub fn fail_create(mut self, name: &str) -> Self {
        self.fail_create.insert(name.to_string());
        self
    }

    /// Make every write to `name` fail
    pub fn fail_writes(mut self, name: &str) -> Self {
        self.fail_writes.insert(name.to_string());
        self
    }

    /// Make closing `name` fail
    pub fn fail_close(mut self, name: &str) -> Self {
        self.fail_close.insert(name.to_string());
        self
    }
}

impl SinkFactory for MemorySinkFactory {
    type Sink = MemorySink;

    fn create(&mut self, name: &DestinationName) -> io::Result<MemorySink> {
        if self.fail_create.contains(name.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.store
            .files
            .borrow_mut()
            .insert(name.to_string(), Vec::new());
        Ok(MemorySink {
            name: name.clone(),
            store: self.store.clone(),
            fail_writes: self.fail_writes.contains(name.as_str()),
            fail_close: self.fail_close.contains(name.as_str()),
            open: true,
        })
    }

    fn remove(&mut self, name: &DestinationName) -> io::Result<()> {
        match self.store.files.borrow_mut().remove(name.as_str()) {
            Some(_) => Ok(()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}
