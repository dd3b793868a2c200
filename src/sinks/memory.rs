//! In-memory sink for tests
//!
//! Captures accepted records into a shared buffer so tests can assert on
//! exactly what reached the sink. Obtain a [`MemoryBuffer`] handle with
//! [`MemorySink::buffer`] before handing the sink to a registry.

use crate::core::{LogRecord, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that appends every accepted record to a shared in-memory buffer.
///
/// # Example
///
/// ```
/// use hierlog::prelude::*;
///
/// let sink = MemorySink::new();
/// let buffer = sink.buffer();
/// let registry = Registry::builder().sink(sink).build();
///
/// registry.log("org", Severity::Warning, "captured").unwrap();
/// assert_eq!(buffer.len(), 1);
/// assert_eq!(buffer.snapshot()[0].message, "captured");
/// ```
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the shared buffer, usable after the sink is boxed away.
    pub fn buffer(&self) -> MemoryBuffer {
        MemoryBuffer {
            records: Arc::clone(&self.records),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Inspection handle over a [`MemorySink`]'s captured records.
#[derive(Clone)]
pub struct MemoryBuffer {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryBuffer {
    /// Copy of all captured records, in delivery order.
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages of all captured records, in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}
