//! Sink that discards every record
//!
//! Default sink of [`crate::core::RegistryBuilder`]; useful when only the
//! filtering decisions or metrics matter.

use crate::core::{LogRecord, Result, Sink};

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn write(&mut self, _record: &LogRecord) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
