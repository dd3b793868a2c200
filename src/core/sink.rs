//! Sink trait for log output destinations
//!
//! A sink receives the records that pass severity filtering and renders or
//! transports them. The resolver makes no assumption about delivery
//! guarantees; a failing sink never affects resolution state.

use super::{error::Result, record::LogRecord};

pub trait Sink: Send + Sync {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
