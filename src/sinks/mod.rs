//! Sink implementations

pub mod memory;
pub mod null;

#[cfg(feature = "console")]
pub mod console;

pub use memory::{MemoryBuffer, MemorySink};
pub use null::NullSink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

// Re-export the trait for convenience
pub use crate::core::Sink;
