//! # Hierlog
//!
//! A hierarchical logging framework: named loggers organized in a
//! dotted-path hierarchy inherit and override minimum-severity thresholds,
//! and a single shared sink renders the records that pass filtering.
//!
//! ## Features
//!
//! - **Hierarchical Thresholds**: `org.foo.bar` inherits from `org.foo`,
//!   `org`, and finally the root; the nearest explicit threshold wins
//! - **Pluggable Sinks**: Console, in-memory, and custom sinks
//! - **Thread Safe**: Configure and log from concurrent callers
//! - **Easy to Use**: Simple and intuitive API
//!
//! ## Quick start
//!
//! ```
//! use hierlog::prelude::*;
//!
//! let registry = Registry::builder().sink(MemorySink::new()).build();
//!
//! let logger = registry.get_or_create("org.foo.bar").unwrap();
//! logger.info("inherits the root default of INFO");
//!
//! registry.set_threshold("org.foo.bar", Severity::Fine).unwrap();
//! assert!(logger.should_emit(Severity::Fine));
//! assert!(!registry.should_emit("org.foo", Severity::Fine).unwrap());
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Logger, LoggerError, LoggerNode, LogRecord, OutputFormat, Registry, RegistryBuilder,
        RegistryMetrics, Result, Severity, Sink, TimestampFormat, DEFAULT_ROOT_THRESHOLD,
        ROOT_NAME,
    };
    pub use crate::sinks::{MemoryBuffer, MemorySink, NullSink};

    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
}

pub use crate::core::{
    Logger, LoggerError, LoggerNode, LogRecord, OutputFormat, Registry, RegistryBuilder,
    RegistryMetrics, Result, Severity, Sink, TimestampFormat, DEFAULT_ROOT_THRESHOLD, ROOT_NAME,
};
pub use crate::sinks::{MemoryBuffer, MemorySink, NullSink};

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
