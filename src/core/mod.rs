//! Core resolver types and traits

pub mod error;
pub mod hierarchy;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use hierarchy::{parent_of, self_and_ancestors, validate_name, ROOT_NAME};
pub use logger::Logger;
pub use metrics::RegistryMetrics;
pub use output_format::OutputFormat;
pub use record::LogRecord;
pub use registry::{LoggerNode, Registry, RegistryBuilder, DEFAULT_ROOT_THRESHOLD};
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
