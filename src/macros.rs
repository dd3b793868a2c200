//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging through a
//! [`Logger`](crate::Logger) handle with automatic string formatting,
//! similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use hierlog::prelude::*;
//! use hierlog::info;
//!
//! let registry = Registry::default();
//! let logger = registry.get_or_create("org.server").unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Severe, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a finest-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::builder().root_threshold(Severity::All).build();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::finest;
/// finest!(logger, "Entering function: resolve()");
/// finest!(logger, "Candidate: {}", "org.foo");
/// ```
#[macro_export]
macro_rules! finest {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Finest, $($arg)+)
    };
}

/// Log a finer-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::finer;
/// finer!(logger, "Walk step");
/// finer!(logger, "Depth: {}", 3);
/// ```
#[macro_export]
macro_rules! finer {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Finer, $($arg)+)
    };
}

/// Log a fine-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::fine;
/// fine!(logger, "Detailed trace");
/// fine!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! fine {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fine, $($arg)+)
    };
}

/// Log a config-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::config;
/// config!(logger, "Threshold loaded from environment");
/// config!(logger, "Pool size: {}", 8);
/// ```
#[macro_export]
macro_rules! config {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Config, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a severe-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::default();
/// # let logger = registry.get_or_create("demo").unwrap();
/// use hierlog::severe;
/// severe!(logger, "Failed to connect to database");
/// severe!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! severe {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Severe, $($arg)+)
    };
}
