//! Logger handle bound to a name in a registry
//!
//! Obtained from [`Registry::get_or_create`]; the name is validated once at
//! creation, so every method here is infallible.

use super::{registry::Registry, severity::Severity};
use std::fmt;

/// A named logger bound to its registry.
///
/// # Example
///
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder().sink(MemorySink::new()).build();
/// let logger = registry.get_or_create("org.foo").unwrap();
///
/// logger.info("visible at the default threshold");
/// logger.fine("filtered at the default threshold");
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    registry: Registry,
}

// Manual impl: the registry holds a boxed dyn Sink, so a derive won't work
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub(crate) fn bind(name: String, registry: Registry) -> Self {
        Self { name, registry }
    }

    /// Dotted name of this logger; the root's name is the empty string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Log a message at the given severity.
    ///
    /// A no-op when the severity is below this logger's effective
    /// threshold.
    pub fn log(&self, level: Severity, message: impl Into<String>) {
        self.registry.log_unchecked(&self.name, level, message.into());
    }

    /// Log the same message at each of the given severities, in order.
    pub fn log_at_levels(&self, levels: &[Severity], message: &str) {
        for &level in levels {
            self.log(level, message);
        }
    }

    /// Set this logger's explicit threshold.
    pub fn set_threshold(&self, level: Severity) {
        self.registry.set_threshold_unchecked(&self.name, level);
    }

    /// Remove this logger's explicit threshold so it inherits again.
    pub fn clear_threshold(&self) {
        self.registry.clear_threshold_unchecked(&self.name);
    }

    /// This logger's own explicit threshold, if any.
    pub fn explicit_threshold(&self) -> Option<Severity> {
        self.registry.explicit_threshold_unchecked(&self.name)
    }

    /// The threshold actually applied, after inheritance resolution.
    pub fn effective_threshold(&self) -> Severity {
        self.registry.effective_threshold_unchecked(&self.name)
    }

    /// Whether a record at `level` would reach the sink.
    pub fn should_emit(&self, level: Severity) -> bool {
        self.registry.should_emit_unchecked(&self.name, level)
    }

    #[inline]
    pub fn finest(&self, message: impl Into<String>) {
        self.log(Severity::Finest, message);
    }

    #[inline]
    pub fn finer(&self, message: impl Into<String>) {
        self.log(Severity::Finer, message);
    }

    #[inline]
    pub fn fine(&self, message: impl Into<String>) {
        self.log(Severity::Fine, message);
    }

    #[inline]
    pub fn config(&self, message: impl Into<String>) {
        self.log(Severity::Config, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn severe(&self, message: impl Into<String>) {
        self.log(Severity::Severe, message);
    }
}
