//! Logger registry and hierarchical severity resolution
//!
//! The registry is the naming authority for loggers: a mapping from dotted
//! names to nodes, each optionally carrying an explicit minimum-severity
//! threshold. The effective threshold of a node is its own explicit
//! threshold if present, else the effective threshold of its nearest
//! ancestor, terminating at the root (which defaults to `Info`).
//!
//! The registry is an explicit object with its own lifecycle, owned by the
//! application entry point; there is no process-wide singleton.

use super::{
    error::Result,
    hierarchy::{self, ROOT_NAME},
    logger::Logger,
    metrics::RegistryMetrics,
    record::LogRecord,
    severity::Severity,
    sink::Sink,
};
use crate::sinks::NullSink;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Effective threshold of the root when it was never configured.
pub const DEFAULT_ROOT_THRESHOLD: Severity = Severity::Info;

/// A node in the logger hierarchy.
///
/// Carries only the optional explicit threshold; the parent relation is
/// derived from the name on demand, never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerNode {
    explicit_threshold: Option<Severity>,
}

impl LoggerNode {
    pub fn explicit_threshold(&self) -> Option<Severity> {
        self.explicit_threshold
    }
}

struct RegistryInner {
    /// Read-mostly: resolution takes the read lock, configuration the write lock
    nodes: RwLock<HashMap<String, LoggerNode>>,
    sink: RwLock<Box<dyn Sink>>,
    metrics: RegistryMetrics,
}

/// The severity hierarchy resolver.
///
/// Cheap to clone; clones share the same node map, sink, and metrics.
///
/// # Example
///
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder()
///     .root_threshold(Severity::Warning)
///     .sink(MemorySink::new())
///     .build();
///
/// let logger = registry.get_or_create("org.foo").unwrap();
/// assert_eq!(logger.effective_threshold(), Severity::Warning);
/// assert!(!logger.should_emit(Severity::Info));
/// ```
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    /// Create a registry delivering to the given sink, with an
    /// unconfigured root (effective threshold defaults to `Info`).
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        let mut nodes = HashMap::new();
        // The root always exists
        nodes.insert(ROOT_NAME.to_string(), LoggerNode::default());

        Self {
            inner: Arc::new(RegistryInner {
                nodes: RwLock::new(nodes),
                sink: RwLock::new(Box::new(sink)),
                metrics: RegistryMetrics::new(),
            }),
        }
    }

    /// Create a builder for Registry
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Return the existing logger for `name`, creating its node (with no
    /// explicit threshold) if absent.
    ///
    /// Fails only on a malformed name; creation itself always succeeds.
    pub fn get_or_create(&self, name: &str) -> Result<Logger> {
        hierarchy::validate_name(name)?;
        self.inner
            .nodes
            .write()
            .entry(name.to_string())
            .or_default();
        Ok(Logger::bind(name.to_string(), self.clone()))
    }

    /// Handle to the root logger.
    pub fn root(&self) -> Logger {
        Logger::bind(ROOT_NAME.to_string(), self.clone())
    }

    /// Set the explicit threshold on the node for `name`, creating the node
    /// if absent.
    ///
    /// Changes the effective threshold of that node and of every descendant
    /// without an explicit threshold of its own; siblings and ancestors are
    /// untouched. Ancestors are never materialized by this call.
    pub fn set_threshold(&self, name: &str, level: Severity) -> Result<()> {
        hierarchy::validate_name(name)?;
        self.set_threshold_unchecked(name, level);
        Ok(())
    }

    /// Remove the explicit threshold from the node for `name`, so it
    /// inherits from its nearest configured ancestor again.
    pub fn clear_threshold(&self, name: &str) -> Result<()> {
        hierarchy::validate_name(name)?;
        self.clear_threshold_unchecked(name);
        Ok(())
    }

    /// The explicit threshold carried by the node for `name`, if any.
    ///
    /// `None` when the node is absent or inherits from an ancestor.
    pub fn explicit_threshold(&self, name: &str) -> Result<Option<Severity>> {
        hierarchy::validate_name(name)?;
        Ok(self.explicit_threshold_unchecked(name))
    }

    /// Resolve the effective threshold for `name` by walking toward the
    /// root: the first node on the path with an explicit threshold wins;
    /// the root resolves to [`DEFAULT_ROOT_THRESHOLD`] when never
    /// configured. Total and deterministic.
    pub fn effective_threshold(&self, name: &str) -> Result<Severity> {
        hierarchy::validate_name(name)?;
        Ok(self.effective_threshold_unchecked(name))
    }

    /// Whether a record at `level` on logger `name` would reach the sink.
    /// Pure predicate, no side effect.
    pub fn should_emit(&self, name: &str, level: Severity) -> Result<bool> {
        hierarchy::validate_name(name)?;
        Ok(self.should_emit_unchecked(name, level))
    }

    /// Log `message` at `level` on logger `name`.
    ///
    /// If the record passes the effective threshold it is handed to the
    /// sink; otherwise the call is a counted no-op. Sink failures are
    /// recorded in metrics and alerted on stderr but never propagated and
    /// never affect resolution state.
    pub fn log(&self, name: &str, level: Severity, message: impl Into<String>) -> Result<()> {
        hierarchy::validate_name(name)?;
        self.log_unchecked(name, level, message.into());
        Ok(())
    }

    /// Names of all registered loggers, sorted; the root is listed as `""`.
    pub fn logger_names(&self) -> Vec<String> {
        let nodes = self.inner.nodes.read();
        let mut names: Vec<String> = nodes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<()> {
        self.inner.sink.write().flush()
    }

    /// Get the registry metrics for observability
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.inner.metrics
    }

    pub(crate) fn set_threshold_unchecked(&self, name: &str, level: Severity) {
        let mut nodes = self.inner.nodes.write();
        nodes.entry(name.to_string()).or_default().explicit_threshold = Some(level);
    }

    pub(crate) fn clear_threshold_unchecked(&self, name: &str) {
        let mut nodes = self.inner.nodes.write();
        // Nodes are never deleted; only the explicit threshold is removed
        if let Some(node) = nodes.get_mut(name) {
            node.explicit_threshold = None;
        }
    }

    pub(crate) fn explicit_threshold_unchecked(&self, name: &str) -> Option<Severity> {
        let nodes = self.inner.nodes.read();
        nodes.get(name).and_then(LoggerNode::explicit_threshold)
    }

    pub(crate) fn effective_threshold_unchecked(&self, name: &str) -> Severity {
        let nodes = self.inner.nodes.read();
        for candidate in hierarchy::self_and_ancestors(name) {
            if let Some(level) = nodes.get(candidate).and_then(LoggerNode::explicit_threshold) {
                return level;
            }
        }
        DEFAULT_ROOT_THRESHOLD
    }

    pub(crate) fn should_emit_unchecked(&self, name: &str, level: Severity) -> bool {
        level.passes(self.effective_threshold_unchecked(name))
    }

    pub(crate) fn log_unchecked(&self, name: &str, level: Severity, message: String) {
        if !self.should_emit_unchecked(name, level) {
            self.inner.metrics.record_suppressed();
            return;
        }

        let record = LogRecord::new(name, level, message);
        self.deliver(&record);
    }

    /// Hand an accepted record to the sink, isolating delivery failures.
    fn deliver(&self, record: &LogRecord) {
        let result = {
            let mut sink = self.inner.sink.write();
            sink.write(record)
        };

        match result {
            Ok(()) => {
                self.inner.metrics.record_emitted();
            }
            Err(e) => {
                let failures = self.inner.metrics.record_delivery_failure();

                // Alert on first failure and periodically thereafter
                if failures == 0 || (failures + 1).is_multiple_of(1000) {
                    eprintln!(
                        "[HIERLOG WARNING] Sink failed to deliver record ({} failures total): {}",
                        failures + 1,
                        e
                    );
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for constructing a Registry with a fluent API
///
/// # Example
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder()
///     .root_threshold(Severity::Fine)
///     .sink(MemorySink::new())
///     .build();
///
/// assert_eq!(registry.explicit_threshold("").unwrap(), Some(Severity::Fine));
/// ```
pub struct RegistryBuilder {
    root_threshold: Option<Severity>,
    sink: Option<Box<dyn Sink>>,
}

impl RegistryBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            root_threshold: None,
            sink: None,
        }
    }

    /// Set an explicit threshold on the root, acting as the global default.
    ///
    /// If not called, the root stays unconfigured and resolves to
    /// [`DEFAULT_ROOT_THRESHOLD`].
    #[must_use = "builder methods return a new value"]
    pub fn root_threshold(mut self, level: Severity) -> Self {
        self.root_threshold = Some(level);
        self
    }

    /// Select the sink receiving accepted records.
    ///
    /// A registry has exactly one sink, chosen at construction time.
    /// Defaults to [`NullSink`] if not called.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Registry
    pub fn build(self) -> Registry {
        let sink = self.sink.unwrap_or_else(|| Box::new(NullSink::new()));

        let mut nodes = HashMap::new();
        nodes.insert(
            ROOT_NAME.to_string(),
            LoggerNode {
                explicit_threshold: self.root_threshold,
            },
        );

        Registry {
            inner: Arc::new(RegistryInner {
                nodes: RwLock::new(nodes),
                sink: RwLock::new(sink),
                metrics: RegistryMetrics::new(),
            }),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
