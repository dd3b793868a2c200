//! Integration tests for the hierarchical severity resolver
//!
//! These tests verify:
//! - Threshold inheritance along the dotted-path hierarchy
//! - Override-nearest-ancestor-wins semantics
//! - Name validation at the boundary
//! - Sink failure isolation
//! - Log injection prevention
//! - Thread safety of concurrent configuration and logging

use hierlog::core::registry::DEFAULT_ROOT_THRESHOLD;
use hierlog::prelude::*;
use std::thread;

fn memory_registry() -> (Registry, MemoryBuffer) {
    let sink = MemorySink::new();
    let buffer = sink.buffer();
    let registry = Registry::builder().sink(sink).build();
    (registry, buffer)
}

#[test]
fn test_root_default_applies_everywhere() {
    let (registry, _buffer) = memory_registry();

    // The root always resolves, so every name resolves
    assert_eq!(registry.effective_threshold("").unwrap(), DEFAULT_ROOT_THRESHOLD);
    assert_eq!(
        registry.effective_threshold("org.foo.bar").unwrap(),
        DEFAULT_ROOT_THRESHOLD
    );
    assert_eq!(
        registry.effective_threshold("a.b.c.d.e.f").unwrap(),
        DEFAULT_ROOT_THRESHOLD
    );
}

#[test]
fn test_child_override_does_not_affect_ancestor_path() {
    // Scenario: root default = INFO. FINE is filtered on org.foo.bar until
    // that node gets its own threshold; org.foo stays filtered.
    let (registry, _buffer) = memory_registry();

    assert!(!registry.should_emit("org.foo.bar", Severity::Fine).unwrap());

    registry.set_threshold("org.foo.bar", Severity::Fine).unwrap();

    assert!(registry.should_emit("org.foo.bar", Severity::Fine).unwrap());
    assert!(!registry.should_emit("org.foo", Severity::Fine).unwrap());
}

#[test]
fn test_root_threshold_acts_as_global_default() {
    // Scenario: setThreshold("", SEVERE), then INFO on "org" is filtered
    // and SEVERE passes.
    let (registry, _buffer) = memory_registry();

    registry.set_threshold("", Severity::Severe).unwrap();

    assert!(!registry.should_emit("org", Severity::Info).unwrap());
    assert!(registry.should_emit("org", Severity::Severe).unwrap());
}

#[test]
fn test_inherited_threshold_without_node_override() {
    // Scenario: set "org.foo" to INFO, query "org.foo.bar" -> INFO inherited.
    let (registry, _buffer) = memory_registry();

    registry.set_threshold("", Severity::Severe).unwrap();
    registry.set_threshold("org.foo", Severity::Info).unwrap();

    assert_eq!(
        registry.effective_threshold("org.foo.bar").unwrap(),
        Severity::Info
    );
    assert_eq!(registry.explicit_threshold("org.foo.bar").unwrap(), None);
}

#[test]
fn test_nearest_ancestor_wins_over_more_restrictive_root() {
    // A child may be more permissive than a less-severe-configured
    // ancestor: pure override semantics, no "most restrictive wins".
    let (registry, _buffer) = memory_registry();

    registry.set_threshold("", Severity::Severe).unwrap();
    registry.set_threshold("org.foo.bar", Severity::Fine).unwrap();

    assert!(registry.should_emit("org.foo.bar", Severity::Fine).unwrap());
    assert!(registry
        .should_emit("org.foo.bar.baz", Severity::Fine)
        .unwrap());
    assert!(!registry.should_emit("org.foo", Severity::Fine).unwrap());
}

#[test]
fn test_set_threshold_idempotent() {
    let (registry, _buffer) = memory_registry();

    registry.set_threshold("org", Severity::Warning).unwrap();
    let before: Vec<Severity> = ["", "org", "org.foo", "org.foo.bar"]
        .iter()
        .map(|n| registry.effective_threshold(n).unwrap())
        .collect();

    registry.set_threshold("org", Severity::Warning).unwrap();
    let after: Vec<Severity> = ["", "org", "org.foo", "org.foo.bar"]
        .iter()
        .map(|n| registry.effective_threshold(n).unwrap())
        .collect();

    assert_eq!(before, after);
}

#[test]
fn test_monotonic_override_of_descendants() {
    let (registry, _buffer) = memory_registry();

    registry.get_or_create("org.foo").unwrap();
    registry.set_threshold("org.foo.baz", Severity::Config).unwrap();

    registry.set_threshold("org", Severity::Severe).unwrap();

    // Descendants without their own explicit threshold follow
    assert_eq!(
        registry.effective_threshold("org.foo").unwrap(),
        Severity::Severe
    );
    assert_eq!(
        registry.effective_threshold("org.quux").unwrap(),
        Severity::Severe
    );
    // Descendants with their own explicit threshold are unaffected
    assert_eq!(
        registry.effective_threshold("org.foo.baz").unwrap(),
        Severity::Config
    );
    // Siblings outside the subtree are unaffected
    assert_eq!(
        registry.effective_threshold("net").unwrap(),
        DEFAULT_ROOT_THRESHOLD
    );
}

#[test]
fn test_invalid_names_rejected_at_boundary() {
    let (registry, buffer) = memory_registry();

    for bad in [".", ".org", "org.", "org..foo", "org...foo"] {
        let err = registry.get_or_create(bad).unwrap_err();
        assert!(
            matches!(err, LoggerError::InvalidName { .. }),
            "expected InvalidName for {:?}",
            bad
        );
        assert!(registry.log(bad, Severity::Severe, "nope").is_err());
    }

    // Nothing was created or delivered for the malformed names
    assert_eq!(registry.logger_names(), vec!["".to_string()]);
    assert!(buffer.is_empty());
}

#[test]
fn test_filtered_log_is_a_noop() {
    let (registry, buffer) = memory_registry();

    registry.log("org", Severity::Fine, "below threshold").unwrap();

    assert!(buffer.is_empty());
    assert_eq!(registry.metrics().suppressed_count(), 1);
    assert_eq!(registry.metrics().emitted_count(), 0);
}

#[test]
fn test_accepted_record_carries_name_level_message() {
    let (registry, buffer) = memory_registry();

    registry.log("org.foo", Severity::Warning, "watch out").unwrap();

    let records = buffer.snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].logger_name, "org.foo");
    assert_eq!(records[0].level, Severity::Warning);
    assert_eq!(records[0].message, "watch out");
}

#[test]
fn test_log_injection_prevention() {
    // Newlines are escaped so a message cannot forge extra records
    let (registry, buffer) = memory_registry();

    let malicious = "User login\nSEVERE [fake] injected\nINFO continuation";
    registry.log("org", Severity::Info, malicious).unwrap();

    let records = buffer.snapshot();
    assert_eq!(records.len(), 1);
    assert!(!records[0].message.contains('\n'));
    assert!(records[0].message.contains("\\n"));
}

#[test]
fn test_sink_failure_does_not_affect_resolution_state() {
    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            Err(LoggerError::sink("simulated failure"))
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    let registry = Registry::builder().sink(FailingSink).build();
    registry.set_threshold("org", Severity::Fine).unwrap();

    // Delivery fails, but the call itself succeeds
    registry.log("org", Severity::Severe, "lost").unwrap();

    assert_eq!(registry.metrics().delivery_failures(), 1);
    assert_eq!(registry.metrics().emitted_count(), 0);

    // Thresholds are untouched by the failure
    assert_eq!(
        registry.effective_threshold("org").unwrap(),
        Severity::Fine
    );
    assert!(registry.should_emit("org", Severity::Fine).unwrap());
}

#[test]
fn test_logger_handle_tracks_registry_changes() {
    let (registry, buffer) = memory_registry();
    let logger = registry.get_or_create("org.foo.bar").unwrap();

    logger.fine("hidden");
    registry.set_threshold("org.foo", Severity::Fine).unwrap();
    logger.fine("visible");

    assert_eq!(buffer.messages(), vec!["visible"]);
}

#[test]
fn test_logger_names_listing() {
    let (registry, _buffer) = memory_registry();

    registry.get_or_create("org.foo").unwrap();
    registry.get_or_create("org").unwrap();
    registry.get_or_create("net.bar").unwrap();

    assert_eq!(
        registry.logger_names(),
        vec![
            "".to_string(),
            "net.bar".to_string(),
            "org".to_string(),
            "org.foo".to_string(),
        ]
    );
}

#[test]
fn test_concurrent_configuration_and_logging() {
    let (registry, buffer) = memory_registry();

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            for i in 0..200 {
                let level = if i % 2 == 0 {
                    Severity::Fine
                } else {
                    Severity::Severe
                };
                registry.set_threshold("org.worker", level).unwrap();
            }
        })
    };

    let loggers: Vec<_> = (0..4)
        .map(|t| {
            let registry = registry.clone();
            thread::spawn(move || {
                let logger = registry
                    .get_or_create(&format!("org.worker.t{}", t))
                    .unwrap();
                for i in 0..200 {
                    logger.log(Severity::Severe, format!("t{} msg {}", t, i));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for handle in loggers {
        handle.join().unwrap();
    }

    // Severe passes both Fine and Severe thresholds, so nothing is lost
    assert_eq!(buffer.len(), 800);
    assert_eq!(registry.metrics().emitted_count(), 800);
    assert_eq!(registry.metrics().delivery_failures(), 0);
}

#[test]
fn test_flush_propagates_to_sink() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSink {
        flushes: Arc<AtomicUsize>,
    }

    impl Sink for CountingSink {
        fn write(&mut self, _record: &LogRecord) -> Result<()> {
            Ok(())
        }
        fn flush(&mut self) -> Result<()> {
            self.flushes.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    let flushes = Arc::new(AtomicUsize::new(0));
    let registry = Registry::builder()
        .sink(CountingSink {
            flushes: Arc::clone(&flushes),
        })
        .build();

    registry.flush().unwrap();
    registry.flush().unwrap();

    assert_eq!(flushes.load(Ordering::Relaxed), 2);
}

#[test]
fn test_original_demo_script() {
    // The scripted sequence from the demo this crate generalizes:
    // three loggers, a shared sink, thresholds switched mid-run.
    let (registry, buffer) = memory_registry();

    let loggers: Vec<Logger> = ["org", "org.foo", "org.foo.bar"]
        .iter()
        .map(|name| registry.get_or_create(name).unwrap())
        .collect();

    // 1st message at INFO on all three: all pass the root default
    for logger in &loggers {
        logger.info("1st message");
    }
    assert_eq!(buffer.len(), 3);
    buffer.clear();

    // Root switched to SEVERE: INFO vanishes everywhere
    registry.set_threshold("", Severity::Severe).unwrap();
    for logger in &loggers {
        logger.info("2nd message, you won't see me :)");
    }
    assert!(buffer.is_empty());

    // 3rd message on FINE/INFO/SEVERE: only SEVERE survives, per logger
    for logger in &loggers {
        logger.log_at_levels(&[Severity::Fine, Severity::Info, Severity::Severe], "3rd");
    }
    assert_eq!(buffer.len(), 3);
    buffer.clear();

    // org.foo switched to INFO: org.foo and org.foo.bar accept INFO again
    registry.set_threshold("org.foo", Severity::Info).unwrap();
    for logger in &loggers {
        logger.log_at_levels(&[Severity::Fine, Severity::Info, Severity::Severe], "4th");
    }
    // org: SEVERE only; org.foo and org.foo.bar: INFO + SEVERE
    assert_eq!(buffer.len(), 5);
    buffer.clear();

    // org.foo.bar switched to FINE: it now accepts all three levels
    registry.set_threshold("org.foo.bar", Severity::Fine).unwrap();
    for logger in &loggers {
        logger.log_at_levels(&[Severity::Fine, Severity::Info, Severity::Severe], "5th");
    }
    // org: 1, org.foo: 2, org.foo.bar: 3
    assert_eq!(buffer.len(), 6);
}
