//! Hierarchical threshold demo
//!
//! Reproduces a classic logger-hierarchy walkthrough: three nested loggers
//! share one console sink while thresholds are switched on the root, an
//! intermediate node, and a leaf.
//!
//! Run with: cargo run --example hierarchy_demo

use hierlog::prelude::*;

fn show_all_loggers(loggers: &[Logger]) {
    println!("******************* SHOW all loggers *****************");
    for logger in loggers {
        println!(
            "Logger [{:12}], Explicit [{:?}], Effective [{}]",
            logger.name(),
            logger.explicit_threshold(),
            logger.effective_threshold()
        );
    }
}

fn switch_to(registry: &Registry, name: &str, level: Severity) {
    println!(
        "------------------------------ Switch [{:12}] to [{:12}]",
        name, level
    );
    registry
        .set_threshold(name, level)
        .expect("well-formed name");
}

fn log_all_at_levels(loggers: &[Logger], message: &str, levels: &[Severity]) {
    let names: Vec<&str> = levels.iter().map(|l| l.to_str()).collect();
    println!("~~~~~~~~~~~~~~~~ Log {} on levels {}", message, names.join(" "));
    for logger in loggers {
        logger.log_at_levels(levels, message);
    }
}

fn main() -> Result<()> {
    let registry = Registry::builder().sink(ConsoleSink::new()).build();

    let loggers: Vec<Logger> = ["org", "org.foo", "org.foo.bar"]
        .iter()
        .map(|name| registry.get_or_create(name))
        .collect::<Result<_>>()?;

    show_all_loggers(&loggers);

    for logger in &loggers {
        logger.info("1st message");
    }

    switch_to(&registry, ROOT_NAME, Severity::Severe);

    for logger in &loggers {
        logger.info("2nd message, you won't see me :)");
    }

    log_all_at_levels(
        &loggers,
        "3rd message",
        &[Severity::Fine, Severity::Info, Severity::Severe],
    );

    switch_to(&registry, "org.foo", Severity::Info);

    log_all_at_levels(
        &loggers,
        "4th message",
        &[Severity::Fine, Severity::Info, Severity::Severe],
    );

    switch_to(&registry, "org.foo.bar", Severity::Fine);

    log_all_at_levels(
        &loggers,
        "5th message",
        &[Severity::Fine, Severity::Info, Severity::Severe],
    );

    show_all_loggers(&loggers);

    registry.flush()?;
    Ok(())
}
