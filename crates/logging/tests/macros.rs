//! Integration tests for the call-site capturing macros.

use std::sync::Arc;

use logging::logging_sink::MemorySink;
use logging::{
    Logger, LoggerConfig, SinkDispatcher, VERBOSE_LOGGING_IMPLEMENTED, call_site, dlog,
    dlog_critical, dlog_not_important, vlog, vlog_critical,
};

fn logger() -> (Logger, Arc<MemorySink>) {
    let config = Arc::new(LoggerConfig::default());
    config.set_use_crash_report_sink(false);
    config.set_suppress_before_date("2016-Jan-01");
    let console = Arc::new(MemorySink::new());
    let dispatcher = SinkDispatcher::new().with_console(console.clone());
    (Logger::with_dispatcher(config, dispatcher), console)
}

mod network {
    pub fn connect(logger: &logging::Logger) {
        logging::dlog!(logger, "2016-Jul-28", "dialing {}", "example.org");
    }
}

#[test]
fn call_site_reports_file_and_function() {
    let site = call_site!();
    assert!(site.file.ends_with("macros.rs"));
    assert_eq!(site.function, "call_site_reports_file_and_function");
}

#[test]
fn function_name_comes_from_nested_module() {
    let (logger, console) = logger();
    network::connect(&logger);
    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("] connect - dialing example.org"), "{}", lines[0]);
}

#[test]
fn closures_report_enclosing_function() {
    let (logger, console) = logger();
    let run = || dlog!(logger, "2016-Jul-28", "inside");
    run();
    assert!(console.lines()[0].contains("] closures_report_enclosing_function - inside"));
}

#[test]
fn date_gate_applies_to_macros() {
    let (logger, console) = logger();
    dlog!(logger, "2015-Dec-31", "old");
    dlog_not_important!(logger, "2015-Dec-31", "old too");
    dlog_critical!(logger, "2015-Dec-31", "forced");
    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("- forced"));
}

#[test]
fn macros_work_from_threads() {
    let (logger, console) = logger();
    let logger = Arc::new(logger);
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for n in 0..25 {
                    dlog!(logger, "2016-Jul-28", "worker {worker} line {n}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
    assert_eq!(console.len(), 100);
}

#[test]
fn verbose_macros_stay_silent() {
    let (logger, console) = logger();
    vlog!(logger, "2016-Jul-28", "hidden {}", 1);
    vlog_critical!(logger, "2016-Jul-28", "hidden");
    assert!(!VERBOSE_LOGGING_IMPLEMENTED);
    assert!(console.is_empty());
}
