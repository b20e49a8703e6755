use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Set the log level for the application
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level.
///
/// The logger itself is installed at Debug; the max-level filter does
/// the actual limiting so commands can raise or lower it later.
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
    log::set_max_level(log_level);

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
