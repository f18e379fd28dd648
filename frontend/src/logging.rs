//! Browser console logging for the `log` facade.
//!
//! # Responsibility
//! - Install one `log::Log` implementation that forwards to the devtools
//!   console through `gloo-console`.
//! - Keep messages in the `event=<name> key=value` shape used across the crate.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Re-initialization with a different level is rejected.
//! - Initialization never panics.

use log::{info, Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<&'static str> = OnceCell::new();
static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `level`.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when logging is already active at another level.
/// - Returns an error when another `log` implementation was installed first.
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized = normalize_level(level)?;

    let active = LOGGING_STATE.get_or_try_init(|| -> Result<&'static str, String> {
        log::set_logger(&CONSOLE_LOGGER)
            .map_err(|err| format!("failed to install console logger: {err}"))?;
        log::set_max_level(level_filter(normalized));
        info!(
            "event=app_start module=site status=ok level={normalized} version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(normalized)
    })?;

    if *active != normalized {
        return Err(format!(
            "logging already initialized with level `{active}`; refusing to switch to `{normalized}`"
        ));
    }
    Ok(())
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn level_filter(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

#[cfg(test)]
mod tests {
    use super::{format_line, level_filter, normalize_level};
    use log::{Level, LevelFilter};

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        let error = normalize_level("verbose").unwrap_err();
        assert!(error.contains("unsupported log level `verbose`"));
    }

    #[test]
    fn normalized_levels_map_to_filters() {
        assert_eq!(level_filter("trace"), LevelFilter::Trace);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("info"), LevelFilter::Info);
    }

    #[test]
    fn lines_carry_level_and_target() {
        assert_eq!(
            format_line(Level::Warn, "soiree_site::store", "event=store_error table=faqs"),
            "[WARN] soiree_site::store: event=store_error table=faqs"
        );
    }
}
