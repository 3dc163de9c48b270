//! Browser Console Logger
//!
//! Routes `log` records to the devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let msg = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // Strip the crate prefix so lines read "[INFO query::controller] ..."
    let target = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("[{} {}] {}", level, target, message)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_strips_crate() {
        let line = format_record(Level::Info, "restaurant_admin_ui::query::controller", "fetch");
        assert_eq!(line, "[INFO query::controller] fetch");
    }

    #[test]
    fn test_format_record_plain_target() {
        assert_eq!(format_record(Level::Warn, "app", "x"), "[WARN app] x");
    }
}
