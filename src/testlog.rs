//! Capturing logger for asserting on diagnostics emitted by a test.

use std::{
    sync::{Mutex, Once},
    thread::ThreadId,
};

struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, log::Level, String)>>,
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

static INIT: Once = Once::new();

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                std::thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

pub(crate) fn init() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Error-level messages logged from the calling thread. Each test runs on
/// its own thread, so this only sees the current test's output when the
/// test uses a current-thread runtime.
pub(crate) fn errors_on_this_thread() -> Vec<String> {
    let id = std::thread::current().id();
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(thread, level, _)| *thread == id && *level == log::Level::Error)
                .map(|(_, _, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}
