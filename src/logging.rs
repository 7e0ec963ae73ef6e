//! `log` backend writing to the browser console (stderr off the web).

use log::{Level, LevelFilter, Log, Metadata, Record};

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
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            let msg = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if record.level() <= Level::Warn {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls leave the first logger in place.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;

    thread_local! {
        /// Records logged on the current test thread.
        static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    struct CaptureLogger;

    static CAPTURE: CaptureLogger = CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|c| {
                c.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    /// Run `f` and return what it logged on this thread.
    pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        CAPTURED.with(|c| c.borrow_mut().clear());
        let out = f();
        let logs = CAPTURED.with(|c| c.borrow_mut().drain(..).collect());
        (out, logs)
    }
}
