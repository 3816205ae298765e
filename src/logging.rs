//! `log` setup. Records go to the browser console on wasm and to stderr elsewhere.

use log::{Level, LevelFilter, Record};

/// Install the global logger. Calling it twice is harmless; the second call
/// only reports that a logger is already set.
pub fn setup_logging(level: LevelFilter) {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(write_record));

    if let Err(e) = dispatch.apply() {
        eprintln!("snow-clicker: logger already installed: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn write_record(record: &Record) {
    let line = record.args().to_string();
    match record.level() {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info | Level::Debug | Level::Trace => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_record(record: &Record) {
    if record.level() <= Level::Warn {
        eprintln!("{}", record.args());
    } else {
        println!("{}", record.args());
    }
}
