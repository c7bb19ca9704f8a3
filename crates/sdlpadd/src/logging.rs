use std::fmt;

use chrono::{DateTime, Local};
use fern::Dispatch;
use log::Level;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Log line layout: time, level tag, then the originating crate for records
/// that did not come from the daemon itself.
pub(crate) fn format_line(
    now: DateTime<Local>,
    level: Level,
    target: &str,
    message: &fmt::Arguments,
) -> String {
    let time = now.format(TIME_FORMAT);
    let tag = level_tag(level);
    let source = target.split("::").next().unwrap_or(target);
    if source == env!("CARGO_CRATE_NAME") {
        format!("{time} {tag} {message}")
    } else {
        format!("{time} {tag} [{source}] {message}")
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERR",
        Level::Warn => "WRN",
        Level::Info => "INF",
        Level::Debug => "DBG",
        Level::Trace => "TRC",
    }
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        log::error!("{}", format!($($arg)*).bright_red())
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        log::debug!("{}", format!($($arg)*).dimmed())
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        log::warn!("{}", format!($($arg)*).bright_yellow())
    }
}

/// Routes daemon and library records to stdout. Anything else is limited to
/// warnings.
pub(crate) fn setup(verbose: bool, no_color: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if no_color {
        colored::control::set_override(false);
    }

    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(Local::now(), record.level(), record.target(), message)
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("sdlpadd", level)
        .level_for("sdlpad_gamepad", level)
        .level_for("sdlpad_workspace", level)
        .chain(std::io::stdout())
        .apply()
        .expect("Unable to set up logger");
}
