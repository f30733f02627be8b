// Global verbosity control for atlas history output
use std::sync::atomic::{AtomicU8, Ordering};

/// 0 = summaries and errors only, 1 = basic info, 2 = full store trace
static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

pub const MAX_VERBOSITY: u8 = 2;

pub fn set_verbosity_level(level: u8) {
    let level = level.min(MAX_VERBOSITY);
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        eprintln!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

pub fn enabled(level: u8) -> bool {
    get_verbosity_level() >= level
}

// Diagnostics go to stderr so command output on stdout stays scriptable
#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::enabled($level) {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => { $crate::v_print!(0, $($arg)*); };
}

#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*); };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*); };
}

// Errors are never filtered
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
