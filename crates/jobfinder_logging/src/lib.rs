#![deny(missing_docs)]
//! Logging macros and test logger setup shared by the jobfinder crates.
//!
//! Every `finder_*` macro funnels into [`finder_log!`], which goes through the
//! `log` facade re-exported here. Records keep the caller's module path as
//! their target, so a single `jobfinder` prefix filter selects them all.

#[doc(hidden)]
pub use log;

use log::LevelFilter;

/// Logs a record at an explicit [`log::Level`].
#[macro_export]
macro_rules! finder_log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log::log!($level, $($arg)+)
    };
}

/// Debug-level [`finder_log!`].
#[macro_export]
macro_rules! finder_debug {
    ($($arg:tt)+) => {
        $crate::finder_log!($crate::log::Level::Debug, $($arg)+)
    };
}

/// Info-level [`finder_log!`].
#[macro_export]
macro_rules! finder_info {
    ($($arg:tt)+) => {
        $crate::finder_log!($crate::log::Level::Info, $($arg)+)
    };
}

/// Warn-level [`finder_log!`].
#[macro_export]
macro_rules! finder_warn {
    ($($arg:tt)+) => {
        $crate::finder_log!($crate::log::Level::Warn, $($arg)+)
    };
}

/// Error-level [`finder_log!`].
#[macro_export]
macro_rules! finder_error {
    ($($arg:tt)+) => {
        $crate::finder_log!($crate::log::Level::Error, $($arg)+)
    };
}

/// Debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs simplelog's `TestLogger`, whose output the test harness captures.
/// Later calls are no-ops.
pub fn initialize_for_tests() {
    let _ = simplelog::TestLogger::init(default_level(), simplelog::Config::default());
}
