//! Logger setup for the jobfinder binary.
//!
//! Terminal output goes to stderr so listings and `--json` output on stdout
//! stay clean. Only records from the jobfinder crates are kept.

use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "jobfinder.log";

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
    Off,
}

impl LogDestination {
    fn to_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn to_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the remaining sinks still get installed.
pub fn initialize(destination: LogDestination, level: LevelFilter, file: &Path) {
    let loggers = build_loggers(destination, level, file);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    file: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);

    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        match File::create(file) {
            Ok(handle) => loggers.push(WriteLogger::new(level, config, handle)),
            Err(err) => eprintln!("Warning: cannot write log file {}: {err}", file.display()),
        }
    }
    loggers
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("jobfinder")
        .build()
}
