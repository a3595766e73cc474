//! Command-line configuration for the `jobfinder` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jobfinder_core::{Country, ExperienceBracket, SourceFilter};
use jobfinder_engine::{Backoff, FetchSettings, RetryPolicy, DEFAULT_API_BASE_URL};
use log::LevelFilter;

use crate::platform::app::SearchRequest;
use crate::platform::logging::{LogDestination, DEFAULT_LOG_FILE};

#[derive(Debug, Parser)]
#[command(name = "jobfinder", version)]
#[command(about = "Search job postings aggregated from several job boards", long_about = None)]
pub struct Cli {
    /// Base URL of the job aggregation API.
    #[arg(long, env = "JOBFINDER_API_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds. Requests wait indefinitely when unset.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Total attempts per page fetch.
    #[arg(long, default_value_t = 3, global = true)]
    pub retries: u32,

    /// Base delay between attempts, in milliseconds.
    #[arg(long, default_value_t = 1000, global = true)]
    pub retry_delay_ms: u64,

    #[arg(long, value_enum, default_value_t = BackoffArg::Linear, global = true)]
    pub backoff: BackoffArg,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File, global = true)]
    pub log: LogDestination,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive browser (default)
    Browse,
    /// Fetch one page, print it and exit
    Search(SearchArgs),
    /// Check whether the API is reachable
    Health,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text search (title, company or skill)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// linkedin, naukri, indeed, unstop, adzuna or all
    #[arg(long, default_value = "all")]
    pub source: SourceFilter,

    /// Country code or name, e.g. IN or "United States"
    #[arg(long)]
    pub country: Option<Country>,

    /// Sub-region of the country (India only)
    #[arg(long, requires = "country")]
    pub region: Option<String>,

    /// 0-1, 1-3, 3-5, 5+ or any
    #[arg(long, default_value = "any")]
    pub experience: ExperienceBracket,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print the postings as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackoffArg {
    Linear,
    Exponential,
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api_url.clone(),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            retry: RetryPolicy {
                max_attempts: self.retries.max(1),
                base_delay: Duration::from_millis(self.retry_delay_ms),
                backoff: self.backoff.into(),
            },
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

impl From<BackoffArg> for Backoff {
    fn from(arg: BackoffArg) -> Self {
        match arg {
            BackoffArg::Linear => Backoff::Linear,
            BackoffArg::Exponential => Backoff::Exponential,
        }
    }
}

impl From<SearchArgs> for SearchRequest {
    fn from(args: SearchArgs) -> Self {
        Self {
            query: args.query,
            source: args.source,
            country: args.country,
            region: args.region,
            experience: args.experience,
            page: args.page,
            json: args.json,
        }
    }
}
