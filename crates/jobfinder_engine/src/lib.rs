//! JobFinder engine: HTTP client for the job-aggregation API and effect execution.
mod engine;
mod fetch;
mod retry;
mod types;

pub use engine::EngineHandle;
pub use fetch::{parse_jobs, FetchSettings, JobFetcher, ReqwestJobFetcher, DEFAULT_API_BASE_URL};
pub use retry::{fetch_with_retry, Backoff, RetryPolicy};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
