use std::time::Duration;

use jobfinder_core::{JobPosting, JobQuery};
use hyper::ext::ReasonPhrase;
use jobfinder_logging::{finder_debug, finder_warn};
use serde::Deserialize;
use url::Url;

use crate::retry::{fetch_with_retry, RetryPolicy};
use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const JOBS_PATH: &str = "/api/jobs";
const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    /// Whole-request timeout. `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            retry: RetryPolicy::default(),
        }
    }
}

#[async_trait::async_trait]
pub trait JobFetcher: Send + Sync {
    /// One request for one page, without retries.
    async fn fetch_page(&self, query: &JobQuery) -> Result<Vec<JobPosting>, FetchError>;

    /// Best-effort liveness probe; never fails.
    async fn check_health(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl ReqwestJobFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Full jobs URL for `query`, e.g. `http://localhost:8000/api/jobs?search=rust&page=1`.
    pub fn jobs_url(&self, query: &JobQuery) -> Result<Url, FetchError> {
        let mut url = self.endpoint(JOBS_PATH)?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        Ok(url)
    }

    /// Fetches one page, retrying according to the configured policy.
    pub async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<JobPosting>, FetchError> {
        fetch_with_retry(self, query, &self.settings.retry).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("{base}: {err}")))
    }

    async fn probe_health(&self) -> Result<bool, FetchError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(status_failure(&response));
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let health: HealthResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::invalid_response(format!("Invalid health response: {err}")))?;
        Ok(health.status == "healthy")
    }
}

#[async_trait::async_trait]
impl JobFetcher for ReqwestJobFetcher {
    async fn fetch_page(&self, query: &JobQuery) -> Result<Vec<JobPosting>, FetchError> {
        let url = self.jobs_url(query)?;
        finder_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(status_failure(&response));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        parse_jobs(&body)
    }

    async fn check_health(&self) -> bool {
        match self.probe_health().await {
            Ok(healthy) => healthy,
            Err(err) => {
                finder_warn!("Health check failed: {}", err);
                false
            }
        }
    }
}

/// Validates a `/api/jobs` body: it must be a JSON array of postings.
pub fn parse_jobs(body: &[u8]) -> Result<Vec<JobPosting>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|err| FetchError::invalid_response(format!("Invalid response format: {err}")))?;
    if !value.is_array() {
        return Err(FetchError::invalid_response(
            "Invalid response format: expected an array",
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| FetchError::invalid_response(format!("Invalid job posting: {err}")))
}

/// Prefers the reason phrase the server sent; hyper only records it when it
/// differs from the canonical one.
fn status_failure(response: &reqwest::Response) -> FetchError {
    let status = response.status();
    let reason = response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .or_else(|| status.canonical_reason());
    FetchError::http_status(status.as_u16(), reason)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobfinder_core::{ExperienceBracket, JobSource, SourceFilter};

    fn fetcher(base_url: &str) -> ReqwestJobFetcher {
        ReqwestJobFetcher::new(FetchSettings {
            base_url: base_url.to_string(),
            ..FetchSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn jobs_url_encodes_only_set_params() {
        let query = JobQuery {
            search: "data scientist".to_string(),
            source: SourceFilter::Only(JobSource::Unstop),
            location: Some("IN, Tamil Nadu".to_string()),
            experience: ExperienceBracket::FivePlus,
            page: 2,
        };
        let url = fetcher("http://localhost:8000/").jobs_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/jobs?search=data+scientist&source=unstop&where=IN%2C+Tamil+Nadu&experience=5%2B&page=2"
        );
    }

    #[test]
    fn bad_base_url_is_invalid_url() {
        let err = fetcher("not a url").jobs_url(&JobQuery::default()).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }

    #[test]
    fn non_array_body_is_validation_failure() {
        let err = parse_jobs(br#"{"detail":"oops"}"#).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
        assert_eq!(err.message, "Invalid response format: expected an array");
    }

    #[test]
    fn non_json_body_is_validation_failure() {
        assert!(parse_jobs(b"<html>").unwrap_err().is_validation());
    }

    #[test]
    fn empty_array_is_ok() {
        assert_eq!(parse_jobs(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn null_fields_keep_the_whole_page() {
        let body = br#"[
            {"id":"adz-1","title":"Data Analyst","company":"Acme","location":"Pune","skills":[],"source":"adzuna","description":"","url":"","saved":false},
            {"id":"adz-2","title":null,"company":"Globex","location":"Delhi","skills":[],"source":"adzuna","description":null,"url":"https://example.com/2","saved":false}
        ]"#;
        let jobs = parse_jobs(body).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Data Analyst");
        assert_eq!(jobs[1].title, "");
        assert_eq!(jobs[1].company, "Globex");
        assert_eq!(jobs[1].url.as_deref(), Some("https://example.com/2"));
    }

    #[test]
    fn array_of_wrong_shape_is_validation_failure() {
        let err = parse_jobs(br#"[{"id": 1}]"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidResponse);
    }
}
