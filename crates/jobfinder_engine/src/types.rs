use std::fmt;

use jobfinder_core::{JobPosting, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<Vec<JobPosting>, FetchError>,
    },
    HealthChecked {
        healthy: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
    /// Reason phrase of a non-success response, when there was one.
    pub status_text: Option<String>,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_text: None,
        }
    }

    pub(crate) fn http_status(code: u16, reason: Option<&str>) -> Self {
        let status_text = reason.unwrap_or_default().to_string();
        Self {
            kind: FailureKind::HttpStatus(code),
            message: format!("Failed to fetch jobs: {}", reason.unwrap_or("unknown status")),
            status_text: Some(status_text),
        }
    }

    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidResponse, message)
    }

    /// HTTP status code, present only for non-success responses.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }

    /// Network-level error or HTTP error status.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::Network | FailureKind::Timeout | FailureKind::HttpStatus(_)
        )
    }

    /// Success status with a body that is not a list of postings.
    pub fn is_validation(&self) -> bool {
        self.kind == FailureKind::InvalidResponse
    }

    /// A malformed base URL fails identically on every attempt.
    pub fn is_retryable(&self) -> bool {
        self.kind != FailureKind::InvalidUrl
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response format"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}
