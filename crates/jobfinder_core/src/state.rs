use std::collections::BTreeSet;
use std::fmt;

use jobfinder_logging::{finder_debug, finder_info, finder_warn};

use crate::filter::visible_jobs;
use crate::view_model::{AppViewModel, JobDetailView, JobRowView};
use crate::{Country, Effect, ExperienceBracket, JobPosting, JobQuery, Location, SourceFilter};

/// Monotonic token attached to each fetch; only the latest one is accepted.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Network error or non-success HTTP status.
    Transport,
    /// Success status but the body was not a list of postings.
    Validation,
}

/// A failed page load as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub class: FailureClass,
    pub status: Option<u16>,
    pub message: String,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    search_text: String,
    source: SourceFilter,
    location: Location,
    experience: ExperienceBracket,
    page: u32,
    jobs: Vec<JobPosting>,
    selected: Option<JobPosting>,
    saved: BTreeSet<String>,
    loading: bool,
    error: Option<LoadFailure>,
    api_healthy: Option<bool>,
    last_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            source: SourceFilter::All,
            location: Location::default(),
            experience: ExperienceBracket::Any,
            page: 1,
            jobs: Vec::new(),
            selected: None,
            saved: BTreeSet::new(),
            loading: false,
            error: None,
            api_healthy: None,
            last_request_id: 0,
            in_flight: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Postings of the most recently loaded page, unfiltered.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn selected(&self) -> Option<&JobPosting> {
        self.selected.as_ref()
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.contains(job_id)
    }

    pub fn saved_ids(&self) -> impl Iterator<Item = &str> {
        self.saved.iter().map(String::as_str)
    }

    pub fn error(&self) -> Option<&LoadFailure> {
        self.error.as_ref()
    }

    /// The request the next fetch would send for the current filters and page.
    pub fn query(&self) -> JobQuery {
        JobQuery {
            search: self.search_text.clone(),
            source: self.source,
            location: self.location.param(),
            experience: self.experience,
            page: self.page,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let visible = visible_jobs(&self.jobs, &self.search_text, self.source);
        let selected_id = self.selected.as_ref().map(|job| job.id.as_str());
        let jobs: Vec<JobRowView> = visible
            .iter()
            .map(|job| {
                JobRowView::from_posting(
                    job,
                    self.is_saved(&job.id),
                    selected_id == Some(job.id.as_str()),
                )
            })
            .collect();

        AppViewModel {
            search_text: self.search_text.clone(),
            source: self.source,
            country: self.location.country(),
            region: self.location.region(),
            experience: self.experience,
            page: self.page,
            loading: self.loading,
            error: self.error.clone(),
            api_healthy: self.api_healthy,
            page_job_count: self.jobs.len(),
            visible_count: jobs.len(),
            jobs,
            selected: self
                .selected
                .as_ref()
                .map(|job| JobDetailView::from_posting(job, self.is_saved(&job.id))),
            saved_ids: self.saved.iter().cloned().collect(),
            can_go_next: !self.loading,
            can_go_previous: !self.loading && self.page > 1,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        if self.search_text != text {
            self.search_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_source(&mut self, source: SourceFilter) {
        if self.source != source {
            self.source = source;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_country(&mut self, country: Option<Country>) {
        if self.location.country() != country {
            self.location.set_country(country);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_region(&mut self, region: Option<&str>) {
        let before = self.location.region();
        if !self.location.set_region(region) {
            finder_debug!(
                "Ignoring region {:?} for country {:?}",
                region,
                self.location.country()
            );
            return;
        }
        if self.location.region() != before {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_experience(&mut self, experience: ExperienceBracket) {
        if self.experience != experience {
            self.experience = experience;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if self.page != page {
            self.page = page;
            self.mark_dirty();
        }
    }

    /// Allocates a new request token and enters the loading state.
    pub(crate) fn begin_fetch(&mut self) -> Effect {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        if let Some(previous) = self.in_flight.replace(request_id) {
            finder_debug!("Request {} superseded by {}", previous, request_id);
        }
        self.loading = true;
        self.error = None;
        self.mark_dirty();
        let query = self.query();
        finder_info!("Fetching page {} (request {})", query.page, request_id);
        Effect::FetchJobs { request_id, query }
    }

    pub(crate) fn apply_loaded(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<JobPosting>, LoadFailure>,
    ) {
        if self.in_flight != Some(request_id) {
            finder_debug!(
                "Discarding stale response for request {} (in flight: {:?})",
                request_id,
                self.in_flight
            );
            return;
        }
        self.in_flight = None;
        self.loading = false;
        match result {
            Ok(jobs) => {
                finder_info!("Request {} loaded {} jobs", request_id, jobs.len());
                self.jobs = jobs;
                if self.selected.is_none() {
                    self.selected = self.jobs.first().cloned();
                }
            }
            Err(failure) => {
                finder_warn!("Request {} failed: {}", request_id, failure);
                self.error = Some(failure);
            }
        }
        self.mark_dirty();
    }

    /// Selects a posting from the current page; unknown ids are ignored.
    pub(crate) fn select(&mut self, job_id: &str) {
        if self.selected.as_ref().map(|job| job.id.as_str()) == Some(job_id) {
            return;
        }
        match self.jobs.iter().find(|job| job.id == job_id) {
            Some(job) => {
                self.selected = Some(job.clone());
                self.mark_dirty();
            }
            None => finder_debug!("Ignoring selection of unknown job {}", job_id),
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_saved(&mut self, job_id: String) {
        if job_id.is_empty() {
            return;
        }
        if !self.saved.remove(&job_id) {
            self.saved.insert(job_id);
        }
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_api_health(&mut self, healthy: bool) {
        if self.api_healthy != Some(healthy) {
            self.api_healthy = Some(healthy);
            self.mark_dirty();
        }
    }
}
