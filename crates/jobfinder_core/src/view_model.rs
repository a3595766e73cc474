use crate::{Country, ExperienceBracket, JobPosting, LoadFailure, SourceFilter};

/// Skills shown on a list row before collapsing into a "+N" badge.
pub const SKILL_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub search_text: String,
    pub source: SourceFilter,
    pub country: Option<Country>,
    pub region: Option<&'static str>,
    pub experience: ExperienceBracket,
    pub page: u32,
    pub loading: bool,
    pub error: Option<LoadFailure>,
    pub api_healthy: Option<bool>,
    /// Postings on the loaded page before client-side filtering.
    pub page_job_count: usize,
    pub visible_count: usize,
    pub jobs: Vec<JobRowView>,
    pub selected: Option<JobDetailView>,
    pub saved_ids: Vec<String>,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: String,
    pub skills: Vec<String>,
    pub more_skills: usize,
    pub saved: bool,
    pub selected: bool,
}

impl JobRowView {
    pub(crate) fn from_posting(job: &JobPosting, saved: bool, selected: bool) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            source: job.source.clone(),
            skills: job.skills.iter().take(SKILL_PREVIEW).cloned().collect(),
            more_skills: job.skills.len().saturating_sub(SKILL_PREVIEW),
            saved,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: String,
    pub skills: Vec<String>,
    pub description: String,
    pub url: Option<String>,
    pub saved: bool,
}

impl JobDetailView {
    pub(crate) fn from_posting(job: &JobPosting, saved: bool) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            source: job.source.clone(),
            skills: job.skills.clone(),
            description: job.description.clone(),
            url: job.url.clone(),
            saved,
        }
    }
}
