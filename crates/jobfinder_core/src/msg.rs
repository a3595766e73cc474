use crate::{Country, ExperienceBracket, JobPosting, LoadFailure, RequestId, SourceFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box. Narrows the current page only.
    SearchTextChanged(String),
    /// User picked a source in the source selector.
    SourceChanged(SourceFilter),
    /// User picked a country (`None` means anywhere).
    CountryChanged(Option<Country>),
    /// User picked a sub-region of the selected country.
    RegionChanged(Option<String>),
    /// User picked an experience bracket.
    ExperienceChanged(ExperienceBracket),
    /// User pressed Search.
    SearchSubmitted,
    NextPage,
    PreviousPage,
    /// Jump straight to a page (1-based) and fetch it.
    PageRequested { page: u32 },
    /// Engine completion for a fetch.
    JobsLoaded {
        request_id: RequestId,
        result: Result<Vec<JobPosting>, LoadFailure>,
    },
    /// User selected a posting for the detail panel.
    JobSelected { job_id: String },
    SelectionCleared,
    /// User clicked the save toggle on a posting.
    SaveToggled { job_id: String },
    /// User dismissed the error banner.
    ErrorDismissed,
    HealthCheckRequested,
    HealthChecked { healthy: bool },
}
