use crate::{JobQuery, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET /api/jobs`; the result comes back as `Msg::JobsLoaded` with the same id.
    FetchJobs { request_id: RequestId, query: JobQuery },
    /// Probe the backend's `/health` endpoint.
    CheckHealth,
}
