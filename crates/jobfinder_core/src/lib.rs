//! JobFinder core: pure view-state controller and domain model.
mod effect;
mod filter;
mod model;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{matches_search, visible_jobs};
pub use model::{
    Country, ExperienceBracket, JobPosting, JobSource, Location, SourceFilter, UnknownValue,
};
pub use msg::Msg;
pub use query::JobQuery;
pub use state::{AppState, FailureClass, LoadFailure, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, JobDetailView, JobRowView, SKILL_PREVIEW};
