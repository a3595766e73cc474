#![allow(dead_code)]

use std::sync::Once;

use jobfinder_core::{update, AppState, Effect, JobPosting, Msg, RequestId};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobfinder_logging::initialize_for_tests);
}

pub fn posting(id: &str, title: &str, company: &str, skills: &[&str], source: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: "Bangalore".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        source: source.to_string(),
        description: format!("{title} at {company}"),
        url: Some(format!("https://jobs.example.com/{id}")),
        saved: false,
    }
}

pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        posting("1", "Senior Frontend Developer", "TechCorp Solutions", &["React", "TypeScript", "Next.js", "Tailwind"], "LinkedIn"),
        posting("2", "Full Stack Developer", "StartupXYZ", &["Node.js", "React", "MongoDB", "Express"], "Naukri"),
        posting("3", "Backend Engineer", "DataTech Inc", &["Python", "Django", "PostgreSQL", "AWS"], "Indeed"),
        posting("4", "DevOps Engineer", "CloudFirst Technologies", &["Docker", "Kubernetes", "AWS", "Jenkins"], "Unstop"),
    ]
}

pub fn request_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchJobs { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

/// Submits a search and completes it with `jobs`.
pub fn loaded(state: AppState, jobs: Vec<JobPosting>) -> AppState {
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let (mut state, _) = update(
        state,
        Msg::JobsLoaded {
            request_id: request_id(&effects),
            result: Ok(jobs),
        },
    );
    state.consume_dirty();
    state
}
