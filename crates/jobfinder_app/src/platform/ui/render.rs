use jobfinder_core::{AppViewModel, FailureClass, JobDetailView, JobRowView};

/// Renders the whole screen as text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.jobs.len() * 2 + 16);

    lines.push(status_line(view));
    if view.loading {
        lines.push("Loading...".to_string());
    }
    if let Some(error) = &view.error {
        let label = match error.class {
            FailureClass::Transport => "Request failed",
            FailureClass::Validation => "Unexpected response",
        };
        lines.push(format!("! {label}: {error}  (`dismiss` to hide)"));
    }

    lines.push(format!(
        "{} Jobs Found{}",
        view.visible_count,
        if view.visible_count == view.page_job_count {
            String::new()
        } else {
            format!(" (of {} on this page)", view.page_job_count)
        }
    ));
    for (index, row) in view.jobs.iter().enumerate() {
        lines.extend(render_row(index + 1, row));
    }

    if let Some(detail) = &view.selected {
        lines.push(String::new());
        lines.extend(render_detail(detail));
    }

    lines.push(pager_line(view));
    lines
}

fn status_line(view: &AppViewModel) -> String {
    let location = match (view.country, view.region) {
        (Some(country), Some(region)) => format!("{}, {}", country.name(), region),
        (Some(country), None) => country.name().to_string(),
        (None, _) => "Anywhere".to_string(),
    };
    let api = match view.api_healthy {
        Some(true) => "up",
        Some(false) => "down",
        None => "?",
    };
    let search = if view.search_text.trim().is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", view.search_text.trim())
    };
    format!(
        "== JobFinder | page {} | search {} | {} | {} | {} | saved {} | API {} ==",
        view.page,
        search,
        view.source,
        location,
        view.experience,
        view.saved_ids.len(),
        api
    )
}

fn render_row(number: usize, row: &JobRowView) -> Vec<String> {
    let cursor = if row.selected { '>' } else { ' ' };
    let saved = if row.saved { "[*]" } else { "[ ]" };
    let mut skills = row.skills.join(", ");
    if row.more_skills > 0 {
        skills.push_str(&format!(" +{}", row.more_skills));
    }
    vec![
        format!(
            "{cursor}{number:>3}. {saved} {} - {} ({}) via {}",
            row.title, row.company, row.location, row.source
        ),
        format!("          {skills}"),
    ]
}

fn render_detail(detail: &JobDetailView) -> Vec<String> {
    let mut lines = vec![
        format!(
            "-- {}{} --",
            detail.title,
            if detail.saved { " [saved]" } else { "" }
        ),
        format!("{} | {} | via {}", detail.company, detail.location, detail.source),
    ];
    if !detail.skills.is_empty() {
        lines.push(format!("Skills: {}", detail.skills.join(", ")));
    }
    if !detail.description.trim().is_empty() {
        lines.push(detail.description.trim().to_string());
    }
    match &detail.url {
        Some(url) => lines.push(format!("Apply: {url}")),
        None => lines.push("Apply: no link provided".to_string()),
    }
    lines
}

fn pager_line(view: &AppViewModel) -> String {
    let prev = if view.can_go_previous { "[prev]" } else { " prev " };
    let next = if view.can_go_next { "[next]" } else { " next " };
    format!("{prev} page {} {next}", view.page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobfinder_core::{update, AppState, FailureClass, JobPosting, LoadFailure, Msg};

    fn posting(id: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            location: "Mumbai".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            source: "Naukri".to_string(),
            description: "Build things.".to_string(),
            url: Some(format!("https://example.com/{id}")),
            saved: false,
        }
    }

    fn loaded(result: Result<Vec<JobPosting>, LoadFailure>) -> AppState {
        let (state, _) = update(AppState::new(), Msg::SearchSubmitted);
        let (state, _) = update(
            state,
            Msg::JobsLoaded {
                request_id: 1,
                result,
            },
        );
        state
    }

    #[test]
    fn rows_show_markers_and_skill_overflow() {
        let state = loaded(Ok(vec![
            posting("1", &["Rust", "Go", "SQL", "AWS", "Docker"]),
            posting("2", &[]),
        ]));
        let (state, _) = update(state, Msg::SaveToggled { job_id: "2".to_string() });
        let lines = render(&state.view());

        assert!(lines.iter().any(|l| l.starts_with(">  1. [ ] Job 1 - Acme (Mumbai) via Naukri")));
        assert!(lines.iter().any(|l| l.trim() == "Rust, Go, SQL +2"));
        assert!(lines.iter().any(|l| l.starts_with("   2. [*] Job 2")));
        assert!(lines.iter().any(|l| l == "Apply: https://example.com/1"));
        assert!(lines.iter().any(|l| l == "2 Jobs Found"));
    }

    #[test]
    fn loading_and_error_are_signalled() {
        let (state, _) = update(AppState::new(), Msg::SearchSubmitted);
        let lines = render(&state.view());
        assert!(lines.contains(&"Loading...".to_string()));

        let state = loaded(Err(LoadFailure {
            class: FailureClass::Validation,
            status: None,
            message: "Invalid response format: expected an array".to_string(),
        }));
        let lines = render(&state.view());
        assert!(!lines.contains(&"Loading...".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("! Unexpected response: Invalid response format")));
    }

    #[test]
    fn filtered_count_mentions_page_total() {
        let state = loaded(Ok(vec![posting("1", &["Rust"]), posting("2", &["Java"])]));
        let (state, _) = update(state, Msg::SearchTextChanged("rust".to_string()));
        let lines = render(&state.view());
        assert!(lines.contains(&"1 Jobs Found (of 2 on this page)".to_string()));
    }
}
