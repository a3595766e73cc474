//! Client-side narrowing of the current page of results.

use crate::{JobPosting, SourceFilter};

/// Case-insensitive substring match over title, company or any skill.
/// Blank search text matches every posting.
pub fn matches_search(job: &JobPosting, text: &str) -> bool {
    // Trimmed, so "react " still matches "React" at the end of a title.
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(&needle)
        || job.company.to_lowercase().contains(&needle)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Postings passing both the search and source predicates, in fetch order.
pub fn visible_jobs<'a>(
    jobs: &'a [JobPosting],
    text: &str,
    source: SourceFilter,
) -> Vec<&'a JobPosting> {
    jobs.iter()
        .filter(|job| matches_search(job, text) && source.matches(&job.source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobSource;

    fn job(id: &str, title: &str, company: &str, skills: &[&str], source: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: "Bangalore".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            source: source.to_string(),
            description: String::new(),
            url: None,
            saved: false,
        }
    }

    #[test]
    fn skill_only_match_is_included() {
        let jobs = vec![job("1", "Frontend Engineer", "TechCorp", &["React", "CSS"], "LinkedIn")];
        let visible = visible_jobs(&jobs, "React", SourceFilter::All);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let dev = job("1", "Senior Developer React", "Acme", &[], "Naukri");
        assert!(matches_search(&dev, "react "));
        assert!(matches_search(&dev, "  "));
    }

    #[test]
    fn company_match_is_case_insensitive() {
        let jobs = vec![job("1", "Engineer", "DataTech Inc", &[], "Indeed")];
        assert!(matches_search(&jobs[0], "datatech"));
        assert!(!matches_search(&jobs[0], "cloudfirst"));
    }

    #[test]
    fn both_predicates_must_pass() {
        let jobs = vec![
            job("1", "Python Developer", "A", &[], "Naukri"),
            job("2", "Python Developer", "B", &[], "Indeed"),
            job("3", "Go Developer", "C", &[], "Naukri"),
        ];
        let visible = visible_jobs(&jobs, "python", SourceFilter::Only(JobSource::Naukri));
        let ids: Vec<_> = visible.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn source_all_keeps_every_search_match() {
        let jobs = vec![
            job("1", "Data Scientist", "A", &[], "Naukri"),
            job("2", "Data Engineer", "B", &[], "adzuna"),
            job("3", "Designer", "C", &[], "Unstop"),
        ];
        let ids: Vec<_> = visible_jobs(&jobs, "data", SourceFilter::All)
            .iter()
            .map(|j| j.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
