use crate::{ExperienceBracket, SourceFilter};

/// Parameters of one `GET /api/jobs` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub search: String,
    pub source: SourceFilter,
    /// Pre-rendered `where` value (`"IN"` or `"IN, Karnataka"`).
    pub location: Option<String>,
    pub experience: ExperienceBracket,
    pub page: u32,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            source: SourceFilter::All,
            location: None,
            experience: ExperienceBracket::Any,
            page: 1,
        }
    }
}

impl JobQuery {
    /// Query pairs in wire order; default-valued filters are left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let Some(source) = self.source.param() {
            params.push(("source", source.to_string()));
        }
        if let Some(location) = self.location.as_deref().filter(|loc| !loc.is_empty()) {
            params.push(("where", location.to_string()));
        }
        if let Some(experience) = self.experience.param() {
            params.push(("experience", experience.to_string()));
        }
        params.push(("page", self.page.max(1).to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_only_send_page() {
        assert_eq!(JobQuery::default().to_params(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn blank_search_is_omitted() {
        let query = JobQuery {
            search: "   ".to_string(),
            ..JobQuery::default()
        };
        assert_eq!(query.to_params(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn all_filters_in_wire_order() {
        let query = JobQuery {
            search: " rust developer ".to_string(),
            source: SourceFilter::Only(JobSource::Naukri),
            location: Some("IN, Kerala".to_string()),
            experience: ExperienceBracket::OneToThree,
            page: 4,
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("search", "rust developer".to_string()),
                ("source", "naukri".to_string()),
                ("where", "IN, Kerala".to_string()),
                ("experience", "1-3".to_string()),
                ("page", "4".to_string()),
            ]
        );
    }
}
