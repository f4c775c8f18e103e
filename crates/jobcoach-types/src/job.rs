//! Job posting types and listing filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as listed by the browse endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub company_name: String,
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience_text: String,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub salary_text: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

/// Filters for the job posting listing.
///
/// `position` is an exact-match filter, `location` a substring match;
/// both are applied server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub position: Option<String>,
    pub location: Option<String>,
    pub skip: u32,
    pub limit: u32,
}

impl JobQuery {
    /// Default page size used when no limit is given.
    pub const DEFAULT_LIMIT: u32 = 20;

    pub fn new() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_query_builder() {
        let query = JobQuery::new()
            .with_position("backend")
            .with_location("Seoul")
            .with_limit(50);
        assert_eq!(query.position.as_deref(), Some("backend"));
        assert_eq!(query.location.as_deref(), Some("Seoul"));
        assert_eq!(query.limit, 50);
        assert_eq!(query.skip, 0);
    }

    #[test]
    fn test_job_query_default_limit() {
        assert_eq!(JobQuery::new().limit, JobQuery::DEFAULT_LIMIT);
    }

    #[test]
    fn test_job_posting_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "company_name": "Acme", "title": "Backend Engineer"}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 1);
        assert!(job.tech_stacks.is_empty());
        assert!(job.deadline.is_none());
    }
}
