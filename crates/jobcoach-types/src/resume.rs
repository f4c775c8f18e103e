//! Resume section types for the multi-step application flow.
//!
//! A resume is built incrementally: basic info, cover letter, work
//! experiences, and portfolio projects, then submitted for matching.

use serde::{Deserialize, Serialize};

/// Server-assigned resume identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub i64);

impl std::fmt::Display for ResumeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Applicant contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Free-text cover letter sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    #[serde(default)]
    pub self_introduction: String,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub strengths: String,
}

/// A single work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company_name: String,
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub role: String,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_serializes_snake_case() {
        let info = BasicInfo {
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            phone: String::new(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"email\":\"kim@example.com\""));
    }

    #[test]
    fn test_work_experience_defaults() {
        let exp: WorkExperience =
            serde_json::from_str(r#"{"company_name": "Acme", "position": "Engineer"}"#).unwrap();
        assert!(exp.responsibilities.is_empty());
        assert!(exp.start_date.is_empty());
    }
}
