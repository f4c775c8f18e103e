//! Job match types: recommendations scored against the candidate profile.
//!
//! Matches are computed server-side and fetched lazily. The client caches
//! them and invalidates the cache whenever the profile is regenerated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned match identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub i64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-dimension score breakdown for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub tech: f64,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub personality: f64,
}

/// AI analysis attached to a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// A job recommendation with its score and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub match_id: MatchId,
    pub job_id: i64,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub analysis: MatchAnalysis,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_applied: bool,
}

/// Normalize a score to a 0..=100 percentage.
///
/// The backend reports some scores as fractions (0..=1) and others as
/// percentages (0..=100); anything above 1 is treated as already being a
/// percentage. Non-finite values map to `None`.
pub fn score_percent(score: f64) -> Option<u32> {
    if !score.is_finite() {
        return None;
    }
    let pct = if score > 1.0 { score } else { score * 100.0 };
    Some(pct.round().clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_percent_fraction() {
        assert_eq!(score_percent(0.87), Some(87));
        assert_eq!(score_percent(0.0), Some(0));
        assert_eq!(score_percent(1.0), Some(100));
    }

    #[test]
    fn test_score_percent_already_percentage() {
        assert_eq!(score_percent(87.4), Some(87));
        assert_eq!(score_percent(100.0), Some(100));
    }

    #[test]
    fn test_score_percent_non_finite() {
        assert_eq!(score_percent(f64::NAN), None);
        assert_eq!(score_percent(f64::INFINITY), None);
    }

    #[test]
    fn test_score_percent_clamps_overrange() {
        assert_eq!(score_percent(140.0), Some(100));
    }

    #[test]
    fn test_job_match_deserializes_with_defaults() {
        let json = r#"{
            "match_id": 5,
            "job_id": 11,
            "company": "Acme",
            "title": "Platform Engineer"
        }"#;
        let m: JobMatch = serde_json::from_str(json).unwrap();
        assert_eq!(m.match_id, MatchId(5));
        assert_eq!(m.match_score, 0.0);
        assert!(m.tech_stacks.is_empty());
        assert!(!m.is_bookmarked);
    }
}
