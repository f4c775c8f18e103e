//! Match cache states.
//!
//! Matches are fetched lazily and invalidated whenever the profile is
//! regenerated. A stale cache keeps the last-known list so the UI can keep
//! showing something while a refetch is pending.

use jobcoach_types::matching::JobMatch;

/// Lifecycle of the cached match list.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchCache {
    /// Nothing fetched yet for this session.
    Empty,
    /// Up to date with the current profile.
    Fresh(Vec<JobMatch>),
    /// The profile changed since this list was fetched.
    Stale(Vec<JobMatch>),
}

impl MatchCache {
    pub fn is_fresh(&self) -> bool {
        matches!(self, MatchCache::Fresh(_))
    }

    /// Last-known matches, fresh or stale.
    pub fn matches(&self) -> &[JobMatch] {
        match self {
            MatchCache::Empty => &[],
            MatchCache::Fresh(m) | MatchCache::Stale(m) => m,
        }
    }

    /// Demote a fresh list to stale; `Empty` stays empty.
    pub fn invalidate(&mut self) {
        if let MatchCache::Fresh(m) = self {
            *self = MatchCache::Stale(std::mem::take(m));
        }
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        MatchCache::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcoach_types::matching::{MatchAnalysis, MatchId, ScoreBreakdown};

    fn test_match(id: i64) -> JobMatch {
        JobMatch {
            match_id: MatchId(id),
            job_id: id * 10,
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            position: "backend".to_string(),
            location: "Seoul".to_string(),
            match_score: 0.9,
            score_breakdown: ScoreBreakdown::default(),
            analysis: MatchAnalysis::default(),
            tech_stacks: vec![],
            salary: None,
            deadline: None,
            is_bookmarked: false,
            is_applied: false,
        }
    }

    #[test]
    fn test_empty_cache() {
        let cache = MatchCache::default();
        assert!(!cache.is_fresh());
        assert!(cache.matches().is_empty());
    }

    #[test]
    fn test_invalidate_keeps_last_known_matches() {
        let mut cache = MatchCache::Fresh(vec![test_match(1), test_match(2)]);
        cache.invalidate();
        assert!(!cache.is_fresh());
        assert_eq!(cache.matches().len(), 2);
    }

    #[test]
    fn test_invalidate_empty_stays_empty() {
        let mut cache = MatchCache::Empty;
        cache.invalidate();
        assert_eq!(cache, MatchCache::Empty);
    }

    #[test]
    fn test_invalidate_stale_is_noop() {
        let mut cache = MatchCache::Stale(vec![test_match(1)]);
        cache.invalidate();
        assert_eq!(cache.matches().len(), 1);
    }
}
