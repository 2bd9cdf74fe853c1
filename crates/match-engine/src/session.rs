//! Caller-owned session state and result-derived text helpers.
//!
//! The engine itself only returns values; holding onto the current result
//! and a progress history is the caller's concern, modeled here as an
//! explicit [`AnalysisSession`] value with an append-only, size-bounded
//! history.

use chrono::{DateTime, Utc};
use shared_types::{AnalysisResult, HistoryEntry};

use crate::aggregate;

/// Default number of history snapshots retained per session.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Session state for one user: the current result plus a bounded history of
/// snapshots, oldest evicted first.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    current: Option<AnalysisResult>,
    history: Vec<HistoryEntry>,
    capacity: usize,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: None,
            history: Vec::new(),
            capacity,
        }
    }

    /// Take ownership of a result: snapshot it into the history and make it
    /// the session's current result.
    pub fn record(&mut self, result: AnalysisResult) {
        self.history.push(snapshot(&result, Utc::now()));
        if self.history.len() > self.capacity {
            let excess = self.history.len() - self.capacity;
            self.history.drain(..excess);
        }
        self.current = Some(result);
    }

    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Overall-score change between the oldest retained snapshot and the
    /// latest one. None until two analyses have been recorded.
    pub fn overall_improvement(&self) -> Option<f64> {
        match self.history.as_slice() {
            [baseline, .., latest] => Some(latest.overall_score - baseline.overall_score),
            _ => None,
        }
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a history snapshot from a result at the given instant.
fn snapshot(result: &AnalysisResult, timestamp: DateTime<Utc>) -> HistoryEntry {
    let total_gaps = result.domain_gaps.values().map(Vec::len).sum();
    let critical_gaps = result
        .domain_gaps
        .iter()
        .filter(|(domain, _)| result.critical_domains.contains(domain))
        .map(|(_, gaps)| gaps.len())
        .sum();

    HistoryEntry {
        timestamp,
        overall_score: result.overall_score,
        trust_score: aggregate::trust_score(result),
        visibility_score: aggregate::visibility_score(result),
        predicted_group: result.predicted_group.clone(),
        domain_scores: result.domain_scores.clone(),
        total_gaps,
        critical_gaps,
    }
}

/// Build an optimization prompt from a result: target group, critical
/// domains, and up to ten missing terms drawn from the critical domains'
/// gaps (top three per domain).
pub fn optimization_prompt(result: &AnalysisResult) -> String {
    let group = result
        .predicted_group
        .as_deref()
        .unwrap_or("your target role");

    let mut top_gaps: Vec<&str> = Vec::new();
    for (domain, gaps) in &result.domain_gaps {
        if result.critical_domains.contains(domain) {
            top_gaps.extend(gaps.iter().take(3).map(String::as_str));
        }
    }
    top_gaps.truncate(10);

    let mut parts = vec![
        format!("You are optimizing a resume for a role in {group}."),
        format!(
            "Critical skill domains: {}.",
            result.critical_domains.join(", ")
        ),
    ];
    if !top_gaps.is_empty() {
        parts.push(format!(
            "Key missing terms to incorporate: {}.",
            top_gaps.join(", ")
        ));
    }
    parts.push(
        "Maintain authentic voice while strategically incorporating relevant terminology."
            .to_string(),
    );

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn result(overall: f64) -> AnalysisResult {
        AnalysisResult {
            predicted_group: Some("Management Occupations".to_string()),
            group_scores: IndexMap::new(),
            critical_domains: vec!["Leadership".to_string()],
            domain_scores: IndexMap::from([
                ("Leadership".to_string(), 50.0),
                ("Systems".to_string(), 75.0),
            ]),
            domain_gaps: IndexMap::from([
                (
                    "Leadership".to_string(),
                    vec!["vision".to_string(), "strategy".to_string()],
                ),
                ("Systems".to_string(), vec!["kanban".to_string()]),
            ]),
            overall_score: overall,
            total_jd_keywords: 8,
            matched_jd_keywords: 4,
            suggested_titles: vec!["Project Manager".to_string()],
            analyzed_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_record_sets_current_and_appends_history() {
        let mut session = AnalysisSession::new();
        assert!(session.current().is_none());

        session.record(result(40.0));
        assert_eq!(session.current().unwrap().overall_score, 40.0);
        assert_eq!(session.history().len(), 1);

        let entry = &session.history()[0];
        assert_eq!(entry.total_gaps, 3);
        assert_eq!(entry.critical_gaps, 2);
        assert_eq!(entry.trust_score, 50.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut session = AnalysisSession::with_capacity(3);
        for i in 0..5 {
            session.record(result(i as f64 * 10.0));
        }
        assert_eq!(session.history().len(), 3);
        // Oldest entries evicted first
        assert_eq!(session.history()[0].overall_score, 20.0);
        assert_eq!(session.history()[2].overall_score, 40.0);
    }

    #[test]
    fn test_overall_improvement_needs_two_entries() {
        let mut session = AnalysisSession::new();
        assert_eq!(session.overall_improvement(), None);

        session.record(result(40.0));
        assert_eq!(session.overall_improvement(), None);

        session.record(result(55.0));
        assert_eq!(session.overall_improvement(), Some(15.0));
    }

    #[test]
    fn test_optimization_prompt_mentions_critical_gaps() {
        let prompt = optimization_prompt(&result(40.0));
        assert!(prompt.contains("Management Occupations"));
        assert!(prompt.contains("Leadership"));
        assert!(prompt.contains("vision"));
        assert!(prompt.contains("strategy"));
        // Non-critical gaps stay out
        assert!(!prompt.contains("kanban"));
    }

    #[test]
    fn test_optimization_prompt_without_prediction() {
        let mut bare = result(0.0);
        bare.predicted_group = None;
        bare.domain_gaps.clear();
        let prompt = optimization_prompt(&bare);
        assert!(prompt.contains("your target role"));
        assert!(!prompt.contains("missing terms"));
    }
}
