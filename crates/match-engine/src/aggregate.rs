//! Aggregate score derivations.
//!
//! Trust and visibility are pure functions of a finished
//! [`AnalysisResult`], so downstream consumers can recompute them from a
//! stored result at any later time and get identical values.

use indexmap::IndexSet;
use shared_types::AnalysisResult;

use crate::indicators::{self, BUSINESS_CONTEXT_TERMS};
use crate::round1;

/// Multiplier applied to the overall score when the job description carries
/// clear business context.
pub const BUSINESS_CONTEXT_BOOST: f64 = 1.3;

/// Domains scoring above this threshold count as adequately covered for the
/// visibility derivation.
pub const VISIBILITY_THRESHOLD: f64 = 40.0;

/// Overall match percentage and the matched-keyword count behind it.
///
/// The base is the share of all JD-side domain keywords found as substrings
/// of the resume text, boosted by [`BUSINESS_CONTEXT_BOOST`] when the JD
/// mentions any business-context phrase, clamped to 100.
pub fn overall_score(
    all_jd_keywords: &IndexSet<String>,
    resume_text_lower: &str,
    jd_text_lower: &str,
) -> (f64, usize) {
    if all_jd_keywords.is_empty() {
        return (0.0, 0);
    }

    let matched = all_jd_keywords
        .iter()
        .filter(|kw| resume_text_lower.contains(kw.as_str()))
        .count();
    let base = 100.0 * matched as f64 / all_jd_keywords.len() as f64;

    let boost = if indicators::contains_any(jd_text_lower, BUSINESS_CONTEXT_TERMS) {
        BUSINESS_CONTEXT_BOOST
    } else {
        1.0
    };

    (round1((base * boost).min(100.0)), matched)
}

/// Mean coverage across the critical domains; 0 when none of them has a
/// score.
pub fn trust_score(result: &AnalysisResult) -> f64 {
    let scores: Vec<f64> = result
        .critical_domains
        .iter()
        .filter_map(|domain| result.domain_scores.get(domain))
        .copied()
        .collect();

    if scores.is_empty() {
        return 0.0;
    }
    round1(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Share of gapped domains whose coverage still exceeds the visibility
/// threshold. With no gapped domains at all, visibility is 100 when any
/// domain was scored and 0 otherwise.
pub fn visibility_score(result: &AnalysisResult) -> f64 {
    if result.domain_gaps.is_empty() {
        return if result.domain_scores.is_empty() {
            0.0
        } else {
            100.0
        };
    }

    let hits = result
        .domain_gaps
        .keys()
        .filter(|domain| {
            result
                .domain_scores
                .get(*domain)
                .copied()
                .unwrap_or(0.0)
                > VISIBILITY_THRESHOLD
        })
        .count();

    round1(100.0 * hits as f64 / result.domain_gaps.len() as f64)
}
