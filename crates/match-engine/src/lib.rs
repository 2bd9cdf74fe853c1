//! Ontological resume / job-description matching engine.
//!
//! Scores how well a resume covers the vocabulary a job description draws
//! from a curated skill ontology: per-domain coverage, ranked keyword gaps,
//! a predicted occupation group, and aggregate match/trust/visibility
//! percentages. Matching is purely lexical — exact word, phrase, and
//! substring presence — with no model inference of any kind.
//!
//! One analysis is a pure, synchronous computation over two input texts and
//! an immutable ontology snapshot. Independent analyses can run in parallel
//! freely; nothing is mutated in place.

pub mod aggregate;
pub mod business_terms;
pub mod cache;
pub mod errors;
pub mod index;
pub mod indicators;
pub mod normalize;
pub mod ontology;
pub mod predictor;
pub mod scorer;
pub mod session;

use tracing::debug;

pub use cache::AnalysisCache;
pub use errors::{AnalysisError, OntologyError};
pub use predictor::PredictorPolicy;
pub use session::AnalysisSession;
pub use shared_types::{AnalysisResult, HistoryEntry, OccupationGroup, Ontology};

use index::DomainIndex;
use normalize::NormalizedDocument;

/// MatchEngine entry point: an ontology snapshot with its prebuilt keyword
/// index and prediction policy.
pub struct MatchEngine {
    ontology: Ontology,
    index: DomainIndex,
    policy: PredictorPolicy,
}

impl MatchEngine {
    /// Engine over the given ontology with the default prediction policy.
    pub fn new(ontology: Ontology) -> Self {
        Self::with_policy(ontology, PredictorPolicy::default())
    }

    /// Engine with a caller-supplied prediction policy.
    pub fn with_policy(ontology: Ontology, policy: PredictorPolicy) -> Self {
        let index = DomainIndex::build(&ontology);
        Self {
            ontology,
            index,
            policy,
        }
    }

    /// Engine over the ontology with the curated business-focused term lists
    /// layered on top, the production default for delivery/management roles.
    pub fn with_focused_business_terms(ontology: Ontology) -> Self {
        let enhanced = ontology::apply_overrides(&ontology, &business_terms::focused_overrides());
        Self::new(enhanced)
    }

    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Version tag used for content-addressed caching.
    pub fn ontology_version(&self) -> &str {
        self.ontology.version.as_deref().unwrap_or("unversioned")
    }

    /// Run one full analysis of a resume against a job description.
    ///
    /// `group_override` pins the occupation group when it names a known
    /// group; unknown names fall back to auto-detection. Empty input text or
    /// an empty post-normalization term set declines the analysis with an
    /// [`AnalysisError`] — no partial result is produced.
    pub fn analyze(
        &self,
        resume_text: &str,
        jd_text: &str,
        group_override: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::EmptyResume);
        }
        if jd_text.trim().is_empty() {
            return Err(AnalysisError::EmptyJobDescription);
        }

        let resume = NormalizedDocument::new(resume_text);
        let jd = NormalizedDocument::new(jd_text);
        if resume.is_empty() {
            return Err(AnalysisError::NoResumeTerms);
        }
        if jd.is_empty() {
            return Err(AnalysisError::NoJobDescriptionTerms);
        }

        let prediction = predictor::predict(
            &jd.text_lower,
            &jd.terms,
            &resume.terms,
            &self.index,
            &self.ontology.occupation_groups,
            group_override,
            &self.policy,
        );

        let outcome = scorer::score_domains(&self.index, &jd.terms, &resume.text_lower);
        let (overall_score, matched_jd_keywords) =
            aggregate::overall_score(&outcome.all_jd_keywords, &resume.text_lower, &jd.text_lower);

        let (critical_domains, suggested_titles) = prediction
            .group
            .as_deref()
            .and_then(|group| self.ontology.occupation_groups.get(group))
            .map(|group| (group.signal_domains.clone(), group.example_titles.clone()))
            .unwrap_or_default();

        debug!(
            predicted_group = prediction.group.as_deref().unwrap_or("none"),
            scored_domains = outcome.domain_scores.len(),
            total_jd_keywords = outcome.all_jd_keywords.len(),
            matched_jd_keywords,
            overall_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            predicted_group: prediction.group,
            group_scores: prediction.scores,
            critical_domains,
            domain_scores: outcome.domain_scores,
            domain_gaps: outcome.domain_gaps,
            overall_score,
            total_jd_keywords: outcome.all_jd_keywords.len(),
            matched_jd_keywords,
            suggested_titles,
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}

/// Round to one decimal place, the precision of every reported score.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchEngine {
        let raw = r#"{
            "SignalDomains": {
                "Leadership": ["team lead", "leadership"],
                "Data & Evidence": ["metrics", "analysis"]
            },
            "SOC_Groups": {
                "Management Occupations": {
                    "signal_domains": ["Leadership"],
                    "example_titles": ["Project Manager", "Program Manager"]
                },
                "Computer and Mathematical Occupations": {
                    "signal_domains": ["Data & Evidence"],
                    "example_titles": ["Data Analyst"]
                }
            }
        }"#;
        MatchEngine::new(ontology::from_json_str(raw).unwrap())
    }

    #[test]
    fn test_perfect_match_scenario() {
        let result = engine()
            .analyze(
                "Proven leadership as team lead of 5 engineers",
                "We need strong leadership and a team lead",
                None,
            )
            .unwrap();

        assert_eq!(result.domain_scores["Leadership"], 100.0);
        assert!(!result.domain_gaps.contains_key("Leadership"));
    }

    #[test]
    fn test_total_gap_scenario() {
        let result = engine()
            .analyze(
                "Ten years of welding and pipefitting",
                "We need strong leadership and a team lead",
                None,
            )
            .unwrap();

        assert_eq!(result.domain_scores["Leadership"], 0.0);
        let gaps = &result.domain_gaps["Leadership"];
        assert!(gaps.len() <= scorer::MAX_GAPS_PER_DOMAIN);
        assert!(gaps.contains(&"team lead".to_string()));
        assert!(gaps.contains(&"leadership".to_string()));
        assert_eq!(result.overall_score, 0.0);
    }

    #[test]
    fn test_it_management_trigger_scenario() {
        let jd = "IT project manager to run agile and scrum delivery with sdlc \
                  discipline, strong leadership and oversight expected.";
        let result = engine().analyze("generic resume text", jd, None).unwrap();

        assert_eq!(
            result.predicted_group.as_deref(),
            Some("Management Occupations")
        );
        assert_eq!(result.group_scores["Management Occupations"], 85.0);
        // Prediction came from the trigger table, and critical domains follow
        // the predicted group's ontology entry
        assert_eq!(result.critical_domains, vec!["Leadership".to_string()]);
        assert_eq!(
            result.suggested_titles,
            vec!["Project Manager".to_string(), "Program Manager".to_string()]
        );
    }

    #[test]
    fn test_empty_inputs_decline_analysis() {
        let engine = engine();
        assert_eq!(
            engine.analyze("", "a job description", None).unwrap_err(),
            AnalysisError::EmptyResume
        );
        assert_eq!(
            engine.analyze("a resume", "   ", None).unwrap_err(),
            AnalysisError::EmptyJobDescription
        );
        // Whitespace-free but contentless after normalization
        assert_eq!(
            engine.analyze("a resume with words", "!! ?? 12", None).unwrap_err(),
            AnalysisError::NoJobDescriptionTerms
        );
    }

    #[test]
    fn test_override_determinism() {
        let engine = engine();
        for jd in ["metrics analysis everywhere", "leadership focus role"] {
            let result = engine
                .analyze("any resume", jd, Some("Computer and Mathematical Occupations"))
                .unwrap();
            assert_eq!(
                result.predicted_group.as_deref(),
                Some("Computer and Mathematical Occupations")
            );
            assert_eq!(
                result.group_scores["Computer and Mathematical Occupations"],
                100.0
            );
        }
    }

    #[test]
    fn test_matched_and_total_counts_are_consistent() {
        let result = engine()
            .analyze(
                "leadership with metrics background",
                "leadership and metrics and analysis",
                None,
            )
            .unwrap();

        // JD-side keywords: "leadership", "metrics", "analysis"
        assert_eq!(result.total_jd_keywords, 3);
        assert_eq!(result.matched_jd_keywords, 2);
        let gap_count: usize = result.domain_gaps.values().map(Vec::len).sum();
        assert_eq!(gap_count, 1);
    }

    #[test]
    fn test_trust_and_visibility_recompute_from_result() {
        let result = engine()
            .analyze(
                "leadership record with some metrics",
                "leadership metrics analysis team lead",
                None,
            )
            .unwrap();

        let trust_a = aggregate::trust_score(&result);
        let trust_b = aggregate::trust_score(&result);
        assert_eq!(trust_a, trust_b);
        assert!((0.0..=100.0).contains(&trust_a));
        assert!((0.0..=100.0).contains(&aggregate::visibility_score(&result)));
    }

    #[test]
    fn test_focused_terms_engine_matches_business_vocabulary() {
        let raw = r#"{
            "SignalDomains": { "Leadership & Influence": ["charisma"] },
            "SOC_Groups": {
                "Management Occupations": {
                    "signal_domains": ["Leadership & Influence", "Systems & Structure"],
                    "example_titles": ["Project Manager"]
                }
            }
        }"#;
        let engine =
            MatchEngine::with_focused_business_terms(ontology::from_json_str(raw).unwrap());

        // "scrum master" comes from the override list, not the base ontology,
        // and "Systems & Structure" exists only through the overrides.
        let result = engine
            .analyze(
                "certified scrum master running kanban delivery",
                "looking for a scrum master familiar with kanban",
                Some("Management Occupations"),
            )
            .unwrap();

        assert_eq!(result.domain_scores["Leadership & Influence"], 100.0);
        assert!(result.domain_scores.contains_key("Systems & Structure"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            /// Every produced score lies in [0, 100] for arbitrary inputs.
            #[test]
            fn scores_stay_in_bounds(
                resume in "[a-zA-Z0-9 ]{1,200}",
                jd in "[a-zA-Z0-9 ]{1,200}",
            ) {
                if let Ok(result) = engine().analyze(&resume, &jd, None) {
                    prop_assert!((0.0..=100.0).contains(&result.overall_score));
                    for score in result.domain_scores.values() {
                        prop_assert!((0.0..=100.0).contains(score));
                    }
                    for score in result.group_scores.values() {
                        prop_assert!((0.0..=100.0).contains(score));
                    }
                    prop_assert!((0.0..=100.0).contains(&aggregate::trust_score(&result)));
                    prop_assert!((0.0..=100.0).contains(&aggregate::visibility_score(&result)));
                    for gaps in result.domain_gaps.values() {
                        prop_assert!(gaps.len() <= scorer::MAX_GAPS_PER_DOMAIN);
                    }
                }
            }
        }
    }
}
