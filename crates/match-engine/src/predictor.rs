//! Occupation group prediction over a job description.
//!
//! Layered resolution, first applicable layer wins:
//! 1. manual override (validated against the loaded groups),
//! 2. strong lexical indicator rules over fixed IT/management vocabularies,
//! 3. fallback domain-coverage scoring with category-bias multipliers.
//!
//! The thresholds, secondary-score tables, and bias multipliers are tuned
//! policy, not algorithmic truth; they live in [`PredictorPolicy`] so
//! callers can substitute their own.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use shared_types::OccupationGroup;

use crate::index::DomainIndex;
use crate::indicators::{self, IT_INDICATORS, MANAGEMENT_INDICATORS};
use crate::round1;

/// A strong lexical indicator rule. Rules are evaluated in order; the first
/// whose thresholds are both met selects the prediction and the fixed
/// secondary-score table, bypassing fallback scoring entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerRule {
    pub min_it_hits: usize,
    pub min_mgmt_hits: usize,
    pub predicted: String,
    /// Hand-authored group scores, including the predicted group itself.
    pub scores: Vec<(String, f64)>,
}

/// Multiplicative bias applied in fallback scoring when the lowercased group
/// name contains any of the needles. The first matching bias applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBias {
    pub needles: Vec<String>,
    pub multiplier: f64,
}

/// Tunable prediction policy. `Default` reproduces the original tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorPolicy {
    pub trigger_rules: Vec<TriggerRule>,
    pub category_biases: Vec<CategoryBias>,
}

const MANAGEMENT: &str = "Management Occupations";
const COMPUTER: &str = "Computer and Mathematical Occupations";
const AI_DATA_UX: &str = "AI, Data & UX Leadership Occupations";
const SCIENCES: &str = "Life, Physical, and Social Science Occupations";
const EDUCATION: &str = "Education, Training, and Library Occupations";

impl Default for PredictorPolicy {
    fn default() -> Self {
        let rule = |min_it, min_mgmt, predicted: &str, scores: &[(&str, f64)]| TriggerRule {
            min_it_hits: min_it,
            min_mgmt_hits: min_mgmt,
            predicted: predicted.to_string(),
            scores: scores
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
        };
        let bias = |needles: &[&str], multiplier| CategoryBias {
            needles: needles.iter().map(|n| n.to_string()).collect(),
            multiplier,
        };

        Self {
            trigger_rules: vec![
                rule(
                    3,
                    2,
                    MANAGEMENT,
                    &[
                        (MANAGEMENT, 85.0),
                        (COMPUTER, 75.0),
                        (AI_DATA_UX, 70.0),
                        (SCIENCES, 15.0),
                        (EDUCATION, 10.0),
                    ],
                ),
                rule(
                    2,
                    0,
                    COMPUTER,
                    &[
                        (COMPUTER, 80.0),
                        (MANAGEMENT, 65.0),
                        (AI_DATA_UX, 60.0),
                        (SCIENCES, 20.0),
                        (EDUCATION, 15.0),
                    ],
                ),
                rule(
                    0,
                    2,
                    MANAGEMENT,
                    &[
                        (MANAGEMENT, 75.0),
                        (COMPUTER, 50.0),
                        (SCIENCES, 25.0),
                        (EDUCATION, 20.0),
                    ],
                ),
            ],
            category_biases: vec![
                bias(&["life", "physical", "social", "science"], 0.2),
                bias(&["education", "training", "library"], 0.4),
                bias(&["management"], 1.5),
                bias(&["computer"], 1.3),
            ],
        }
    }
}

impl PredictorPolicy {
    /// Bias multiplier for a group name in fallback scoring.
    pub fn bias_for(&self, group_name: &str) -> f64 {
        let name_lower = group_name.to_lowercase();
        self.category_biases
            .iter()
            .find(|bias| bias.needles.iter().any(|needle| name_lower.contains(needle)))
            .map(|bias| bias.multiplier)
            .unwrap_or(1.0)
    }
}

/// Outcome of occupation prediction.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub group: Option<String>,
    pub scores: IndexMap<String, f64>,
}

/// Predict the occupation group for a job description.
///
/// `jd_text_lower` is the full lowercased JD text (for indicator substring
/// scans); `jd_terms` and `resume_terms` are the normalized term sets used
/// by fallback coverage scoring.
pub fn predict(
    jd_text_lower: &str,
    jd_terms: &IndexSet<String>,
    resume_terms: &IndexSet<String>,
    index: &DomainIndex,
    groups: &IndexMap<String, OccupationGroup>,
    override_group: Option<&str>,
    policy: &PredictorPolicy,
) -> Prediction {
    if groups.is_empty() {
        return Prediction {
            group: None,
            scores: IndexMap::new(),
        };
    }

    // Layer 1: manual override. Unknown names fall through to auto-detection.
    if let Some(name) = override_group.filter(|name| groups.contains_key(*name)) {
        let scores = groups
            .keys()
            .map(|group| {
                let score = if group == name { 100.0 } else { 0.0 };
                (group.clone(), score)
            })
            .collect();
        return Prediction {
            group: Some(name.to_string()),
            scores,
        };
    }

    // Layer 2: strong lexical indicators.
    let it_hits = indicators::indicator_hits(jd_text_lower, IT_INDICATORS);
    let mgmt_hits = indicators::indicator_hits(jd_text_lower, MANAGEMENT_INDICATORS);

    if let Some(rule) = policy
        .trigger_rules
        .iter()
        .find(|rule| it_hits >= rule.min_it_hits && mgmt_hits >= rule.min_mgmt_hits)
    {
        let mut scores: IndexMap<String, f64> = rule.scores.iter().cloned().collect();
        fill_missing(&mut scores, groups);
        return Prediction {
            group: Some(rule.predicted.clone()),
            scores,
        };
    }

    // Layer 3: fallback domain-coverage scoring with category bias.
    let mut scores = IndexMap::with_capacity(groups.len());
    let mut best_group: Option<String> = None;
    let mut best_score = -1.0;

    for (group_name, group) in groups {
        let mut coverages = Vec::new();
        for domain in &group.signal_domains {
            let Some(keywords) = index.get(domain) else {
                continue;
            };
            let jd_side: Vec<&String> =
                keywords.iter().filter(|kw| jd_terms.contains(*kw)).collect();
            if jd_side.is_empty() {
                continue;
            }
            let matched = jd_side.iter().filter(|kw| resume_terms.contains(**kw)).count();
            coverages.push(matched as f64 / jd_side.len() as f64);
        }

        let score = if coverages.is_empty() {
            0.0
        } else {
            let avg = coverages.iter().sum::<f64>() / coverages.len() as f64;
            round1((avg * 100.0 * policy.bias_for(group_name)).min(100.0))
        };

        scores.insert(group_name.clone(), score);
        if score > best_score {
            best_score = score;
            best_group = Some(group_name.clone());
        }
    }

    Prediction {
        group: best_group,
        scores,
    }
}

/// Any group absent from the score map is filled in at zero.
fn fill_missing(scores: &mut IndexMap<String, f64>, groups: &IndexMap<String, OccupationGroup>) {
    for group_name in groups.keys() {
        scores.entry(group_name.clone()).or_insert(0.0);
    }
}
