//! Per-domain coverage scoring and gap ranking.
//!
//! A domain participates only when its keyword set intersects the job
//! description's term set; domains with no JD-side overlap are omitted from
//! the output entirely rather than scored as zero. Resume-side matching is
//! deliberately looser than the set-based JD extraction: a keyword counts as
//! matched when it appears as a case-insensitive substring of the full
//! resume text, granting partial/compound-word credit.

use indexmap::{IndexMap, IndexSet};

use crate::index::DomainIndex;
use crate::indicators::HIGH_PRIORITY_GAP_TERMS;
use crate::round1;

/// Gap lists are truncated to this many entries per domain.
pub const MAX_GAPS_PER_DOMAIN: usize = 20;

/// Output of the per-domain scoring pass.
#[derive(Debug, Clone, Default)]
pub struct DomainOutcome {
    /// Coverage per participating domain, 0-100, one decimal.
    pub domain_scores: IndexMap<String, f64>,
    /// Ranked missing keywords per domain with at least one gap.
    pub domain_gaps: IndexMap<String, Vec<String>>,
    /// Union of every domain's JD-side keywords, in discovery order.
    pub all_jd_keywords: IndexSet<String>,
}

/// Score every domain in the index against the job description terms and the
/// full lowercased resume text.
pub fn score_domains(
    index: &DomainIndex,
    jd_terms: &IndexSet<String>,
    resume_text_lower: &str,
) -> DomainOutcome {
    let mut outcome = DomainOutcome::default();

    for (domain, keywords) in index.iter() {
        let jd_side: Vec<&String> = keywords.iter().filter(|kw| jd_terms.contains(*kw)).collect();
        if jd_side.is_empty() {
            continue;
        }

        for keyword in &jd_side {
            outcome.all_jd_keywords.insert((*keyword).clone());
        }

        let mut matched = 0usize;
        let mut gaps: Vec<&str> = Vec::new();
        for keyword in &jd_side {
            if resume_text_lower.contains(keyword.as_str()) {
                matched += 1;
            } else {
                gaps.push(keyword.as_str());
            }
        }

        let score = 100.0 * matched as f64 / jd_side.len() as f64;
        outcome.domain_scores.insert(domain.clone(), round1(score));

        if !gaps.is_empty() {
            outcome.domain_gaps.insert(domain.clone(), rank_gaps(&gaps));
        }
    }

    outcome
}

/// Gaps containing a high-priority business substring rank ahead of the
/// rest; within each partition, discovery order is preserved. The ranked
/// list is capped at [`MAX_GAPS_PER_DOMAIN`].
fn rank_gaps(gaps: &[&str]) -> Vec<String> {
    let (priority, rest): (Vec<&&str>, Vec<&&str>) = gaps.iter().partition(|gap| {
        HIGH_PRIORITY_GAP_TERMS
            .iter()
            .any(|term| gap.contains(term))
    });

    priority
        .into_iter()
        .chain(rest)
        .map(|gap| (*gap).to_string())
        .take(MAX_GAPS_PER_DOMAIN)
        .collect()
}
