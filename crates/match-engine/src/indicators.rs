//! Fixed indicator vocabularies used by the occupation predictor and the
//! gap ranker. Matching is literal lowercase substring presence.

/// Phrases signalling IT / delivery-process work in a job description.
pub const IT_INDICATORS: &[&str] = &[
    "project manager",
    "project management",
    "it project",
    "agile",
    "scrum",
    "kanban",
    "waterfall",
    "stakeholder",
    "deliverable",
    "milestone",
    "sdlc",
    "requirements",
    "software development",
    "technical",
    "technology",
];

/// Phrases signalling people/portfolio management work.
pub const MANAGEMENT_INDICATORS: &[&str] = &[
    "team lead",
    "leadership",
    "manager",
    "management",
    "director",
    "supervisor",
    "coordination",
    "planning",
    "strategy",
    "oversight",
    "cross-functional",
];

/// Gap keywords containing any of these substrings rank ahead of the rest.
pub const HIGH_PRIORITY_GAP_TERMS: &[&str] = &[
    "project",
    "management",
    "agile",
    "scrum",
    "team",
    "stakeholder",
    "delivery",
    "planning",
    "requirements",
    "technical",
    "strategy",
];

/// Presence of any of these in the job description marks clear business
/// context and boosts the overall score.
pub const BUSINESS_CONTEXT_TERMS: &[&str] = &["project manager", "agile", "scrum", "stakeholder"];

/// Count how many indicator phrases occur in `text_lower`. Each phrase
/// contributes at most one hit regardless of repetition.
pub fn indicator_hits(text_lower: &str, indicators: &[&str]) -> usize {
    indicators
        .iter()
        .filter(|term| text_lower.contains(*term))
        .count()
}

/// True if any of the given terms occurs in `text_lower`.
pub fn contains_any(text_lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text_lower.contains(term))
}
