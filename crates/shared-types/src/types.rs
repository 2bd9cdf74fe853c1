use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// One occupation group entry from the ontology document.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct OccupationGroup {
    /// Domains characteristic of this group. Names that do not exist in
    /// `Ontology::signal_domains` contribute zero signal, never an error.
    #[serde(default)]
    pub signal_domains: Vec<String>,
    /// Example job titles for this group, surfaced to downstream consumers.
    #[serde(default)]
    pub example_titles: Vec<String>,
}

/// The curated skill ontology: named competency domains with representative
/// keyword/phrase vocabularies, plus occupation groups built on top of them.
///
/// Loaded once per analysis run and treated as immutable afterwards. Maps are
/// insertion-ordered so iteration (and therefore tie-breaking) follows the
/// source document.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Ontology {
    /// Domain name -> representative keywords and phrases.
    #[serde(rename = "SignalDomains")]
    pub signal_domains: IndexMap<String, Vec<String>>,
    /// Occupation group name -> signal domains and example titles.
    #[serde(rename = "SOC_Groups")]
    pub occupation_groups: IndexMap<String, OccupationGroup>,
    /// Optional document version, used for content-addressed caching.
    #[serde(default, rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Complete output of one analysis invocation. Created once, never mutated;
/// whoever stores it (a session, a history log) owns it from then on.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    /// Best-matching occupation group, if any group scored at all.
    pub predicted_group: Option<String>,
    /// Score per occupation group, 0-100.
    pub group_scores: IndexMap<String, f64>,
    /// Signal domains of the predicted group. Empty when no prediction was
    /// made or the predicted group is absent from the ontology.
    pub critical_domains: Vec<String>,
    /// Coverage score per domain, 0-100, one decimal. Domains whose keywords
    /// never appear in the job description are omitted, not scored as zero.
    pub domain_scores: IndexMap<String, f64>,
    /// Ranked missing keywords per domain, capped at 20 entries each. Domains
    /// with no gaps are omitted.
    pub domain_gaps: IndexMap<String, Vec<String>>,
    /// Aggregate match percentage, 0-100, one decimal.
    pub overall_score: f64,
    /// Distinct domain keywords found in the job description.
    pub total_jd_keywords: usize,
    /// Subset of those also found in the resume.
    pub matched_jd_keywords: usize,
    /// Example titles of the predicted group.
    pub suggested_titles: Vec<String>,
    /// Unix timestamp of the analysis.
    pub analyzed_at: u64,
}

/// Immutable snapshot of an [`AnalysisResult`] at a point in time, appended
/// to a session's progress history.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub overall_score: f64,
    pub trust_score: f64,
    pub visibility_score: f64,
    pub predicted_group: Option<String>,
    pub domain_scores: IndexMap<String, f64>,
    pub total_gaps: usize,
    pub critical_gaps: usize,
}
