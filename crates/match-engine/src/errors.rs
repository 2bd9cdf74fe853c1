//! Error taxonomy for the matching engine.
//!
//! Input failures decline the analysis outright: no partial result is ever
//! produced. Configuration failures surface at ontology load time; the
//! engine never runs on a partially valid ontology. Nothing is retried —
//! every computation here is deterministic and side-effect free.

use thiserror::Error;

/// Input failures reported by [`crate::MatchEngine::analyze`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("resume text is empty")]
    EmptyResume,
    #[error("job description text is empty")]
    EmptyJobDescription,
    #[error("no usable terms remain in the resume after normalization")]
    NoResumeTerms,
    #[error("no usable terms remain in the job description after normalization")]
    NoJobDescriptionTerms,
}

/// Ontology loading and validation failures.
#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("ontology is missing required collection '{0}'")]
    MissingCollection(&'static str),
    #[error("ontology is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read ontology file: {0}")]
    Io(#[from] std::io::Error),
}
