pub mod types;

pub use types::{AnalysisResult, HistoryEntry, OccupationGroup, Ontology};
