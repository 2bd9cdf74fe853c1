//! Ontology loading, validation, and pure override transforms.
//!
//! Loading fails closed: a document missing either required collection is
//! rejected outright rather than degrading to a partially valid ontology.

use std::path::Path;

use indexmap::IndexMap;
use shared_types::Ontology;
use tracing::info;

use crate::errors::OntologyError;

/// The two collections every ontology document must carry.
const REQUIRED_COLLECTIONS: [&str; 2] = ["SignalDomains", "SOC_Groups"];

/// Parse an ontology from a JSON string, validating its structure.
pub fn from_json_str(raw: &str) -> Result<Ontology, OntologyError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    for key in REQUIRED_COLLECTIONS {
        if value.get(key).is_none() {
            return Err(OntologyError::MissingCollection(key));
        }
    }

    let ontology: Ontology = serde_json::from_value(value)?;
    info!(
        domains = ontology.signal_domains.len(),
        groups = ontology.occupation_groups.len(),
        "loaded ontology"
    );
    Ok(ontology)
}

/// Load an ontology document from disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<Ontology, OntologyError> {
    let raw = std::fs::read_to_string(path)?;
    from_json_str(&raw)
}

/// Produce a new ontology with the given domain term lists applied.
///
/// An override replaces the domain's term list wholesale — never merges —
/// and creates the domain when the base ontology lacks it. The base value is
/// left untouched.
pub fn apply_overrides(base: &Ontology, overrides: &IndexMap<String, Vec<String>>) -> Ontology {
    let mut ontology = base.clone();
    for (domain, terms) in overrides {
        ontology
            .signal_domains
            .insert(domain.clone(), terms.clone());
    }
    ontology
}
