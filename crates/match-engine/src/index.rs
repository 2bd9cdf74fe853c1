//! Domain keyword index: per-domain keyword sets precomputed for fast
//! intersection with a document's term set.

use indexmap::{IndexMap, IndexSet};
use shared_types::Ontology;

/// Read-only cache of each domain's full keyword set: every raw phrase,
/// lowercased, plus the individual words inside multi-word phrases. Matching
/// then succeeds whether a document carries the full phrase or only a
/// constituent word.
#[derive(Debug, Clone, Default)]
pub struct DomainIndex {
    domains: IndexMap<String, IndexSet<String>>,
}

impl DomainIndex {
    /// Build the index for an ontology. Rebuilt once per ontology value;
    /// never mutated afterwards.
    pub fn build(ontology: &Ontology) -> Self {
        let mut domains = IndexMap::with_capacity(ontology.signal_domains.len());

        for (name, phrases) in &ontology.signal_domains {
            let mut keywords = IndexSet::new();
            for phrase in phrases {
                let phrase_lower = phrase.to_lowercase();
                keywords.insert(phrase_lower.clone());
                for word in phrase_lower.split_whitespace() {
                    keywords.insert(word.to_string());
                }
            }
            domains.insert(name.clone(), keywords);
        }

        Self { domains }
    }

    pub fn get(&self, domain: &str) -> Option<&IndexSet<String>> {
        self.domains.get(domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<String>)> {
        self.domains.iter()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
